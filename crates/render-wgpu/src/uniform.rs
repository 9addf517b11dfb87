//! CPU-side uniform blocks laid out for the WGSL uniform address space.
//!
//! A program declares its uniforms once, by name and kind, in the same order
//! as the members of its WGSL `Uniforms` struct. Setters then write into a
//! byte buffer at the offsets WGSL expects, and the whole block is uploaded
//! in one `write_buffer`.

use crate::error::UniformError;
use glam::{Mat3, Mat4, Vec3};

/// Types a uniform may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformKind {
    /// Stored as `u32` (0 or 1); WGSL has no host-shareable bool.
    Bool,
    Int,
    Float,
    Vec3,
    /// Three columns, each padded to 16 bytes.
    Mat3,
    Mat4,
}

impl UniformKind {
    pub fn align(self) -> usize {
        match self {
            UniformKind::Bool | UniformKind::Int | UniformKind::Float => 4,
            UniformKind::Vec3 | UniformKind::Mat3 | UniformKind::Mat4 => 16,
        }
    }

    pub fn size(self) -> usize {
        match self {
            UniformKind::Bool | UniformKind::Int | UniformKind::Float => 4,
            UniformKind::Vec3 => 12,
            UniformKind::Mat3 => 48,
            UniformKind::Mat4 => 64,
        }
    }
}

/// A value for one uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    Mat3(Mat3),
    Mat4(Mat4),
}

impl UniformValue {
    pub fn kind(&self) -> UniformKind {
        match self {
            UniformValue::Bool(_) => UniformKind::Bool,
            UniformValue::Int(_) => UniformKind::Int,
            UniformValue::Float(_) => UniformKind::Float,
            UniformValue::Vec3(_) => UniformKind::Vec3,
            UniformValue::Mat3(_) => UniformKind::Mat3,
            UniformValue::Mat4(_) => UniformKind::Mat4,
        }
    }

    fn write(&self, dst: &mut [u8]) {
        match self {
            UniformValue::Bool(v) => dst.copy_from_slice(bytemuck::bytes_of(&u32::from(*v))),
            UniformValue::Int(v) => dst.copy_from_slice(bytemuck::bytes_of(v)),
            UniformValue::Float(v) => dst.copy_from_slice(bytemuck::bytes_of(v)),
            UniformValue::Vec3(v) => dst.copy_from_slice(bytemuck::bytes_of(&v.to_array())),
            UniformValue::Mat3(m) => {
                for (i, col) in m.to_cols_array_2d().iter().enumerate() {
                    let start = i * 16;
                    dst[start..start + 12].copy_from_slice(bytemuck::bytes_of(col));
                }
            }
            UniformValue::Mat4(m) => dst.copy_from_slice(bytemuck::bytes_of(&m.to_cols_array())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct UniformEntry {
    name: &'static str,
    kind: UniformKind,
    offset: usize,
}

/// Declared uniforms of one program with their byte offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformLayout {
    entries: Vec<UniformEntry>,
    size: usize,
}

impl UniformLayout {
    pub fn new(declarations: &[(&'static str, UniformKind)]) -> Self {
        let mut entries = Vec::with_capacity(declarations.len());
        let mut cursor = 0usize;
        for &(name, kind) in declarations {
            let offset = cursor.next_multiple_of(kind.align());
            entries.push(UniformEntry { name, kind, offset });
            cursor = offset + kind.size();
        }
        Self {
            entries,
            size: cursor.next_multiple_of(16).max(16),
        }
    }

    /// Total block size, a multiple of 16.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.entry(name).map(|e| e.offset)
    }

    pub fn kind_of(&self, name: &str) -> Option<UniformKind> {
        self.entry(name).map(|e| e.kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, name: &str) -> Option<&UniformEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

/// Uniform values staged on the CPU until the next upload.
#[derive(Debug, Clone)]
pub struct UniformBlock {
    layout: UniformLayout,
    data: Vec<u8>,
    dirty: bool,
}

impl UniformBlock {
    pub fn new(layout: UniformLayout) -> Self {
        let data = vec![0; layout.size()];
        Self {
            layout,
            data,
            dirty: true,
        }
    }

    pub fn set(&mut self, name: &str, value: UniformValue) -> Result<(), UniformError> {
        let entry = self
            .layout
            .entry(name)
            .ok_or_else(|| UniformError::Unknown(name.to_owned()))?;
        if entry.kind != value.kind() {
            return Err(UniformError::KindMismatch {
                name: name.to_owned(),
                expected: entry.kind,
                actual: value.kind(),
            });
        }
        let range = entry.offset..entry.offset + entry.kind.size();
        value.write(&mut self.data[range]);
        self.dirty = true;
        Ok(())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Hand out the bytes for upload and mark the block clean, or `None` if
    /// nothing changed since the last call.
    pub fn take_dirty(&mut self) -> Option<&[u8]> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(&self.data)
    }
}
