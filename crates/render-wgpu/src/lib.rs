//! wgpu render backend for the lit-cube demo.
//!
//! Draws one Phong-lit cube and a small unlit cube marking the light, both
//! from the same static vertex buffer, seen through a [`FlyCamera`].
//!
//! # Invariants
//! - The renderer reads the camera; it never mutates it.
//! - Shader and uniform problems are logged, never fatal.
//! - GPU objects are owned by the types here and released when they drop.
//!
//! [`FlyCamera`]: litcube_camera::FlyCamera

mod context;
mod error;
mod mesh;
mod program;
mod renderer;
mod scene;
mod shaders;
mod uniform;

pub use context::GpuContext;
pub use error::{RenderError, SceneError, ShaderError, UniformError};
pub use mesh::{CUBE_VERTEX_COUNT, CUBE_VERTICES, FLOATS_PER_VERTEX};
pub use program::{ProgramDescriptor, ShaderProgram};
pub use renderer::CubeRenderer;
pub use scene::SceneParams;
pub use shaders::{BuiltinProgram, ShaderSource, ShaderStage};
pub use uniform::{UniformBlock, UniformKind, UniformLayout, UniformValue};
