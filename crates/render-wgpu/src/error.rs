use crate::uniform::UniformKind;
use std::path::PathBuf;

/// Fatal GPU initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// Errors reading shader sources from disk.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to read shader {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors setting a named uniform.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UniformError {
    #[error("uniform `{0}` is not declared")]
    Unknown(String),
    #[error("uniform `{name}` is {expected:?}, got {actual:?}")]
    KindMismatch {
        name: String,
        expected: UniformKind,
        actual: UniformKind,
    },
}

/// Errors loading scene parameters.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid depth range: near={near}, far={far}")]
    InvalidDepthRange { near: f32, far: f32 },
}
