use crate::error::ShaderError;
use std::path::{Path, PathBuf};

const LIT_VERTEX: &str = include_str!("../../../shaders/lit.vert.wgsl");
const LIT_FRAGMENT: &str = include_str!("../../../shaders/lit.frag.wgsl");
const UNLIT_VERTEX: &str = include_str!("../../../shaders/unlit.vert.wgsl");
const UNLIT_FRAGMENT: &str = include_str!("../../../shaders/unlit.frag.wgsl");

/// Programs the demo ships with. Their sources are compiled into the binary
/// as a fallback for a missing shader directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinProgram {
    /// Phong-lit object.
    Lit,
    /// Flat-colored light indicator.
    Unlit,
}

impl BuiltinProgram {
    pub fn name(self) -> &'static str {
        match self {
            BuiltinProgram::Lit => "lit",
            BuiltinProgram::Unlit => "unlit",
        }
    }

    pub fn source(self, stage: ShaderStage) -> &'static str {
        match (self, stage) {
            (BuiltinProgram::Lit, ShaderStage::Vertex) => LIT_VERTEX,
            (BuiltinProgram::Lit, ShaderStage::Fragment) => LIT_FRAGMENT,
            (BuiltinProgram::Unlit, ShaderStage::Vertex) => UNLIT_VERTEX,
            (BuiltinProgram::Unlit, ShaderStage::Fragment) => UNLIT_FRAGMENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Entry point every stage file defines.
    pub fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_main",
            ShaderStage::Fragment => "fs_main",
        }
    }

    /// `<program>.vert.wgsl` or `<program>.frag.wgsl`.
    pub fn file_name(self, program: &str) -> String {
        match self {
            ShaderStage::Vertex => format!("{program}.vert.wgsl"),
            ShaderStage::Fragment => format!("{program}.frag.wgsl"),
        }
    }
}

/// WGSL text for both stages of one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub name: String,
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    pub fn builtin(program: BuiltinProgram) -> Self {
        Self {
            name: program.name().to_owned(),
            vertex: program.source(ShaderStage::Vertex).to_owned(),
            fragment: program.source(ShaderStage::Fragment).to_owned(),
        }
    }

    /// Read both stages of `name` from `dir`.
    pub fn from_dir(dir: &Path, name: &str) -> Result<Self, ShaderError> {
        Ok(Self {
            name: name.to_owned(),
            vertex: read_stage(dir, name, ShaderStage::Vertex)?,
            fragment: read_stage(dir, name, ShaderStage::Fragment)?,
        })
    }

    /// Read a builtin program's stages from `dir`, falling back per stage to
    /// the compiled-in copy when a file can't be read.
    pub fn load_or_builtin(dir: &Path, program: BuiltinProgram) -> Self {
        let load = |stage: ShaderStage| match read_stage(dir, program.name(), stage) {
            Ok(text) => {
                tracing::debug!(program = program.name(), ?stage, "loaded shader from disk");
                text
            }
            Err(e) => {
                tracing::warn!("{e}; using built-in {} shader", program.name());
                program.source(stage).to_owned()
            }
        };
        Self {
            name: program.name().to_owned(),
            vertex: load(ShaderStage::Vertex),
            fragment: load(ShaderStage::Fragment),
        }
    }
}

fn read_stage(dir: &Path, name: &str, stage: ShaderStage) -> Result<String, ShaderError> {
    let path: PathBuf = dir.join(stage.file_name(name));
    std::fs::read_to_string(&path).map_err(|source| ShaderError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sources_define_their_entry_points() {
        for program in [BuiltinProgram::Lit, BuiltinProgram::Unlit] {
            let src = ShaderSource::builtin(program);
            assert!(src.vertex.contains("fn vs_main"));
            assert!(src.fragment.contains("fn fs_main"));
            assert_eq!(src.name, program.name());
        }
    }

    #[test]
    fn stage_file_names() {
        assert_eq!(ShaderStage::Vertex.file_name("lit"), "lit.vert.wgsl");
        assert_eq!(ShaderStage::Fragment.file_name("unlit"), "unlit.frag.wgsl");
    }

    #[test]
    fn from_dir_reads_both_stages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("glow.vert.wgsl"), "// v").unwrap();
        std::fs::write(dir.path().join("glow.frag.wgsl"), "// f").unwrap();

        let src = ShaderSource::from_dir(dir.path(), "glow").unwrap();
        assert_eq!(src.vertex, "// v");
        assert_eq!(src.fragment, "// f");
    }

    #[test]
    fn from_dir_reports_missing_stage_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("glow.vert.wgsl"), "// v").unwrap();

        let err = ShaderSource::from_dir(dir.path(), "glow").unwrap_err();
        let ShaderError::Io { path, .. } = err;
        assert!(path.ends_with("glow.frag.wgsl"));
    }

    #[test]
    fn load_or_builtin_falls_back_per_stage() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lit.vert.wgsl"), "// custom").unwrap();

        let src = ShaderSource::load_or_builtin(dir.path(), BuiltinProgram::Lit);
        assert_eq!(src.vertex, "// custom");
        assert_eq!(src.fragment, LIT_FRAGMENT);
    }

    #[test]
    fn load_or_builtin_with_missing_dir_uses_builtins() {
        let src = ShaderSource::load_or_builtin(
            Path::new("/definitely/not/a/shader/dir"),
            BuiltinProgram::Unlit,
        );
        assert_eq!(src, ShaderSource::builtin(BuiltinProgram::Unlit));
    }
}
