use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const PROGRAMS: [&str; 2] = ["lit", "unlit"];
const STAGES: [(&str, &str); 2] = [("vert", "vs_main"), ("frag", "fs_main")];

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for litcube")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: shaders, fmt, clippy, tests, doc
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
    /// Verify every shader stage file exists and declares its entry point
    Shaders {
        #[arg(long, default_value = "shaders")]
        dir: PathBuf,
    },
    /// Run the demo, forwarding any extra arguments
    Run {
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            check_shaders(Path::new("shaders"))?;
            cargo("fmt", &["fmt", "--all", "--", "--check"])?;
            run_clippy()?;
            cargo("test", &["test", "--workspace"])?;
            cargo("doc", &["doc", "--workspace", "--no-deps"])?;
        }
        Commands::Fmt => cargo("fmt", &["fmt", "--all", "--", "--check"])?,
        Commands::Clippy => run_clippy()?,
        Commands::Test => cargo("test", &["test", "--workspace"])?,
        Commands::Doc => cargo("doc", &["doc", "--workspace", "--no-deps"])?,
        Commands::Build => cargo("build", &["build", "--workspace"])?,
        Commands::Shaders { dir } => check_shaders(&dir)?,
        Commands::Run { args } => {
            let mut full = vec!["run", "-p", "litcube-desktop", "--"];
            full.extend(args.iter().map(String::as_str));
            cargo("run", &full)?;
        }
    }

    Ok(())
}

fn cargo(step: &str, args: &[&str]) -> Result<()> {
    println!("==> Running cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {step} failed");
    }
    Ok(())
}

fn run_clippy() -> Result<()> {
    cargo(
        "clippy",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
    )
}

fn check_shaders(dir: &Path) -> Result<()> {
    println!("==> Checking shaders in {}", dir.display());
    let problems = shader_problems(dir)?;
    if !problems.is_empty() {
        for p in &problems {
            eprintln!("  {p}");
        }
        anyhow::bail!("{} shader problem(s)", problems.len());
    }
    Ok(())
}

fn shader_problems(dir: &Path) -> Result<Vec<String>> {
    let mut problems = Vec::new();
    for program in PROGRAMS {
        for (stage, entry) in STAGES {
            let path = dir.join(format!("{program}.{stage}.wgsl"));
            if !path.exists() {
                problems.push(format!("{} is missing", path.display()));
                continue;
            }
            let src = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            if !src.contains(&format!("fn {entry}(")) {
                problems.push(format!("{} does not define {entry}", path.display()));
            }
        }
    }
    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_shaders_are_complete() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../shaders");
        assert!(shader_problems(&dir).unwrap().is_empty());
    }

    #[test]
    fn empty_dir_reports_every_stage() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(shader_problems(dir.path()).unwrap().len(), 4);
    }

    #[test]
    fn stage_without_entry_point_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        for program in PROGRAMS {
            std::fs::write(dir.path().join(format!("{program}.vert.wgsl")), "fn vs_main() {}").unwrap();
            std::fs::write(dir.path().join(format!("{program}.frag.wgsl")), "fn fs_main() {}").unwrap();
        }
        assert!(shader_problems(dir.path()).unwrap().is_empty());

        std::fs::write(dir.path().join("unlit.frag.wgsl"), "fn main() {}").unwrap();
        let problems = shader_problems(dir.path()).unwrap();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("fs_main"));
    }
}
