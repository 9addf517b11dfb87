mod app;
mod keymap;
mod state;

use anyhow::{Context as _, Result};
use app::{GpuApp, WindowConfig};
use clap::Parser;
use glam::Vec3;
use litcube_camera::{FlyCamera, SENSITIVITY_DEFAULT, SPEED_DEFAULT};
use litcube_render_wgpu::SceneParams;
use state::AppState;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "litcube", about = "A lit cube and its light, seen through a fly camera")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding <program>.vert.wgsl / <program>.frag.wgsl
    #[arg(long, default_value = "shaders")]
    shader_dir: PathBuf,

    /// JSON file overriding colors, light position and clip planes
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Camera movement speed in units per second
    #[arg(long, default_value_t = SPEED_DEFAULT)]
    speed: f32,

    /// Degrees of rotation per pixel of mouse movement
    #[arg(long, default_value_t = SENSITIVITY_DEFAULT)]
    sensitivity: f32,

    /// Look around with window cursor positions instead of raw mouse motion
    #[arg(long)]
    cursor_look: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("litcube starting");

    let scene = match &cli.scene {
        Some(path) => SceneParams::load(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => SceneParams::default(),
    };

    let camera = FlyCamera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0)
        .with_movement_speed(cli.speed)
        .with_mouse_sensitivity(cli.sensitivity);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(
        AppState::new(camera, scene),
        WindowConfig {
            title: "litcube".into(),
            width: cli.width,
            height: cli.height,
            shader_dir: cli.shader_dir,
            cursor_look: cli.cursor_look,
        },
    );
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.take_startup_error() {
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_original_window() {
        let cli = Cli::parse_from(["litcube"]);
        assert_eq!((cli.width, cli.height), (800, 600));
        assert_eq!(cli.shader_dir, PathBuf::from("shaders"));
        assert_eq!(cli.speed, SPEED_DEFAULT);
        assert_eq!(cli.sensitivity, SENSITIVITY_DEFAULT);
        assert!(cli.scene.is_none());
        assert!(!cli.cursor_look);
    }

    #[test]
    fn tuning_flags_parse() {
        let cli = Cli::parse_from([
            "litcube",
            "--speed",
            "5",
            "--sensitivity",
            "0.2",
            "--cursor-look",
            "-v",
        ]);
        assert_eq!(cli.speed, 5.0);
        assert_eq!(cli.sensitivity, 0.2);
        assert!(cli.cursor_look);
        assert!(cli.verbose);
    }
}
