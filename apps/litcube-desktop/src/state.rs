use litcube_camera::FlyCamera;
use litcube_input::{FrameClock, InputState};
use litcube_render_wgpu::SceneParams;

/// Application state shared by every event handler.
///
/// Owned by the event-loop handler; nothing here is global.
pub struct AppState {
    pub camera: FlyCamera,
    pub input: InputState,
    pub clock: FrameClock,
    pub scene: SceneParams,
    exit_requested: bool,
}

impl AppState {
    pub fn new(camera: FlyCamera, scene: SceneParams) -> Self {
        Self {
            camera,
            input: InputState::new(),
            clock: FrameClock::new(),
            scene,
            exit_requested: false,
        }
    }

    /// Tick the clock and apply this frame's input. Returns the delta time.
    pub fn begin_frame(&mut self) -> f32 {
        let dt = self.clock.tick();
        self.apply_input(dt);
        dt
    }

    /// Drain queued input into the camera for a frame of `dt` seconds.
    pub fn apply_input(&mut self, dt: f32) {
        for action in self.input.drain_actions(dt) {
            if !action.apply(&mut self.camera) {
                self.request_exit();
            }
        }
    }

    pub fn request_exit(&mut self) {
        if !self.exit_requested {
            tracing::info!("exit requested");
        }
        self.exit_requested = true;
    }

    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use litcube_input::Key;

    fn state() -> AppState {
        AppState::new(
            FlyCamera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0),
            SceneParams::default(),
        )
    }

    #[test]
    fn held_forward_key_moves_toward_the_cube() {
        let mut app = state();
        app.input.on_key(Key::MoveForward, true);
        app.apply_input(0.4);
        // speed 2.5 * 0.4 along -z
        assert!(app.camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-5));
        assert!(!app.should_exit());
    }

    #[test]
    fn cursor_and_scroll_reach_the_camera() {
        let mut app = state();
        app.input.on_cursor_moved(400.0, 300.0);
        app.input.on_cursor_moved(500.0, 300.0);
        app.input.on_scroll_lines(5.0);
        app.apply_input(0.0);
        assert_eq!(app.camera.yaw(), 280.0);
        assert_eq!(app.camera.zoom(), 40.0);
    }

    #[test]
    fn escape_requests_exit() {
        let mut app = state();
        app.input.on_key(Key::Quit, true);
        app.apply_input(0.016);
        assert!(app.should_exit());
    }

    #[test]
    fn first_frame_has_zero_delta() {
        let mut app = state();
        app.input.on_key(Key::MoveRight, true);
        let before = app.camera.position();
        assert_eq!(app.begin_frame(), 0.0);
        assert_eq!(app.camera.position(), before);
    }

    #[test]
    fn mouse_motion_turns_past_any_window_width() {
        let mut app = state();
        app.input.on_mouse_motion(0.5, 0.0);
        // 2000 px to the right, far wider than the 800 px window
        for _ in 0..20 {
            app.input.on_mouse_motion(100.0, 0.0);
        }
        app.apply_input(0.0);
        // -90 + 200 degrees
        assert!((app.camera.yaw() - 110.0).abs() < 1e-3);
    }
}
