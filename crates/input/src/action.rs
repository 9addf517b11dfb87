use litcube_camera::{FlyCamera, Movement};

/// A camera-level action produced from one frame's worth of input.
///
/// The render loop consumes actions, never raw input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Translate for `dt` seconds.
    Move { direction: Movement, dt: f32 },
    /// Mouse-look by raw cursor offsets (y positive means up).
    Look { xoffset: f32, yoffset: f32 },
    /// Scroll by a line delta.
    Zoom(f32),
    /// Leave the render loop.
    Quit,
}

impl Action {
    /// Apply to the camera. Returns `false` for [`Action::Quit`], which the
    /// caller turns into an exit request.
    pub fn apply(self, camera: &mut FlyCamera) -> bool {
        match self {
            Action::Move { direction, dt } => camera.process_movement(direction, dt),
            Action::Look { xoffset, yoffset } => camera.process_look(xoffset, yoffset),
            Action::Zoom(yoffset) => camera.process_zoom(yoffset),
            Action::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_action_rotates_camera() {
        let mut cam = FlyCamera::default();
        assert!(Action::Look { xoffset: 100.0, yoffset: 50.0 }.apply(&mut cam));
        assert_eq!(cam.yaw(), 280.0);
        assert_eq!(cam.pitch(), 5.0);
    }

    #[test]
    fn zoom_action_changes_fov() {
        let mut cam = FlyCamera::default();
        assert!(Action::Zoom(5.0).apply(&mut cam));
        assert_eq!(cam.zoom(), 40.0);
    }

    #[test]
    fn move_action_translates() {
        let mut cam = FlyCamera::default();
        let before = cam.position();
        assert!(Action::Move { direction: Movement::Forward, dt: 1.0 }.apply(&mut cam));
        assert_ne!(cam.position(), before);
    }

    #[test]
    fn quit_action_requests_exit() {
        let mut cam = FlyCamera::default();
        let before = cam.clone();
        assert!(!Action::Quit.apply(&mut cam));
        assert_eq!(cam, before);
    }
}
