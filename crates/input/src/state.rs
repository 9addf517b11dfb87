use crate::action::Action;
use crate::cursor::{CursorTracker, pixels_to_lines};
use crate::key::{Key, KeyState};

/// Everything observed between two frames.
///
/// Event handlers feed it; the render loop drains it once per frame with
/// [`InputState::drain_actions`].
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: KeyState,
    cursor: CursorTracker,
    pending: Vec<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key(&mut self, key: Key, pressed: bool) {
        self.keys.set(key, pressed);
        if key == Key::Quit && pressed {
            tracing::debug!("quit key pressed");
        }
    }

    /// Absolute cursor position in window coordinates.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let (xoffset, yoffset) = self.cursor.sample(x, y);
        if xoffset != 0.0 || yoffset != 0.0 {
            self.pending.push(Action::Look { xoffset, yoffset });
        }
    }

    /// Relative motion from a raw device, summed into a virtual cursor that
    /// never stops at a window edge. y grows downward, like the cursor.
    pub fn on_mouse_motion(&mut self, dx: f64, dy: f64) {
        let (xoffset, yoffset) = self.cursor.advance(dx, dy);
        if xoffset != 0.0 || yoffset != 0.0 {
            self.pending.push(Action::Look { xoffset, yoffset });
        }
    }

    pub fn on_scroll_lines(&mut self, lines: f32) {
        if lines != 0.0 {
            self.pending.push(Action::Zoom(lines));
        }
    }

    pub fn on_scroll_pixels(&mut self, pixels: f64) {
        self.on_scroll_lines(pixels_to_lines(pixels));
    }

    /// Forget held keys, queued events and the cursor anchor, e.g. on focus
    /// loss.
    pub fn reset(&mut self) {
        self.keys.clear();
        self.cursor.reset();
        self.pending.clear();
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    /// Queued events in arrival order, then one move per held direction for
    /// `dt`, then [`Action::Quit`] if the quit key is down.
    pub fn drain_actions(&mut self, dt: f32) -> Vec<Action> {
        let mut actions = std::mem::take(&mut self.pending);
        actions.extend(
            self.keys
                .movements()
                .map(|direction| Action::Move { direction, dt }),
        );
        if self.keys.is_pressed(Key::Quit) {
            actions.push(Action::Quit);
        }
        actions
    }
}
