use litcube_camera::Movement;

/// Logical keys the demo reacts to. The binary decides which physical key
/// drives each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    Quit,
}

impl Key {
    /// The camera direction bound to this key, if any.
    pub fn movement(self) -> Option<Movement> {
        match self {
            Key::MoveForward => Some(Movement::Forward),
            Key::MoveBackward => Some(Movement::Backward),
            Key::MoveLeft => Some(Movement::Left),
            Key::MoveRight => Some(Movement::Right),
            Key::Quit => None,
        }
    }
}

/// Pressed/released state for every [`Key`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    quit: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        *self.slot(key) = pressed;
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::MoveForward => self.forward,
            Key::MoveBackward => self.backward,
            Key::MoveLeft => self.left,
            Key::MoveRight => self.right,
            Key::Quit => self.quit,
        }
    }

    /// Held movement directions in Forward, Backward, Left, Right order.
    pub fn movements(&self) -> impl Iterator<Item = Movement> + '_ {
        [
            Key::MoveForward,
            Key::MoveBackward,
            Key::MoveLeft,
            Key::MoveRight,
        ]
        .into_iter()
        .filter(|key| self.is_pressed(*key))
        .filter_map(Key::movement)
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::MoveForward => &mut self.forward,
            Key::MoveBackward => &mut self.backward,
            Key::MoveLeft => &mut self.left,
            Key::MoveRight => &mut self.right,
            Key::Quit => &mut self.quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut keys = KeyState::new();
        keys.set(Key::MoveLeft, true);
        assert!(keys.is_pressed(Key::MoveLeft));
        assert!(!keys.is_pressed(Key::MoveRight));
        keys.set(Key::MoveLeft, false);
        assert!(!keys.is_pressed(Key::MoveLeft));
    }

    #[test]
    fn movements_are_reported_in_poll_order() {
        let mut keys = KeyState::new();
        keys.set(Key::MoveRight, true);
        keys.set(Key::MoveForward, true);
        keys.set(Key::Quit, true);
        let held: Vec<_> = keys.movements().collect();
        assert_eq!(held, vec![Movement::Forward, Movement::Right]);
    }

    #[test]
    fn quit_has_no_movement() {
        assert_eq!(Key::Quit.movement(), None);
        assert_eq!(Key::MoveBackward.movement(), Some(Movement::Backward));
    }

    #[test]
    fn clear_releases_everything() {
        let mut keys = KeyState::new();
        keys.set(Key::MoveForward, true);
        keys.set(Key::Quit, true);
        keys.clear();
        assert_eq!(keys, KeyState::default());
        assert_eq!(keys.movements().count(), 0);
    }
}
