use litcube_input::Key;
use winit::keyboard::KeyCode;

/// WASD to fly, Escape to quit.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::MoveForward),
        KeyCode::KeyS => Some(Key::MoveBackward),
        KeyCode::KeyA => Some(Key::MoveLeft),
        KeyCode::KeyD => Some(Key::MoveRight),
        KeyCode::Escape => Some(Key::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_escape_are_bound() {
        assert_eq!(map_key(KeyCode::KeyW), Some(Key::MoveForward));
        assert_eq!(map_key(KeyCode::KeyS), Some(Key::MoveBackward));
        assert_eq!(map_key(KeyCode::KeyA), Some(Key::MoveLeft));
        assert_eq!(map_key(KeyCode::KeyD), Some(Key::MoveRight));
        assert_eq!(map_key(KeyCode::Escape), Some(Key::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::Space), None);
        assert_eq!(map_key(KeyCode::KeyQ), None);
    }
}
