/// Direction of a keyboard-style translation, relative to the camera basis.
///
/// Kept free of any windowing type so every input backend maps onto the same
/// four variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
}

impl Movement {
    /// All directions, in the order input is polled.
    pub const ALL: [Movement; 4] = [
        Movement::Forward,
        Movement::Backward,
        Movement::Left,
        Movement::Right,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_direction_once() {
        for (i, a) in Movement::ALL.iter().enumerate() {
            for b in &Movement::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
