/// Touchpads report scrolling in pixels; this many pixels count as one wheel
/// line.
pub const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

/// Turns cursor positions into per-event look offsets.
///
/// Positions come either from the window (absolute, bounded by its edges) or
/// from raw device motion summed into an unbounded virtual position with
/// [`CursorTracker::advance`]. The first sample after construction or
/// [`CursorTracker::reset`] only records where the cursor is, otherwise the
/// jump from the initial position would spin the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorTracker {
    last: Option<(f64, f64)>,
    virtual_pos: (f64, f64),
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor position and return `(xoffset, yoffset)` since the
    /// previous one. `yoffset` is reversed because window y grows downward.
    pub fn sample(&mut self, x: f64, y: f64) -> (f32, f32) {
        let (last_x, last_y) = self.last.replace((x, y)).unwrap_or((x, y));
        ((x - last_x) as f32, (last_y - y) as f32)
    }

    /// Move the virtual cursor by a raw motion delta and sample it.
    pub fn advance(&mut self, dx: f64, dy: f64) -> (f32, f32) {
        self.virtual_pos.0 += dx;
        self.virtual_pos.1 += dy;
        let (x, y) = self.virtual_pos;
        self.sample(x, y)
    }

    /// Forget the last position; the next sample yields no offset.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Convert a pixel scroll delta to wheel lines.
pub fn pixels_to_lines(pixels: f64) -> f32 {
    (pixels / PIXELS_PER_SCROLL_LINE as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_has_no_offset() {
        let mut cursor = CursorTracker::new();
        assert_eq!(cursor.sample(400.0, 300.0), (0.0, 0.0));
        assert_eq!(cursor.sample(401.0, 300.0), (1.0, 0.0));
    }

    #[test]
    fn offsets_follow_cursor_with_reversed_y() {
        let mut cursor = CursorTracker::new();
        cursor.sample(400.0, 300.0);
        assert_eq!(cursor.sample(410.0, 290.0), (10.0, 10.0));
        assert_eq!(cursor.sample(405.0, 295.0), (-5.0, -5.0));
    }

    #[test]
    fn reset_swallows_next_jump() {
        let mut cursor = CursorTracker::new();
        cursor.sample(0.0, 0.0);
        cursor.reset();
        assert_eq!(cursor.sample(900.0, 700.0), (0.0, 0.0));
        assert_eq!(cursor.sample(901.0, 700.0), (1.0, 0.0));
    }

    #[test]
    fn raw_motion_is_unbounded() {
        let mut cursor = CursorTracker::new();
        assert_eq!(cursor.advance(5.0, 0.0), (0.0, 0.0));
        // far past any window edge, every step still turns
        for _ in 0..1000 {
            assert_eq!(cursor.advance(50.0, 2.0), (50.0, -2.0));
        }
    }

    #[test]
    fn raw_motion_after_reset_swallows_first_step() {
        let mut cursor = CursorTracker::new();
        cursor.advance(1.0, 1.0);
        cursor.advance(3.0, 0.0);
        cursor.reset();
        assert_eq!(cursor.advance(250.0, 0.0), (0.0, 0.0));
        assert_eq!(cursor.advance(4.0, -4.0), (4.0, 4.0));
    }

    #[test]
    fn pixel_scroll_converts_to_lines() {
        assert_eq!(pixels_to_lines(40.0), 2.0);
        assert_eq!(pixels_to_lines(-10.0), -0.5);
    }
}
