use std::time::Instant;

/// Per-frame delta time from a monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to now and return the seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`. The first tick yields zero; a timestamp earlier than
    /// the previous one also yields zero.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        match self.last.replace(now) {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick_at(Instant::now()), 0.0);
    }

    #[test]
    fn delta_is_time_between_ticks() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.tick_at(t0);
        let dt = clock.tick_at(t0 + Duration::from_millis(250));
        assert!((dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn going_backwards_saturates() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.tick_at(t0 + Duration::from_millis(10));
        assert_eq!(clock.tick_at(t0), 0.0);
    }
}
