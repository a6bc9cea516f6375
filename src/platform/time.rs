//! Frame clock
//!
//! Turns `requestAnimationFrame` timestamps (milliseconds) into frame deltas.

/// Tracks the previous frame timestamp
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor the clock so the next frame at `now` has a zero delta
    pub fn reset(&mut self, now: f64) {
        self.last = Some(now);
    }

    /// Milliseconds since the previous frame.
    ///
    /// The first frame of an unanchored clock and any backwards jump yield 0.
    pub fn tick(&mut self, now: f64) -> f64 {
        let delta = match self.last {
            Some(last) if now > last => now - last,
            _ => 0.0,
        };
        self.last = Some(now);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(100.0), 0.0);
        assert_eq!(clock.tick(116.5), 16.5);
        assert_eq!(clock.tick(150.0), 33.5);
    }

    #[test]
    fn test_reset_gives_zero_first_delta() {
        let mut clock = FrameClock::new();
        clock.tick(10.0);
        clock.reset(5_000.0);
        assert_eq!(clock.tick(5_000.0), 0.0);
        assert_eq!(clock.tick(5_016.0), 16.0);
    }

    #[test]
    fn test_backwards_time_is_clamped() {
        let mut clock = FrameClock::new();
        clock.reset(200.0);
        assert_eq!(clock.tick(150.0), 0.0);
        assert_eq!(clock.tick(170.0), 20.0);
    }
}
