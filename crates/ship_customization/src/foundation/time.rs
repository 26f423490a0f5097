//! Time management utilities

/// Repeating fixed-interval timer driven by host frame deltas
///
/// The first tick fires one full interval after creation, then once per
/// interval. A single long frame fires at most one tick.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: f32,
    accumulated: f32,
    tick_count: u64,
}

impl TickTimer {
    /// Create a new timer with the given interval in seconds
    pub const fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
            tick_count: 0,
        }
    }

    /// Advance the timer by `delta_time` seconds
    ///
    /// Returns `true` when a tick is due.
    pub fn advance(&mut self, delta_time: f32) -> bool {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            return false;
        }

        self.accumulated += delta_time;
        if self.accumulated < self.interval {
            return false;
        }

        // Drop whole missed intervals so a stalled host doesn't burst
        self.accumulated %= self.interval;
        self.tick_count += 1;
        true
    }

    /// Interval between ticks in seconds
    pub const fn interval(&self) -> f32 {
        self.interval
    }

    /// Number of ticks fired so far
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Seconds remaining until the next tick
    pub fn remaining(&self) -> f32 {
        (self.interval - self.accumulated).max(0.0)
    }

    /// Restart the current interval from zero
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_tick_after_full_interval() {
        let mut timer = TickTimer::new(5.0);
        assert!(!timer.advance(2.5));
        assert!(!timer.advance(2.0));
        assert!(timer.advance(0.5));
        assert_eq!(timer.tick_count(), 1);
    }

    #[test]
    fn test_long_stall_fires_once() {
        let mut timer = TickTimer::new(5.0);
        assert!(timer.advance(17.0));
        assert_eq!(timer.tick_count(), 1);
        assert_relative_eq!(timer.remaining(), 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let mut timer = TickTimer::new(1.0);
        assert!(!timer.advance(-1.0));
        assert!(!timer.advance(f32::NAN));
        assert_relative_eq!(timer.remaining(), 1.0);
    }

    #[test]
    fn test_reset_restarts_interval() {
        let mut timer = TickTimer::new(5.0);
        timer.advance(4.0);
        timer.reset();
        assert!(!timer.advance(4.0));
        assert!(timer.advance(1.0));
    }
}
