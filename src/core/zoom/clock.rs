use std::time::Duration;

/// Turns wall-clock time between frames into a whole number of fixed
/// animation ticks, carrying the remainder forward.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomClock {
    tick_hz: u32,
    max_ticks_per_redraw: u32,
    accumulator_secs: f64,
}

impl ZoomClock {
    #[must_use]
    pub fn new(tick_hz: u32, max_ticks_per_redraw: u32) -> Self {
        Self {
            tick_hz,
            max_ticks_per_redraw,
            accumulator_secs: 0.0,
        }
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        if self.tick_hz == 0 {
            0.0
        } else {
            1.0 / f64::from(self.tick_hz)
        }
    }

    /// Ticks due after `elapsed`. A backlog beyond `max_ticks_per_redraw`
    /// is dropped rather than replayed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let dt = self.dt();
        if dt <= 0.0 {
            return 0;
        }

        self.accumulator_secs += elapsed.as_secs_f64();
        if !self.accumulator_secs.is_finite() || self.accumulator_secs < 0.0 {
            self.accumulator_secs = 0.0;
        }

        let ticks_available = (self.accumulator_secs / dt).floor();
        let max_ticks = f64::from(self.max_ticks_per_redraw);
        let ticks_run = ticks_available.min(max_ticks) as u32;

        if ticks_available > max_ticks {
            self.accumulator_secs = 0.0;
        } else {
            self.accumulator_secs = (self.accumulator_secs - f64::from(ticks_run) * dt).max(0.0);
        }

        ticks_run
    }

    pub fn reset(&mut self) {
        self.accumulator_secs = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomClock;
    use std::time::Duration;

    #[test]
    fn exact_tick_runs_one_step() {
        let mut clock = ZoomClock::new(50, 10);

        assert_eq!(clock.advance(Duration::from_millis(20)), 1);
    }

    #[test]
    fn partial_ticks_accumulate() {
        let mut clock = ZoomClock::new(50, 10);

        assert_eq!(clock.advance(Duration::from_millis(12)), 0);
        assert_eq!(clock.advance(Duration::from_millis(12)), 1);
        assert_eq!(clock.advance(Duration::from_millis(12)), 0);
    }

    #[test]
    fn long_frames_are_capped_and_backlog_dropped() {
        let mut clock = ZoomClock::new(60, 10);

        assert_eq!(clock.advance(Duration::from_secs(5)), 10);
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }

    #[test]
    fn reset_discards_partial_tick() {
        let mut clock = ZoomClock::new(50, 10);
        clock.advance(Duration::from_millis(15));

        clock.reset();

        assert_eq!(clock.advance(Duration::from_millis(15)), 0);
    }

    #[test]
    fn zero_tick_rate_never_ticks() {
        let mut clock = ZoomClock::new(0, 10);

        assert_eq!(clock.advance(Duration::from_secs(1)), 0);
    }
}
