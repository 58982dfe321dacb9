use std::time::{Duration, Instant};

/// Single-shot timer that restarts whenever it is rearmed, so it fires only
/// once input has been quiet for `delay`.
#[derive(Debug, Clone)]
pub struct RenderDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl RenderDebouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn rearm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when the deadline has passed, disarming
    /// the timer.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RenderDebouncer;
    use std::time::{Duration, Instant};

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn unarmed_debouncer_never_fires() {
        let mut debouncer = RenderDebouncer::new(DELAY);

        assert!(!debouncer.poll(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn fires_once_after_delay() {
        let mut debouncer = RenderDebouncer::new(DELAY);
        let start = Instant::now();
        debouncer.rearm(start);

        assert!(!debouncer.poll(start + Duration::from_millis(99)));
        assert!(debouncer.poll(start + DELAY));
        assert!(!debouncer.poll(start + Duration::from_millis(500)));
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn rearming_pushes_the_deadline_back() {
        let mut debouncer = RenderDebouncer::new(DELAY);
        let start = Instant::now();
        debouncer.rearm(start);
        debouncer.rearm(start + Duration::from_millis(80));

        assert!(!debouncer.poll(start + Duration::from_millis(150)));
        assert!(debouncer.poll(start + Duration::from_millis(180)));
    }

    #[test]
    fn cancel_disarms() {
        let mut debouncer = RenderDebouncer::new(DELAY);
        let start = Instant::now();
        debouncer.rearm(start);

        debouncer.cancel();

        assert_eq!(debouncer.deadline(), None);
        assert!(!debouncer.poll(start + DELAY));
    }
}
