#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomPhase {
    Idle,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomTick {
    /// Nothing to animate.
    Idle,
    /// Zoom moved toward the target and is still short of it.
    Frame { zoom: f64 },
    /// Zoom snapped onto the target; the animation is over.
    Settled { zoom: f64 },
}

/// Eases the displayed zoom toward a target by a fixed fraction of the
/// remaining distance per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomAnimator {
    current: f64,
    target: f64,
    speed: f64,
    epsilon: f64,
}

impl ZoomAnimator {
    #[must_use]
    pub fn new(zoom: f64, speed: f64, epsilon: f64) -> Self {
        Self {
            current: zoom,
            target: zoom,
            speed: sanitize_speed(speed),
            epsilon: epsilon.abs(),
        }
    }

    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        if self.current == self.target {
            ZoomPhase::Idle
        } else {
            ZoomPhase::Animating
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase() == ZoomPhase::Animating
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = sanitize_speed(speed);
    }

    /// Starts easing toward `target`. Non-finite or non-positive targets are
    /// refused and leave the animation untouched.
    pub fn set_target(&mut self, target: f64) -> bool {
        if !target.is_finite() || target <= 0.0 {
            return false;
        }

        self.target = target;
        true
    }

    /// Stops any animation and shows `zoom` immediately.
    pub fn jump_to(&mut self, zoom: f64) {
        self.current = zoom;
        self.target = zoom;
    }

    pub fn tick(&mut self) -> ZoomTick {
        if !self.is_animating() {
            return ZoomTick::Idle;
        }

        self.current += (self.target - self.current) * self.speed;

        if (self.target - self.current).abs() < self.epsilon {
            self.current = self.target;
            ZoomTick::Settled { zoom: self.current }
        } else {
            ZoomTick::Frame { zoom: self.current }
        }
    }

    /// Ticks needed to settle from the current state.
    #[must_use]
    pub fn ticks_to_settle(&self) -> u32 {
        let distance = (self.target - self.current).abs();

        if distance == 0.0 {
            return 0;
        }

        if distance < self.epsilon || self.speed >= 1.0 {
            return 1;
        }

        let ticks = (self.epsilon / distance).ln() / (1.0 - self.speed).ln();
        ticks.floor().max(0.0) as u32 + 1
    }
}

fn sanitize_speed(speed: f64) -> f64 {
    if speed.is_finite() && speed > 0.0 {
        speed.min(1.0)
    } else {
        crate::core::settings::explorer_settings::DEFAULT_ZOOM_ANIMATION_SPEED
    }
}
