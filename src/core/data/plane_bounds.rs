use crate::core::data::complex::Complex;

/// The rectangle of the complex plane covered by the visible surface.
///
/// `y_max` maps to the top screen row, so the imaginary axis grows upward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlaneBounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.x_min + self.x_max) / 2.0,
            imag: (self.y_min + self.y_max) / 2.0,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Complex) -> bool {
        point.real >= self.x_min
            && point.real <= self.x_max
            && point.imag >= self.y_min
            && point.imag <= self.y_max
    }
}
