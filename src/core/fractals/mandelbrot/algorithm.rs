use crate::core::actions::render_viewport::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts the iterations of `z -> z^2 + c` that stay within radius 2.
///
/// The orbit is seeded at `z1 = c`, so a point that already lies outside the
/// escape radius scores 0 and the origin stays bounded for the full budget.
#[inline]
#[must_use]
pub fn escape_time(x0: f64, y0: f64, max_iterations: u32) -> u32 {
    let mut x = x0;
    let mut y = y0;
    let mut iteration = 0;

    while x * x + y * y <= ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        let x_next = x * x - y * y + x0;
        y = 2.0 * x * y + y0;
        x = x_next;
        iteration += 1;
    }

    iteration
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MandelbrotAlgorithm;

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn escape_time(&self, point: Complex, max_iterations: u32) -> u32 {
        escape_time(point.real, point.imag, max_iterations)
    }
}
