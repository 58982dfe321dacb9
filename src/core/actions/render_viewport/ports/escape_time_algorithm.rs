use crate::core::data::complex::Complex;

pub trait EscapeTimeAlgorithm: Send + Sync {
    /// Iterations survived before escaping, or `max_iterations` for points
    /// that never escape.
    fn escape_time(&self, point: Complex, max_iterations: u32) -> u32;
}
