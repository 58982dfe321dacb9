use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER: Complex = Complex::new(-0.75, 0.0);
pub const DEFAULT_ZOOM: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    NonFiniteCenter { center: Complex },
    InvalidZoom { zoom: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCenter { center } => {
                write!(f, "viewport center must be finite, got ({}, {})", center.real, center.imag)
            }
            Self::InvalidZoom { zoom } => {
                write!(f, "viewport zoom must be finite and greater than zero, got {}", zoom)
            }
        }
    }
}

impl Error for ViewportError {}

/// Which part of the complex plane is visible: a center point and a zoom factor.
///
/// Zoom 1 shows a plane width of 4 units; doubling the zoom halves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: Complex,
    zoom: f64,
}

impl Viewport {
    pub fn new(center: Complex, zoom: f64) -> Result<Self, ViewportError> {
        if !center.is_finite() {
            return Err(ViewportError::NonFiniteCenter { center });
        }

        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        Ok(Self { center, zoom })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn with_center(self, center: Complex) -> Result<Self, ViewportError> {
        Self::new(center, self.zoom)
    }

    pub fn with_zoom(self, zoom: f64) -> Result<Self, ViewportError> {
        Self::new(self.center, zoom)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_finite_center_and_positive_zoom() {
        let viewport = Viewport::new(Complex::new(-0.5, 0.25), 3.0).unwrap();

        assert_eq!(viewport.center(), Complex::new(-0.5, 0.25));
        assert_eq!(viewport.zoom(), 3.0);
    }

    #[test]
    fn test_new_rejects_zero_negative_and_non_finite_zoom() {
        for zoom in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Viewport::new(Complex::ZERO, zoom);

            assert!(matches!(result, Err(ViewportError::InvalidZoom { .. })), "zoom {zoom}");
        }
    }

    #[test]
    fn test_new_rejects_non_finite_center() {
        let result = Viewport::new(Complex::new(f64::NAN, 0.0), 1.0);

        assert!(matches!(result, Err(ViewportError::NonFiniteCenter { .. })));
    }

    #[test]
    fn test_with_zoom_keeps_center_and_validates() {
        let viewport = Viewport::default();

        let zoomed = viewport.with_zoom(2.5).unwrap();
        assert_eq!(zoomed.center(), DEFAULT_CENTER);
        assert_eq!(zoomed.zoom(), 2.5);

        assert!(viewport.with_zoom(-2.0).is_err());
    }

    #[test]
    fn test_default_viewport_shows_whole_set() {
        let viewport = Viewport::default();

        assert_eq!(viewport.center(), Complex::new(-0.75, 0.0));
        assert_eq!(viewport.zoom(), 1.0);
    }

    #[test]
    fn test_error_display_mentions_offending_value() {
        let err = Viewport::new(Complex::ZERO, -3.0).unwrap_err();

        assert!(err.to_string().contains("-3"));
    }
}
