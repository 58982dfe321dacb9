use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::util::plane_mapping::{BASE_HALF_WIDTH, screen_to_plane, to_plane_bounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    In,
    Out,
}

impl WheelDirection {
    /// Scrolling up (negative delta) zooms in.
    #[must_use]
    pub fn from_scroll_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Zoom target one wheel notch away from `zoom`.
#[must_use]
pub fn stepped_zoom(zoom: f64, direction: WheelDirection, step_size: f64) -> f64 {
    match direction {
        WheelDirection::In => zoom * (1.0 + step_size),
        WheelDirection::Out => zoom * (1.0 - step_size),
    }
}

/// A plane point pinned to a screen position while the zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomAnchor {
    pub plane_point: Complex,
    pub screen_x: f64,
    pub screen_y: f64,
}

impl ZoomAnchor {
    #[must_use]
    pub fn capture(
        viewport: &Viewport,
        screen_x: f64,
        screen_y: f64,
        width: u32,
        height: u32,
        aspect_ratio: f64,
    ) -> Self {
        let bounds = to_plane_bounds(viewport, aspect_ratio);

        Self {
            plane_point: screen_to_plane(screen_x, screen_y, width, height, &bounds),
            screen_x,
            screen_y,
        }
    }

    /// Center that keeps `plane_point` under the anchored screen position
    /// at the given zoom.
    #[must_use]
    pub fn center_for_zoom(&self, zoom: f64, width: u32, height: u32, aspect_ratio: f64) -> Complex {
        let plane_width = 2.0 * BASE_HALF_WIDTH / zoom;
        let plane_height = plane_width / aspect_ratio;

        Complex {
            real: self.plane_point.real + plane_width * (0.5 - self.screen_x / f64::from(width)),
            imag: self.plane_point.imag + plane_height * (self.screen_y / f64::from(height) - 0.5),
        }
    }
}
