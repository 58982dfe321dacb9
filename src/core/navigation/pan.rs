use crate::core::data::viewport::Viewport;
use crate::core::util::plane_mapping::{screen_delta_to_plane, to_plane_bounds};

/// Moves the viewport so that the plane follows a pointer drag of
/// `(dx, dy)` screen pixels. Each center coordinate stays within
/// `[-max_center_abs, max_center_abs]`.
#[must_use]
pub fn pan_viewport(
    viewport: &Viewport,
    dx: f64,
    dy: f64,
    width: u32,
    height: u32,
    aspect_ratio: f64,
    max_center_abs: f64,
) -> Viewport {
    if (dx == 0.0 && dy == 0.0) || width == 0 || height == 0 {
        return *viewport;
    }

    let bounds = to_plane_bounds(viewport, aspect_ratio);
    let delta = screen_delta_to_plane(dx, dy, width, height, &bounds);
    let center = (viewport.center() - delta).clamp(max_center_abs);

    match viewport.with_center(center) {
        Ok(panned) => panned,
        Err(err) => {
            tracing::warn!(%err, "ignoring pan to invalid center");
            *viewport
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::util::plane_mapping::ASPECT_RATIO;

    const TOLERANCE: f64 = 1e-12;

    fn viewport(real: f64, imag: f64, zoom: f64) -> Viewport {
        Viewport::new(Complex::new(real, imag), zoom).unwrap()
    }

    #[test]
    fn test_zero_delta_leaves_viewport_unchanged() {
        let start = viewport(-0.75, 0.1, 3.0);

        assert_eq!(pan_viewport(&start, 0.0, 0.0, 800, 600, ASPECT_RATIO, 10.0), start);
    }

    #[test]
    fn test_drag_right_moves_center_left() {
        let start = viewport(0.0, 0.0, 1.0);

        let panned = pan_viewport(&start, 80.0, 0.0, 800, 600, ASPECT_RATIO, 10.0);

        assert!((panned.center().real - -0.4).abs() < TOLERANCE);
        assert_eq!(panned.center().imag, 0.0);
        assert_eq!(panned.zoom(), 1.0);
    }

    #[test]
    fn test_drag_down_moves_center_up() {
        let start = viewport(0.0, 0.0, 1.0);

        let panned = pan_viewport(&start, 0.0, 60.0, 800, 600, ASPECT_RATIO, 10.0);

        assert!((panned.center().imag - 0.3).abs() < TOLERANCE);
    }

    #[test]
    fn test_pan_distance_shrinks_with_zoom() {
        let start = viewport(0.0, 0.0, 4.0);

        let panned = pan_viewport(&start, 80.0, 0.0, 800, 600, ASPECT_RATIO, 10.0);

        assert!((panned.center().real - -0.1).abs() < TOLERANCE);
    }

    #[test]
    fn test_center_is_clamped_to_domain() {
        let start = viewport(9.5, -9.5, 0.1);

        let panned = pan_viewport(&start, -8000.0, -6000.0, 800, 600, ASPECT_RATIO, 10.0);

        assert_eq!(panned.center(), Complex::new(10.0, -10.0));
    }

    #[test]
    fn test_zero_sized_surface_ignores_pan() {
        let start = viewport(0.0, 0.0, 1.0);

        assert_eq!(pan_viewport(&start, 5.0, 5.0, 0, 600, ASPECT_RATIO, 10.0), start);
    }
}
