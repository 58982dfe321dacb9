use crate::core::data::complex::Complex;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::viewport::Viewport;

/// Half of the visible plane width at zoom 1.
pub const BASE_HALF_WIDTH: f64 = 2.0;
pub const ASPECT_RATIO: f64 = 4.0 / 3.0;

#[must_use]
pub fn to_plane_bounds(viewport: &Viewport, aspect_ratio: f64) -> PlaneBounds {
    let half_width = BASE_HALF_WIDTH / viewport.zoom();
    let half_height = half_width / aspect_ratio;
    let center = viewport.center();

    PlaneBounds {
        x_min: center.real - half_width,
        x_max: center.real + half_width,
        y_min: center.imag - half_height,
        y_max: center.imag + half_height,
    }
}

/// Maps a surface position to the plane. Screen `y` grows downward while the
/// imaginary axis grows upward, so row 0 maps to `y_max`.
#[must_use]
pub fn screen_to_plane(px: f64, py: f64, width: u32, height: u32, bounds: &PlaneBounds) -> Complex {
    Complex {
        real: bounds.x_min + px / f64::from(width) * bounds.width(),
        imag: bounds.y_max - py / f64::from(height) * bounds.height(),
    }
}

#[must_use]
pub fn plane_to_screen(point: Complex, width: u32, height: u32, bounds: &PlaneBounds) -> (f64, f64) {
    let px = (point.real - bounds.x_min) / bounds.width() * f64::from(width);
    let py = (bounds.y_max - point.imag) / bounds.height() * f64::from(height);

    (px, py)
}

/// Converts a pointer movement into the matching plane displacement, with
/// the imaginary component flipped to follow the plane's orientation.
#[must_use]
pub fn screen_delta_to_plane(dx: f64, dy: f64, width: u32, height: u32, bounds: &PlaneBounds) -> Complex {
    Complex {
        real: dx / f64::from(width) * bounds.width(),
        imag: -dy / f64::from(height) * bounds.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn viewport(real: f64, imag: f64, zoom: f64) -> Viewport {
        Viewport::new(Complex::new(real, imag), zoom).unwrap()
    }

    #[test]
    fn test_bounds_at_zoom_one_span_four_by_three() {
        let bounds = to_plane_bounds(&viewport(0.0, 0.0, 1.0), ASPECT_RATIO);

        assert_eq!(bounds.x_min, -2.0);
        assert_eq!(bounds.x_max, 2.0);
        assert_eq!(bounds.y_min, -1.5);
        assert_eq!(bounds.y_max, 1.5);
    }

    #[test]
    fn test_bounds_are_centred_and_scale_with_zoom() {
        for zoom in [0.5, 1.0, 1.29, 4.0, 1000.0] {
            let view = viewport(-0.75, 0.1, zoom);
            let bounds = to_plane_bounds(&view, ASPECT_RATIO);

            assert!((bounds.center().real - -0.75).abs() < TOLERANCE);
            assert!((bounds.center().imag - 0.1).abs() < TOLERANCE);
            assert!((bounds.width() - 4.0 / zoom).abs() < TOLERANCE);
            assert!((bounds.width() / bounds.height() - ASPECT_RATIO).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_screen_corners_map_to_bounds() {
        let bounds = to_plane_bounds(&viewport(0.0, 0.0, 1.0), ASPECT_RATIO);

        assert_eq!(screen_to_plane(0.0, 0.0, 800, 600, &bounds), Complex::new(-2.0, 1.5));
        assert_eq!(screen_to_plane(800.0, 600.0, 800, 600, &bounds), Complex::new(2.0, -1.5));
        assert_eq!(screen_to_plane(400.0, 300.0, 800, 600, &bounds), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_screen_to_plane_round_trips() {
        let bounds = to_plane_bounds(&viewport(-0.743, 0.131, 37.5), ASPECT_RATIO);

        for (px, py) in [(0.0, 0.0), (17.0, 599.0), (400.5, 123.25), (799.0, 1.0)] {
            let point = screen_to_plane(px, py, 800, 600, &bounds);
            let (x, y) = plane_to_screen(point, 800, 600, &bounds);

            assert!((x - px).abs() < 1e-6, "x {x} vs {px}");
            assert!((y - py).abs() < 1e-6, "y {y} vs {py}");
        }
    }

    #[test]
    fn test_screen_delta_flips_vertical_axis() {
        let bounds = to_plane_bounds(&viewport(0.0, 0.0, 1.0), ASPECT_RATIO);

        let delta = screen_delta_to_plane(80.0, 60.0, 800, 600, &bounds);

        assert!((delta.real - 0.4).abs() < TOLERANCE);
        assert!((delta.imag - -0.3).abs() < TOLERANCE);
    }
}
