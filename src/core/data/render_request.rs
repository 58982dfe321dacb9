use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::util::plane_mapping::{ASPECT_RATIO, to_plane_bounds};

pub type RequestId = u64;

/// Everything needed to produce one frame.
///
/// `quality` is the side length of the square pixel block that shares a
/// single escape-time sample: 1 renders every pixel, 2 samples a quarter of
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub id: RequestId,
    pub viewport: Viewport,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub quality: u32,
    pub colour_scheme: ColourSchemeKind,
}

impl RenderRequest {
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Block size actually used when sampling; quality below 1 is treated as 1.
    #[must_use]
    pub fn sample_stride(&self) -> u32 {
        self.quality.max(1)
    }

    #[must_use]
    pub fn plane_bounds(&self) -> PlaneBounds {
        to_plane_bounds(&self.viewport, ASPECT_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(width: u32, height: u32, quality: u32) -> RenderRequest {
        RenderRequest {
            id: 1,
            viewport: Viewport::default(),
            width,
            height,
            max_iterations: 100,
            quality,
            colour_scheme: ColourSchemeKind::default(),
        }
    }

    #[test]
    fn test_zero_sized_surface_is_degenerate() {
        assert!(request(0, 600, 1).is_degenerate());
        assert!(request(800, 0, 1).is_degenerate());
        assert!(!request(800, 600, 1).is_degenerate());
    }

    #[test]
    fn test_sample_stride_clamps_quality_to_one() {
        assert_eq!(request(8, 8, 0).sample_stride(), 1);
        assert_eq!(request(8, 8, 1).sample_stride(), 1);
        assert_eq!(request(8, 8, 3).sample_stride(), 3);
    }

    #[test]
    fn test_plane_bounds_follow_viewport() {
        let bounds = request(800, 600, 1).plane_bounds();

        assert_eq!(bounds.x_min, -2.75);
        assert_eq!(bounds.x_max, 1.25);
        assert_eq!(bounds.y_min, -1.5);
        assert_eq!(bounds.y_max, 1.5);
    }
}
