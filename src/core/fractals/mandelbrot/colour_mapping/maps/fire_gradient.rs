use crate::core::actions::render_viewport::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::map::palette_position;

/// Black through red, orange and yellow to white, in four equal segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireGradient;

impl ColourMap for FireGradient {
    fn map(&self, iteration: u32, max_iterations: u32) -> Colour {
        if iteration >= max_iterations {
            return Colour::BLACK;
        }

        let t = palette_position(iteration, max_iterations);
        let segment = (t * 4.0).min(3.0);
        let local_t = t * 4.0 - segment.floor();

        match segment as u8 {
            0 => Colour::new((local_t * 255.0) as u8, 0, 0),
            1 => Colour::new(255, (local_t * 165.0) as u8, 0),
            2 => Colour::new(255, (165.0 + local_t * 90.0) as u8, 0),
            _ => Colour::new(255, 255, (local_t * 255.0) as u8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_iterations_is_black() {
        assert_eq!(FireGradient.map(0, 100), Colour::BLACK);
    }

    #[test]
    fn test_segment_boundaries() {
        assert_eq!(FireGradient.map(25, 100), Colour::new(255, 0, 0));
        assert_eq!(FireGradient.map(50, 100), Colour::new(255, 165, 0));
        assert_eq!(FireGradient.map(75, 100), Colour::new(255, 255, 0));
    }

    #[test]
    fn test_near_max_is_near_white() {
        let colour = FireGradient.map(99, 100);

        assert_eq!((colour.r, colour.g), (255, 255));
        assert!(colour.b > 240);
    }

    #[test]
    fn test_interior_is_black() {
        assert_eq!(FireGradient.map(100, 100), Colour::BLACK);
    }
}
