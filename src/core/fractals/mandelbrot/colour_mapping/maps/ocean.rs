use crate::core::actions::render_viewport::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::map::palette_position;

const START_HUE: f64 = 180.0;
const HUE_SPAN: f64 = 180.0;

/// Sweeps from cyan through blue and violet as escape time grows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ocean;

impl ColourMap for Ocean {
    fn map(&self, iteration: u32, max_iterations: u32) -> Colour {
        if iteration >= max_iterations {
            return Colour::BLACK;
        }

        let hue = START_HUE + palette_position(iteration, max_iterations) * HUE_SPAN;

        Colour::from_hsl(hue, 100.0, 50.0)
    }
}
