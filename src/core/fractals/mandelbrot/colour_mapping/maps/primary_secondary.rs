use crate::core::actions::render_viewport::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::map::palette_position;

const BASE_HUES: [Colour; 6] = [
    Colour::new(255, 0, 0),
    Colour::new(0, 255, 0),
    Colour::new(0, 0, 255),
    Colour::new(255, 255, 0),
    Colour::new(0, 255, 255),
    Colour::new(255, 0, 255),
];

const SHADES: [f64; 4] = [1.0, 0.75, 0.5, 0.25];

/// Six equal bands of primary and secondary colours, each band stepping
/// through four progressively darker shades.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimarySecondary;

impl ColourMap for PrimarySecondary {
    fn map(&self, iteration: u32, max_iterations: u32) -> Colour {
        if iteration >= max_iterations {
            return Colour::BLACK;
        }

        let band_position = palette_position(iteration, max_iterations) * BASE_HUES.len() as f64;
        let band = (band_position.floor() as usize).min(BASE_HUES.len() - 1);

        let within_band = band_position - band as f64;
        let shade = ((within_band * SHADES.len() as f64).floor() as usize).min(SHADES.len() - 1);

        BASE_HUES[band].scaled(SHADES[shade])
    }
}
