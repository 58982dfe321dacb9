use crate::core::actions::render_viewport::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

const HUE_STEP_DEGREES: u64 = 20;

/// Rotates the hue by a fixed step per iteration, independent of the budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct Psychedelic;

impl ColourMap for Psychedelic {
    fn map(&self, iteration: u32, max_iterations: u32) -> Colour {
        if iteration >= max_iterations {
            return Colour::BLACK;
        }

        let hue = (u64::from(iteration) * HUE_STEP_DEGREES) % 360;

        Colour::from_hsl(hue as f64, 100.0, 50.0)
    }
}
