use crate::core::actions::render_viewport::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

impl ColourMap for Box<dyn ColourMap> {
    fn map(&self, iteration: u32, max_iterations: u32) -> Colour {
        (**self).map(iteration, max_iterations)
    }
}

/// Position of an escaping point along the palette, in `[0, 1)`.
#[inline]
pub(crate) fn palette_position(iteration: u32, max_iterations: u32) -> f64 {
    f64::from(iteration) / f64::from(max_iterations)
}
