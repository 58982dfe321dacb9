use crate::core::data::colour::Colour;

pub trait ColourMap: Send + Sync {
    /// Colour for a point that survived `iteration` steps. Points reaching
    /// `max_iterations` are interior.
    fn map(&self, iteration: u32, max_iterations: u32) -> Colour;
}
