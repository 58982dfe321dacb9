pub mod fire_gradient;
pub mod ocean;
pub mod primary_secondary;
pub mod psychedelic;
