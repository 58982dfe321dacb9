pub mod actions;
pub mod data;
pub mod fractals;
pub mod navigation;
pub mod settings;
pub mod util;
pub mod zoom;
