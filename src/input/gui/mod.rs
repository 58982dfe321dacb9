//! Windowed explorer.
//!
//! winit owns the window and event loop, pixels shows the rendered frame and
//! egui draws the control panel on top of it.

pub mod app;
pub mod commands;
