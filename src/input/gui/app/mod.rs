pub mod events;
pub mod gui_app;
pub mod panel;
pub mod pointer_input;
pub mod ports;
pub mod screenshot;
