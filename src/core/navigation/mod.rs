pub mod pan;
pub mod wheel_zoom;
