pub mod export_error;
pub mod png;
pub mod ppm;
