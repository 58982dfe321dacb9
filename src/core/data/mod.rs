pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod plane_bounds;
pub mod render_request;
pub mod viewport;
