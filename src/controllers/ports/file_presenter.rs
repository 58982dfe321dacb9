use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::export_error::ExportError;

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), ExportError>;
}
