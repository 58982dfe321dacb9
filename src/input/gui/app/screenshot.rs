use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::export_error::ExportError;
use crate::storage::png::encode_png;

#[must_use]
pub fn screenshot_file_name(taken_at: SystemTime) -> String {
    let seconds = taken_at
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);

    format!("mandelbrot-{seconds}.png")
}

/// Writes `buffer` as PNG into `directory` and returns the file path.
pub fn save_screenshot(
    buffer: &PixelBuffer,
    directory: &Path,
    taken_at: SystemTime,
) -> Result<PathBuf, ExportError> {
    let bytes = encode_png(buffer)?;
    let path = directory.join(screenshot_file_name(taken_at));

    fs::write(&path, bytes)?;

    Ok(path)
}
