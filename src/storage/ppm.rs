use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::export_error::ExportError;
use std::io::Write;
use std::path::Path;

/// Binary PPM (P6). Alpha is dropped.
pub fn encode_ppm(buffer: &PixelBuffer) -> Result<Vec<u8>, ExportError> {
    if buffer.is_empty() {
        return Err(ExportError::EmptyFrame);
    }

    let mut bytes = Vec::with_capacity(buffer.buffer_size());

    // P6 header: magic, width height, max colour value
    writeln!(bytes, "P6")?;
    writeln!(bytes, "{} {}", buffer.width(), buffer.height())?;
    writeln!(bytes, "255")?;
    bytes.extend_from_slice(&buffer.to_rgb());

    Ok(bytes)
}

pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), ExportError> {
    let bytes = encode_ppm(buffer)?;
    std::fs::write(filepath, bytes)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn test_header_and_rgb_payload() {
        let mut buffer = PixelBuffer::new(2, 1);
        buffer.set_pixel(1, 0, Colour::new(9, 8, 7)).unwrap();

        let bytes = encode_ppm(&buffer).unwrap();

        assert_eq!(bytes, b"P6\n2 1\n255\n\x00\x00\x00\x09\x08\x07".to_vec());
    }

    #[test]
    fn test_empty_buffer_is_rejected() {
        assert!(matches!(encode_ppm(&PixelBuffer::empty()), Err(ExportError::EmptyFrame)));
    }

    #[test]
    fn test_write_ppm_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");

        write_ppm(&PixelBuffer::new(4, 3), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n4 3\n255\n"));
        assert_eq!(written.len(), "P6\n4 3\n255\n".len() + 4 * 3 * 3);
    }
}
