use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::export_error::ExportError;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::path::Path;

/// Encodes the buffer as an RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, ExportError> {
    if buffer.is_empty() {
        return Err(ExportError::EmptyFrame);
    }

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        buffer.buffer(),
        buffer.width(),
        buffer.height(),
        ExtendedColorType::Rgba8,
    )?;

    Ok(bytes)
}

pub fn write_png(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), ExportError> {
    let bytes = encode_png(buffer)?;
    std::fs::write(filepath, bytes)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    fn sample_buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set_pixel(0, 0, Colour::new(255, 0, 0)).unwrap();
        buffer.set_pixel(2, 1, Colour::new(0, 128, 255)).unwrap();
        buffer
    }

    #[test]
    fn test_encoded_png_decodes_to_same_pixels() {
        let bytes = encode_png(&sample_buffer()).unwrap();

        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(2, 1).0, [0, 128, 255, 255]);
        assert_eq!(decoded.get_pixel(1, 1).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_png_starts_with_signature() {
        let bytes = encode_png(&sample_buffer()).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_empty_buffer_is_rejected() {
        let result = encode_png(&PixelBuffer::empty());

        assert!(matches!(result, Err(ExportError::EmptyFrame)));
    }

    #[test]
    fn test_write_png_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        write_png(&sample_buffer(), &path).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 8);
    }

    #[test]
    fn test_write_png_into_missing_directory_fails_with_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.png");

        let result = write_png(&sample_buffer(), &path);

        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
