use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_viewport::render_viewport::render_viewport;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::storage::export_error::ExportError;

/// Renders a single frame headlessly and writes it through a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn render(&mut self, request: &RenderRequest) -> &PixelBuffer {
        info!(
            width = request.width,
            height = request.height,
            max_iterations = request.max_iterations,
            quality = request.quality,
            colour_scheme = request.colour_scheme.name(),
            center = %request.viewport.center(),
            zoom = request.viewport.zoom(),
            "rendering Mandelbrot set"
        );

        let start = Instant::now();
        let buffer = render_viewport(request);
        info!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "render finished");

        self.buffer.insert(buffer)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), ExportError> {
        let buffer = self.buffer.as_ref().ok_or(ExportError::EmptyFrame)?;
        let filepath = filepath.as_ref();

        self.presenter.present(buffer, filepath)?;
        info!(path = %filepath.display(), "saved");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
    use crate::presenters::file::png::PngFilePresenter;
    use crate::presenters::file::ppm::PpmFilePresenter;

    fn request(width: u32, height: u32) -> RenderRequest {
        RenderRequest {
            id: 1,
            viewport: Viewport::default(),
            width,
            height,
            max_iterations: 50,
            quality: 1,
            colour_scheme: ColourSchemeKind::Ocean,
        }
    }

    #[test]
    fn test_write_before_render_fails() {
        let controller = CliRenderController::new(PngFilePresenter::new());
        let dir = tempfile::tempdir().unwrap();

        let result = controller.write(dir.path().join("out.png"));

        assert!(matches!(result, Err(ExportError::EmptyFrame)));
    }

    #[test]
    fn test_render_then_write_png() {
        let mut controller = CliRenderController::new(PngFilePresenter::new());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let buffer = controller.render(&request(64, 48));
        assert_eq!(buffer.buffer_size(), 64 * 48 * 4);

        controller.write(&path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (64, 48));
    }

    #[test]
    fn test_render_then_write_ppm() {
        let mut controller = CliRenderController::new(PpmFilePresenter::new());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");

        controller.render(&request(16, 12));
        controller.write(&path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n16 12\n255\n"));
    }

    #[test]
    fn test_degenerate_render_cannot_be_written() {
        let mut controller = CliRenderController::new(PngFilePresenter::new());
        let dir = tempfile::tempdir().unwrap();

        assert!(controller.render(&request(0, 48)).is_empty());
        assert!(matches!(
            controller.write(dir.path().join("out.png")),
            Err(ExportError::EmptyFrame)
        ));
    }
}
