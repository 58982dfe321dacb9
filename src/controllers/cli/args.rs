use clap::Parser;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::data::complex::Complex;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::settings::ExplorerSettings;

/// Render the Mandelbrot set to an image file.
#[derive(Parser, Debug, Clone)]
#[command(name = "mandelbrot_explorer", version, about, long_about = None)]
pub struct RenderArgs {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Real part of the view center
    #[arg(long, default_value_t = -0.75, allow_negative_numbers = true)]
    pub center_x: f64,

    /// Imaginary part of the view center
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_y: f64,

    /// Magnification; 1 shows a plane width of 4
    #[arg(long, default_value_t = 1.0)]
    pub zoom: f64,

    /// Iteration budget per point, clamped to [10, 1000]
    #[arg(long, default_value_t = 100)]
    pub max_iterations: u32,

    /// Side of the pixel block sharing one sample; 1 is full resolution
    #[arg(long, default_value_t = 1)]
    pub quality: u32,

    /// primary-secondary, ocean, psychedelic or fire-gradient
    #[arg(long, default_value = "primary-secondary")]
    pub colour_scheme: ColourSchemeKind,

    /// Output path; the extension (.png or .ppm) picks the format
    #[arg(short, long, default_value = "mandelbrot.png")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Ppm,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("ppm") => Ok(Self::Ppm),
            _ => Err(CliError::UnsupportedOutput {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    InvalidView(ViewportError),
    UnsupportedOutput { path: PathBuf },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidView(err) => write!(f, "invalid view: {}", err),
            Self::UnsupportedOutput { path } => write!(
                f,
                "unsupported output '{}', expected a .png or .ppm file",
                path.display()
            ),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidView(err) => Some(err),
            Self::UnsupportedOutput { .. } => None,
        }
    }
}

impl From<ViewportError> for CliError {
    fn from(err: ViewportError) -> Self {
        Self::InvalidView(err)
    }
}

impl RenderArgs {
    pub fn output_format(&self) -> Result<OutputFormat, CliError> {
        OutputFormat::from_path(&self.output)
    }

    pub fn to_request(&self) -> Result<RenderRequest, CliError> {
        let viewport = Viewport::new(Complex::new(self.center_x, self.center_y), self.zoom)?;

        let mut settings = ExplorerSettings::default();
        settings.set_max_iterations_clamped(self.max_iterations);
        settings.set_colour_scheme(self.colour_scheme);

        if settings.max_iterations() != self.max_iterations {
            warn!(
                requested = self.max_iterations,
                used = settings.max_iterations(),
                "max iterations out of range, clamped"
            );
        }

        Ok(RenderRequest {
            id: 1,
            viewport,
            width: self.width,
            height: self.height,
            max_iterations: settings.max_iterations(),
            quality: self.quality.max(1),
            colour_scheme: settings.colour_scheme(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> RenderArgs {
        let mut argv = vec!["mandelbrot_explorer"];
        argv.extend_from_slice(args);
        RenderArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_describe_the_default_view() {
        let request = parse(&[]).to_request().unwrap();

        assert_eq!(request.viewport, Viewport::default());
        assert_eq!((request.width, request.height), (800, 600));
        assert_eq!(request.max_iterations, 100);
        assert_eq!(request.quality, 1);
        assert_eq!(request.colour_scheme, ColourSchemeKind::PrimarySecondary);
    }

    #[test]
    fn test_negative_center_and_scheme_parse() {
        let args = parse(&[
            "--center-x",
            "-1.25",
            "--center-y",
            "-0.1",
            "--zoom",
            "8",
            "--colour-scheme",
            "Ocean",
            "-o",
            "zoomed.ppm",
        ]);

        assert_eq!(args.center_x, -1.25);
        assert_eq!(args.center_y, -0.1);
        assert_eq!(args.colour_scheme, ColourSchemeKind::Ocean);
        assert_eq!(args.output_format(), Ok(OutputFormat::Ppm));
    }

    #[test]
    fn test_unknown_colour_scheme_is_a_parse_error() {
        let result = RenderArgs::try_parse_from(["mandelbrot_explorer", "--colour-scheme", "sepia"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_max_iterations_are_clamped() {
        let request = parse(&["--max-iterations", "5000"]).to_request().unwrap();

        assert_eq!(request.max_iterations, 1000);
    }

    #[test]
    fn test_non_positive_zoom_is_rejected() {
        let result = parse(&["--zoom", "0"]).to_request();

        assert!(matches!(result, Err(CliError::InvalidView(ViewportError::InvalidZoom { .. }))));
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a.PNG")), Ok(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path(Path::new("dir/b.ppm")), Ok(OutputFormat::Ppm));
        assert!(OutputFormat::from_path(Path::new("c.jpg")).is_err());
        assert!(OutputFormat::from_path(Path::new("noext")).is_err());
    }
}
