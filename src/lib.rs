mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod logging;
mod presenters;
mod storage;

pub use controllers::cli::args::{CliError, OutputFormat, RenderArgs};
pub use controllers::cli::render::CliRenderController;
pub use controllers::interactive::{
    ExplorerSession, FrameData, InteractiveController, InteractiveControllerPresenterPort,
    RenderQuality,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use core::actions::render_viewport::ports::colour_map::ColourMap;
pub use core::actions::render_viewport::render_viewport::{
    compute_view_bounds, render_viewport, render_viewport_cancelable,
};
pub use core::data::colour::Colour;
pub use core::data::complex::Complex;
pub use core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use core::data::plane_bounds::PlaneBounds;
pub use core::data::render_request::{RenderRequest, RequestId};
pub use core::data::viewport::{Viewport, ViewportError};
pub use core::fractals::mandelbrot::algorithm::escape_time;
pub use core::fractals::mandelbrot::colour_mapping::factory::colour_map_factory;
pub use core::fractals::mandelbrot::colour_mapping::kinds::{ColourSchemeKind, UnknownColourScheme};
pub use core::settings::{ExplorerLimits, ExplorerSettings, SettingsError};
pub use core::util::plane_mapping::{
    ASPECT_RATIO, BASE_HALF_WIDTH, plane_to_screen, screen_delta_to_plane, screen_to_plane,
    to_plane_bounds,
};
pub use core::zoom::{ZoomAnimator, ZoomClock, ZoomPhase, ZoomTick};
pub use logging::init_tracing;
pub use presenters::file::png::PngFilePresenter;
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::export_error::ExportError;
pub use storage::png::encode_png;
pub use storage::ppm::encode_ppm;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
