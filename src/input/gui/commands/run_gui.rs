use std::error::Error;
use std::marker::PhantomData;

use tracing::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::core::util::plane_mapping::ASPECT_RATIO;
use crate::input::gui::{
    app::{events::GuiEvent, gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
};

const WINDOW_WIDTH: f64 = 800.0;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the explorer window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // The plane mapping assumes a fixed aspect ratio.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_WIDTH / ASPECT_RATIO))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;
        let app = GuiApp::new(window, &event_loop, presenter);

        info!("explorer window opened");
        app.run(window, event_loop)?;

        Ok(())
    }
}
