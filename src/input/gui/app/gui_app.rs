use std::path::Path;
use std::time::{Instant, SystemTime};

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{error, info, warn};
use winit::{
    error::EventLoopError,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

use crate::controllers::interactive::{ExplorerSession, InteractiveController};
use crate::core::settings::{ExplorerLimits, ExplorerSettings};
use crate::input::gui::app::events::GuiEvent;
use crate::input::gui::app::panel::{PanelActions, show_panel};
use crate::input::gui::app::pointer_input::{PointerAction, PointerInputState};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::screenshot::save_screenshot;

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    session: ExplorerSession,
    controller: InteractiveController,
    pointer: PointerInputState,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    last_update: Instant,
    redraw_pending: bool,
    status_message: Option<String>,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(window: &'static Window, event_loop: &EventLoop<GuiEvent>, presenter: T) -> Self {
        let size = window.inner_size();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        let controller = InteractiveController::new(presenter.share_adapter());
        let session = ExplorerSession::new(
            size.width,
            size.height,
            ExplorerSettings::default(),
            ExplorerLimits::default(),
        );

        Self {
            presenter,
            session,
            controller,
            pointer: PointerInputState::default(),
            egui_ctx,
            egui_state,
            last_update: Instant::now(),
            redraw_pending: true,
            status_message: None,
        }
    }

    pub fn run(mut self, window: &'static Window, event_loop: EventLoop<GuiEvent>) -> Result<(), EventLoopError> {
        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => self.receive_frame(),
            Event::WindowEvent { event, window_id } if window_id == window.id() => {
                let response = self.egui_state.on_window_event(window, &event);
                if response.repaint {
                    self.redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        self.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(err) = self.redraw(window) {
                            error!(%err, "render failed");
                            self.controller.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => self.resize(size.width, size.height),
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(scale_factor as f32);
                        let size = window.inner_size();
                        self.resize(size.width, size.height);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        let action = self.pointer.cursor_moved(position.x, position.y);
                        self.apply_pointer(action);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        let action = self.pointer.cursor_left();
                        self.apply_pointer(action);
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        let action = self.pointer.mouse_input(button, state);
                        // A press over the panel belongs to egui; releases always end a drag.
                        if !(response.consumed && matches!(action, PointerAction::Down { .. })) {
                            self.apply_pointer(action);
                        }
                    }
                    WindowEvent::MouseWheel { delta, .. } if !response.consumed => {
                        let action = self.pointer.mouse_wheel(delta);
                        self.apply_pointer(action);
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                self.update(Instant::now());

                if self.redraw_pending {
                    window.request_redraw();
                }

                elwt.set_control_flow(self.control_flow());
            }
            _ => {}
        })
    }

    /// Advances the zoom animation and hands any due render to the worker.
    fn update(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_update);
        self.last_update = now;

        if self.session.tick(elapsed) {
            self.redraw_pending = true;
        }

        if let Some(request) = self.session.poll_render(now) {
            self.controller.submit_request(request);
        }
    }

    fn control_flow(&self) -> ControlFlow {
        if self.session.needs_update() {
            ControlFlow::Poll
        } else if let Some(deadline) = self.session.render_deadline() {
            ControlFlow::WaitUntil(deadline)
        } else {
            ControlFlow::Wait
        }
    }

    fn receive_frame(&mut self) {
        let Some(frame) = self.presenter.take_frame() else {
            return;
        };

        if self.session.accept_frame(frame) {
            if let Some(pixel_buffer) = self.session.current_pixel_buffer() {
                self.presenter.show(pixel_buffer);
            }
            self.redraw_pending = true;
        }
    }

    fn apply_pointer(&mut self, action: PointerAction) {
        if action == PointerAction::None {
            return;
        }

        action.apply(&mut self.session, Instant::now());
        self.redraw_pending = true;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.session.resize(width, height);
        self.redraw_pending = true;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            warn!(%err, width, height, "failed to resize surface");
        }
    }

    fn redraw(&mut self, window: &Window) -> Result<(), pixels::Error> {
        self.redraw_pending = false;

        let raw_input = self.egui_state.take_egui_input(window);
        let mut actions = PanelActions::default();
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            actions = show_panel(ctx, &mut self.session, self.status_message.as_deref());
        });

        if actions.reset_view {
            self.session.reset_view();
            self.status_message = None;
        }
        if actions.take_screenshot {
            self.take_screenshot();
        }

        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        if egui_output
            .viewport_output
            .values()
            .any(|viewport| viewport.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn take_screenshot(&mut self) {
        let Some(pixel_buffer) = self.session.current_pixel_buffer() else {
            self.status_message = Some("Nothing rendered yet".to_string());
            return;
        };

        match save_screenshot(pixel_buffer, Path::new("."), SystemTime::now()) {
            Ok(path) => {
                info!(path = %path.display(), "screenshot saved");
                self.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(err) => {
                warn!(%err, "screenshot failed");
                self.status_message = Some(format!("Screenshot failed: {err}"));
            }
        }
    }
}
