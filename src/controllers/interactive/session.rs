use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::scheduling::debounce::RenderDebouncer;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::{RenderRequest, RequestId};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::navigation::pan::pan_viewport;
use crate::core::navigation::wheel_zoom::{WheelDirection, ZoomAnchor, stepped_zoom};
use crate::core::settings::{ExplorerLimits, ExplorerSettings};
use crate::core::util::plane_mapping::{screen_to_plane, to_plane_bounds};
use crate::core::zoom::{ZoomAnimator, ZoomClock, ZoomTick};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderQuality {
    Full,
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    last_x: f64,
    last_y: f64,
}

/// View state of one explorer window.
///
/// Input handlers only mutate state and schedule work; nothing renders
/// here. The host calls [`ExplorerSession::tick`] once per frame to drive
/// the zoom animation and [`ExplorerSession::poll_render`] to collect the
/// next request, then feeds finished frames back through
/// [`ExplorerSession::accept_frame`].
pub struct ExplorerSession {
    viewport: Viewport,
    settings: ExplorerSettings,
    limits: ExplorerLimits,
    animator: ZoomAnimator,
    clock: ZoomClock,
    anchor: Option<ZoomAnchor>,
    width: u32,
    height: u32,
    drag: Option<Drag>,
    cursor: Option<(f64, f64)>,
    debouncer: RenderDebouncer,
    pending_render: Option<RenderQuality>,
    last_issued_request_id: RequestId,
    last_applied_request_id: RequestId,
    frame: Option<FrameData>,
}

impl ExplorerSession {
    #[must_use]
    pub fn new(width: u32, height: u32, settings: ExplorerSettings, limits: ExplorerLimits) -> Self {
        let viewport = limits.default_viewport;

        Self {
            viewport,
            settings,
            limits,
            animator: ZoomAnimator::new(
                viewport.zoom(),
                settings.zoom_animation_speed(),
                limits.zoom_epsilon,
            ),
            clock: ZoomClock::new(limits.tick_hz, limits.max_ticks_per_redraw),
            anchor: None,
            width,
            height,
            drag: None,
            cursor: None,
            debouncer: RenderDebouncer::new(limits.debounce_delay),
            pending_render: Some(RenderQuality::Full),
            last_issued_request_id: 0,
            last_applied_request_id: 0,
            frame: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn settings(&self) -> &ExplorerSettings {
        &self.settings
    }

    #[must_use]
    pub fn limits(&self) -> &ExplorerLimits {
        &self.limits
    }

    #[must_use]
    pub fn surface_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn zoom_animator(&self) -> &ZoomAnimator {
        &self.animator
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// True while a drag or zoom animation is in progress.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.is_dragging() || self.animator.is_animating()
    }

    /// True when the host should keep calling `tick` and `poll_render`
    /// without waiting for input.
    #[must_use]
    pub fn needs_update(&self) -> bool {
        self.animator.is_animating() || self.pending_render.is_some()
    }

    #[must_use]
    pub fn render_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Plane point under the pointer, if the pointer is over the surface.
    #[must_use]
    pub fn cursor_position(&self) -> Option<Complex> {
        let (x, y) = self.cursor?;

        if self.width == 0 || self.height == 0 {
            return None;
        }

        let bounds = to_plane_bounds(&self.viewport, self.limits.aspect_ratio);
        Some(screen_to_plane(x, y, self.width, self.height, &bounds))
    }

    #[must_use]
    pub fn current_frame(&self) -> Option<&FrameData> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn current_pixel_buffer(&self) -> Option<&PixelBuffer> {
        self.frame.as_ref().map(|frame| &frame.pixel_buffer)
    }

    #[must_use]
    pub fn last_issued_request_id(&self) -> RequestId {
        self.last_issued_request_id
    }

    #[must_use]
    pub fn last_applied_request_id(&self) -> RequestId {
        self.last_applied_request_id
    }

    /// Replaces the view outright, stopping any zoom animation.
    pub fn set_view(&mut self, center: Complex, zoom: f64) -> Result<(), ViewportError> {
        let viewport = Viewport::new(center, zoom).inspect_err(|err| {
            warn!(%err, "rejecting viewport, keeping previous view");
        })?;

        self.viewport = viewport;
        self.animator.jump_to(zoom);
        self.anchor = None;
        self.request_render(RenderQuality::Full);

        Ok(())
    }

    pub fn reset_view(&mut self) {
        self.viewport = self.limits.default_viewport;
        self.animator.jump_to(self.viewport.zoom());
        self.anchor = None;
        self.drag = None;
        self.debouncer.cancel();
        self.request_render(RenderQuality::Full);
        debug!("view reset");
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }

        self.width = width;
        self.height = height;
        self.anchor = None;
        self.request_render(RenderQuality::Full);
        debug!(width, height, "surface resized");
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
        self.drag = Some(Drag { last_x: x, last_y: y });
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, now: Instant) {
        self.cursor = Some((x, y));

        let Some(drag) = self.drag else {
            return;
        };

        self.drag = Some(Drag { last_x: x, last_y: y });

        let panned = pan_viewport(
            &self.viewport,
            x - drag.last_x,
            y - drag.last_y,
            self.width,
            self.height,
            self.limits.aspect_ratio,
            self.limits.max_center_abs,
        );

        if panned != self.viewport {
            self.viewport = panned;
            self.anchor = None;
            self.debouncer.rearm(now);
        }
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
        self.end_drag();
    }

    pub fn pointer_leave(&mut self) {
        self.cursor = None;
        self.end_drag();
    }

    /// One wheel notch at `(x, y)`. Negative `delta_y` zooms in.
    pub fn wheel(&mut self, delta_y: f64, x: f64, y: f64) {
        self.cursor = Some((x, y));

        let Some(direction) = WheelDirection::from_scroll_delta(delta_y) else {
            return;
        };

        let target = stepped_zoom(self.viewport.zoom(), direction, self.settings.zoom_step_size());

        if let Err(err) = self.viewport.with_zoom(target) {
            warn!(%err, "rejecting wheel zoom");
            return;
        }

        if self.width > 0 && self.height > 0 {
            self.anchor = Some(ZoomAnchor::capture(
                &self.viewport,
                x,
                y,
                self.width,
                self.height,
                self.limits.aspect_ratio,
            ));
        }

        if !self.animator.is_animating() {
            self.clock.reset();
        }

        self.animator.set_target(target);
        self.debouncer.cancel();
        trace!(?direction, target, "zoom target set");
    }

    /// Advances the zoom animation by the fixed ticks due after `elapsed`.
    /// Returns true when the viewport changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.animator.is_animating() {
            self.clock.reset();
            return false;
        }

        let mut changed = false;

        for _ in 0..self.clock.advance(elapsed) {
            match self.animator.tick() {
                ZoomTick::Idle => break,
                ZoomTick::Frame { zoom } => {
                    changed |= self.apply_zoom(zoom);
                    self.request_render(RenderQuality::Interactive);
                }
                ZoomTick::Settled { zoom } => {
                    changed |= self.apply_zoom(zoom);
                    self.anchor = None;
                    self.request_render(RenderQuality::Full);
                    debug!(zoom, "zoom settled");
                    break;
                }
            }
        }

        changed
    }

    /// Next render to issue, if one is due. Immediate requests win over the
    /// debounce timer, which they also clear.
    pub fn poll_render(&mut self, now: Instant) -> Option<RenderRequest> {
        let quality = if let Some(quality) = self.pending_render.take() {
            self.debouncer.cancel();
            quality
        } else if self.debouncer.poll(now) {
            if self.is_interacting() {
                RenderQuality::Interactive
            } else {
                RenderQuality::Full
            }
        } else {
            return None;
        };

        self.last_issued_request_id += 1;

        let request = RenderRequest {
            id: self.last_issued_request_id,
            viewport: self.viewport,
            width: self.width,
            height: self.height,
            max_iterations: self.settings.max_iterations(),
            quality: self.quality_factor(quality),
            colour_scheme: self.settings.colour_scheme(),
        };

        trace!(id = request.id, ?quality, "render issued");
        Some(request)
    }

    /// Keeps `frame` if it is newer than the frame on display.
    pub fn accept_frame(&mut self, frame: FrameData) -> bool {
        if frame.request_id <= self.last_applied_request_id {
            trace!(
                id = frame.request_id,
                applied = self.last_applied_request_id,
                "discarding out-of-order frame"
            );
            return false;
        }

        self.last_applied_request_id = frame.request_id;
        self.frame = Some(frame);
        true
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        let previous = self.settings.max_iterations();
        self.settings.set_max_iterations_clamped(max_iterations);

        if self.settings.max_iterations() != previous {
            self.request_render(RenderQuality::Full);
        }
    }

    pub fn set_zoom_step_size(&mut self, step_size: f64) {
        self.settings.set_zoom_step_size_clamped(step_size);
    }

    pub fn set_zoom_animation_speed(&mut self, speed: f64) {
        self.settings.set_zoom_animation_speed_clamped(speed);
        self.animator.set_speed(self.settings.zoom_animation_speed());
    }

    pub fn set_colour_scheme(&mut self, colour_scheme: ColourSchemeKind) {
        if self.settings.colour_scheme() != colour_scheme {
            self.settings.set_colour_scheme(colour_scheme);
            self.request_render(RenderQuality::Full);
        }
    }

    /// Selects a scheme by name. Unknown names are logged and ignored.
    pub fn set_colour_scheme_by_name(&mut self, name: &str) -> bool {
        match ColourSchemeKind::from_name(name) {
            Some(kind) => {
                self.set_colour_scheme(kind);
                true
            }
            None => {
                warn!(name, "unknown colour scheme, keeping current");
                false
            }
        }
    }

    fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            self.request_render(RenderQuality::Full);
        }
    }

    fn request_render(&mut self, quality: RenderQuality) {
        self.pending_render = Some(quality);
    }

    fn quality_factor(&self, quality: RenderQuality) -> u32 {
        match quality {
            RenderQuality::Full => 1,
            RenderQuality::Interactive => self.limits.interactive_quality.max(1),
        }
    }

    fn apply_zoom(&mut self, zoom: f64) -> bool {
        let center = match self.anchor {
            Some(anchor) => anchor
                .center_for_zoom(zoom, self.width, self.height, self.limits.aspect_ratio)
                .clamp(self.limits.max_center_abs),
            None => self.viewport.center(),
        };

        match Viewport::new(center, zoom) {
            Ok(viewport) => {
                let changed = viewport != self.viewport;
                self.viewport = viewport;
                changed
            }
            Err(err) => {
                warn!(%err, "stopping zoom animation at invalid viewport");
                self.animator.jump_to(self.viewport.zoom());
                self.anchor = None;
                false
            }
        }
    }
}
