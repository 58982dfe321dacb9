use std::sync::{Mutex, PoisonError};

use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::{FrameData, InteractiveControllerPresenterPort};
use crate::input::gui::app::events::GuiEvent;

/// Mailbox between the render worker and the UI thread. Holds only the
/// newest frame.
pub struct PixelsAdapter {
    frame: Mutex<Option<FrameData>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, frame: FrameData) {
        *self.frame.lock().unwrap_or_else(PoisonError::into_inner) = Some(frame);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            frame: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
