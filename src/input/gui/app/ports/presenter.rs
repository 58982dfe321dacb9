use std::sync::Arc;

use egui::Context as EguiContext;

use crate::controllers::interactive::{FrameData, InteractiveControllerPresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;

pub trait GuiPresenterPort {
    /// Port handed to the render worker.
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    /// Latest frame delivered since the previous call.
    fn take_frame(&self) -> Option<FrameData>;

    /// Replaces the displayed image. Buffers that no longer match the
    /// surface size are ignored.
    fn show(&mut self, pixel_buffer: &PixelBuffer);

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
