use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RequestId;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub request_id: RequestId,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
