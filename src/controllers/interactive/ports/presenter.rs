use crate::controllers::interactive::data::frame_data::FrameData;

pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, frame: FrameData);
}
