//! Interactive controller for real-time exploration.
//!
//! [`ExplorerSession`] owns the view state and turns pointer, wheel and
//! settings input into render requests. [`InteractiveController`] renders
//! those requests on a background worker, always favouring the newest, and
//! hands finished frames to an [`InteractiveControllerPresenterPort`].

mod controller;
pub mod data;
pub mod ports;
pub mod scheduling;
mod session;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use ports::presenter::InteractiveControllerPresenterPort;
pub use session::{ExplorerSession, RenderQuality};
