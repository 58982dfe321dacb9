/// Custom user events for the GUI event loop.
///
/// Lets the render worker wake the UI thread after it delivers a frame.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A new frame may be waiting in the presenter. The handler decides
    /// whether it is worth a redraw.
    Wake,
}
