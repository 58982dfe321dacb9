use crate::core::data::viewport::Viewport;
use crate::core::util::plane_mapping::ASPECT_RATIO;
use std::time::Duration;

/// Fixed tuning of the interactive explorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerLimits {
    pub aspect_ratio: f64,
    /// Pan keeps each center coordinate inside `[-limit, limit]`.
    pub max_center_abs: f64,
    pub zoom_epsilon: f64,
    pub tick_hz: u32,
    pub max_ticks_per_redraw: u32,
    pub debounce_delay: Duration,
    /// Block size used while dragging or animating.
    pub interactive_quality: u32,
    pub default_viewport: Viewport,
}

impl Default for ExplorerLimits {
    fn default() -> Self {
        Self {
            aspect_ratio: ASPECT_RATIO,
            max_center_abs: 10.0,
            zoom_epsilon: 0.001,
            tick_hz: 60,
            max_ticks_per_redraw: 10,
            debounce_delay: Duration::from_millis(100),
            interactive_quality: 2,
            default_viewport: Viewport::default(),
        }
    }
}
