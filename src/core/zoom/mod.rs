pub mod animator;
pub mod clock;

pub use animator::{ZoomAnimator, ZoomPhase, ZoomTick};
pub use clock::ZoomClock;
