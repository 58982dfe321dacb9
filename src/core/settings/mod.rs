pub mod explorer_settings;
pub mod limits;

pub use explorer_settings::{ExplorerSettings, SettingsError};
pub use limits::ExplorerLimits;
