//! ==============================================================================
//! config.rs - compile-time settings for the dashboard shell
//! ==============================================================================

use log::Level;

/// heading shown at the left of the navigation bar
pub const APP_TITLE: &str = "Supply Chain Dashboard";

/// query parameter holding the active tab, e.g. `?tab=shipment`
pub const TAB_QUERY_KEY: &str = "tab";

/// console log level; debug builds also log every navigation
pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::Debug
} else {
    Level::Info
};
