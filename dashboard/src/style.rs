//! Inline styles for the navigation bar
//!
//! Button styling is a pure function of (tab, current tab) so the
//! "which button is highlighted" rule can be tested without a browser.

use shared::ActiveTab;

pub const NAV_BAR_STYLE: &str = "background-color: white; \
    box-shadow: 0 2px 4px rgba(0,0,0,0.1); \
    padding: 15px 30px; \
    position: sticky; \
    top: 0; \
    z-index: 1000;";

pub const NAV_INNER_STYLE: &str = "max-width: 1400px; \
    margin: 0 auto; \
    display: flex; \
    gap: 15px; \
    align-items: center; \
    flex-wrap: wrap;";

pub const NAV_TITLE_STYLE: &str = "margin: 0; margin-right: 20px; color: #1e293b;";

pub const PAGE_STYLE: &str = "max-width: 1400px; margin: 0 auto; padding: 30px;";

pub const ACTIVE_BACKGROUND: &str = "#667eea";
pub const ACTIVE_TEXT: &str = "white";
pub const INACTIVE_BACKGROUND: &str = "#e2e8f0";
pub const INACTIVE_TEXT: &str = "#64748b";

/// style attribute for the button of `tab` while `current` is on screen
pub fn tab_button_style(tab: ActiveTab, current: ActiveTab) -> String {
    let (background, color) = if tab == current {
        (ACTIVE_BACKGROUND, ACTIVE_TEXT)
    } else {
        (INACTIVE_BACKGROUND, INACTIVE_TEXT)
    };

    format!(
        "padding: 10px 20px; \
         background-color: {background}; \
         color: {color}; \
         border: none; \
         border-radius: 8px; \
         cursor: pointer; \
         font-weight: 600;"
    )
}
