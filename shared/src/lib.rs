//! ==============================================================================
//! lib.rs - shared types for the supply chain dashboard
//! ==============================================================================
//!
//! purpose:
//!     defines the navigation model used by the dashboard shell.
//!     kept in its own crate so the tab model can be tested natively,
//!     without pulling in the wasm/browser stack.
//!
//! relationships:
//!     - used by: dashboard (navigation controller, tab bar, page mapping)
//!
//! invariant:
//!     an ActiveTab is always one of the four known sections. every
//!     lenient entry point (from_tag, deserialization) falls back to
//!     the vendor section instead of failing.
//!
//! ==============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==============================================================================
// errors
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("unknown dashboard tab: {0:?}")]
    UnknownTab(String),
}

// ==============================================================================
// active tab
// ==============================================================================

/// dashboard section currently on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ActiveTab {
    /// vendor overview - shown at startup
    #[default]
    Vendor,
    /// shipment tracking
    Shipment,
    /// temperature alerting
    Temperature,
    /// blockchain analytics
    Blockchain,
}

impl ActiveTab {
    /// every tab, in navigation bar order
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Vendor,
        ActiveTab::Shipment,
        ActiveTab::Temperature,
        ActiveTab::Blockchain,
    ];

    /// stable identifier used in urls and serialized state
    pub fn tag(&self) -> &'static str {
        match self {
            ActiveTab::Vendor => "vendor",
            ActiveTab::Shipment => "shipment",
            ActiveTab::Temperature => "temperature",
            ActiveTab::Blockchain => "blockchain",
        }
    }

    /// caption of the navigation button
    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Vendor => "📊 Vendors",
            ActiveTab::Shipment => "📦 Shipments",
            ActiveTab::Temperature => "🌡️ Temperature",
            ActiveTab::Blockchain => "⛓️ Blockchain",
        }
    }

    /// heading of the mounted dashboard
    pub fn title(&self) -> &'static str {
        match self {
            ActiveTab::Vendor => "Vendor Dashboard",
            ActiveTab::Shipment => "Shipment Dashboard",
            ActiveTab::Temperature => "Temperature Alerts",
            ActiveTab::Blockchain => "Blockchain Analytics",
        }
    }

    /// lenient parse: anything unrecognized becomes the default tab
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for ActiveTab {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActiveTab::ALL
            .into_iter()
            .find(|tab| tab.tag() == s)
            .ok_or_else(|| TabError::UnknownTab(s.to_string()))
    }
}

impl From<String> for ActiveTab {
    fn from(tag: String) -> Self {
        ActiveTab::from_tag(&tag)
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_vendor() {
        assert_eq!(ActiveTab::default(), ActiveTab::Vendor);
    }

    #[test]
    fn test_known_tags_parse() {
        for tab in ActiveTab::ALL {
            assert_eq!(tab.tag().parse::<ActiveTab>(), Ok(tab));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Shipment".parse::<ActiveTab>().is_err());
        assert!("BLOCKCHAIN".parse::<ActiveTab>().is_err());
        assert!(" blockchain ".parse::<ActiveTab>().is_err());
    }

    #[test]
    fn test_near_miss_tags_fall_back_to_vendor() {
        assert_eq!(ActiveTab::from_tag("Shipment"), ActiveTab::Vendor);
        assert_eq!(ActiveTab::from_tag("BLOCKCHAIN"), ActiveTab::Vendor);
        assert_eq!(ActiveTab::from_tag(" blockchain "), ActiveTab::Vendor);
        assert_eq!(ActiveTab::from_tag("temperature\n"), ActiveTab::Vendor);
    }

    #[test]
    fn test_unknown_tag_is_error() {
        let err = "warehouse".parse::<ActiveTab>().unwrap_err();
        assert_eq!(err, TabError::UnknownTab("warehouse".to_string()));
        assert_eq!(err.to_string(), "unknown dashboard tab: \"warehouse\"");
    }

    #[test]
    fn test_from_tag_falls_back_to_vendor() {
        assert_eq!(ActiveTab::from_tag("temperature"), ActiveTab::Temperature);
        assert_eq!(ActiveTab::from_tag("warehouse"), ActiveTab::Vendor);
        assert_eq!(ActiveTab::from_tag(""), ActiveTab::Vendor);
    }

    #[test]
    fn test_tags_and_labels_are_unique() {
        for (i, a) in ActiveTab::ALL.iter().enumerate() {
            for b in &ActiveTab::ALL[i + 1..] {
                assert_ne!(a.tag(), b.tag());
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_display_writes_tag() {
        assert_eq!(ActiveTab::Temperature.to_string(), "temperature");
    }

    #[test]
    fn test_serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&ActiveTab::Shipment).unwrap();
        assert_eq!(json, "\"shipment\"");
    }

    #[test]
    fn test_deserialize_unknown_falls_back() {
        let tab: ActiveTab = serde_json::from_str("\"blockchain\"").unwrap();
        assert_eq!(tab, ActiveTab::Blockchain);

        let tab: ActiveTab = serde_json::from_str("\"warehouse\"").unwrap();
        assert_eq!(tab, ActiveTab::Vendor);
    }
}
