//! ==============================================================================
//! pages.rs - tab -> dashboard mapping
//! ==============================================================================
//!
//! the match in render_page is exhaustive over ActiveTab; unknown identifiers
//! never reach it because ActiveTab::from_tag already maps them to vendor.
//!
//! ==============================================================================

use leptos::prelude::*;
use shared::ActiveTab;

use crate::components::{BlockchainAnalytics, ShipmentDashboard, TemperatureAlerts, VendorDashboard};

/// the single dashboard mounted for `tab`
pub fn render_page(tab: ActiveTab) -> AnyView {
    match tab {
        ActiveTab::Vendor => view! { <VendorDashboard /> }.into_any(),
        ActiveTab::Shipment => view! { <ShipmentDashboard /> }.into_any(),
        ActiveTab::Temperature => view! { <TemperatureAlerts /> }.into_any(),
        ActiveTab::Blockchain => view! { <BlockchainAnalytics /> }.into_any(),
    }
}
