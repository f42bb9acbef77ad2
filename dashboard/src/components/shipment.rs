//! Shipment tracking dashboard

use leptos::prelude::*;
use shared::ActiveTab;

use super::page_card::PageCard;

#[component]
pub fn ShipmentDashboard() -> impl IntoView {
    view! {
        <PageCard tab=ActiveTab::Shipment>
            <p style="color: #64748b;">"In-transit consignments and delivery status."</p>
        </PageCard>
    }
}
