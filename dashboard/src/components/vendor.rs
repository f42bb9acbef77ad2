//! Vendor overview dashboard

use leptos::prelude::*;
use shared::ActiveTab;

use super::page_card::PageCard;

#[component]
pub fn VendorDashboard() -> impl IntoView {
    view! {
        <PageCard tab=ActiveTab::Vendor>
            <p style="color: #64748b;">"Supplier performance and compliance at a glance."</p>
        </PageCard>
    }
}
