//! Blockchain analytics dashboard

use leptos::prelude::*;
use shared::ActiveTab;

use super::page_card::PageCard;

#[component]
pub fn BlockchainAnalytics() -> impl IntoView {
    view! {
        <PageCard tab=ActiveTab::Blockchain>
            <p style="color: #64748b;">"On-chain provenance records for tracked goods."</p>
        </PageCard>
    }
}
