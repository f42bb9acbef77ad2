//! Temperature alerts dashboard

use leptos::prelude::*;
use shared::ActiveTab;

use super::page_card::PageCard;

#[component]
pub fn TemperatureAlerts() -> impl IntoView {
    view! {
        <PageCard tab=ActiveTab::Temperature>
            <p style="color: #64748b;">"Cold-chain readings outside their allowed range."</p>
        </PageCard>
    }
}
