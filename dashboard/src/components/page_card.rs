//! Frame shared by the four dashboards

use leptos::prelude::*;
use shared::ActiveTab;

use crate::style::PAGE_STYLE;

#[component]
pub fn PageCard(tab: ActiveTab, children: Children) -> impl IntoView {
    view! {
        <section style=PAGE_STYLE data-page=tab.tag()>
            <h1 style="margin-top: 0; color: #1e293b;">{tab.title()}</h1>
            {children()}
        </section>
    }
}
