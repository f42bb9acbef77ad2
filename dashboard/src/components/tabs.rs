//! Tab navigation component

use leptos::prelude::*;
use shared::ActiveTab;

use crate::config::APP_TITLE;
use crate::nav::use_navigation;
use crate::style::{tab_button_style, NAV_BAR_STYLE, NAV_INNER_STYLE, NAV_TITLE_STYLE};

#[component]
pub fn TabNav() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <nav style=NAV_BAR_STYLE>
            <div style=NAV_INNER_STYLE>
                <h2 style=NAV_TITLE_STYLE>{APP_TITLE}</h2>

                {ActiveTab::ALL.into_iter().map(|tab| view! {
                    <button
                        style=move || tab_button_style(tab, nav.current())
                        aria-pressed=move || if nav.is_active(tab) { "true" } else { "false" }
                        on:click=move |_| nav.select(tab)
                    >
                        {tab.label()}
                    </button>
                }).collect::<Vec<_>>()}
            </div>
        </nav>
    }
}
