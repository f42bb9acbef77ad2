//! ==============================================================================
//! lib.rs - Supply Chain Dashboard shell
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm shell that switches between the vendor, shipment,
//!     temperature and blockchain dashboards from a sticky navigation bar.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - one NavigationController in context, exactly one dashboard mounted
//!     - active tab mirrored into the url query for deep links
//!
//! ==============================================================================

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod components;
pub mod config;
pub mod location;
pub mod nav;
pub mod pages;
pub mod style;

use components::TabNav;
use nav::NavigationController;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(config::LOG_LEVEL);
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    let initial = location::initial_tab();
    log::info!("starting on {} tab", initial);

    let nav = NavigationController::with_initial(initial);
    provide_context(nav);
    location::sync_to_location(nav);

    view! {
        <TabNav />
        <main>
            {move || pages::render_page(nav.current())}
        </main>
    }
}
