//! Keeps the active tab in the page url (`?tab=shipment`)
//!
//! The url is only a deep link: it is read once at startup and rewritten
//! with `replaceState` afterwards, so tab switches never add history entries.

use leptos::prelude::*;
use serde::Deserialize;
use shared::ActiveTab;
use wasm_bindgen::JsValue;

use crate::config::TAB_QUERY_KEY;
use crate::nav::NavigationController;

/// the part of the query we care about; other parameters are ignored
#[derive(Debug, Deserialize)]
struct TabQuery {
    // must match TAB_QUERY_KEY
    tab: Option<String>,
}

/// tab named by a `location.search` string; missing or unknown -> default
pub fn tab_from_query(search: &str) -> ActiveTab {
    let query: TabQuery = match serde_qs::from_str(search.trim_start_matches('?')) {
        Ok(query) => query,
        Err(err) => {
            log::warn!("ignoring malformed query {:?}: {}", search, err);
            return ActiveTab::default();
        }
    };

    query
        .tab
        .map(|tag| ActiveTab::from_tag(&tag))
        .unwrap_or_default()
}

pub fn query_for(tab: ActiveTab) -> String {
    format!("?{}={}", TAB_QUERY_KEY, tab.tag())
}

/// tab requested by the url the app was opened with
pub fn initial_tab() -> ActiveTab {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| tab_from_query(&search))
        .unwrap_or_default()
}

/// mirror every tab change into the address bar
pub fn sync_to_location(nav: NavigationController) {
    Effect::new(move |_| {
        replace_query(nav.current());
    });
}

fn replace_query(tab: ActiveTab) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window, cannot update location");
        return;
    };

    let query = query_for(tab);
    let current = window.location().search().unwrap_or_default();
    if current == query {
        return;
    }

    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&query)));
    if let Err(err) = result {
        log::warn!("failed to update location to {}: {:?}", query, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_tab_param() {
        assert_eq!(tab_from_query("?tab=shipment"), ActiveTab::Shipment);
        assert_eq!(tab_from_query("tab=temperature"), ActiveTab::Temperature);
        assert_eq!(tab_from_query("?lang=en&tab=blockchain"), ActiveTab::Blockchain);
    }

    #[test]
    fn test_unrelated_nested_params_keep_tab() {
        assert_eq!(tab_from_query("?utm[src]=mail&tab=shipment"), ActiveTab::Shipment);
        assert_eq!(tab_from_query("?tab=blockchain&filter[site][id]=7"), ActiveTab::Blockchain);
    }

    #[test]
    fn test_query_key_matches_field() {
        assert!(query_for(ActiveTab::Vendor).starts_with(&format!("?{}=", TAB_QUERY_KEY)));
        assert_eq!(tab_from_query(&format!("{}=temperature", TAB_QUERY_KEY)), ActiveTab::Temperature);
    }

    #[test]
    fn test_missing_param_is_vendor() {
        assert_eq!(tab_from_query(""), ActiveTab::Vendor);
        assert_eq!(tab_from_query("?"), ActiveTab::Vendor);
        assert_eq!(tab_from_query("?lang=en"), ActiveTab::Vendor);
    }

    #[test]
    fn test_unknown_tab_is_vendor() {
        assert_eq!(tab_from_query("?tab=warehouse"), ActiveTab::Vendor);
        assert_eq!(tab_from_query("?tab="), ActiveTab::Vendor);
    }

    #[test]
    fn test_query_round_trips_through_parser() {
        for tab in ActiveTab::ALL {
            assert_eq!(tab_from_query(&query_for(tab)), tab);
        }
    }

    #[test]
    fn test_query_format() {
        assert_eq!(query_for(ActiveTab::Temperature), "?tab=temperature");
    }
}
