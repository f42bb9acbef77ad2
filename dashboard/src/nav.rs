//! ==============================================================================
//! nav.rs - navigation controller
//! ==============================================================================
//!
//! owns the single piece of shell state: which dashboard is on screen.
//! the controller is a Copy handle around a signal, provided once through
//! context and read by both the tab bar and the page region.
//!
//! ==============================================================================

use leptos::prelude::*;
use shared::ActiveTab;

#[derive(Clone, Copy)]
pub struct NavigationController {
    active: RwSignal<ActiveTab>,
}

impl NavigationController {
    pub fn with_initial(tab: ActiveTab) -> Self {
        Self {
            active: RwSignal::new(tab),
        }
    }

    /// current tab (tracked)
    pub fn current(&self) -> ActiveTab {
        self.active.get()
    }

    /// Switch to `tab`.
    ///
    /// Selecting the tab that is already active does not notify
    /// subscribers, so the mounted dashboard keeps its state.
    pub fn select(&self, tab: ActiveTab) {
        let previous = self.active.get_untracked();
        if previous == tab {
            return;
        }
        log::debug!("navigating {} -> {}", previous, tab);
        self.active.set(tab);
    }

    pub fn is_active(&self, tab: ActiveTab) -> bool {
        self.active.with(|active| *active == tab)
    }
}

/// controller provided by the app root
pub fn use_navigation() -> NavigationController {
    expect_context::<NavigationController>()
}
