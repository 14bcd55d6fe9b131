//! # Input Routing
//!
//! Translates terminal input into `core::Action` values. Pure functions over
//! the previous frame's `FrameLayout`, so every mapping can be tested without
//! a terminal.
//!
//! | Input | Desktop | Mobile |
//! |---|---|---|
//! | pointer over nav item | `Hover(id)` | (nothing) |
//! | pointer leaves header + mega menu | `MouseLeaveHeader` | (nothing) |
//! | click drawer item | n/a | `Tap(id)` |
//! | click search item | `OpenSearch` | `OpenSearch` |
//! | click store-locator item | `ToggleStoreLocator` | `ToggleStoreLocator` |
//! | click hamburger / drawer back | n/a | `ToggleMobileMenu` / `BackFromSubpanel` |

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::state::NavigationState;
use crate::core::viewport::ViewportMode;
use crate::tui::event::TuiEvent;
use crate::tui::layout::{FrameLayout, HitTarget};

/// Item ids with a fixed meaning in the content contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityIds {
    pub search: String,
    pub store_locator: String,
}

impl UtilityIds {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            search: config.search_item_id.clone(),
            store_locator: config.store_locator_item_id.clone(),
        }
    }

    pub fn is_utility(&self, id: &str) -> bool {
        id == self.search || id == self.store_locator
    }
}

/// Pointer motion. Only meaningful on desktop.
pub fn pointer_move(
    layout: &FrameLayout,
    state: &NavigationState,
    ids: &UtilityIds,
    col: u16,
    row: u16,
) -> Option<Action> {
    if state.viewport_mode() != ViewportMode::Desktop || state.search_open {
        return None;
    }

    if let Some(HitTarget::NavItem(id)) = layout.target_at(col, row) {
        if ids.is_utility(id) || state.active_tab_id.as_deref() == Some(id.as_str()) {
            return None;
        }
        return Some(Action::Hover(id.clone()));
    }

    let engaged = state.active_tab_id.is_some() || state.mega_menu_open;
    if engaged && !layout.in_header_zone(col, row) {
        return Some(Action::MouseLeaveHeader);
    }
    None
}

/// Primary-button click.
pub fn pointer_click(
    layout: &FrameLayout,
    state: &NavigationState,
    ids: &UtilityIds,
    col: u16,
    row: u16,
) -> Option<Action> {
    let target = layout.target_at(col, row);

    // The search overlay covers everything; clicking its backdrop dismisses it.
    if state.search_open {
        return match target {
            Some(HitTarget::SearchContainer) => None,
            _ => Some(Action::CloseSearch),
        };
    }

    match target? {
        HitTarget::NavItem(id) if *id == ids.search => Some(Action::OpenSearch),
        HitTarget::NavItem(id) if *id == ids.store_locator => Some(Action::ToggleStoreLocator),
        // Header items only disclose through hover (desktop) or the drawer (mobile)
        HitTarget::NavItem(_) => None,
        HitTarget::DrawerItem(id) => {
            (state.viewport_mode() == ViewportMode::Mobile).then(|| Action::Tap(id.clone()))
        }
        HitTarget::Hamburger => Some(Action::ToggleMobileMenu),
        HitTarget::DrawerBack => Some(Action::BackFromSubpanel),
        HitTarget::SearchContainer | HitTarget::SearchClose | HitTarget::StoreLocatorInput => None,
    }
}

/// Keyboard shortcuts, used when no text field has focus.
pub fn shortcut(state: &NavigationState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::InputChar('/') => Some(Action::OpenSearch),
        TuiEvent::InputChar('s') => Some(Action::ToggleStoreLocator),
        TuiEvent::InputChar('t') => Some(Action::ToggleTheme),
        TuiEvent::InputChar('m') => Some(Action::ToggleMobileMenu),
        TuiEvent::Backspace if state.subpanel_open() => Some(Action::BackFromSubpanel),
        TuiEvent::Escape if state.search_open => Some(Action::CloseSearch),
        _ => None,
    }
}
