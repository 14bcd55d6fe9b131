//! # Actions
//!
//! Everything that can happen to the navigation surface becomes an `Action`.
//! Pointer enters a menu item on desktop? That's `Action::Hover(id)`.
//! Window crosses the breakpoint? That's `Action::ViewportChanged(width)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the host must
//! perform. No side effects happen here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Hover and tap are distinct on purpose. Desktop uses a non-sticky preview
//! model (any hover re-targets, leaving resets); mobile uses a sticky toggle
//! model with no hover signal at all. Every handler reads the viewport mode
//! from the state at the time it runs, so a resize across the breakpoint is
//! picked up without remounting.
//!
//! No action is ever rejected. An action whose precondition does not hold
//! is a no-op, and an unknown item id leaves nothing engaged.

use log::debug;

use crate::core::content::NavContent;
use crate::core::state::{NavigationState, Surface};
use crate::core::theme::Theme;
use crate::core::viewport::{ViewportMode, classify};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Pointer entered a top-level item (desktop only).
    Hover(String),
    /// Item tapped (mobile only). Toggles its sub-panel.
    Tap(String),
    /// Pointer left the header and its mega menu (desktop only).
    MouseLeaveHeader,
    /// Hamburger pressed (mobile only).
    ToggleMobileMenu,
    /// Back chevron inside the drawer's sub-panel.
    BackFromSubpanel,
    OpenSearch,
    CloseSearch,
    ToggleStoreLocator,
    ToggleTheme,
    /// New viewport width in logical pixels.
    ViewportChanged(u32),
}

/// Work the host performs after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write the new theme to persistent storage.
    PersistTheme(Theme),
    /// Scroll the surface into view once the next frame has committed.
    /// Fire-and-forget: the outcome never comes back as an action.
    ScrollIntoView(Surface),
}

fn skip(action: &Action, state: &NavigationState) -> Effect {
    debug!(
        "Ignoring {:?} in {} viewport",
        action,
        state.viewport_mode().label()
    );
    Effect::None
}

/// Apply one action. Total: every (state, action) pair yields a state.
pub fn update(state: &mut NavigationState, content: &NavContent, action: Action) -> Effect {
    let mode = state.viewport_mode();

    match action {
        Action::Hover(ref id) => {
            if mode != ViewportMode::Desktop {
                return skip(&action, state);
            }
            state.search_open = false;
            state.store_locator_open = false;
            match content.find(id) {
                Some(item) => {
                    state.active_tab_id = Some(item.id.clone());
                    state.mega_menu_open = item.has_columns();
                }
                None => {
                    state.active_tab_id = None;
                    state.mega_menu_open = false;
                }
            }
            Effect::None
        }

        Action::Tap(ref id) => {
            if mode != ViewportMode::Mobile || !state.mobile_menu_open {
                return skip(&action, state);
            }
            state.active_tab_id = if state.active_tab_id.as_deref() == Some(id.as_str()) {
                None
            } else {
                content.find(id).map(|item| item.id.clone())
            };
            Effect::None
        }

        Action::MouseLeaveHeader => {
            if mode != ViewportMode::Desktop {
                return skip(&action, state);
            }
            state.mega_menu_open = false;
            state.active_tab_id = None;
            Effect::None
        }

        Action::ToggleMobileMenu => {
            if mode != ViewportMode::Mobile {
                return skip(&action, state);
            }
            state.mobile_menu_open = !state.mobile_menu_open;
            if !state.mobile_menu_open {
                state.active_tab_id = None;
            }
            Effect::None
        }

        Action::BackFromSubpanel => {
            if !state.mobile_menu_open {
                return skip(&action, state);
            }
            state.active_tab_id = None;
            Effect::None
        }

        Action::OpenSearch => {
            state.close_overlays();
            state.search_open = true;
            state.active_tab_id = None;
            Effect::None
        }

        Action::CloseSearch => {
            state.search_open = false;
            Effect::None
        }

        Action::ToggleStoreLocator => {
            if state.store_locator_open {
                state.store_locator_open = false;
                return Effect::None;
            }
            state.close_overlays();
            state.store_locator_open = true;
            state.active_tab_id = None;
            if mode == ViewportMode::Mobile {
                state.mobile_menu_open = false;
            }
            Effect::ScrollIntoView(Surface::StoreLocator)
        }

        Action::ToggleTheme => {
            state.theme = state.theme.toggled();
            Effect::PersistTheme(state.theme)
        }

        Action::ViewportChanged(width) => {
            let next = classify(width);
            if next == mode {
                return Effect::None;
            }
            debug!("Viewport {} -> {} ({}px)", mode.label(), next.label(), width);
            state.viewport_mode = next;
            match next {
                ViewportMode::Mobile => {
                    // The mega menu has no mobile rendering; its engagement goes with it.
                    state.mega_menu_open = false;
                    state.active_tab_id = None;
                }
                ViewportMode::Desktop => {
                    state.mobile_menu_open = false;
                    state.active_tab_id = None;
                }
            }
            Effect::None
        }
    }
}
