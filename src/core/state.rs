//! # Navigation State
//!
//! The single owner of everything that decides which overlay is visible.
//!
//! ```text
//! NavigationState
//! ├── active_tab_id: Option<String>   // engaged item (hovered / tapped)
//! ├── mega_menu_open: bool            // desktop disclosure panel
//! ├── mobile_menu_open: bool          // slide-in drawer
//! ├── search_open: bool               // search overlay
//! ├── store_locator_open: bool        // store-locator panel
//! ├── theme: Theme                    // persisted separately
//! └── viewport_mode: ViewportMode     // derived from width only
//! ```
//!
//! State changes only happen through `update(state, content, action)` in
//! action.rs. Surfaces read this struct; they never write it.

use crate::core::content::NavContent;
use crate::core::theme::Theme;
use crate::core::viewport::ViewportMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_tab_id: Option<String>,
    pub mega_menu_open: bool,
    pub mobile_menu_open: bool,
    pub search_open: bool,
    pub store_locator_open: bool,
    pub theme: Theme,
    pub(crate) viewport_mode: ViewportMode,
}

impl NavigationState {
    /// Fresh mount: every surface closed, nothing engaged.
    pub fn new(theme: Theme, viewport_mode: ViewportMode) -> Self {
        Self {
            active_tab_id: None,
            mega_menu_open: false,
            mobile_menu_open: false,
            search_open: false,
            store_locator_open: false,
            theme,
            viewport_mode,
        }
    }

    pub fn viewport_mode(&self) -> ViewportMode {
        self.viewport_mode
    }

    /// Close the three mutually exclusive overlays.
    pub(crate) fn close_overlays(&mut self) {
        self.mega_menu_open = false;
        self.search_open = false;
        self.store_locator_open = false;
    }

    /// The mobile drawer is showing an item's sub-panel.
    pub fn subpanel_open(&self) -> bool {
        self.mobile_menu_open && self.active_tab_id.is_some()
    }

    /// Page body scrolling is suspended while the drawer is open.
    pub fn scroll_locked(&self) -> bool {
        self.mobile_menu_open
    }

    /// The page body sits under the dimmed backdrop.
    pub fn dims_page(&self, content: &NavContent) -> bool {
        self.mega_menu_open
            && self
                .active_tab_id
                .as_deref()
                .is_some_and(|id| content.has_submenu(id))
    }
}

/// Overlay surfaces the shell knows how to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    MegaMenu,
    Search,
    StoreLocator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{MenuColumn, NavItem};
    use crate::test_support::desktop_state;

    #[test]
    fn test_new_defaults() {
        let state = NavigationState::new(Theme::Dark, ViewportMode::Desktop);
        assert!(state.active_tab_id.is_none());
        assert!(!state.mega_menu_open);
        assert!(!state.mobile_menu_open);
        assert!(!state.search_open);
        assert!(!state.store_locator_open);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_dims_page_requires_columns() {
        let content = NavContent::new(vec![
            NavItem::link("store", "Store").with_columns(vec![MenuColumn {
                header: "Shop".to_string(),
                links: Vec::new(),
            }]),
            NavItem::link("support", "Support"),
        ]);
        let mut state = desktop_state();
        state.mega_menu_open = true;
        state.active_tab_id = Some("store".to_string());
        assert!(state.dims_page(&content));

        state.active_tab_id = Some("support".to_string());
        assert!(!state.dims_page(&content));
    }

    #[test]
    fn test_subpanel_and_scroll_lock() {
        let mut state = NavigationState::new(Theme::Light, ViewportMode::Mobile);
        assert!(!state.scroll_locked());
        state.mobile_menu_open = true;
        assert!(state.scroll_locked());
        assert!(!state.subpanel_open());
        state.active_tab_id = Some("mac-menu".to_string());
        assert!(state.subpanel_open());
    }
}
