//! # Shell
//!
//! Owns everything one session needs and is the only place effects run.
//!
//! ```text
//! TuiEvent ──► Shell::handle_event ──► routing ──► Action
//!                                                    │
//!                        core::update(nav, content, action)
//!                                                    │
//!                 Effect::PersistTheme ──► ThemeStore::set
//!                 Effect::ScrollIntoView ──► pending, applied by commit()
//! ```
//!
//! `draw()` and `commit()` bracket a frame: scroll requests raised by an
//! action are only applied after the frame that shows the new surface has
//! been laid out, so the target section is guaranteed to exist.

use log::{debug, info};
use ratatui::Frame;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::content::{NavContent, Presence};
use crate::core::state::{NavigationState, Surface};
use crate::core::theme::{KeyValueStore, ThemeStore};
use crate::core::viewport::{classify, columns_to_pixels};
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchEvent, SearchModalState, StoreLocatorState};
use crate::tui::event::TuiEvent;
use crate::tui::layout::{FrameLayout, HitTarget};
use crate::tui::routing::{UtilityIds, pointer_click, pointer_move, shortcut};
use crate::tui::ui::{draw_ui, page_sections};

/// TUI-specific presentation state (not part of navigation state).
#[derive(Debug, Default)]
pub struct ViewState {
    pub search: SearchModalState,
    pub store_locator: StoreLocatorState,
    /// Index into the page sections of the topmost visible one.
    pub first_section: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<S: KeyValueStore> {
    nav: NavigationState,
    /// `None` when the content gate rendered the placeholder.
    content: Option<NavContent>,
    view: ViewState,
    theme_store: ThemeStore<S>,
    ids: UtilityIds,
    pixels_per_column: u32,
    fixed_width: Option<u32>,
    layout: FrameLayout,
    pending_scroll: Option<Surface>,
}

impl<S: KeyValueStore> Shell<S> {
    pub fn new(
        config: &ResolvedConfig,
        presence: Presence,
        theme_store: ThemeStore<S>,
        columns: u16,
    ) -> Self {
        let width = config
            .fixed_width
            .unwrap_or_else(|| columns_to_pixels(columns, config.pixels_per_column));
        let mode = classify(width);
        info!("Viewport {}px classified as {}", width, mode.label());

        let content = match presence {
            Presence::Rendered(content) => Some(content),
            Presence::Placeholder => {
                info!("No navigation content; rendering placeholder");
                None
            }
        };

        Self {
            nav: NavigationState::new(theme_store.get(), mode),
            content,
            view: ViewState::default(),
            theme_store,
            ids: UtilityIds::from_config(config),
            pixels_per_column: config.pixels_per_column,
            fixed_width: config.fixed_width,
            layout: FrameLayout::default(),
            pending_scroll: None,
        }
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    pub fn theme_store(&self) -> &ThemeStore<S> {
        &self.theme_store
    }

    /// Apply one action and run its effect.
    pub fn dispatch(&mut self, action: Action) {
        let Some(content) = self.content.as_ref() else {
            debug!("Ignoring {:?}: no content", action);
            return;
        };
        debug!("Dispatch {:?}", action);
        match update(&mut self.nav, content, action) {
            Effect::None => {}
            Effect::PersistTheme(theme) => {
                self.theme_store.set(theme);
            }
            Effect::ScrollIntoView(surface) => self.pending_scroll = Some(surface),
        }
    }

    pub fn handle_event(&mut self, event: TuiEvent) -> Flow {
        match event {
            TuiEvent::ForceQuit => return Flow::Quit,
            TuiEvent::Resize(columns, _) => {
                if self.fixed_width.is_none() {
                    let width = columns_to_pixels(columns, self.pixels_per_column);
                    self.dispatch(Action::ViewportChanged(width));
                }
                return Flow::Continue;
            }
            _ => {}
        }

        if self.content.is_none() {
            return match event {
                TuiEvent::InputChar('q') | TuiEvent::Escape => Flow::Quit,
                _ => Flow::Continue,
            };
        }

        // The search overlay takes all input while it is open
        if self.nav.search_open {
            match event {
                TuiEvent::MouseClick(col, row) => self.click(col, row),
                TuiEvent::MouseMove(..) => {}
                other => {
                    if let Some(SearchEvent::Close) = self.view.search.handle_event(&other) {
                        self.dispatch(Action::CloseSearch);
                    }
                }
            }
            return Flow::Continue;
        }

        if self.view.store_locator.focused
            && matches!(
                event,
                TuiEvent::InputChar(_) | TuiEvent::Backspace | TuiEvent::Escape | TuiEvent::Submit
            )
        {
            self.view.store_locator.handle_event(&event);
            return Flow::Continue;
        }

        match event {
            TuiEvent::InputChar('q') => return Flow::Quit,
            TuiEvent::MouseMove(col, row) => {
                if let Some(action) = pointer_move(&self.layout, &self.nav, &self.ids, col, row) {
                    self.dispatch(action);
                }
            }
            TuiEvent::MouseClick(col, row) => self.click(col, row),
            TuiEvent::ScrollUp => self.scroll(-1),
            TuiEvent::ScrollDown => self.scroll(1),
            TuiEvent::Escape => self.dismiss(),
            other => {
                if let Some(action) = shortcut(&self.nav, &other) {
                    self.dispatch(action);
                }
            }
        }
        Flow::Continue
    }

    fn click(&mut self, col: u16, row: u16) {
        let on_input = !self.nav.search_open
            && matches!(
                self.layout.target_at(col, row),
                Some(HitTarget::StoreLocatorInput)
            );
        self.view.store_locator.focused = on_input;
        if on_input {
            return;
        }
        if let Some(action) = pointer_click(&self.layout, &self.nav, &self.ids, col, row) {
            self.dispatch(action);
        }
    }

    /// Escape with no text field focused: close the store locator, then the
    /// drawer, then the mega menu.
    fn dismiss(&mut self) {
        if self.nav.store_locator_open {
            self.dispatch(Action::ToggleStoreLocator);
        } else if self.nav.mobile_menu_open {
            self.dispatch(Action::ToggleMobileMenu);
        } else if self.nav.mega_menu_open || self.nav.active_tab_id.is_some() {
            self.dispatch(Action::MouseLeaveHeader);
        }
    }

    fn scroll(&mut self, delta: isize) {
        if self.nav.scroll_locked() {
            debug!("Scroll ignored while the drawer is open");
            return;
        }
        let last = page_sections(&self.nav).len().saturating_sub(1);
        self.view.first_section = self
            .view
            .first_section
            .saturating_add_signed(delta)
            .min(last);
    }

    /// Render one frame and keep its layout for hit-testing the next events.
    pub fn draw(&mut self, frame: &mut Frame) {
        if self.view.search.sync(self.nav.search_open) {
            debug!("Search field focused");
        }
        self.view.store_locator.sync(self.nav.store_locator_open);
        let last = page_sections(&self.nav).len().saturating_sub(1);
        self.view.first_section = self.view.first_section.min(last);

        self.layout = draw_ui(
            frame,
            &self.nav,
            self.content.as_ref(),
            &self.view,
            &self.ids,
        );
    }

    /// Apply a pending scroll-into-view against the frame just drawn.
    /// Returns `true` when the view moved and needs another frame.
    pub fn commit(&mut self) -> bool {
        let Some(surface) = self.pending_scroll.take() else {
            return false;
        };
        match self.layout.section_index(surface) {
            Some(index) if index != self.view.first_section => {
                debug!("Scrolling {:?} into view", surface);
                self.view.first_section = index;
                true
            }
            Some(_) => false,
            None => {
                debug!("{:?} not laid out; scroll dropped", surface);
                false
            }
        }
    }
}
