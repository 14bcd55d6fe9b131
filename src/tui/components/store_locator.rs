//! # StoreLocator Component
//!
//! Page section listing stores with a local text filter. The panel's
//! visibility is `NavigationState::store_locator_open`; the filter text and
//! input focus are local to the panel and reset whenever it closes.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::store_locator::{Store, filter_stores};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::layout::{FrameLayout, HitTarget};
use crate::tui::palette::Palette;

/// Rows the section occupies in the page body.
pub const STORE_LOCATOR_HEIGHT: u16 = 22;

const INPUT_PLACEHOLDER: &str = "Search by location, ZIP, or store name";

#[derive(Debug, Default)]
pub struct StoreLocatorState {
    pub query: String,
    pub focused: bool,
}

impl StoreLocatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, open: bool) {
        if !open {
            self.query.clear();
            self.focused = false;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocatorEvent {
    QueryChanged,
    Blurred,
}

impl EventHandler for StoreLocatorState {
    type Event = StoreLocatorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<StoreLocatorEvent> {
        if !self.focused {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.query.push(*c);
                Some(StoreLocatorEvent::QueryChanged)
            }
            TuiEvent::Backspace => self.query.pop().map(|_| StoreLocatorEvent::QueryChanged),
            TuiEvent::Escape | TuiEvent::Submit => {
                self.focused = false;
                Some(StoreLocatorEvent::Blurred)
            }
            _ => None,
        }
    }
}

pub struct StoreLocatorPanel<'a> {
    pub state: &'a StoreLocatorState,
    pub stores: &'a [Store],
    pub palette: Palette,
    pub layout: &'a mut FrameLayout,
}

impl StoreLocatorPanel<'_> {
    fn store_lines(&self) -> Vec<Line<'static>> {
        let matches = filter_stores(self.stores, &self.state.query);
        if matches.is_empty() {
            return vec![Line::from(Span::styled(
                "No stores match your search.",
                self.palette.muted(),
            ))];
        }
        let mut lines = Vec::new();
        for store in matches {
            lines.push(Line::from(Span::styled(
                store.name.clone(),
                self.palette.base().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(store.address.clone()));
            if !store.status.is_empty() {
                lines.push(Line::from(Span::styled(
                    store.status.clone(),
                    self.palette.muted(),
                )));
            }
            lines.push(Line::default());
        }
        lines
    }
}

impl Component for StoreLocatorPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::TOP)
            .border_style(self.palette.muted())
            .style(self.palette.base())
            .padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 4 {
            return;
        }

        let title = Rect::new(inner.x, inner.y, inner.width, 1);
        frame.render_widget(
            Line::from(Span::styled(
                "Find a store",
                self.palette.base().add_modifier(Modifier::BOLD),
            )),
            title,
        );

        let input = Rect::new(inner.x, inner.y + 2, inner.width, 1);
        let text = if self.state.query.is_empty() {
            Span::styled(INPUT_PLACEHOLDER, self.palette.muted())
        } else {
            Span::raw(self.state.query.clone())
        };
        let input_style = if self.state.focused {
            self.palette.panel().add_modifier(Modifier::UNDERLINED)
        } else {
            self.palette.panel()
        };
        frame.render_widget(Paragraph::new(Line::from(text)).style(input_style), input);
        self.layout.push(input, HitTarget::StoreLocatorInput);
        if self.state.focused {
            let typed = u16::try_from(self.state.query.width()).unwrap_or(u16::MAX);
            let cursor_x = input.x.saturating_add(typed);
            frame.set_cursor_position(Position::new(
                cursor_x.min(input.right().saturating_sub(1)),
                input.y,
            ));
        }

        let mut lines = vec![
            Line::from(Span::styled("Complete store list >", self.palette.active())),
            Line::default(),
            Line::from(Span::styled(
                "Stores in United States",
                self.palette.base().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(self.store_lines());
        let list = Rect::new(
            inner.x,
            inner.y + 4,
            inner.width,
            inner.height.saturating_sub(4),
        );
        frame.render_widget(Paragraph::new(lines), list);
    }
}
