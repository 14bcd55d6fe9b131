//! # Search Modal Component
//!
//! Full-screen overlay with a text field and a fixed quick-link list.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchModalState` lives in `ViewState` and holds only local text-field
//!   state. Whether the modal is open is `NavigationState::search_open`.
//! - `SearchModal` is created each frame with borrowed state
//!
//! The one side effect it owns is focus: `sync()` is called every frame with
//! the current visibility and moves focus into the text field on the
//! hidden → visible edge.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::layout::{FrameLayout, HitTarget};
use crate::tui::palette::Palette;

pub const QUICK_LINKS: [&str; 5] = [
    "Find a Store",
    "Apple Vision Pro",
    "AirPods",
    "Apple Intelligence",
    "Apple Trade In",
];

const PLACEHOLDER: &str = "Search apple.com";
const CLOSE: &str = "✕";
const ICON: &str = "⌕ ";

/// Local text-field state for the search overlay.
#[derive(Debug, Default)]
pub struct SearchModalState {
    pub query: String,
    pub focused: bool,
    visible: bool,
}

impl SearchModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track visibility. Returns `true` when focus was just moved into the
    /// text field. Hiding the modal discards the typed text.
    pub fn sync(&mut self, visible: bool) -> bool {
        let opened = visible && !self.visible;
        if opened {
            self.focused = true;
        } else if !visible && self.visible {
            self.query.clear();
            self.focused = false;
        }
        self.visible = visible;
        opened
    }
}

/// Events emitted by the search modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Close,
    QueryChanged,
}

impl EventHandler for SearchModalState {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::Escape => Some(SearchEvent::Close),
            TuiEvent::InputChar(c) if self.focused => {
                self.query.push(*c);
                Some(SearchEvent::QueryChanged)
            }
            TuiEvent::Backspace if self.focused => {
                self.query.pop().map(|_| SearchEvent::QueryChanged)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the search overlay.
pub struct SearchModal<'a> {
    pub state: &'a SearchModalState,
    pub palette: Palette,
    pub layout: &'a mut FrameLayout,
}

impl Component for SearchModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 60, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.muted())
            .style(self.palette.panel())
            .title(" Search ")
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);
        self.layout.push(overlay, HitTarget::SearchContainer);

        let [input_area, _, links_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        // Input row: icon, text (or placeholder), close button at the far right
        let text = if self.state.query.is_empty() {
            Span::styled(PLACEHOLDER, self.palette.muted())
        } else {
            Span::styled(self.state.query.as_str(), self.palette.panel())
        };
        frame.render_widget(Line::from(vec![Span::raw(ICON), text]), input_area);

        if input_area.width > 0 {
            let close = Rect::new(input_area.right() - 1, input_area.y, 1, 1);
            frame.render_widget(Span::styled(CLOSE, self.palette.muted()), close);
            self.layout.push(close, HitTarget::SearchClose);
        }

        if self.state.focused {
            let typed = u16::try_from(ICON.width() + self.state.query.width()).unwrap_or(u16::MAX);
            let cursor_x = input_area.x.saturating_add(typed);
            let max_x = input_area.right().saturating_sub(2);
            frame.set_cursor_position(Position::new(cursor_x.min(max_x), input_area.y));
        }

        let mut lines = vec![Line::from(Span::styled("Quick Links", self.palette.muted()))];
        lines.extend(
            QUICK_LINKS
                .iter()
                .map(|link| Line::from(vec![Span::raw("→ "), Span::raw(*link)])),
        );
        frame.render_widget(Paragraph::new(lines), links_area);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
