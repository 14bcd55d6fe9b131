//! # MegaMenu Component
//!
//! Desktop disclosure panel for the engaged item. Stateless: it is handed
//! the active `NavItem` and renders its columns side by side. The first
//! column is the primary one and gets the heavier link style.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::core::content::{MenuColumn, NavItem};
use crate::tui::component::Component;
use crate::tui::palette::Palette;

const COLUMN_WIDTH: u16 = 26;
/// Header row, spacer row, and top/bottom padding.
const VERTICAL_OVERHEAD: u16 = 4;

pub struct MegaMenu<'a> {
    pub item: &'a NavItem,
    pub palette: Palette,
}

impl MegaMenu<'_> {
    /// Rows needed to show the tallest column.
    pub fn height(&self) -> u16 {
        let tallest = self
            .item
            .columns
            .iter()
            .map(|column| column.links.len())
            .max()
            .unwrap_or(0);
        u16::try_from(tallest)
            .unwrap_or(u16::MAX)
            .saturating_add(VERTICAL_OVERHEAD)
    }

    fn column_lines(&self, column: &MenuColumn, primary: bool) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(column.header.clone(), self.palette.muted())),
            Line::default(),
        ];
        let link_style = if primary {
            self.palette.panel().add_modifier(Modifier::BOLD)
        } else {
            self.palette.panel()
        };
        lines.extend(
            column
                .links
                .iter()
                .map(|link| Line::from(Span::styled(link.text.clone(), link_style))),
        );
        lines
    }
}

impl Component for MegaMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let block = Block::new()
            .style(self.palette.panel())
            .padding(Padding::new(2, 2, 1, 1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let constraints = self
            .item
            .columns
            .iter()
            .map(|_| Constraint::Length(COLUMN_WIDTH));
        let column_areas = Layout::horizontal(constraints).split(inner);

        for (index, (column, column_area)) in self
            .item
            .columns
            .iter()
            .zip(column_areas.iter())
            .enumerate()
        {
            let lines = self.column_lines(column, index == 0);
            frame.render_widget(Paragraph::new(lines), *column_area);
        }
    }
}
