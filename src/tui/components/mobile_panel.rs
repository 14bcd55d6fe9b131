//! # MobilePanel Component
//!
//! The slide-in drawer. Two views, chosen purely from the props:
//!
//! ```text
//! top level                 sub-panel (active item)
//! ┌──────────────────┐      ┌──────────────────┐
//! │ Store          › │      │ ‹ Back           │
//! │ Mac            › │      │ Store            │
//! │ Support        › │      │ SHOP             │
//! └──────────────────┘      │ Shop the Latest  │
//!                           └──────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::content::NavItem;
use crate::tui::component::Component;
use crate::tui::components::nav_bar::display_label;
use crate::tui::layout::{FrameLayout, HitTarget};
use crate::tui::palette::Palette;

const CHEVRON: &str = "›";
const BACK: &str = "‹ Back";

pub struct MobilePanel<'a> {
    /// Rows for the top-level view.
    pub rows: Vec<&'a NavItem>,
    /// Engaged item; when set the sub-panel is shown instead.
    pub active: Option<&'a NavItem>,
    pub palette: Palette,
    pub layout: &'a mut FrameLayout,
}

impl MobilePanel<'_> {
    fn render_top_level(&mut self, frame: &mut Frame, inner: Rect) {
        let bottom = inner.y.saturating_add(inner.height);
        for (offset, item) in self.rows.iter().enumerate() {
            let y = inner.y.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
            if y >= bottom {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            let label = display_label(item);
            let pad = (inner.width as usize).saturating_sub(label.width() + CHEVRON.width());
            let line = Line::from(vec![
                Span::styled(label.to_string(), self.palette.panel().add_modifier(Modifier::BOLD)),
                Span::raw(" ".repeat(pad)),
                Span::styled(CHEVRON, self.palette.muted()),
            ]);
            frame.render_widget(line, row);
            self.layout.push(row, HitTarget::DrawerItem(item.id.clone()));
        }
    }

    fn render_subpanel(&mut self, frame: &mut Frame, inner: Rect, item: &NavItem) {
        if inner.height == 0 {
            return;
        }
        let back_row = Rect::new(inner.x, inner.y, inner.width, 1);
        frame.render_widget(Line::from(Span::styled(BACK, self.palette.muted())), back_row);
        self.layout.push(back_row, HitTarget::DrawerBack);

        let mut lines = vec![
            Line::from(Span::styled(
                display_label(item).to_string(),
                self.palette.panel().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for (index, column) in item.columns.iter().enumerate() {
            if !column.header.is_empty() {
                lines.push(Line::from(Span::styled(
                    column.header.to_uppercase(),
                    self.palette.muted(),
                )));
            }
            let link_style = if index == 0 {
                self.palette.panel().add_modifier(Modifier::BOLD)
            } else {
                self.palette.panel()
            };
            for link in &column.links {
                lines.push(Line::from(Span::styled(link.text.clone(), link_style)));
            }
            lines.push(Line::default());
        }

        let body = Rect::new(
            inner.x,
            inner.y.saturating_add(1),
            inner.width,
            inner.height.saturating_sub(1),
        );
        frame.render_widget(Paragraph::new(lines), body);
    }
}

impl Component for MobilePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let block = Block::new()
            .style(self.palette.panel())
            .padding(Padding::new(2, 2, 1, 1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match self.active {
            Some(item) => self.render_subpanel(frame, inner, item),
            None => self.render_top_level(frame, inner),
        }
    }
}
