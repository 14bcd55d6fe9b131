use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::content::HeroBanner;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

/// Rows the hero occupies in the page body.
pub const HERO_HEIGHT: u16 = 9;

/// Product hero under the header. Colors follow the active theme.
pub struct HeroSection<'a> {
    pub hero: &'a HeroBanner,
    pub palette: Palette,
}

impl Component for HeroSection<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.hero.sub_title.clone(),
                self.palette.base().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.hero.main_title.clone(),
                self.palette
                    .base()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("[ {} ]", self.hero.image.alt),
                self.palette.muted(),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::new().style(self.palette.base()));
        frame.render_widget(paragraph, area);
    }
}
