use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Theme;

/// Colors for one theme. Components take this as a prop; none of them read
/// the theme store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub panel: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                accent: Color::Blue,
                panel: Color::Rgb(245, 245, 247),
            },
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::LightBlue,
                panel: Color::Rgb(22, 22, 23),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.fg).bg(self.panel)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }
}
