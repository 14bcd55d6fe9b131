//! # NavBar Component
//!
//! The one-line header. Which items it shows depends on the viewport:
//!
//! ```text
//! Desktop:  Apple  Store  Mac  iPad  Watch  Support  Find a Store  Search
//! Mobile:   Apple                          Find a Store  Search   ☰
//! ```
//!
//! On mobile the remaining items live in the drawer (`MobilePanel`). Slot
//! placement is a pure function (`bar_slots`) so hit regions can be checked
//! without a frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::content::NavItem;
use crate::core::state::NavigationState;
use crate::core::viewport::ViewportMode;
use crate::tui::component::Component;
use crate::tui::layout::{FrameLayout, HitTarget};
use crate::tui::palette::Palette;
use crate::tui::routing::UtilityIds;

const GAP: u16 = 2;
const HAMBURGER_OPEN: &str = "✕";
const HAMBURGER_CLOSED: &str = "☰";

/// Text shown for an item: its icon's alt text when it has an icon,
/// otherwise its label, falling back to the id.
pub fn display_label(item: &NavItem) -> &str {
    let alt = item
        .icon
        .as_ref()
        .map(|icon| icon.alt.as_str())
        .filter(|alt| !alt.is_empty());
    match alt {
        Some(alt) => alt,
        None if !item.label.is_empty() => item.label.as_str(),
        None => item.id.as_str(),
    }
}

/// Items listed in the mobile drawer: everything after the logo except the
/// utility items, which stay in the header.
pub fn drawer_items<'a>(items: &'a [NavItem], ids: &UtilityIds) -> Vec<&'a NavItem> {
    items
        .iter()
        .skip(1)
        .filter(|item| !ids.is_utility(&item.id))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSlot {
    pub rect: Rect,
    pub target: HitTarget,
    pub text: String,
}

/// Lay out the header. Items that do not fit are dropped from the right.
pub fn bar_slots(
    items: &[NavItem],
    ids: &UtilityIds,
    mode: ViewportMode,
    mobile_menu_open: bool,
    area: Rect,
) -> Vec<BarSlot> {
    let mut slots = Vec::new();
    let right_edge = area.x.saturating_add(area.width);
    let mut x = area.x.saturating_add(1);

    let visible: Vec<&NavItem> = match mode {
        ViewportMode::Desktop => items.iter().collect(),
        ViewportMode::Mobile => items
            .iter()
            .enumerate()
            .filter(|(i, item)| *i == 0 || ids.is_utility(&item.id))
            .map(|(_, item)| item)
            .collect(),
    };

    // Mobile reserves the far right for the hamburger
    let reserve = if mode == ViewportMode::Mobile { 3 } else { 0 };

    for item in visible {
        let text = display_label(item).to_string();
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        if width == 0 || x.saturating_add(width).saturating_add(reserve) > right_edge {
            continue;
        }
        slots.push(BarSlot {
            rect: Rect::new(x, area.y, width, 1),
            target: HitTarget::NavItem(item.id.clone()),
            text,
        });
        x = x.saturating_add(width).saturating_add(GAP);
    }

    if mode == ViewportMode::Mobile && area.width >= 3 {
        let glyph = if mobile_menu_open {
            HAMBURGER_OPEN
        } else {
            HAMBURGER_CLOSED
        };
        slots.push(BarSlot {
            rect: Rect::new(right_edge - 2, area.y, 1, 1),
            target: HitTarget::Hamburger,
            text: glyph.to_string(),
        });
    }

    slots
}

pub struct NavBar<'a> {
    pub items: &'a [NavItem],
    pub state: &'a NavigationState,
    pub ids: &'a UtilityIds,
    pub palette: Palette,
    pub layout: &'a mut FrameLayout,
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new("").style(self.palette.panel()), area);

        let slots = bar_slots(
            self.items,
            self.ids,
            self.state.viewport_mode(),
            self.state.mobile_menu_open,
            area,
        );
        for slot in slots {
            let engaged = matches!(
                &slot.target,
                HitTarget::NavItem(id) if self.state.active_tab_id.as_deref() == Some(id.as_str())
            );
            let style = if engaged {
                self.palette.active().bg(self.palette.panel)
            } else {
                self.palette.panel()
            };
            frame.render_widget(Line::from(Span::styled(slot.text, style)), slot.rect);
            self.layout.push(slot.rect, slot.target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::Image;
    use crate::test_support::sample_content;

    fn ids() -> UtilityIds {
        UtilityIds {
            search: "search-link".to_string(),
            store_locator: "store-locator".to_string(),
        }
    }

    fn targets(slots: &[BarSlot]) -> Vec<HitTarget> {
        slots.iter().map(|s| s.target.clone()).collect()
    }

    #[test]
    fn test_display_label_prefers_icon_alt() {
        let mut item = NavItem::link("logo", "Apple");
        assert_eq!(display_label(&item), "Apple");
        item.icon = Some(Image {
            src: "logo.png".to_string(),
            alt: "".to_string(),
        });
        assert_eq!(display_label(&item), "Apple");
        item.icon = Some(Image {
            src: "logo.png".to_string(),
            alt: "Apple Logo".to_string(),
        });
        assert_eq!(display_label(&item), "Apple Logo");
        assert_eq!(display_label(&NavItem::link("bare", "")), "bare");
    }

    #[test]
    fn test_desktop_shows_every_item_in_order() {
        let content = sample_content();
        let slots = bar_slots(
            &content.items,
            &ids(),
            ViewportMode::Desktop,
            false,
            Rect::new(0, 0, 200, 1),
        );
        assert_eq!(slots.len(), content.items.len());
        assert_eq!(slots[1].target, HitTarget::NavItem("store".to_string()));
        assert!(slots.windows(2).all(|w| w[0].rect.right() < w[1].rect.x));
    }

    #[test]
    fn test_mobile_shows_logo_utilities_and_hamburger() {
        let content = sample_content();
        let slots = bar_slots(
            &content.items,
            &ids(),
            ViewportMode::Mobile,
            false,
            Rect::new(0, 0, 60, 1),
        );
        assert_eq!(
            targets(&slots),
            vec![
                HitTarget::NavItem("logo".to_string()),
                HitTarget::NavItem("search-link".to_string()),
                HitTarget::NavItem("store-locator".to_string()),
                HitTarget::Hamburger,
            ]
        );
        assert_eq!(slots[3].text, HAMBURGER_CLOSED);
        assert_eq!(slots[3].rect.x, 58);
    }

    #[test]
    fn test_narrow_bar_drops_overflow() {
        let content = sample_content();
        let slots = bar_slots(
            &content.items,
            &ids(),
            ViewportMode::Desktop,
            false,
            Rect::new(0, 0, 20, 1),
        );
        assert!(slots.len() < content.items.len());
        assert!(slots.iter().all(|s| s.rect.right() <= 20));
    }

    #[test]
    fn test_empty_content_renders_nothing_on_desktop() {
        let slots = bar_slots(&[], &ids(), ViewportMode::Desktop, false, Rect::new(0, 0, 80, 1));
        assert!(slots.is_empty());
    }

    #[test]
    fn test_drawer_items_skip_logo_and_utilities() {
        let content = sample_content();
        let rows: Vec<&str> = drawer_items(&content.items, &ids())
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(rows, vec!["store", "mac", "support"]);
    }
}
