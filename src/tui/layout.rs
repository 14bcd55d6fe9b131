//! # Frame Layout
//!
//! What the last frame put where. Components push hit regions while they
//! render; the event loop hit-tests pointer events against the previous
//! frame's layout, the same way a browser targets the element currently
//! painted under the cursor.

use ratatui::layout::{Position, Rect};

use crate::core::state::Surface;

/// Something a pointer can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// Top-bar item, by content id.
    NavItem(String),
    Hamburger,
    /// Top-level row inside the mobile drawer.
    DrawerItem(String),
    DrawerBack,
    /// The search modal's container (clicks inside do not dismiss it).
    SearchContainer,
    SearchClose,
    StoreLocatorInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub rect: Rect,
    pub target: HitTarget,
}

/// Scrollable blocks of the page body, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSection {
    Hero,
    StoreLocator,
}

impl PageSection {
    pub fn surface(self) -> Option<Surface> {
        match self {
            PageSection::Hero => None,
            PageSection::StoreLocator => Some(Surface::StoreLocator),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FrameLayout {
    pub header: Rect,
    pub mega_menu: Option<Rect>,
    pub drawer: Option<Rect>,
    /// Sections in the page body, in page order (not only the visible ones).
    pub sections: Vec<PageSection>,
    regions: Vec<HitRegion>,
}

impl FrameLayout {
    pub fn new(header: Rect) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    pub fn push(&mut self, rect: Rect, target: HitTarget) {
        self.regions.push(HitRegion { rect, target });
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// Topmost target under `(col, row)`. Later pushes paint over earlier ones.
    pub fn target_at(&self, col: u16, row: u16) -> Option<&HitTarget> {
        let pos = Position::new(col, row);
        self.regions
            .iter()
            .rev()
            .find(|region| region.rect.contains(pos))
            .map(|region| &region.target)
    }

    /// Pointer is over the header bar or the open mega menu.
    pub fn in_header_zone(&self, col: u16, row: u16) -> bool {
        let pos = Position::new(col, row);
        self.header.contains(pos) || self.mega_menu.is_some_and(|menu| menu.contains(pos))
    }

    /// Index of the first section rendering `surface`, if it was laid out.
    pub fn section_index(&self, surface: Surface) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.surface() == Some(surface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_regions_win() {
        let mut layout = FrameLayout::new(Rect::new(0, 0, 80, 1));
        layout.push(Rect::new(0, 0, 80, 20), HitTarget::SearchContainer);
        layout.push(Rect::new(70, 0, 3, 1), HitTarget::SearchClose);
        assert_eq!(layout.target_at(71, 0), Some(&HitTarget::SearchClose));
        assert_eq!(layout.target_at(10, 5), Some(&HitTarget::SearchContainer));
        assert_eq!(layout.target_at(10, 30), None);
    }

    #[test]
    fn test_header_zone_includes_mega_menu() {
        let mut layout = FrameLayout::new(Rect::new(0, 0, 120, 1));
        assert!(layout.in_header_zone(5, 0));
        assert!(!layout.in_header_zone(5, 4));
        layout.mega_menu = Some(Rect::new(0, 1, 120, 8));
        assert!(layout.in_header_zone(5, 4));
        assert!(!layout.in_header_zone(5, 9));
    }

    #[test]
    fn test_section_index() {
        let mut layout = FrameLayout::default();
        layout.sections = vec![PageSection::Hero];
        assert_eq!(layout.section_index(Surface::StoreLocator), None);
        layout.sections.push(PageSection::StoreLocator);
        assert_eq!(layout.section_index(Surface::StoreLocator), Some(1));
    }
}
