//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::content::{Image, MenuColumn, MenuLink, NavContent, NavItem};
use crate::core::state::NavigationState;
use crate::core::theme::Theme;
use crate::core::viewport::ViewportMode;

fn column(header: &str, links: &[&str]) -> MenuColumn {
    MenuColumn {
        header: header.to_string(),
        links: links
            .iter()
            .map(|text| MenuLink {
                text: text.to_string(),
                href: "#".to_string(),
            })
            .collect(),
    }
}

/// Logo, two items with submenus, one without, and the two utility items.
pub fn sample_content() -> NavContent {
    let mut logo = NavItem::link("logo", "Apple");
    logo.icon = Some(Image {
        src: "logo.png".to_string(),
        alt: "Apple Logo".to_string(),
    });

    NavContent::new(vec![
        logo,
        NavItem::link("store", "Store").with_columns(vec![
            column("Shop", &["Shop the Latest", "Mac", "iPad"]),
            column("Quick Links", &["Find a Store", "Order Status"]),
        ]),
        NavItem::link("mac", "Mac").with_columns(vec![column("Explore Mac", &["MacBook Air"])]),
        NavItem::link("support", "Support"),
        NavItem::link("search-link", "Search"),
        NavItem::link("store-locator", "Find a Store"),
    ])
}

pub fn desktop_state() -> NavigationState {
    NavigationState::new(Theme::Light, ViewportMode::Desktop)
}

pub fn mobile_state() -> NavigationState {
    NavigationState::new(Theme::Light, ViewportMode::Mobile)
}
