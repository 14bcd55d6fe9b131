//! # Navigation Content
//!
//! Content arrives in the CMS shape (`{ "fields": { "navItems": [...] } }`,
//! every leaf wrapped as `{ "value": ... }`). This module flattens it into
//! plain `NavItem` / `MenuColumn` / `MenuLink` values once per load. Nothing
//! here is ever mutated by the state machine.
//!
//! Missing or empty leaves are treated as absent: an item without `columns`
//! has no submenu, an icon without `src` is no icon, a link without `text`
//! renders as its `href`. The only hard failures are I/O and broken JSON.
//!
//! The presence gate (`gate`) sits in front of all of this. A document with
//! no `fields` at all yields `Presence::Placeholder` and the navigation core
//! never runs.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::store_locator::{Store, default_stores};

/// Bundled fixture used when no content file is configured.
pub const DEMO_CONTENT: &str = include_str!("../../assets/navbar.json");

// ============================================================================
// Domain Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuColumn {
    pub header: String,
    pub links: Vec<MenuLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub icon: Option<Image>,
    pub columns: Vec<MenuColumn>,
}

impl NavItem {
    /// Convenience constructor for items without icon or columns.
    pub fn link(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: None,
            columns: Vec::new(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<MenuColumn>) -> Self {
        self.columns = columns;
        self
    }

    pub fn has_columns(&self) -> bool {
        !self.columns.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroBanner {
    pub sub_title: String,
    pub main_title: String,
    pub image: Image,
}

impl Default for HeroBanner {
    fn default() -> Self {
        Self {
            sub_title: "iPhone 17".to_string(),
            main_title: "PRO".to_string(),
            image: Image {
                src: "/apple-17pro.png".to_string(),
                alt: "iPhone 17 Pro back camera view in orange finish".to_string(),
            },
        }
    }
}

/// Everything the navigation surface renders from, for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavContent {
    pub items: Vec<NavItem>,
    pub stores: Vec<Store>,
    pub hero: HeroBanner,
}

impl Default for NavContent {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl NavContent {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            stores: default_stores(),
            hero: HeroBanner::default(),
        }
    }

    /// Total lookup: unknown ids are simply `None`.
    pub fn find(&self, id: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn has_submenu(&self, id: &str) -> bool {
        self.find(id).is_some_and(NavItem::has_columns)
    }
}

/// Outcome of the presence gate.
#[derive(Debug, Clone, PartialEq)]
pub enum Presence {
    Rendered(NavContent),
    /// The datasource is not configured; show a placeholder instead.
    Placeholder,
}

// ============================================================================
// CMS Wire Shape
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub fields: Option<NavFields>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavFields {
    #[serde(default)]
    pub nav_items: Option<Vec<RawNavItem>>,
    #[serde(default)]
    pub stores: Option<Vec<Store>>,
    #[serde(default)]
    pub hero: Option<RawHeroFields>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Field<T> {
    #[serde(default)]
    pub value: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLink {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawNavItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub fields: Option<RawNavItemFields>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawNavItemFields {
    #[serde(default)]
    pub label: Option<Field<String>>,
    #[serde(default)]
    pub icon: Option<Field<RawImage>>,
    #[serde(default)]
    pub columns: Option<Vec<RawColumn>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawColumn {
    #[serde(default)]
    pub fields: Option<RawColumnFields>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawColumnFields {
    #[serde(default)]
    pub column_header: Option<Field<String>>,
    #[serde(default)]
    pub links: Option<Vec<RawLinkItem>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLinkItem {
    #[serde(default)]
    pub fields: Option<RawLinkFields>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLinkFields {
    #[serde(default)]
    pub link: Option<Field<RawLink>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHeroFields {
    #[serde(default)]
    pub sub_title: Option<Field<String>>,
    #[serde(default)]
    pub main_title: Option<Field<String>>,
    #[serde(default)]
    pub image: Option<Field<RawImage>>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ContentError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(e) => write!(f, "content I/O error: {e}"),
            ContentError::Parse(e) => write!(f, "content parse error: {e}"),
        }
    }
}

impl std::error::Error for ContentError {}

// ============================================================================
// Flattening
// ============================================================================

/// `Some` only for non-blank strings.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn field_text(field: Option<Field<String>>) -> Option<String> {
    present(field.and_then(|f| f.value))
}

fn flatten_image(field: Option<Field<RawImage>>) -> Option<Image> {
    let raw = field.and_then(|f| f.value)?;
    let src = present(raw.src)?;
    Some(Image {
        src,
        alt: raw.alt.unwrap_or_default(),
    })
}

fn flatten_link(item: RawLinkItem) -> Option<MenuLink> {
    let raw = item.fields?.link?.value?;
    let href = present(raw.href);
    let text = present(raw.text);
    match (text, href) {
        (Some(text), href) => Some(MenuLink {
            text,
            href: href.unwrap_or_else(|| "#".to_string()),
        }),
        (None, Some(href)) => Some(MenuLink {
            text: href.clone(),
            href,
        }),
        (None, None) => None,
    }
}

fn flatten_column(column: RawColumn) -> MenuColumn {
    let fields = column.fields.unwrap_or_default();
    MenuColumn {
        header: field_text(fields.column_header).unwrap_or_default(),
        links: fields
            .links
            .unwrap_or_default()
            .into_iter()
            .filter_map(flatten_link)
            .collect(),
    }
}

fn flatten_item(raw: RawNavItem) -> Option<NavItem> {
    let Some(id) = present(raw.id) else {
        warn!("Skipping navigation item without an id");
        return None;
    };
    let fields = raw.fields.unwrap_or_default();
    let label = field_text(fields.label).unwrap_or_default();
    Some(NavItem {
        id,
        label,
        icon: flatten_image(fields.icon),
        columns: fields
            .columns
            .unwrap_or_default()
            .into_iter()
            .map(flatten_column)
            .collect(),
    })
}

fn flatten_hero(raw: Option<RawHeroFields>) -> HeroBanner {
    let fallback = HeroBanner::default();
    let Some(raw) = raw else {
        return fallback;
    };
    HeroBanner {
        sub_title: field_text(raw.sub_title).unwrap_or(fallback.sub_title),
        main_title: field_text(raw.main_title).unwrap_or(fallback.main_title),
        image: flatten_image(raw.image).unwrap_or(fallback.image),
    }
}

/// Presence gate: decide between real content and the placeholder.
pub fn gate(document: ContentDocument) -> Presence {
    let Some(fields) = document.fields else {
        info!("Navigation datasource missing, rendering placeholder");
        return Presence::Placeholder;
    };

    let items: Vec<NavItem> = fields
        .nav_items
        .unwrap_or_default()
        .into_iter()
        .filter_map(flatten_item)
        .collect();
    let stores = fields.stores.unwrap_or_else(default_stores);
    debug!("Content: {} items, {} stores", items.len(), stores.len());

    Presence::Rendered(NavContent {
        items,
        stores,
        hero: flatten_hero(fields.hero),
    })
}

pub fn parse_content(json: &str) -> Result<Presence, ContentError> {
    let document: ContentDocument = serde_json::from_str(json).map_err(ContentError::Parse)?;
    Ok(gate(document))
}

pub fn load_content(path: &Path) -> Result<Presence, ContentError> {
    let json = fs::read_to_string(path).map_err(ContentError::Io)?;
    let presence = parse_content(&json)?;
    info!("Loaded content from {}", path.display());
    Ok(presence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(json: &str) -> NavContent {
        match parse_content(json).unwrap() {
            Presence::Rendered(content) => content,
            Presence::Placeholder => panic!("expected rendered content"),
        }
    }

    #[test]
    fn test_missing_fields_is_placeholder() {
        assert_eq!(parse_content("{}").unwrap(), Presence::Placeholder);
        assert_eq!(
            parse_content(r#"{"fields": null}"#).unwrap(),
            Presence::Placeholder
        );
    }

    #[test]
    fn test_empty_nav_items_renders_empty_bar() {
        let content = rendered(r#"{"fields": {}}"#);
        assert!(content.items.is_empty());
        assert!(!content.stores.is_empty());
    }

    #[test]
    fn test_cms_shape_flattens() {
        let content = rendered(
            r##"{"fields": {"navItems": [
                {"id": "apple-logo", "fields": {
                    "label": {"value": "Apple"},
                    "icon": {"value": {"src": "logo.png", "alt": "Apple Logo"}},
                    "columns": []
                }},
                {"id": "store-menu", "fields": {
                    "label": {"value": "Store"},
                    "icon": {"value": {}},
                    "columns": [
                        {"fields": {"columnHeader": {"value": "Shop"}, "links": [
                            {"fields": {"link": {"value": {"href": "#", "text": "Mac"}}}}
                        ]}},
                        {"fields": {"columnHeader": {"value": "Quick Links"}, "links": []}}
                    ]
                }}
            ]}}"##,
        );

        assert_eq!(content.items.len(), 2);
        let logo = &content.items[0];
        assert_eq!(logo.icon.as_ref().map(|i| i.alt.as_str()), Some("Apple Logo"));
        assert!(!logo.has_columns());

        let store = content.find("store-menu").unwrap();
        assert!(store.icon.is_none());
        assert_eq!(store.columns.len(), 2);
        assert_eq!(store.columns[0].header, "Shop");
        assert_eq!(store.columns[0].links[0].text, "Mac");
        assert!(content.has_submenu("store-menu"));
    }

    #[test]
    fn test_falsy_leaves_are_absent() {
        let content = rendered(
            r#"{"fields": {"navItems": [
                {"fields": {"label": {"value": "No id"}}},
                {"id": "", "fields": {}},
                {"id": "bare"},
                {"id": "links", "fields": {"columns": [
                    {"fields": {"links": [
                        {"fields": {"link": {"value": {"href": "/only-href"}}}},
                        {"fields": {"link": {"value": {}}}},
                        {"fields": {}}
                    ]}},
                    {}
                ]}}
            ]}}"#,
        );

        assert_eq!(content.items.len(), 2);
        let bare = content.find("bare").unwrap();
        assert_eq!(bare.label, "");
        assert!(!bare.has_columns());

        let links = content.find("links").unwrap();
        assert_eq!(links.columns.len(), 2);
        assert_eq!(
            links.columns[0].links,
            vec![MenuLink {
                text: "/only-href".to_string(),
                href: "/only-href".to_string()
            }]
        );
        assert_eq!(links.columns[1].header, "");
    }

    #[test]
    fn test_hero_falls_back_per_field() {
        let content = rendered(
            r#"{"fields": {"hero": {"mainTitle": {"value": "MAX"}}}}"#,
        );
        assert_eq!(content.hero.main_title, "MAX");
        assert_eq!(content.hero.sub_title, "iPhone 17");
        assert_eq!(content.hero.image.src, "/apple-17pro.png");
    }

    #[test]
    fn test_unknown_lookup_is_none() {
        let content = NavContent::new(vec![NavItem::link("a", "A")]);
        assert!(content.find("missing").is_none());
        assert!(!content.has_submenu("missing"));
        assert!(!content.has_submenu("a"));
    }

    #[test]
    fn test_demo_content_has_utility_items() {
        let content = rendered(DEMO_CONTENT);
        assert!(content.find("search-link").is_some());
        assert!(content.find("store-locator").is_some());
        assert!(content.has_submenu("store-menu"));
        assert!(!content.has_submenu("support-link"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            parse_content("{not json"),
            Err(ContentError::Parse(_))
        ));
    }
}
