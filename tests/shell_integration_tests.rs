use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use storefront_nav::core::config::{NavConfig, resolve};
use storefront_nav::core::content::{DEMO_CONTENT, Presence, parse_content};
use storefront_nav::core::theme::{FileStore, KeyValueStore, MemoryStore, Theme, ThemeStore};
use storefront_nav::core::viewport::ViewportMode;
use storefront_nav::tui::event::TuiEvent;
use storefront_nav::tui::layout::HitTarget;
use storefront_nav::tui::shell::{Flow, Shell};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn demo_presence() -> Presence {
    parse_content(DEMO_CONTENT).expect("bundled content parses")
}

fn shell_at<S: KeyValueStore>(width: u32, store: S) -> Shell<S> {
    let config = resolve(&NavConfig::default(), None, Some(width));
    Shell::new(&config, demo_presence(), ThemeStore::load(store), 160)
}

fn draw<S: KeyValueStore>(shell: &mut Shell<S>, terminal: &mut Terminal<TestBackend>) {
    terminal.draw(|f| shell.draw(f)).unwrap();
    while shell.commit() {
        terminal.draw(|f| shell.draw(f)).unwrap();
    }
}

fn region<S: KeyValueStore>(shell: &Shell<S>, target: &HitTarget) -> Rect {
    shell
        .layout()
        .regions()
        .iter()
        .find(|r| &r.target == target)
        .map(|r| r.rect)
        .unwrap_or_else(|| panic!("{target:?} not laid out"))
}

fn nav_item(id: &str) -> HitTarget {
    HitTarget::NavItem(id.to_string())
}

// ============================================================================
// Desktop
// ============================================================================

#[test]
fn test_hover_opens_and_leaving_closes_mega_menu() {
    let mut shell = shell_at(1440, MemoryStore::new());
    let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
    draw(&mut shell, &mut terminal);

    let store = region(&shell, &nav_item("store-menu"));
    shell.handle_event(TuiEvent::MouseMove(store.x, store.y));
    assert_eq!(shell.nav().active_tab_id.as_deref(), Some("store-menu"));
    assert!(shell.nav().mega_menu_open);

    draw(&mut shell, &mut terminal);
    let menu = shell.layout().mega_menu.expect("mega menu laid out");

    // Moving into the panel keeps it open
    shell.handle_event(TuiEvent::MouseMove(menu.x + 4, menu.y + 2));
    assert!(shell.nav().mega_menu_open);

    shell.handle_event(TuiEvent::MouseMove(menu.x + 4, menu.bottom() + 2));
    assert!(!shell.nav().mega_menu_open);
    assert_eq!(shell.nav().active_tab_id, None);
}

#[test]
fn test_search_opens_from_header_and_closes_from_backdrop() {
    let mut shell = shell_at(1440, MemoryStore::new());
    let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
    draw(&mut shell, &mut terminal);

    let search = region(&shell, &nav_item("search-link"));
    shell.handle_event(TuiEvent::MouseClick(search.x, search.y));
    assert!(shell.nav().search_open);

    draw(&mut shell, &mut terminal);
    assert!(shell.view().search.focused);

    // Inside the modal: stays open
    let container = region(&shell, &HitTarget::SearchContainer);
    shell.handle_event(TuiEvent::MouseClick(container.x + 2, container.y + 3));
    assert!(shell.nav().search_open);

    // Corner of the screen is backdrop
    shell.handle_event(TuiEvent::MouseClick(0, 39));
    assert!(!shell.nav().search_open);
}

#[test]
fn test_store_locator_filter_and_scroll() {
    let mut shell = shell_at(1440, MemoryStore::new());
    let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
    draw(&mut shell, &mut terminal);

    let locator = region(&shell, &nav_item("store-locator"));
    shell.handle_event(TuiEvent::MouseClick(locator.x, locator.y));
    assert!(shell.nav().store_locator_open);

    draw(&mut shell, &mut terminal);
    assert_eq!(shell.view().first_section, 1);

    let input = region(&shell, &HitTarget::StoreLocatorInput);
    shell.handle_event(TuiEvent::MouseClick(input.x, input.y));
    assert!(shell.view().store_locator.focused);
    for c in "denver".chars() {
        shell.handle_event(TuiEvent::InputChar(c));
    }
    // Typing went to the filter, not to shortcuts
    assert!(shell.nav().store_locator_open);
    assert_eq!(shell.view().store_locator.query, "denver");

    shell.handle_event(TuiEvent::Escape); // blur
    shell.handle_event(TuiEvent::Escape); // close
    assert!(!shell.nav().store_locator_open);
    draw(&mut shell, &mut terminal);
    assert!(shell.view().store_locator.query.is_empty());
    assert_eq!(shell.view().first_section, 0);
}

// ============================================================================
// Mobile
// ============================================================================

#[test]
fn test_drawer_subpanel_round_trip() {
    let mut shell = shell_at(800, MemoryStore::new());
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    draw(&mut shell, &mut terminal);
    assert_eq!(shell.nav().viewport_mode(), ViewportMode::Mobile);

    let hamburger = region(&shell, &HitTarget::Hamburger);
    shell.handle_event(TuiEvent::MouseClick(hamburger.x, hamburger.y));
    assert!(shell.nav().mobile_menu_open);
    draw(&mut shell, &mut terminal);

    let row = region(&shell, &HitTarget::DrawerItem("mac-menu".to_string()));
    shell.handle_event(TuiEvent::MouseClick(row.x, row.y));
    assert_eq!(shell.nav().active_tab_id.as_deref(), Some("mac-menu"));
    draw(&mut shell, &mut terminal);

    let back = region(&shell, &HitTarget::DrawerBack);
    shell.handle_event(TuiEvent::MouseClick(back.x, back.y));
    assert_eq!(shell.nav().active_tab_id, None);
    assert!(shell.nav().mobile_menu_open);

    // Escape closes the drawer
    shell.handle_event(TuiEvent::Escape);
    assert!(!shell.nav().mobile_menu_open);
}

#[test]
fn test_mouse_motion_does_nothing_on_mobile() {
    let mut shell = shell_at(800, MemoryStore::new());
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    draw(&mut shell, &mut terminal);
    for col in 0..80 {
        shell.handle_event(TuiEvent::MouseMove(col, 0));
    }
    assert_eq!(shell.nav().active_tab_id, None);
    assert!(!shell.nav().mega_menu_open);
}

// ============================================================================
// Theme persistence
// ============================================================================

#[test]
fn test_theme_survives_restart() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("storage.json");

    let mut shell = shell_at(1440, FileStore::open(&path).unwrap());
    assert_eq!(shell.nav().theme, Theme::Light);
    shell.handle_event(TuiEvent::InputChar('t'));
    assert_eq!(shell.handle_event(TuiEvent::InputChar('q')), Flow::Quit);

    let shell = shell_at(1440, FileStore::open(&path).unwrap());
    assert_eq!(shell.nav().theme, Theme::Dark);
}
