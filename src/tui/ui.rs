use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::content::NavContent;
use crate::core::state::NavigationState;
use crate::tui::component::Component;
use crate::tui::components::nav_bar::drawer_items;
use crate::tui::components::{
    HERO_HEIGHT, HeroSection, MegaMenu, MobilePanel, NavBar, STORE_LOCATOR_HEIGHT, SearchModal,
    StoreLocatorPanel,
};
use crate::tui::layout::{FrameLayout, PageSection};
use crate::tui::palette::Palette;
use crate::tui::routing::UtilityIds;
use crate::tui::shell::ViewState;

/// Sections of the page body, in page order.
pub fn page_sections(nav: &NavigationState) -> Vec<PageSection> {
    let mut sections = vec![PageSection::Hero];
    if nav.store_locator_open {
        sections.push(PageSection::StoreLocator);
    }
    sections
}

fn section_height(section: PageSection) -> u16 {
    match section {
        PageSection::Hero => HERO_HEIGHT,
        PageSection::StoreLocator => STORE_LOCATOR_HEIGHT,
    }
}

/// Draw one frame and return where everything landed.
pub fn draw_ui(
    frame: &mut Frame,
    nav: &NavigationState,
    content: Option<&NavContent>,
    view: &ViewState,
    ids: &UtilityIds,
) -> FrameLayout {
    use Constraint::{Length, Min};
    let [header_area, body_area, status_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let palette = Palette::for_theme(nav.theme);
    frame.render_widget(Block::new().style(palette.base()), frame.area());

    let mut layout = FrameLayout::new(header_area);

    let Some(content) = content else {
        draw_placeholder(frame, body_area, status_area, palette);
        return layout;
    };

    NavBar {
        items: &content.items,
        state: nav,
        ids,
        palette,
        layout: &mut layout,
    }
    .render(frame, header_area);

    if nav.viewport_mode().is_desktop() || !nav.mobile_menu_open {
        draw_page(frame, body_area, nav, content, view, palette, &mut layout);
    } else {
        let rows = drawer_items(&content.items, ids);
        let active = nav.active_tab_id.as_deref().and_then(|id| content.find(id));
        MobilePanel {
            rows,
            active,
            palette,
            layout: &mut layout,
        }
        .render(frame, body_area);
        layout.drawer = Some(body_area);
    }

    if nav.dims_page(content) {
        frame
            .buffer_mut()
            .set_style(body_area, Style::default().add_modifier(Modifier::DIM));
    }

    if nav.viewport_mode().is_desktop() && nav.mega_menu_open {
        let item = nav
            .active_tab_id
            .as_deref()
            .and_then(|id| content.find(id))
            .filter(|item| item.has_columns());
        if let Some(item) = item {
            let mut menu = MegaMenu { item, palette };
            let height = menu.height().min(body_area.height);
            let area = Rect::new(body_area.x, body_area.y, body_area.width, height);
            menu.render(frame, area);
            layout.mega_menu = Some(area);
        }
    }

    draw_status(frame, status_area, nav, palette);

    if nav.search_open {
        SearchModal {
            state: &view.search,
            palette,
            layout: &mut layout,
        }
        .render(frame, frame.area());
    }

    layout
}

/// Page body, scrolled so that `view.first_section` is at the top.
fn draw_page(
    frame: &mut Frame,
    area: Rect,
    nav: &NavigationState,
    content: &NavContent,
    view: &ViewState,
    palette: Palette,
    layout: &mut FrameLayout,
) {
    layout.sections = page_sections(nav);
    let bottom = area.bottom();
    let mut y = area.y;

    for section in layout.sections.clone().into_iter().skip(view.first_section) {
        if y >= bottom {
            break;
        }
        let height = section_height(section).min(bottom - y);
        let rect = Rect::new(area.x, y, area.width, height);
        match section {
            PageSection::Hero => HeroSection {
                hero: &content.hero,
                palette,
            }
            .render(frame, rect),
            PageSection::StoreLocator => StoreLocatorPanel {
                state: &view.store_locator,
                stores: &content.stores,
                palette,
                layout: &mut *layout,
            }
            .render(frame, rect),
        }
        y += height;
    }
}

fn draw_status(frame: &mut Frame, area: Rect, nav: &NavigationState, palette: Palette) {
    let hints = if nav.viewport_mode().is_desktop() {
        "/ search  s stores  t theme  q quit"
    } else {
        "/ search  s stores  t theme  m menu  q quit"
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} · {} ", nav.viewport_mode().label(), nav.theme),
            palette.panel().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {hints}"), palette.muted()),
    ]);
    frame.render_widget(Paragraph::new(line).style(palette.panel()), area);
}

fn draw_placeholder(frame: &mut Frame, body: Rect, status: Rect, palette: Palette) {
    if body.height > 0 {
        let notice = Paragraph::new("Navigation component is not configured")
            .style(palette.muted())
            .alignment(Alignment::Center);
        frame.render_widget(notice, Rect::new(body.x, body.y + body.height / 2, body.width, 1));
    }
    frame.render_widget(
        Paragraph::new(Span::styled(" q quit", palette.muted())).style(palette.panel()),
        status,
    );
}
