//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the header and
//! page, and translates terminal events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. Terminal
//! columns stand in for CSS pixels (`pixels_per_column`), so resizing the
//! terminal across the breakpoint flips between the desktop and mobile
//! layouts.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms and only redraws after
//! an event. A frame that resolves a pending scroll-into-view is followed
//! immediately by another draw.

pub mod component;
pub mod components;
pub mod event;
pub mod layout;
pub mod palette;
pub mod routing;
pub mod shell;
pub mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::config::ResolvedConfig;
use crate::core::content::Presence;
use crate::core::theme::{KeyValueStore, ThemeStore, open_storage};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::shell::{Flow, Shell};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse motion reports drive hover on desktop widths
        execute!(stdout(), EnableMouseCapture, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (mouse capture, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig, presence: Presence) -> std::io::Result<()> {
    let theme_store = ThemeStore::load(open_storage(config.storage_path.as_deref()));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = terminal.size().and_then(|size| {
        let mut shell = Shell::new(&config, presence, theme_store, size.width);
        event_loop(&mut terminal, &mut shell)
    });

    ratatui::restore();
    result
}

fn event_loop<S: KeyValueStore>(
    terminal: &mut DefaultTerminal,
    shell: &mut Shell<S>,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| shell.draw(f))?;
            // A resolved scroll request needs the next frame right away
            needs_redraw = shell.commit();
            if needs_redraw {
                continue;
            }
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if shell.handle_event(event) == Flow::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}
