//! # TUI Components
//!
//! Every surface of the navigation header and the page below it.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `NavBar`: the header row (and hit regions for its items)
//! - `MegaMenu`: desktop disclosure panel for the engaged item
//! - `MobilePanel`: the drawer and its sub-panel
//! - `HeroSection`: product hero in the page body
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local text-field state and emit events:
//! - `SearchModalState` / `SearchModal`: overlay with focus-on-open
//! - `StoreLocatorState` / `StoreLocatorPanel`: store list with a filter
//!
//! None of them hold navigation state. Whether a surface is open is read
//! from `NavigationState`; user intents go back to the shell, which turns
//! them into `core::Action` values.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── nav_bar.rs        (header row, slot placement)
//! ├── mega_menu.rs      (desktop panel)
//! ├── mobile_panel.rs   (drawer + sub-panel)
//! ├── search_modal.rs   (search overlay)
//! ├── store_locator.rs  (store list section)
//! └── hero_banner.rs    (hero section)
//! ```

pub mod hero_banner;
pub mod mega_menu;
pub mod mobile_panel;
pub mod nav_bar;
pub mod search_modal;
pub mod store_locator;

pub use hero_banner::{HERO_HEIGHT, HeroSection};
pub use mega_menu::MegaMenu;
pub use mobile_panel::MobilePanel;
pub use nav_bar::NavBar;
pub use search_modal::{SearchEvent, SearchModal, SearchModalState};
pub use store_locator::{
    STORE_LOCATOR_HEIGHT, StoreLocatorEvent, StoreLocatorPanel, StoreLocatorState,
};
