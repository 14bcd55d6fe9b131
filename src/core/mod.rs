//! # Core Navigation Logic
//!
//! This module decides what the navigation surface shows.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NavigationState      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O in update().    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Content   │      │   Theme    │
//!     │  Adapter   │      │  (CMS JSON)│      │  storage   │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `NavigationState`, the one owner of overlay visibility
//! - [`action`]: the `Action` enum and `update()`
//! - [`viewport`]: width → `Desktop | Mobile`
//! - [`theme`]: theme flag and its key/value persistence
//! - [`content`]: CMS content flattening and the presence gate
//! - [`store_locator`]: store listings and their text filter
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod content;
pub mod state;
pub mod store_locator;
pub mod theme;
pub mod viewport;

pub use action::{Action, Effect, update};
pub use state::NavigationState;
