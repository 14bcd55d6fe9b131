//! # Viewport Classification
//!
//! One threshold, one function. Every handler that cares about the viewport
//! reads `NavigationState::viewport_mode`, which is only ever written from
//! `classify()` via `Action::ViewportChanged`.
//!
//! ```text
//!   width ≤ 1024   →  Mobile   (tap model, slide-in drawer)
//!   width > 1024   →  Desktop  (hover model, mega menu)
//! ```

/// Widths strictly greater than this are desktop.
pub const DESKTOP_BREAKPOINT: u32 = 1024;

/// Binary classification of available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMode {
    Desktop,
    #[default]
    Mobile,
}

impl ViewportMode {
    pub fn is_desktop(self) -> bool {
        self == ViewportMode::Desktop
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewportMode::Desktop => "desktop",
            ViewportMode::Mobile => "mobile",
        }
    }
}

/// Classify a width in logical pixels. Exactly 1024 is `Mobile`.
pub fn classify(width: u32) -> ViewportMode {
    if width > DESKTOP_BREAKPOINT {
        ViewportMode::Desktop
    } else {
        ViewportMode::Mobile
    }
}

/// Convert a terminal column count to logical pixels.
pub fn columns_to_pixels(columns: u16, pixels_per_column: u32) -> u32 {
    u32::from(columns).saturating_mul(pixels_per_column)
}
