use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields), usually borrowed from
///   `NavigationState` and `NavContent`.
/// - They never own navigation state; user intents go back out as actions.
/// - They render to a `Frame` within a given `Rect`.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so a component can record the hit regions it laid
    /// out during the render pass.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
