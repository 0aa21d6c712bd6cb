//! # View Events
//!
//! Events related to view updates.
//! These events drive UI refreshing with the smallest redraw that covers the change.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Full screen redraw required (most expensive - terminal resize, modal toggles, etc)
    FullRedrawRequired,

    /// Result area and pagination need redrawing
    ResultsRedrawRequired,

    /// Search input line changed
    SearchBarUpdateRequired,

    /// Toast line changed
    ToastsUpdateRequired,

    /// Status bar needs updating
    StatusBarUpdateRequired,
}

impl ViewEvent {
    /// Whether this event already covers everything another event would redraw
    pub fn covers(self, other: ViewEvent) -> bool {
        self == other || self == ViewEvent::FullRedrawRequired
    }
}
