//! # Core Event Types
//!
//! Common types used throughout the event system: focus targets,
//! card movement directions and pagination targets.

/// Which part of the screen receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    SearchBar,
    Grid,
}

/// Direction of a card cursor movement inside the result grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Requested page relative to the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Next,
    Previous,
    First,
    Last,
    /// 1-indexed page number
    Exact(u32),
}

impl PageTarget {
    /// Resolve the target to a page number clamped to `[1, max_page]`
    pub fn resolve(self, current: u32, max_page: u32) -> u32 {
        let max_page = max_page.max(1);
        let page = match self {
            PageTarget::Next => current.saturating_add(1),
            PageTarget::Previous => current.saturating_sub(1),
            PageTarget::First => 1,
            PageTarget::Last => max_page,
            PageTarget::Exact(page) => page,
        };
        page.clamp(1, max_page)
    }
}
