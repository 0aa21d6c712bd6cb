//! # Geometry Types
//!
//! Screen layout shared by the view model (card navigation) and the renderer
//! (drawing). Everything is derived from the terminal size.

use crate::repl::events::MovementDirection;

/// Width of one card including the gap to its right neighbour
pub const CARD_WIDTH: u16 = 28;

/// Height of one card: title line, details line, spacer
pub const CARD_HEIGHT: u16 = 3;

/// Rows above the main area: header, search bar, separator
const TOP_ROWS: u16 = 3;

/// Rows below the main area: pagination, toast, status bar
const BOTTOM_ROWS: u16 = 3;

/// Screen regions for a given terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub width: u16,
    pub height: u16,
}

impl ScreenLayout {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn header_row(&self) -> u16 {
        0
    }

    pub const fn search_row(&self) -> u16 {
        1
    }

    pub const fn separator_row(&self) -> u16 {
        2
    }

    /// First row of the result area
    pub const fn main_top(&self) -> u16 {
        TOP_ROWS
    }

    /// Number of rows available to the result area (at least 1)
    pub fn main_height(&self) -> u16 {
        self.height.saturating_sub(TOP_ROWS + BOTTOM_ROWS).max(1)
    }

    pub fn pagination_row(&self) -> u16 {
        self.main_top() + self.main_height()
    }

    pub fn toast_row(&self) -> u16 {
        self.pagination_row() + 1
    }

    pub fn status_row(&self) -> u16 {
        self.pagination_row() + 2
    }

    /// Card grid metrics for this screen
    pub fn grid(&self) -> GridLayout {
        GridLayout {
            columns: (self.width / CARD_WIDTH).max(1) as usize,
            visible_rows: (self.main_height() / CARD_HEIGHT).max(1) as usize,
        }
    }
}

/// Card grid metrics: columns per row and card rows that fit on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub visible_rows: usize,
}

impl GridLayout {
    /// Row of the card at `index`
    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    /// First card row to draw so that the row holding `cursor` is visible
    pub fn first_visible_row(&self, cursor: usize) -> usize {
        let row = self.row_of(cursor);
        (row + 1).saturating_sub(self.visible_rows)
    }
}

/// Move a card cursor inside a grid of `len` cards laid out in `columns` columns
pub fn move_card_index(
    index: usize,
    len: usize,
    columns: usize,
    direction: MovementDirection,
) -> usize {
    if len == 0 {
        return 0;
    }
    let columns = columns.max(1);
    let index = index.min(len - 1);

    match direction {
        MovementDirection::Left => index.saturating_sub(1),
        MovementDirection::Right => (index + 1).min(len - 1),
        MovementDirection::Up => index.checked_sub(columns).unwrap_or(index),
        MovementDirection::Down => {
            let target = index + columns;
            if target < len {
                target
            } else if index / columns < (len - 1) / columns {
                // Partial last row: land on its last card
                len - 1
            } else {
                index
            }
        }
    }
}
