//! # Command Context
//!
//! Read-only view of the ViewModel handed to commands.

use crate::repl::events::Focus;
use crate::repl::view_models::ViewModel;

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModelSnapshot {
    pub focus: Focus,
    pub modal_open: bool,
    pub search_input: String,
    pub page: u32,
    pub max_page: Option<u32>,
    pub card_count: usize,
    pub terminal_dimensions: (u16, u16),
}

impl ViewModelSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            focus: view_model.focus(),
            modal_open: view_model.selection().is_open(),
            search_input: view_model.search_input().to_string(),
            page: view_model.search_state().page(),
            max_page: view_model.max_page(),
            card_count: view_model.visible_card_count(),
            terminal_dimensions: view_model.terminal_size(),
        }
    }
}

impl Default for ViewModelSnapshot {
    fn default() -> Self {
        Self {
            focus: Focus::SearchBar,
            modal_open: false,
            search_input: String::new(),
            page: 1,
            max_page: None,
            card_count: 0,
            terminal_dimensions: (80, 24),
        }
    }
}

/// Base context available to all commands
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }

    /// Grid keys apply only with grid focus and no modal on top
    pub fn grid_active(&self) -> bool {
        self.state.focus == Focus::Grid && !self.state.modal_open
    }

    /// Search bar keys apply only with search focus and no modal on top
    pub fn search_active(&self) -> bool {
        self.state.focus == Focus::SearchBar && !self.state.modal_open
    }
}
