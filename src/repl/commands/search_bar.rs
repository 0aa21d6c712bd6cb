//! # Search Bar Commands
//!
//! Editing and submitting the search input while it has focus.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::repl::events::Focus;

/// Type a printable character
pub struct SearchInputCommand;

impl Command for SearchInputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.search_active()
            && matches!(event.code, KeyCode::Char(_))
            && !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match event.code {
            KeyCode::Char(ch) => Ok(vec![CommandEvent::SearchInputRequested { ch }]),
            _ => Ok(vec![CommandEvent::NoAction]),
        }
    }

    fn name(&self) -> &'static str {
        "SearchInput"
    }
}

/// Delete the last character (Backspace)
pub struct SearchBackspaceCommand;

impl Command for SearchBackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.search_active() && event.code == KeyCode::Backspace
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::SearchBackspaceRequested])
    }

    fn name(&self) -> &'static str {
        "SearchBackspace"
    }
}

/// Clear the whole input (Ctrl+U)
pub struct SearchClearCommand;

impl Command for SearchClearCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.search_active()
            && event.code == KeyCode::Char('u')
            && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::SearchClearRequested])
    }

    fn name(&self) -> &'static str {
        "SearchClear"
    }
}

/// Submit the query (Enter)
pub struct SearchSubmitCommand;

impl Command for SearchSubmitCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.search_active() && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::SearchSubmitRequested])
    }

    fn name(&self) -> &'static str {
        "SearchSubmit"
    }
}

/// Leave the search bar for the grid (Tab, Down)
pub struct SearchFocusGridCommand;

impl Command for SearchFocusGridCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.search_active() && matches!(event.code, KeyCode::Tab | KeyCode::Down)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusChangeRequested {
            target: Focus::Grid,
        }])
    }

    fn name(&self) -> &'static str {
        "SearchFocusGrid"
    }
}
