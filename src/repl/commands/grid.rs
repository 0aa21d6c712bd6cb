//! # Grid Commands
//!
//! Card navigation and selection while the result grid has focus.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::repl::events::{Focus, MovementDirection};

fn plain(event: &KeyEvent) -> bool {
    !event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn direction_for(code: KeyCode) -> Option<MovementDirection> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(MovementDirection::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(MovementDirection::Right),
        KeyCode::Up | KeyCode::Char('k') => Some(MovementDirection::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MovementDirection::Down),
        _ => None,
    }
}

/// Move the card cursor (arrows, h j k l)
pub struct GridMoveCommand;

impl Command for GridMoveCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.grid_active() && plain(event) && direction_for(event.code).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(match direction_for(event.code) {
            Some(direction) => vec![CommandEvent::CardMoveRequested { direction }],
            None => vec![CommandEvent::NoAction],
        })
    }

    fn name(&self) -> &'static str {
        "GridMove"
    }
}

/// Open the detail modal for the card under the cursor (Enter)
pub struct GridSelectCommand;

impl Command for GridSelectCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.grid_active() && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.card_count == 0 {
            return Ok(vec![CommandEvent::NoAction]);
        }
        Ok(vec![CommandEvent::CardSelectRequested])
    }

    fn name(&self) -> &'static str {
        "GridSelect"
    }
}

/// Jump back to the search bar ('/', Tab)
pub struct GridFocusSearchCommand;

impl Command for GridFocusSearchCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.grid_active() && matches!(event.code, KeyCode::Char('/') | KeyCode::Tab)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusChangeRequested {
            target: Focus::SearchBar,
        }])
    }

    fn name(&self) -> &'static str {
        "GridFocusSearch"
    }
}
