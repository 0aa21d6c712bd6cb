//! # Pagination Commands
//!
//! Page navigation keys for the result grid.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::repl::events::PageTarget;

fn target_for(event: &KeyEvent) -> Option<PageTarget> {
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match event.code {
        KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::PageDown => Some(PageTarget::Next),
        KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::PageUp => Some(PageTarget::Previous),
        KeyCode::Char('g') | KeyCode::Home => Some(PageTarget::First),
        KeyCode::Char('G') | KeyCode::End => Some(PageTarget::Last),
        _ => None,
    }
}

/// Change the result page (n ] PageDown, p [ PageUp, g Home, G End)
pub struct PageChangeCommand;

impl Command for PageChangeCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.grid_active() && target_for(event).is_some()
    }

    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        // Pagination only exists with more than one page on screen
        let has_pages = context.state.max_page.is_some_and(|max| max > 1);
        match target_for(&event) {
            Some(target) if has_pages => Ok(vec![CommandEvent::PageChangeRequested { target }]),
            _ => Ok(vec![CommandEvent::NoAction]),
        }
    }

    fn name(&self) -> &'static str {
        "PageChange"
    }
}
