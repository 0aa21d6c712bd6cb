//! # Quit Command
//!
//! Ctrl+C leaves from anywhere, modal included. A bare `q` leaves only from
//! the grid, since the search bar treats it as text and the modal as close.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

pub struct QuitCommand;

impl QuitCommand {
    fn is_interrupt(event: &KeyEvent) -> bool {
        event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn is_grid_quit(context: &CommandContext, event: &KeyEvent) -> bool {
        context.grid_active()
            && event.code == KeyCode::Char('q')
            && !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }
}

impl Command for QuitCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        Self::is_interrupt(event) || Self::is_grid_quit(context, event)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        tracing::info!("Quit requested with {:?}", event.code);
        Ok(vec![CommandEvent::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "Quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::commands::ViewModelSnapshot;
    use crate::repl::events::Focus;

    fn context(focus: Focus, modal_open: bool) -> CommandContext {
        CommandContext::new(ViewModelSnapshot {
            focus,
            modal_open,
            ..ViewModelSnapshot::default()
        })
    }

    #[test]
    fn ctrl_c_should_quit_even_over_the_modal() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(QuitCommand.is_relevant(&context(Focus::SearchBar, false), &ctrl_c));
        assert!(QuitCommand.is_relevant(&context(Focus::Grid, true), &ctrl_c));
        assert_eq!(
            QuitCommand
                .execute(ctrl_c, &context(Focus::Grid, true))
                .unwrap(),
            vec![CommandEvent::QuitRequested]
        );
    }

    #[test]
    fn q_should_quit_only_from_the_grid() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(QuitCommand.is_relevant(&context(Focus::Grid, false), &q));
        assert!(!QuitCommand.is_relevant(&context(Focus::SearchBar, false), &q));
        assert!(!QuitCommand.is_relevant(&context(Focus::Grid, true), &q));
    }

    #[test]
    fn plain_c_and_alt_q_should_not_quit() {
        let grid = context(Focus::Grid, false);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        let alt_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);
        assert!(!QuitCommand.is_relevant(&grid, &plain_c));
        assert!(!QuitCommand.is_relevant(&grid, &alt_q));
    }
}
