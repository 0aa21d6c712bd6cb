//! # Modal Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};

/// Close the detail modal (Esc, q, Enter, Backspace)
pub struct ModalCloseCommand;

impl Command for ModalCloseCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.modal_open
            && matches!(
                event.code,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Backspace
            )
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ModalCloseRequested])
    }

    fn name(&self) -> &'static str {
        "ModalClose"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::commands::ViewModelSnapshot;
    use crossterm::event::KeyModifiers;

    #[test]
    fn close_keys_should_only_apply_with_open_modal() {
        let open = CommandContext::new(ViewModelSnapshot {
            modal_open: true,
            ..ViewModelSnapshot::default()
        });
        let closed = CommandContext::new(ViewModelSnapshot::default());
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);

        assert!(ModalCloseCommand.is_relevant(&open, &esc));
        assert!(!ModalCloseCommand.is_relevant(&closed, &esc));
    }
}
