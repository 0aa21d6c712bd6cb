//! # Command Registry
//!
//! Holds every Command and routes a key event to the first one that reports
//! itself relevant for the current context.

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::{
    app::QuitCommand,
    grid::{GridFocusSearchCommand, GridMoveCommand, GridSelectCommand},
    modal::ModalCloseCommand,
    pagination::PageChangeCommand,
    search_bar::{
        SearchBackspaceCommand, SearchClearCommand, SearchFocusGridCommand, SearchInputCommand,
        SearchSubmitCommand,
    },
    Command, CommandContext, CommandEvent,
};

pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    /// Register all default commands
    ///
    /// Order matters: the first relevant command wins.
    fn register_default_commands(&mut self) {
        self.add_command(Box::new(QuitCommand));
        self.add_command(Box::new(ModalCloseCommand));

        self.add_command(Box::new(SearchSubmitCommand));
        self.add_command(Box::new(SearchBackspaceCommand));
        self.add_command(Box::new(SearchClearCommand));
        self.add_command(Box::new(SearchFocusGridCommand));
        self.add_command(Box::new(SearchInputCommand));

        self.add_command(Box::new(GridMoveCommand));
        self.add_command(Box::new(GridSelectCommand));
        self.add_command(Box::new(PageChangeCommand));
        self.add_command(Box::new(GridFocusSearchCommand));
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Process a key event and return the events of the first matching Command
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Found relevant command: {} for key {:?}", command.name(), event);
                return command.execute(event, context);
            }
        }

        tracing::debug!("No relevant command found for key {:?}", event);
        Ok(Vec::new())
    }

    /// Get count of registered commands
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
