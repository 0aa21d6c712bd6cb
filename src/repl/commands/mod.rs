//! # Command Implementations
//!
//! Commands turn key events into [`CommandEvent`]s. They never touch the
//! ViewModel directly; the controller applies the events they produce.

use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod app;
pub mod context;
pub mod events;
pub mod grid;
pub mod modal;
pub mod pagination;
pub mod registry;
pub mod search_bar;

pub use context::{CommandContext, ViewModelSnapshot};
pub use events::CommandEvent;
pub use registry::CommandRegistry;

/// A key binding: decides whether it handles a key and what it requests
pub trait Command: Send + Sync {
    /// Whether this command handles `event` in the given context
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events describing the requested change
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Name used in debug logs
    fn name(&self) -> &'static str;
}
