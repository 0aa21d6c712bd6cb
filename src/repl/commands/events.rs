//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.
//! This maintains proper separation of concerns - commands suggest, controller decides.

use crate::repl::events::{Focus, MovementDirection, PageTarget};

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq)]
pub enum CommandEvent {
    /// Type a character into the search bar
    SearchInputRequested { ch: char },

    /// Delete the last search bar character
    SearchBackspaceRequested,

    /// Clear the search bar
    SearchClearRequested,

    /// Submit the search bar content
    SearchSubmitRequested,

    /// Move keyboard focus
    FocusChangeRequested { target: Focus },

    /// Move the card cursor
    CardMoveRequested { direction: MovementDirection },

    /// Open the modal for the card under the cursor
    CardSelectRequested,

    /// Change the result page
    PageChangeRequested { target: PageTarget },

    /// Close the detail modal
    ModalCloseRequested,

    /// Request application quit
    QuitRequested,

    /// No action needed
    NoAction,
}
