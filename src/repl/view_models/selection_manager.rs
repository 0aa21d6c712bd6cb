//! # Selection Management
//!
//! Card cursor movement inside the grid and the detail modal slot.

use crate::repl::events::{MovementDirection, ViewEvent};
use crate::repl::geometry::move_card_index;
use crate::repl::models::{DisplayState, Movie};
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Move the card cursor; returns true when it moved
    pub fn move_card_cursor(&mut self, direction: MovementDirection) -> bool {
        let len = self.visible_card_count();
        let columns = self.layout().grid().columns;
        let next = move_card_index(self.card_cursor, len, columns, direction);
        if next == self.card_cursor {
            return false;
        }
        self.card_cursor = next;
        self.emit_view_event(ViewEvent::ResultsRedrawRequired);
        true
    }

    /// Movie under the card cursor, if cards are on screen
    pub fn movie_under_cursor(&self) -> Option<Movie> {
        match self.display_state() {
            DisplayState::Results { response, .. } => {
                response.results.get(self.card_cursor).cloned()
            }
            _ => None,
        }
    }

    /// Open the modal for the card under the cursor
    pub fn select_card_under_cursor(&mut self) -> bool {
        match self.movie_under_cursor() {
            Some(movie) => {
                self.select_movie(movie);
                true
            }
            None => false,
        }
    }

    /// Store `movie` in the selection slot and show the modal
    pub fn select_movie(&mut self, movie: Movie) {
        tracing::debug!("Selected movie {} ({})", movie.id, movie.title);
        self.selection.select(movie);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    /// Close the modal and clear the selection
    pub fn close_modal(&mut self) {
        if self.selection.close().is_some() {
            self.emit_view_event(ViewEvent::FullRedrawRequired);
        }
    }

    pub(super) fn clamp_card_cursor(&mut self) {
        let len = self.visible_card_count();
        self.card_cursor = self.card_cursor.min(len.saturating_sub(1));
    }
}
