//! # Selection Model
//!
//! Single slot for the movie shown in the detail modal.

use crate::repl::models::Movie;

#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    selected: Option<Movie>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the movie and open the modal, replacing any previous selection
    pub fn select(&mut self, movie: Movie) {
        self.selected = Some(movie);
    }

    /// Clear the selection; returns the movie that was shown
    pub fn close(&mut self) -> Option<Movie> {
        self.selected.take()
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
