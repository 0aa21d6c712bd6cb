//! # Search Management
//!
//! Query and pagination control: submissions, page changes, and applying
//! completed fetches to the results model.

use crate::repl::events::{Focus, PageTarget, ViewEvent};
use crate::repl::models::{max_requestable_page, MAX_API_PAGE};
use crate::repl::services::{SearchMessage, SearchRequest};
use crate::repl::view_models::core::ViewModel;

/// Shown when a blank query is submitted
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter your search query.";

impl ViewModel {
    // === Search input ===

    pub fn insert_search_char(&mut self, ch: char) {
        self.search_bar.insert_char(ch);
        self.emit_view_event(ViewEvent::SearchBarUpdateRequired);
    }

    pub fn backspace_search_input(&mut self) {
        if self.search_bar.backspace() {
            self.emit_view_event(ViewEvent::SearchBarUpdateRequired);
        }
    }

    pub fn clear_search_input(&mut self) {
        self.search_bar.clear();
        self.emit_view_event(ViewEvent::SearchBarUpdateRequired);
    }

    /// Submit whatever is typed in the search bar
    pub fn submit_search_input(&mut self) {
        let input = self.search_bar.input().to_string();
        self.submit_search(&input);
    }

    /// Submit a query: resets the page to 1 and requests the first page
    ///
    /// Blank queries issue no request and leave the state untouched.
    pub fn submit_search(&mut self, text: &str) {
        self.submit_search_at(text, 1);
    }

    /// Submit a query starting on `page` (capped at the last page the API serves)
    pub fn submit_search_at(&mut self, text: &str, page: u32) {
        let query = text.trim();
        if query.is_empty() {
            tracing::debug!("Ignoring blank search submission");
            self.notify_info(EMPTY_QUERY_MESSAGE);
            return;
        }

        tracing::info!("Search submitted: {:?} (page {})", query, page);
        self.search_bar.set_input(query);
        self.search_state.submit(query);
        self.search_state.set_page(page.min(MAX_API_PAGE));
        self.focus = Focus::Grid;
        self.request_current_page();
        self.emit_view_event(ViewEvent::SearchBarUpdateRequired);
    }

    // === Pagination ===

    /// Highest page the user can move to, known only once the current query
    /// has a response on screen
    pub fn max_page(&self) -> Option<u32> {
        self.results
            .data_for_query(self.search_state.query())
            .map(|response| max_requestable_page(response.total_pages))
    }

    /// Change the page without touching the query
    ///
    /// Ignored until the current query has results on screen (placeholder
    /// data from an earlier query does not count), or when the page would
    /// not change.
    pub fn change_page(&mut self, target: PageTarget) {
        if self.search_state.key().is_none() {
            return;
        }
        let Some(max_page) = self.max_page() else {
            tracing::debug!("Page change ignored: no results on screen");
            return;
        };

        let current = self.search_state.page();
        let page = target.resolve(current, max_page);
        if page == current {
            return;
        }

        tracing::debug!("Page change {} -> {}", current, page);
        self.search_state.set_page(page);
        self.request_current_page();
    }

    /// Ask the search service for the current key and reflect the outcome
    fn request_current_page(&mut self) {
        self.card_cursor = 0;

        let Some(key) = self.search_state.key() else {
            self.results.clear();
            self.emit_view_event(ViewEvent::ResultsRedrawRequired);
            return;
        };

        match self.search_service.request(&key) {
            SearchRequest::Cached {
                response,
                revalidating,
            } => {
                let already_shown = self.results.is_showing(&key);
                let empty = response.is_empty();
                self.results.show(key, response, revalidating);
                if empty && !already_shown {
                    self.notify_no_results();
                }
            }
            SearchRequest::Pending => self.results.start_fetch(),
        }

        self.emit_view_event(ViewEvent::ResultsRedrawRequired);
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    // === Completed fetches ===

    /// Apply every completed fetch without blocking; returns how many arrived
    pub fn poll_search_messages(&mut self) -> usize {
        let mut count = 0;
        while let Some(message) = self.search_service.poll_message() {
            self.apply_search_message(message);
            count += 1;
        }
        count
    }

    /// Wait for the next completed fetch and apply it
    pub async fn wait_for_search_message(&mut self) -> bool {
        match self.search_service.next_message().await {
            Some(message) => {
                self.apply_search_message(message);
                true
            }
            None => false,
        }
    }

    /// Apply a completed fetch if it belongs to the current key
    ///
    /// Messages for superseded keys were already cached by the service and
    /// are otherwise dropped.
    pub fn apply_search_message(&mut self, message: SearchMessage) {
        let current = self.search_state.key();
        if current.as_ref() != Some(message.key()) {
            tracing::debug!("Discarding response for superseded key {}", message.key());
            return;
        }

        match message {
            SearchMessage::Success { key, response } => {
                let already_shown = self.results.is_showing(&key);
                let empty = response.is_empty();
                let count = response.len();
                self.results.show(key, response, false);
                self.clamp_card_cursor();
                if empty && !already_shown {
                    self.notify_no_results();
                }
                tracing::debug!("Showing {} results", count);
            }
            SearchMessage::Error { key, message } => {
                self.results.fail(message.clone());
                self.notify_fetch_error(&key, &message);
            }
        }

        self.emit_view_event(ViewEvent::ResultsRedrawRequired);
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
    }
}
