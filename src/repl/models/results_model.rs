//! # Results Model
//!
//! Holds the response currently on screen together with the fetch status of
//! the active query key. The model keeps the previous key's data while the
//! next key loads, and drops all data on failure.

use crate::repl::models::{MovieSearchResponse, QueryKey};
use std::sync::Arc;

/// Fetch status of the active query key
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    /// Nothing in flight for the active key
    Idle,
    /// A request for the active key is in flight
    Fetching,
    /// The last request for the active key failed
    Failed(String),
}

/// What the result area shows; exactly one of these at a time
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    /// No query submitted yet
    Neutral,
    /// First load for a key with no placeholder data
    Loading,
    /// Successful response without results
    Empty,
    /// Request failed; no data is shown
    Error(String),
    /// Cards to render; `placeholder` marks data from a previous key
    Results {
        response: Arc<MovieSearchResponse>,
        placeholder: bool,
    },
}

#[derive(Debug, Clone)]
pub struct ResultsModel {
    data: Option<Arc<MovieSearchResponse>>,
    data_key: Option<QueryKey>,
    status: FetchStatus,
}

impl ResultsModel {
    pub fn new() -> Self {
        Self {
            data: None,
            data_key: None,
            status: FetchStatus::Idle,
        }
    }

    /// Show a response for `key` and mark the key as settled or revalidating
    pub fn show(&mut self, key: QueryKey, response: Arc<MovieSearchResponse>, revalidating: bool) {
        self.data = Some(response);
        self.data_key = Some(key);
        self.status = if revalidating {
            FetchStatus::Fetching
        } else {
            FetchStatus::Idle
        };
    }

    /// Mark a fetch in flight, keeping any existing data as placeholder
    pub fn start_fetch(&mut self) {
        self.status = FetchStatus::Fetching;
    }

    /// Record a failure; existing data is discarded
    pub fn fail(&mut self, message: impl Into<String>) {
        self.data = None;
        self.data_key = None;
        self.status = FetchStatus::Failed(message.into());
    }

    /// Forget everything (no active query)
    pub fn clear(&mut self) {
        self.data = None;
        self.data_key = None;
        self.status = FetchStatus::Idle;
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_fetching(&self) -> bool {
        self.status == FetchStatus::Fetching
    }

    /// Response on screen, which may belong to a previous key
    pub fn data(&self) -> Option<&Arc<MovieSearchResponse>> {
        self.data.as_ref()
    }

    /// Response on screen when it was fetched for `query`, on any page
    pub fn data_for_query(&self, query: &str) -> Option<&Arc<MovieSearchResponse>> {
        match &self.data_key {
            Some(key) if key.query == query => self.data.as_ref(),
            _ => None,
        }
    }

    /// Whether the data on screen belongs to `key`
    pub fn is_showing(&self, key: &QueryKey) -> bool {
        self.data.is_some() && self.data_key.as_ref() == Some(key)
    }

    /// Resolve what the result area shows for the active key
    pub fn display_state(&self, active_key: Option<&QueryKey>) -> DisplayState {
        let Some(active_key) = active_key else {
            return DisplayState::Neutral;
        };

        if let FetchStatus::Failed(message) = &self.status {
            return DisplayState::Error(message.clone());
        }

        match &self.data {
            Some(response) if response.is_empty() => DisplayState::Empty,
            Some(response) => DisplayState::Results {
                response: Arc::clone(response),
                placeholder: self.data_key.as_ref() != Some(active_key),
            },
            None if self.is_fetching() => DisplayState::Loading,
            None => DisplayState::Neutral,
        }
    }
}

impl Default for ResultsModel {
    fn default() -> Self {
        Self::new()
    }
}
