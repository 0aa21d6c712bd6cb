//! # Search State Model
//!
//! The submitted query and the active page. Together they form the
//! [`QueryKey`] that identifies a request and its cache entry.

/// Identity of one search request: query text plus 1-indexed page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub query: String,
    pub page: u32,
}

impl QueryKey {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" p{}", self.query, self.page)
    }
}

/// Current query and page
///
/// Every submission resets the page to 1; page changes leave the query alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    page: u32,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Store a newly submitted query and reset to the first page
    pub fn submit(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Change the page, keeping the query; pages below 1 are raised to 1
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Key for the current state, `None` while no query has been submitted
    pub fn key(&self) -> Option<QueryKey> {
        if self.query.is_empty() {
            None
        } else {
            Some(QueryKey::new(self.query.clone(), self.page))
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
