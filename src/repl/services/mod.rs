//! # Services
//!
//! Network access and request bookkeeping, kept apart from UI state.

pub mod query_cache;
pub mod search;
pub mod tmdb;

pub use query_cache::{CacheLookup, QueryCache};
pub use search::{SearchMessage, SearchRequest, SearchService};
pub use tmdb::TmdbClient;
