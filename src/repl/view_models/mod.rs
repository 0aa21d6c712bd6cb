//! # ViewModel Module
//!
//! The ViewModel is split by concern:
//!
//! - `core`: the struct, accessors, focus and view event queue
//! - `search_manager`: query submission, pagination, applying fetch results
//! - `notification_manager`: toasts
//! - `selection_manager`: card cursor and the detail modal

pub mod core;
pub mod notification_manager;
pub mod search_manager;
pub mod selection_manager;

pub use self::core::ViewModel;
pub use notification_manager::{FETCH_ERROR_MESSAGE, NO_RESULTS_MESSAGE};
pub use search_manager::EMPTY_QUERY_MESSAGE;
