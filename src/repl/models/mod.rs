//! # Models
//!
//! Plain state containers. None of them know about the terminal or the network.

pub mod movie;
pub mod pagination;
pub mod results_model;
pub mod search_bar;
pub mod search_state;
pub mod selection;
pub mod toast;

pub use movie::{Movie, MovieSearchResponse};
pub use pagination::{
    max_requestable_page, page_items, PageItem, MARGIN_PAGES_DISPLAYED, MAX_API_PAGE,
    PAGE_RANGE_DISPLAYED,
};
pub use results_model::{DisplayState, FetchStatus, ResultsModel};
pub use search_bar::SearchBarModel;
pub use search_state::{QueryKey, SearchState};
pub use selection::SelectionModel;
pub use toast::{Toast, ToastKind, ToastQueue, DEFAULT_TOAST_DURATION};
