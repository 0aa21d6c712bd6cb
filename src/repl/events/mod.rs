//! # Events Module
//!
//! Re-exports the event types shared by commands, view models and views.

pub mod types;
pub mod view_events;

pub use types::{Focus, MovementDirection, PageTarget};
pub use view_events::ViewEvent;
