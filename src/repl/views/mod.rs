//! # Views Module
//!
//! Contains all view-related components for rendering the terminal interface.

pub mod terminal_renderer;
pub mod text_layout;

// Re-export main types for convenience
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
