//! # CineSearch - Terminal Movie Search
//!
//! A keyboard-driven terminal UI over the TMDB movie search API: a search bar,
//! a paginated grid of result cards, toast notifications and a detail modal.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│  Models  │
//! │             │              │              │              │          │
//! │ - Terminal  │              │ - Search     │              │ - Movies │
//! │ - Rendering │              │ - Pagination │              │ - Toasts │
//! │ - Modal     │              │ - Toasts     │              │ - State  │
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                  ▲       ▲
//!                         Commands │       │ SearchMessage (mpsc)
//!                                  ▼       │
//!                           ┌──────────────┐    ┌──────────────────────┐
//!                           │  Controller  │    │    SearchService     │
//!                           │              │    │                      │
//!                           │ - Input      │    │ - QueryCache         │
//!                           │   Mapping    │    │ - In-flight dedup    │
//!                           │ - Event Loop │    │ - TmdbClient (tokio) │
//!                           └──────────────┘    └──────────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod logging;
pub mod print_mode;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
