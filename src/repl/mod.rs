//! # MVVM Architecture Implementation
//!
//! This module contains the MVVM implementation for CineSearch.
//! All components are designed with clear separation of concerns and testability.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod geometry;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use events::*;
pub use io::{EventStream, RenderStream};
pub use services::{SearchService, TmdbClient};
pub use view_models::ViewModel;
pub use views::{TerminalRenderer, ViewRenderer};

// Re-export specific items from commands to avoid conflicts
pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};

// Re-export specific items from models to avoid conflicts
pub use models::{DisplayState, Movie, MovieSearchResponse, QueryKey};
