//! # Controllers Module
//!
//! Contains the controller that drives the event loop.

pub mod app_controller;

// Re-export main types for convenience
pub use app_controller::AppController;
