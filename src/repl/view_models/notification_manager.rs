//! # Notification Management
//!
//! Toasts raised by search outcomes and their expiry.

use crate::repl::events::ViewEvent;
use crate::repl::models::QueryKey;
use crate::repl::view_models::core::ViewModel;
use std::time::Instant;

/// Informational toast for a successful search without results
pub const NO_RESULTS_MESSAGE: &str = "No movies found for your request.";

/// Error toast for a failed search
pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching movies.";

impl ViewModel {
    pub fn notify_info(&mut self, message: &str) {
        self.toasts.info(message);
        self.emit_view_event(ViewEvent::ToastsUpdateRequired);
    }

    pub(super) fn notify_no_results(&mut self) {
        tracing::info!("No results for {:?}", self.search_state.query());
        self.notify_info(NO_RESULTS_MESSAGE);
    }

    pub(super) fn notify_fetch_error(&mut self, key: &QueryKey, message: &str) {
        tracing::error!("Fetching movies for {} failed: {}", key, message);
        self.toasts.error(FETCH_ERROR_MESSAGE);
        self.emit_view_event(ViewEvent::ToastsUpdateRequired);
    }

    /// Drop expired toasts, scheduling a toast line redraw if anything changed
    pub fn expire_toasts(&mut self, now: Instant) -> bool {
        let changed = self.toasts.expire(now);
        if changed {
            self.emit_view_event(ViewEvent::ToastsUpdateRequired);
        }
        changed
    }
}
