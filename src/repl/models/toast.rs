//! # Toast Model
//!
//! Transient notifications shown on the toast line. Informational toasts
//! and error toasts share one queue and expire after their duration.

use std::time::{Duration, Instant};

/// Default time a toast stays visible
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// Maximum number of toasts kept at once; older ones are dropped first
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message, Instant::now());
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        // Same message already visible: restart it instead of stacking duplicates
        self.toasts
            .retain(|toast| !(toast.kind == kind && toast.message == message));
        self.toasts.push(Toast {
            kind,
            message,
            created_at: now,
            duration: DEFAULT_TOAST_DURATION,
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
    }

    /// Drop expired toasts; returns true when anything was removed
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        before != self.toasts.len()
    }

    /// Visible toasts, oldest first
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    /// Most recent toast, which the toast line displays
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
