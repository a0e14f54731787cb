//! Transient user-facing notifications, at most one active at a time.
//!
//! A new notification replaces the current one rather than queuing. Each
//! carries a monotonically increasing sequence number, and [`Notifier::dismiss`]
//! only clears the notification if its sequence number still matches the one
//! on display — a stale auto-dismiss timer can never clear a newer message.
//! Actual timer scheduling belongs to the host event loop; the engine only
//! supplies the delay and the guarded dismiss.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the host should display a notification before dismissing it.
pub const DISMISS_AFTER: Duration = Duration::from_secs(4);

/// Severity tag for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

/// A single transient message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Monotonically increasing per [`Notifier`]; the dismiss guard.
    pub seq: u64,
    pub message: String,
    pub severity: Severity,
}

/// Holder of the at-most-one active notification.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
    next_seq: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing any current one. Returns the sequence
    /// number the host should pass back to [`Notifier::dismiss`] after
    /// [`DISMISS_AFTER`].
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.current = Some(Notification {
            seq,
            message: message.into(),
            severity,
        });
        seq
    }

    /// The notification currently on display, if any.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Clear the display only if `seq` still matches the current
    /// notification. Returns whether anything was cleared.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        match &self.current {
            Some(n) if n.seq == seq => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
