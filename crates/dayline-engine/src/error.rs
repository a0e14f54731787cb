//! Error types for schedule mutations.

use thiserror::Error;

/// Rejections produced by the scheduling engine. Every rejection leaves the
/// task collection in its prior state; none is fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The task title was blank after trimming.
    #[error("task title must not be blank")]
    EmptyTitle,

    /// The candidate slot overlaps an existing task. The range is carried in
    /// fractional hours; user-facing messages format it via
    /// [`clock::format_range`](crate::clock::format_range).
    #[error("time slot {start} to {end} is already occupied")]
    SlotOccupied {
        /// Candidate slot start, fractional hours.
        start: f64,
        /// Candidate slot end, fractional hours.
        end: f64,
        /// Title of one occupying task, when determinable.
        occupant: Option<String>,
    },
}

/// Convenience alias used throughout dayline-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
