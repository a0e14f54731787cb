//! Half-open time slots and the single overlap predicate.
//!
//! A [`Slot`] is the interval `[start, start + duration)` in fractional hours.
//! Every collision check in the engine (create, update, move, conflict
//! projection) goes through [`Slot::overlaps`] so the overlap semantics stay
//! uniform across the whole system.

use serde::{Deserialize, Serialize};

/// Total hours in the timeline day.
pub const DAY_HOURS: f64 = 24.0;

/// Shortest task the engine will accept, in hours.
pub const MIN_DURATION: f64 = 0.5;

/// Longest task the engine will accept, in hours.
pub const MAX_DURATION: f64 = 12.0;

/// A half-open time interval `[start, start + duration)` in fractional hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Fractional hours since midnight.
    pub start: f64,
    /// Length in hours.
    pub duration: f64,
}

impl Slot {
    /// Build a slot with both fields clamped into range: duration into
    /// `[MIN_DURATION, MAX_DURATION]`, then start into `[0, 24 - duration]`
    /// so the slot never runs past the end of the day.
    pub fn clamped(start: f64, duration: f64) -> Self {
        let duration = clamp_duration(duration);
        Self {
            start: clamp_start(start, duration),
            duration,
        }
    }

    /// Exclusive end of the slot.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Half-open overlap test: `a.start < b.end && b.start < a.end`.
    ///
    /// Adjacent slots where one ends exactly when the other starts do NOT
    /// overlap. The predicate is symmetric.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// Clamp a duration into `[MIN_DURATION, MAX_DURATION]`.
pub fn clamp_duration(duration: f64) -> f64 {
    duration.clamp(MIN_DURATION, MAX_DURATION)
}

/// Clamp a start time into `[0, 24 - duration]`.
///
/// The same rule applies to dialog-entered times and drag targets, so a
/// committed task can never end after hour 24.
pub fn clamp_start(start: f64, duration: f64) -> f64 {
    start.clamp(0.0, DAY_HOURS - clamp_duration(duration))
}
