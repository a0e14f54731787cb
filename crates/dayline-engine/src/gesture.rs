//! Drag-gesture translation: pixel displacement → candidate start time.
//!
//! The pixels-per-hour scale is supplied by the host's zoom/viewport layer
//! and treated here as a plain conversion constant.

use crate::slot;

/// Minimum pixel displacement for a pointer motion to count as a drag.
///
/// A click that registers a few pixels of motion must still open the edit
/// dialog instead of rescheduling, so anything at or below this magnitude is
/// no gesture at all: the engine is never invoked and the view snaps back
/// silently.
pub const DRAG_THRESHOLD_PX: f64 = 20.0;

/// Translate a horizontal drag into a proposed start time.
///
/// Returns `None` when the displacement is within [`DRAG_THRESHOLD_PX`] (or
/// the scale is non-positive). Otherwise the displacement is converted to a
/// whole-hour delta by rounding, and the result is clamped to
/// `[0, 24 - duration]`.
pub fn propose_start(
    original_start: f64,
    offset_px: f64,
    px_per_hour: f64,
    duration: f64,
) -> Option<f64> {
    if offset_px.abs() <= DRAG_THRESHOLD_PX || px_per_hour <= 0.0 {
        return None;
    }
    let hours_delta = (offset_px / px_per_hour).round();
    Some(slot::clamp_start(original_start + hours_delta, duration))
}
