//! # dayline-engine
//!
//! Scheduling core for a single-day interactive timeline: a set of
//! time-bounded tasks, pairwise conflict detection, and a drag-to-reschedule
//! protocol with validate-then-commit semantics.
//!
//! Tasks occupy half-open slots `[start, start + duration)` measured in
//! fractional hours since midnight. The engine enforces a no-overlap
//! invariant: every create, update, and move is validated against the single
//! overlap predicate and either fully applies or is rejected, leaving the
//! collection untouched. The conflict set is a pure projection recomputed
//! after every mutation.
//!
//! ## Quick start
//!
//! ```rust
//! use dayline_engine::{Controller, Schedule, TaskId};
//!
//! let mut board = Controller::new(Schedule::demo_day());
//!
//! // Drag the standup (09:00) two hours to the right at 100 px/hour.
//! board.drag_start(TaskId(1));
//! let outcome = board.drag_end(TaskId(1), 200.0, 100.0);
//! println!("{:?}", outcome);
//! println!("{:?}", board.notification());
//! ```
//!
//! ## Modules
//!
//! - [`slot`] — half-open slots and the single overlap predicate
//! - [`task`] — task records, drafts, and editable field sets
//! - [`conflict`] — conflict projection over the task collection
//! - [`schedule`] — the scheduling engine (create/update/delete/move)
//! - [`gesture`] — pixel displacement → candidate start time
//! - [`controller`] — drag/dialog/zoom orchestration and rollback
//! - [`notify`] — at-most-one-active notifications with guarded dismiss
//! - [`zoom`] — clamped zoom level
//! - [`clock`] — fractional-hour display formatting
//! - [`error`] — error types

pub mod clock;
pub mod conflict;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod notify;
pub mod schedule;
pub mod slot;
pub mod task;
pub mod zoom;

pub use clock::format_hour;
pub use conflict::{find_conflicts, Conflict};
pub use controller::{Controller, Dialog, DragOutcome};
pub use error::ScheduleError;
pub use gesture::{propose_start, DRAG_THRESHOLD_PX};
pub use notify::{Notification, Notifier, Severity, DISMISS_AFTER};
pub use schedule::{MoveOutcome, Schedule};
pub use slot::Slot;
pub use task::{Priority, Task, TaskDraft, TaskFields, TaskId};
pub use zoom::Zoom;
