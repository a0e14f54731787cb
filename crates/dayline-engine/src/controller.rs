//! Interaction controller: orchestrates drag gestures, dialog flows, zoom,
//! and notifications on top of the scheduling engine.
//!
//! The controller owns all interaction state in one place — drag snapshots,
//! the dialog machine, the zoom level, the active notification — and exposes
//! it only through named transitions. The presentation layer holds no
//! authoritative state: it renders from [`Controller::schedule`] after each
//! call, and on a rejected drag reverts its optimistic position to the
//! origin carried by [`DragOutcome::Reverted`] (engine state was never
//! mutated, so only the view needs reverting).

use std::collections::HashMap;

use crate::clock::{format_hour, format_range};
use crate::error::ScheduleError;
use crate::gesture;
use crate::notify::{Notification, Notifier, Severity};
use crate::schedule::{MoveOutcome, Schedule};
use crate::task::{TaskDraft, TaskFields, TaskId};
use crate::zoom::Zoom;

/// Which dialog, if any, is open. Two-state per dialog: Closed ↔ Open, with
/// Open → Closed on successful submit, explicit cancel, or backdrop
/// dismissal (both of the latter via [`Controller::cancel_dialog`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    Create,
    Edit(TaskId),
}

/// What a completed drag did, from the view's perspective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Below the gesture threshold, unknown task, or no net displacement:
    /// the engine was not asked to move anything and no notification was
    /// emitted. The view snaps back silently.
    Ignored,
    /// The move was accepted and committed.
    Moved { from: f64, to: f64 },
    /// The move was rejected; the view must revert its optimistic position
    /// to `origin`.
    Reverted { origin: f64 },
}

/// Single owner of a session's interaction state.
#[derive(Debug, Default)]
pub struct Controller {
    schedule: Schedule,
    drag_origins: HashMap<TaskId, f64>,
    dialog: Dialog,
    zoom: Zoom,
    notifier: Notifier,
}

impl Controller {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            drag_origins: HashMap::new(),
            dialog: Dialog::Closed,
            zoom: Zoom::new(),
            notifier: Notifier::new(),
        }
    }

    /// The authoritative schedule, for rendering.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// The notification currently on display, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    /// Guarded auto-dismiss; see [`Notifier::dismiss`].
    pub fn dismiss_notification(&mut self, seq: u64) -> bool {
        self.notifier.dismiss(seq)
    }

    pub fn dialog(&self) -> Dialog {
        self.dialog
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom.level()
    }

    // ------------------------------------------------------------------
    // Drag protocol
    // ------------------------------------------------------------------

    /// Drag started: snapshot the task's current start so a rejected drop
    /// can tell the view where to snap back to.
    pub fn drag_start(&mut self, id: TaskId) {
        if let Some(task) = self.schedule.get(id) {
            self.drag_origins.insert(id, task.start);
        }
    }

    /// Drag ended. Translates the displacement, asks the engine to move,
    /// and notifies. The drag snapshot is discarded in every case.
    pub fn drag_end(&mut self, id: TaskId, offset_px: f64, px_per_hour: f64) -> DragOutcome {
        let origin = self.drag_origins.remove(&id);

        let Some(task) = self.schedule.get(id) else {
            return DragOutcome::Ignored;
        };
        let (title, current_start, duration) = (task.title.clone(), task.start, task.duration);

        let Some(proposed) = gesture::propose_start(current_start, offset_px, px_per_hour, duration)
        else {
            return DragOutcome::Ignored;
        };

        self.commit_move(id, &title, proposed, origin.unwrap_or(current_start))
    }

    /// Ask the engine to move a task directly, with the same notifications
    /// and outcome as a completed drag. For hosts whose reschedule input is
    /// not a pointer gesture (scripts, keyboards).
    pub fn move_task(&mut self, id: TaskId, proposed_start: f64) -> DragOutcome {
        let Some(task) = self.schedule.get(id) else {
            return DragOutcome::Ignored;
        };
        let (title, origin) = (task.title.clone(), task.start);
        self.commit_move(id, &title, proposed_start, origin)
    }

    fn commit_move(&mut self, id: TaskId, title: &str, proposed: f64, origin: f64) -> DragOutcome {
        match self.schedule.move_task(id, proposed) {
            Ok(MoveOutcome::Moved { from, to }) => {
                self.notifier.show(
                    format!(
                        "\"{}\" moved from {} to {}",
                        title,
                        format_hour(from),
                        format_hour(to)
                    ),
                    Severity::Success,
                );
                DragOutcome::Moved { from, to }
            }
            Ok(MoveOutcome::Unchanged) => DragOutcome::Ignored,
            Err(ScheduleError::SlotOccupied {
                start, occupant, ..
            }) => {
                let message = match occupant {
                    Some(other) => format!(
                        "Cannot schedule at {} - conflicts with \"{}\"",
                        format_hour(start),
                        other
                    ),
                    None => "Cannot move task - scheduling conflict detected".to_string(),
                };
                self.notifier.show(message, Severity::Error);
                DragOutcome::Reverted { origin }
            }
            Err(err) => {
                self.notifier.show(err.to_string(), Severity::Error);
                DragOutcome::Reverted { origin }
            }
        }
    }

    // ------------------------------------------------------------------
    // Dialog flows
    // ------------------------------------------------------------------

    pub fn open_create_dialog(&mut self) {
        self.dialog = Dialog::Create;
    }

    /// Open the edit dialog for an existing task. Returns false (and stays
    /// closed) for an unknown id.
    pub fn open_edit_dialog(&mut self, id: TaskId) -> bool {
        if self.schedule.get(id).is_some() {
            self.dialog = Dialog::Edit(id);
            true
        } else {
            false
        }
    }

    /// Explicit cancel or backdrop dismissal.
    pub fn cancel_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    /// Submit the create dialog. On success the dialog closes and the new
    /// task's id is returned; on rejection the dialog stays open and an
    /// error notification is shown.
    pub fn submit_create(&mut self, draft: TaskDraft) -> Option<TaskId> {
        match self.schedule.create(draft) {
            Ok(task) => {
                self.dialog = Dialog::Closed;
                self.notifier.show(
                    format!("\"{}\" created at {}", task.title, format_hour(task.start)),
                    Severity::Success,
                );
                Some(task.id)
            }
            Err(err) => {
                let message = match err {
                    ScheduleError::EmptyTitle => "Please enter a task title".to_string(),
                    ScheduleError::SlotOccupied { start, end, .. } => format!(
                        "Cannot create task - time slot {} is already occupied",
                        format_range(start, end)
                    ),
                };
                self.notifier.show(message, Severity::Error);
                None
            }
        }
    }

    /// Submit the edit dialog. On success the dialog closes; on rejection it
    /// stays open. A missing id closes the dialog silently (benign no-op).
    pub fn submit_update(&mut self, id: TaskId, fields: TaskFields) -> bool {
        match self.schedule.update(id, fields) {
            Ok(Some(task)) => {
                self.dialog = Dialog::Closed;
                self.notifier.show(
                    format!(
                        "\"{}\" updated - scheduled at {}",
                        task.title,
                        format_hour(task.start)
                    ),
                    Severity::Success,
                );
                true
            }
            Ok(None) => {
                self.dialog = Dialog::Closed;
                false
            }
            Err(err) => {
                let message = match err {
                    ScheduleError::EmptyTitle => "Please enter a task title".to_string(),
                    ScheduleError::SlotOccupied { start, end, .. } => format!(
                        "Cannot update task - time slot {} conflicts with existing tasks",
                        format_range(start, end)
                    ),
                };
                self.notifier.show(message, Severity::Error);
                false
            }
        }
    }

    /// Delete a task (from the edit dialog's delete button or elsewhere).
    /// Closes the edit dialog if it was open on this task.
    pub fn delete_task(&mut self, id: TaskId) {
        self.schedule.delete(id);
        if self.dialog == Dialog::Edit(id) {
            self.dialog = Dialog::Closed;
        }
        self.notifier.show("Task deleted", Severity::Success);
    }

    // ------------------------------------------------------------------
    // Zoom
    // ------------------------------------------------------------------

    pub fn zoom_in(&mut self) {
        if self.zoom.zoom_in().is_some() {
            let message = format!("Zoomed in to {}%", self.zoom.percent());
            self.notifier.show(message, Severity::Info);
        }
    }

    pub fn zoom_out(&mut self) {
        if self.zoom.zoom_out().is_some() {
            let message = format!("Zoomed out to {}%", self.zoom.percent());
            self.notifier.show(message, Severity::Info);
        }
    }

    pub fn reset_zoom(&mut self) {
        if self.zoom.reset().is_some() {
            self.notifier.show("Zoom reset to 100%", Severity::Info);
        }
    }
}
