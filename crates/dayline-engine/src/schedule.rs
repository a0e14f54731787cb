//! The scheduling engine: owns the task collection and enforces the
//! no-overlap invariant.
//!
//! Every operation is atomic: it either fully applies or leaves the
//! collection untouched. Collision checks all go through
//! [`Slot::overlaps`](crate::slot::Slot::overlaps), and the conflict set is
//! recomputed from scratch after every mutation.

use crate::conflict::{find_conflicts, Conflict};
use crate::error::{Result, ScheduleError};
use crate::slot::{self, Slot};
use crate::task::{Priority, Task, TaskDraft, TaskFields, TaskId};

/// Outcome of a [`Schedule::move_task`] call that was not rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// The task was moved from `from` to `to`.
    Moved { from: f64, to: f64 },
    /// The clamped candidate equalled the current start, or the task does
    /// not exist. Nothing changed and nothing should be reported.
    Unchanged,
}

/// A single day's task collection, mutated only through the operations below.
///
/// Tasks are stored in insertion order; [`Schedule::tasks_by_start`] provides
/// the display ordering. Ids come from a monotonic counter and are never
/// reused within a schedule.
#[derive(Debug, Clone)]
pub struct Schedule {
    tasks: Vec<Task>,
    conflicts: Vec<Conflict>,
    next_id: u64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

impl Schedule {
    /// An empty schedule.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            conflicts: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed a schedule from pre-existing tasks, e.g. fixtures or a host
    /// snapshot. Bypasses collision checks: seeded tasks may overlap, and
    /// the conflict set will report it. The id counter resumes past the
    /// highest seeded id.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        let conflicts = find_conflicts(&tasks);
        Self {
            tasks,
            conflicts,
            next_id,
        }
    }

    /// The sample day shipped with the original timeline widget: six tasks,
    /// none overlapping.
    pub fn demo_day() -> Self {
        let demo = [
            (
                "Team Standup Meeting",
                9.0,
                1.0,
                Priority::High,
                "Daily team sync and planning session",
                "1",
            ),
            (
                "Design Review",
                10.5,
                1.5,
                Priority::Medium,
                "Review new UI mockups and prototypes",
                "2",
            ),
            (
                "Documentation Update",
                12.5,
                1.5,
                Priority::Low,
                "Update API documentation and user guides",
                "4",
            ),
            (
                "Sprint Planning",
                14.5,
                1.5,
                Priority::High,
                "Plan next sprint tasks and assignments",
                "2",
            ),
            (
                "Client Presentation",
                16.5,
                1.5,
                Priority::High,
                "Present project progress to stakeholders",
                "3",
            ),
            (
                "Code Review Session",
                18.5,
                1.0,
                Priority::Medium,
                "Review pull requests and merge changes",
                "1",
            ),
        ];

        let tasks = demo
            .iter()
            .enumerate()
            .map(
                |(i, (title, start, duration, priority, description, owner))| Task {
                    id: TaskId(i as u64 + 1),
                    title: (*title).to_string(),
                    start: *start,
                    duration: *duration,
                    priority: *priority,
                    description: Some((*description).to_string()),
                    owner_id: (*owner).to_string(),
                    owner_name: String::new(),
                },
            )
            .collect();

        Self::from_tasks(tasks)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks sorted by start time, ascending. View ordering only; storage
    /// stays in insertion order.
    pub fn tasks_by_start(&self) -> Vec<&Task> {
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        sorted.sort_by(|a, b| a.start.total_cmp(&b.start));
        sorted
    }

    /// Look up a task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The conflict set derived from the current collection.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Create a task from a draft.
    ///
    /// The trimmed title must be non-blank; start and duration are clamped
    /// into range before the collision check. Rejects with
    /// [`ScheduleError::SlotOccupied`] when the candidate slot overlaps any
    /// existing task.
    pub fn create(&mut self, draft: TaskDraft) -> Result<Task> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }

        let candidate = Slot::clamped(draft.start, draft.duration);
        self.check_slot(candidate, None)?;

        let task = Task {
            id: TaskId(self.next_id),
            title,
            start: candidate.start,
            duration: candidate.duration,
            priority: draft.priority,
            description: draft
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            owner_id: draft.owner_id,
            owner_name: draft.owner_name,
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        self.conflicts = find_conflicts(&self.tasks);
        Ok(task)
    }

    /// Replace a task's editable fields.
    ///
    /// The collision check excludes the task itself and tests the *proposed*
    /// interval. A missing id is a benign no-op (`Ok(None)`). On rejection
    /// the collection is left unchanged.
    pub fn update(&mut self, id: TaskId, fields: TaskFields) -> Result<Option<Task>> {
        if self.get(id).is_none() {
            return Ok(None);
        }

        let title = fields.title.trim().to_string();
        if title.is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }

        let candidate = Slot::clamped(fields.start, fields.duration);
        self.check_slot(candidate, Some(id))?;

        let updated = self.tasks.iter_mut().find(|t| t.id == id).map(|task| {
            task.title = title;
            task.description = fields.description;
            task.priority = fields.priority;
            task.start = candidate.start;
            task.duration = candidate.duration;
            task.clone()
        });
        self.conflicts = find_conflicts(&self.tasks);
        Ok(updated)
    }

    /// Remove a task. Deleting a missing id is a no-op, not an error.
    pub fn delete(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.conflicts = find_conflicts(&self.tasks);
        }
    }

    /// Move only a task's start time, as driven by drag gestures.
    ///
    /// The proposed start is clamped into `[0, 24 - duration]`. A candidate
    /// equal to the current start (and a missing id) is
    /// [`MoveOutcome::Unchanged`]. A colliding candidate is rejected without
    /// mutating anything, so the caller only has to revert its own
    /// optimistic view.
    pub fn move_task(&mut self, id: TaskId, proposed_start: f64) -> Result<MoveOutcome> {
        let Some(task) = self.get(id) else {
            return Ok(MoveOutcome::Unchanged);
        };
        let from = task.start;
        let duration = task.duration;

        let to = slot::clamp_start(proposed_start, duration);
        if to == from {
            return Ok(MoveOutcome::Unchanged);
        }

        let candidate = Slot {
            start: to,
            duration,
        };
        self.check_slot(candidate, Some(id))?;

        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.start = to;
        }
        self.conflicts = find_conflicts(&self.tasks);
        Ok(MoveOutcome::Moved { from, to })
    }

    /// Reject with `SlotOccupied` if `candidate` overlaps any task other
    /// than `exclude`.
    fn check_slot(&self, candidate: Slot, exclude: Option<TaskId>) -> Result<()> {
        let occupant = self
            .tasks
            .iter()
            .filter(|t| Some(t.id) != exclude)
            .find(|t| t.slot().overlaps(&candidate));

        match occupant {
            Some(task) => Err(ScheduleError::SlotOccupied {
                start: candidate.start,
                end: candidate.end(),
                occupant: Some(task.title.clone()),
            }),
            None => Ok(()),
        }
    }
}
