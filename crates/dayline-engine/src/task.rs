//! Task records and the input shapes used to create and edit them.

use serde::{Deserialize, Serialize};

use crate::slot::Slot;

/// Opaque task identifier, assigned by the engine at creation and never
/// reused within a schedule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task priority, display-only as far as the engine is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A scheduled activity occupying the slot `[start, start + duration)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Non-blank display title, validated before every commit.
    pub title: String,
    /// Fractional hours since midnight.
    pub start: f64,
    /// Length in hours, within `[0.5, 12]`.
    pub duration: f64,
    pub priority: Priority,
    #[serde(default)]
    pub description: Option<String>,
    /// Opaque ownership fields, carried but never validated.
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub owner_name: String,
}

impl Task {
    /// The half-open interval this task occupies.
    pub fn slot(&self) -> Slot {
        Slot {
            start: self.start,
            duration: self.duration,
        }
    }
}

/// Input for the create operation. Defaults mirror the create-dialog
/// presets: 09:00 start, one hour, medium priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_start")]
    pub start: f64,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub owner_name: String,
}

fn default_start() -> f64 {
    9.0
}

fn default_duration() -> f64 {
    1.0
}

impl TaskDraft {
    /// Draft with the given title and everything else at dialog defaults.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: Priority::default(),
            start: default_start(),
            duration: default_duration(),
            owner_id: String::new(),
            owner_name: String::new(),
        }
    }

    /// Same draft with a different slot.
    pub fn at(mut self, start: f64, duration: f64) -> Self {
        self.start = start;
        self.duration = duration;
        self
    }
}

/// Editable fields for the update operation. Ownership fields are fixed at
/// creation and not part of the edit surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    pub start: f64,
    pub duration: f64,
}

impl From<&Task> for TaskFields {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            start: task.start,
            duration: task.duration,
        }
    }
}
