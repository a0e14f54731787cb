//! Conflict projection over the task collection.
//!
//! The conflict set is a pure derived view: it is recomputed in full from the
//! task collection after every mutation and never patched incrementally. No
//! conflict record outlives the recomputation that produced it.

use serde::Serialize;

use crate::task::{Task, TaskId};

/// A detected overlap between two tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    /// The pair of overlapping task ids, in collection order.
    pub task_ids: (TaskId, TaskId),
    /// Human-readable description, e.g. `"Standup" overlaps with "Review"`.
    pub message: String,
}

impl Conflict {
    /// Whether this conflict involves the given task.
    pub fn involves(&self, id: TaskId) -> bool {
        self.task_ids.0 == id || self.task_ids.1 == id
    }
}

/// Find all unordered pairs of tasks whose slots overlap.
///
/// Pairwise O(n²) scan; fine for the expected scale of tens of tasks per
/// day, but not for thousands. Adjacent tasks where one ends exactly when
/// the other starts are NOT conflicts (half-open slots).
pub fn find_conflicts(tasks: &[Task]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, a) in tasks.iter().enumerate() {
        for b in &tasks[i + 1..] {
            if a.slot().overlaps(&b.slot()) {
                conflicts.push(Conflict {
                    task_ids: (a.id, b.id),
                    message: format!("\"{}\" overlaps with \"{}\"", a.title, b.title),
                });
            }
        }
    }

    conflicts
}
