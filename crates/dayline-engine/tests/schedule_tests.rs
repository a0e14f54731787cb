//! Tests for the scheduling engine's create/update/delete/move operations
//! and the no-overlap invariant they enforce.

use dayline_engine::schedule::MoveOutcome;
use dayline_engine::{Schedule, ScheduleError, TaskDraft, TaskFields, TaskId};

/// Schedule with one task at `[9, 10)`.
fn one_task_at_nine() -> (Schedule, TaskId) {
    let mut schedule = Schedule::new();
    let task = schedule
        .create(TaskDraft::titled("Standup").at(9.0, 1.0))
        .unwrap();
    (schedule, task.id)
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

#[test]
fn create_assigns_fresh_ids_in_order() {
    let mut schedule = Schedule::new();
    let a = schedule.create(TaskDraft::titled("A").at(9.0, 1.0)).unwrap();
    let b = schedule.create(TaskDraft::titled("B").at(11.0, 1.0)).unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(schedule.tasks().len(), 2);
}

#[test]
fn create_rejects_blank_title() {
    let mut schedule = Schedule::new();
    let err = schedule
        .create(TaskDraft::titled("   ").at(9.0, 1.0))
        .unwrap_err();

    assert_eq!(err, ScheduleError::EmptyTitle);
    assert!(schedule.tasks().is_empty(), "rejection must not mutate");
}

#[test]
fn create_trims_title() {
    let mut schedule = Schedule::new();
    let task = schedule
        .create(TaskDraft::titled("  Standup  ").at(9.0, 1.0))
        .unwrap();
    assert_eq!(task.title, "Standup");
}

#[test]
fn create_into_occupied_slot_rejected() {
    // Collection contains [9,10); creating at 9 for 1h must reject,
    // creating at 10 for 1h must succeed.
    let (mut schedule, _) = one_task_at_nine();

    let err = schedule
        .create(TaskDraft::titled("Clash").at(9.0, 1.0))
        .unwrap_err();
    assert!(matches!(err, ScheduleError::SlotOccupied { .. }));
    assert_eq!(schedule.tasks().len(), 1);

    let ok = schedule.create(TaskDraft::titled("Next").at(10.0, 1.0));
    assert!(ok.is_ok(), "adjacent slot is free under half-open semantics");
}

#[test]
fn create_rejection_names_the_occupant() {
    let (mut schedule, _) = one_task_at_nine();

    match schedule
        .create(TaskDraft::titled("Clash").at(9.5, 1.0))
        .unwrap_err()
    {
        ScheduleError::SlotOccupied { occupant, .. } => {
            assert_eq!(occupant.as_deref(), Some("Standup"));
        }
        other => panic!("expected SlotOccupied, got {other:?}"),
    }
}

#[test]
fn create_clamps_start_and_duration() {
    let mut schedule = Schedule::new();
    let task = schedule
        .create(TaskDraft::titled("Late").at(30.0, 0.1))
        .unwrap();

    assert_eq!(task.duration, 0.5);
    assert_eq!(task.start, 23.5);
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

#[test]
fn update_excludes_self_from_collision_check() {
    // Re-submitting a task's own unchanged interval must succeed, never
    // self-reject.
    let (mut schedule, id) = one_task_at_nine();
    let fields = TaskFields::from(schedule.get(id).unwrap());

    let updated = schedule.update(id, fields).unwrap();
    assert!(updated.is_some());
}

#[test]
fn update_rejects_collision_and_leaves_collection_unchanged() {
    let (mut schedule, id) = one_task_at_nine();
    schedule
        .create(TaskDraft::titled("Review").at(11.0, 1.0))
        .unwrap();

    let mut fields = TaskFields::from(schedule.get(id).unwrap());
    fields.start = 11.5;

    let err = schedule.update(id, fields).unwrap_err();
    assert!(matches!(err, ScheduleError::SlotOccupied { .. }));
    assert_eq!(schedule.get(id).unwrap().start, 9.0);
}

#[test]
fn update_rejects_blank_title() {
    let (mut schedule, id) = one_task_at_nine();
    let mut fields = TaskFields::from(schedule.get(id).unwrap());
    fields.title = "  ".to_string();

    assert_eq!(schedule.update(id, fields).unwrap_err(), ScheduleError::EmptyTitle);
    assert_eq!(schedule.get(id).unwrap().title, "Standup");
}

#[test]
fn update_replaces_fields_in_place() {
    let (mut schedule, id) = one_task_at_nine();
    let mut fields = TaskFields::from(schedule.get(id).unwrap());
    fields.title = "Retro".to_string();
    fields.start = 14.0;
    fields.duration = 2.0;

    let updated = schedule.update(id, fields).unwrap().unwrap();
    assert_eq!(updated.title, "Retro");
    assert_eq!(updated.start, 14.0);
    assert_eq!(updated.duration, 2.0);
    assert_eq!(updated.id, id, "id is immutable");
    assert_eq!(schedule.tasks().len(), 1);
}

#[test]
fn update_missing_id_is_benign_noop() {
    let (mut schedule, id) = one_task_at_nine();
    let fields = TaskFields::from(schedule.get(id).unwrap());

    let result = schedule.update(TaskId(999), fields).unwrap();
    assert!(result.is_none());
    assert_eq!(schedule.tasks().len(), 1);
}

// ---------------------------------------------------------------------------
// delete
// ---------------------------------------------------------------------------

#[test]
fn delete_removes_task() {
    let (mut schedule, id) = one_task_at_nine();
    schedule.delete(id);
    assert!(schedule.tasks().is_empty());
}

#[test]
fn delete_missing_id_is_noop() {
    let (mut schedule, _) = one_task_at_nine();
    schedule.delete(TaskId(999));
    assert_eq!(schedule.tasks().len(), 1);
}

// ---------------------------------------------------------------------------
// move
// ---------------------------------------------------------------------------

#[test]
fn move_into_occupied_slot_rejected_and_start_unchanged() {
    // A at [9,10), B at [10,11): moving B to 9.5 must reject and B stays at 10.
    let mut schedule = Schedule::new();
    schedule.create(TaskDraft::titled("A").at(9.0, 1.0)).unwrap();
    let b = schedule.create(TaskDraft::titled("B").at(10.0, 1.0)).unwrap();

    let err = schedule.move_task(b.id, 9.5).unwrap_err();
    assert!(matches!(err, ScheduleError::SlotOccupied { .. }));
    assert_eq!(schedule.get(b.id).unwrap().start, 10.0);
}

#[test]
fn move_to_free_slot_accepted() {
    let (mut schedule, id) = one_task_at_nine();

    let outcome = schedule.move_task(id, 14.0).unwrap();
    assert_eq!(outcome, MoveOutcome::Moved { from: 9.0, to: 14.0 });
    assert_eq!(schedule.get(id).unwrap().start, 14.0);
}

#[test]
fn move_to_same_start_is_silent_noop() {
    let (mut schedule, id) = one_task_at_nine();
    assert_eq!(schedule.move_task(id, 9.0).unwrap(), MoveOutcome::Unchanged);
}

#[test]
fn move_missing_id_is_unchanged() {
    let (mut schedule, _) = one_task_at_nine();
    assert_eq!(
        schedule.move_task(TaskId(999), 12.0).unwrap(),
        MoveOutcome::Unchanged
    );
}

#[test]
fn move_clamps_to_day_end() {
    let (mut schedule, id) = one_task_at_nine();

    let outcome = schedule.move_task(id, 27.0).unwrap();
    assert_eq!(outcome, MoveOutcome::Moved { from: 9.0, to: 23.0 });
}

#[test]
fn accepted_history_keeps_conflict_set_empty() {
    let mut schedule = Schedule::new();
    schedule.create(TaskDraft::titled("A").at(9.0, 1.0)).unwrap();
    let b = schedule.create(TaskDraft::titled("B").at(10.0, 1.0)).unwrap();
    let _ = schedule.move_task(b.id, 9.5); // rejected
    schedule.move_task(b.id, 12.0).unwrap(); // accepted

    assert!(schedule.conflicts().is_empty());
}
