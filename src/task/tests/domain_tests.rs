//! Domain-focused tests for task values and payloads.

use super::FixedClock;
use crate::task::domain::{
    NewTask, ParsePriorityError, Priority, Task, TaskDomainError, TaskId, TaskPatch, TaskText,
    TaskTitle,
};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::march_first()
}

#[fixture]
fn task(clock: FixedClock) -> Task {
    let input = NewTask::new(
        TaskTitle::new("Buy milk").expect("valid title"),
        TaskText::new("2%").expect("valid text"),
        Priority::Important,
    );
    Task::new(TaskId::from_string("T1"), input, &clock)
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn title_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn text_rejects_blank_values() {
    assert_eq!(TaskText::new("  "), Err(TaskDomainError::EmptyText));
}

#[rstest]
fn title_is_trimmed() {
    let title = TaskTitle::new("  Water plants ").expect("valid title");
    assert_eq!(title.as_str(), "Water plants");
}

#[rstest]
#[case("Very Important", Priority::VeryImportant)]
#[case("important", Priority::Important)]
#[case("NOT IMPORTANT", Priority::NotImportant)]
#[case("very-important", Priority::VeryImportant)]
#[case("not_important", Priority::NotImportant)]
fn priority_parses_labels(#[case] raw: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(raw), Ok(expected));
}

#[rstest]
fn priority_rejects_unknown_label() {
    assert_eq!(
        "urgent".parse::<Priority>(),
        Err(ParsePriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn priority_labels_round_trip_through_display() {
    for priority in Priority::ALL {
        assert_eq!(priority.to_string().parse::<Priority>(), Ok(priority));
    }
}

#[rstest]
fn priority_defaults_to_important() {
    assert_eq!(Priority::default(), Priority::Important);
}

#[rstest]
fn new_task_defaults_to_incomplete() {
    let input = NewTask::new(
        TaskTitle::new("Call mum").expect("valid title"),
        TaskText::new("Sunday").expect("valid text"),
        Priority::NotImportant,
    );
    assert!(!input.is_completed());
    assert!(input.with_completed(true).is_completed());
}

#[rstest]
fn task_new_stamps_clock_time(task: Task, clock: FixedClock) {
    assert_eq!(task.id().as_str(), "T1");
    assert_eq!(task.title().as_str(), "Buy milk");
    assert_eq!(task.text().as_str(), "2%");
    assert_eq!(task.priority(), Priority::Important);
    assert!(!task.is_completed());
    assert_eq!(task.created_at(), clock.0);
}

#[rstest]
fn patched_overwrites_only_supplied_fields(task: Task) {
    let patched = task.patched(TaskPatch::text(TaskText::new("new").expect("valid text")));

    assert_eq!(patched.text().as_str(), "new");
    assert_eq!(patched.title(), task.title());
    assert_eq!(patched.priority(), task.priority());
    assert_eq!(patched.is_completed(), task.is_completed());
    assert_eq!(patched.id(), task.id());
    assert_eq!(patched.created_at(), task.created_at());
}

#[rstest]
fn patched_with_every_field_keeps_identity(task: Task) {
    let patch = TaskPatch::new()
        .with_title(TaskTitle::new("Buy oat milk").expect("valid title"))
        .with_text(TaskText::new("barista edition").expect("valid text"))
        .with_priority(Priority::VeryImportant)
        .with_completed(true);
    let patched = task.patched(patch);

    assert_eq!(patched.title().as_str(), "Buy oat milk");
    assert_eq!(patched.priority(), Priority::VeryImportant);
    assert!(patched.is_completed());
    assert_eq!(patched.id(), task.id());
    assert_eq!(patched.created_at(), task.created_at());
}

#[rstest]
fn empty_patch_leaves_task_unchanged(task: Task) {
    let patch = TaskPatch::new();
    assert!(patch.is_empty());
    assert_eq!(task.patched(patch), task);
}

#[rstest]
fn patch_payload_drops_identity_keys(task: Task) {
    let patch: TaskPatch = serde_json::from_value(serde_json::json!({
        "id": "T99",
        "createdAt": "1999-12-31T23:59:59Z",
        "completed": true
    }))
    .expect("patch deserializes");
    assert_eq!(patch, TaskPatch::completed(true));

    let patched = task.patched(patch);
    assert_eq!(patched.id().as_str(), "T1");
    assert_eq!(patched.created_at(), task.created_at());
    assert!(patched.is_completed());
}

#[rstest]
fn patch_payload_rejects_blank_text() {
    let result = serde_json::from_value::<TaskPatch>(serde_json::json!({ "text": " " }));
    assert!(result.is_err());
}

#[rstest]
fn task_serializes_with_camel_case_fields(task: Task) {
    let value = serde_json::to_value(&task).expect("task serializes");

    assert_eq!(value["id"], "T1");
    assert_eq!(value["title"], "Buy milk");
    assert_eq!(value["text"], "2%");
    assert_eq!(value["priority"], "Important");
    assert_eq!(value["completed"], false);
    assert_eq!(value["createdAt"], "2024-03-01T09:30:00Z");
}
