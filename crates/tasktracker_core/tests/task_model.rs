use tasktracker_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(task_id, " Buy milk ").unwrap();
    task.toggle();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["text"], "Buy milk");
    assert_eq!(json["done"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "invalid").unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn deserialize_defaults_missing_done_to_false() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "text": "sweep hall",
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert!(!task.done);
}

#[test]
fn deserialize_rejects_blank_text() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "text": "   ",
        "done": false
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("empty task"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_untrimmed_text() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "text": " padded",
        "done": false
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("trimmed"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_bom_only_text() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "text": "\u{FEFF}",
        "done": false
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("empty task"),
        "unexpected error: {err}"
    );
}
