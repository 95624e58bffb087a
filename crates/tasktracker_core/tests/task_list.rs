use std::collections::HashSet;
use tasktracker_core::{TaskListController, TaskValidationError};

fn controller_with(texts: &[&str]) -> TaskListController {
    let mut controller = TaskListController::new();
    for text in texts {
        controller.set_draft_text(*text);
        controller.add().expect("seed task");
    }
    controller
}

fn texts(controller: &TaskListController) -> Vec<&str> {
    controller.tasks().iter().map(|task| task.text()).collect()
}

#[test]
fn add_appends_trimmed_open_task_and_clears_draft() {
    for input in ["Buy milk", "  Buy milk", "Buy milk\t\n", " a "] {
        let mut controller = controller_with(&["existing"]);
        controller.set_draft_text(input);

        let added = controller.add().expect("non-blank draft");

        assert_eq!(controller.len(), 2);
        let last = controller.tasks().last().unwrap();
        assert_eq!(last.id, added.id);
        assert_eq!(last.text(), input.trim());
        assert!(!last.done);
        assert!(added.dismiss_input);
        assert_eq!(controller.draft_text(), "");
    }
}

#[test]
fn add_rejects_blank_drafts_without_changes() {
    for input in ["", " ", "\t", "\n \r\n", "\u{FEFF}", " \u{FEFF}\u{A0} "] {
        let mut controller = controller_with(&["keep"]);
        let before = controller.snapshot();
        controller.set_draft_text(input);

        let err = controller.add().unwrap_err();

        assert_eq!(err, TaskValidationError::EmptyText);
        assert_eq!(controller.tasks(), before.tasks.as_slice());
        assert_eq!(controller.draft_text(), input);
    }
}

#[test]
fn next_line_character_is_kept_as_task_text() {
    let mut controller = TaskListController::new();
    controller.set_draft_text("\u{85}");

    controller.add().expect("U+0085 is not blank for the text field");

    assert_eq!(controller.tasks()[0].text(), "\u{85}");
}

#[test]
fn bom_is_trimmed_from_task_text() {
    let mut controller = TaskListController::new();
    controller.set_draft_text("\u{FEFF}Buy milk\u{FEFF}");

    controller.add().unwrap();

    assert_eq!(controller.tasks()[0].text(), "Buy milk");
}

#[test]
fn toggle_flips_only_the_target_task() {
    let mut controller = controller_with(&["one", "two", "three"]);
    let target = controller.tasks()[1].id;

    assert!(controller.toggle(target));

    let done: Vec<bool> = controller.tasks().iter().map(|task| task.done).collect();
    assert_eq!(done, vec![false, true, false]);
    assert_eq!(texts(&controller), vec!["one", "two", "three"]);

    assert!(controller.toggle(target));
    assert!(!controller.get(target).unwrap().done);
}

#[test]
fn unknown_ids_are_noops() {
    let mut controller = controller_with(&["one", "two"]);
    controller.toggle(controller.tasks()[0].id);
    let before = controller.snapshot();
    let unknown = uuid::Uuid::new_v4();

    assert!(!controller.toggle(unknown));
    assert!(!controller.delete(unknown));

    assert_eq!(controller.snapshot(), before);
}

#[test]
fn delete_removes_target_and_preserves_order() {
    let mut controller = controller_with(&["a", "b", "c", "d"]);
    let target = controller.tasks()[1].id;

    assert!(controller.delete(target));

    assert_eq!(controller.len(), 3);
    assert!(controller.get(target).is_none());
    assert_eq!(texts(&controller), vec!["a", "c", "d"]);
}

#[test]
fn is_empty_tracks_list_length() {
    let mut controller = TaskListController::new();
    assert!(controller.is_empty());
    assert!(controller.snapshot().is_empty);

    controller.set_draft_text("x");
    let added = controller.add().unwrap();
    assert!(!controller.is_empty());
    assert!(!controller.snapshot().is_empty);

    controller.delete(added.id);
    assert!(controller.is_empty());
}

#[test]
fn rapid_adds_get_distinct_ids() {
    let mut controller = TaskListController::new();
    for _ in 0..500 {
        controller.set_draft_text("same text");
        controller.add().unwrap();
    }

    let ids: HashSet<_> = controller.tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids.len(), 500);
}

#[test]
fn buy_milk_scenario() {
    let mut controller = TaskListController::new();

    controller.set_draft_text("Buy milk");
    let id1 = controller.add().unwrap().id;
    assert_eq!(texts(&controller), vec!["Buy milk"]);
    assert!(!controller.get(id1).unwrap().done);

    controller.set_draft_text("  ");
    assert_eq!(controller.add(), Err(TaskValidationError::EmptyText));
    assert_eq!(controller.len(), 1);

    controller.toggle(id1);
    assert!(controller.get(id1).unwrap().done);

    controller.delete(id1);
    assert!(controller.tasks().is_empty());
    assert!(controller.is_empty());
}

#[test]
fn snapshot_serializes_renderable_shape() {
    let mut controller = controller_with(&["Buy milk"]);
    controller.set_draft_text("half typed");

    let json = serde_json::to_value(controller.snapshot()).unwrap();
    assert_eq!(json["draft_text"], "half typed");
    assert_eq!(json["is_empty"], false);
    assert_eq!(json["tasks"][0]["text"], "Buy milk");
    assert_eq!(json["tasks"][0]["done"], false);
    assert!(json["tasks"][0]["id"].is_string());
}
