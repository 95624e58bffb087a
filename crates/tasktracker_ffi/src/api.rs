//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one task list session per screen to Dart via FRB.
//! - Flatten core types into string-keyed envelopes for the UI.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Task ids cross the boundary as canonical UUID strings; malformed ids
//!   behave like unknown ids.

use log::debug;
use tasktracker_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ScreenCopy, Task, TaskId, TaskListController, ValidationPrompt,
};
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Screen wording for header, input, empty state and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenCopyView {
    pub title: String,
    pub subtitle: String,
    pub input_placeholder: String,
    pub add_label: String,
    pub empty_title: String,
    pub empty_hint: String,
    pub footer: String,
    pub done_marker: String,
    pub delete_marker: String,
}

#[flutter_rust_bridge::frb(sync)]
pub fn screen_copy() -> ScreenCopyView {
    let copy = ScreenCopy::default();
    ScreenCopyView {
        title: copy.title.to_owned(),
        subtitle: copy.subtitle.to_owned(),
        input_placeholder: copy.input_placeholder.to_owned(),
        add_label: copy.add_label.to_owned(),
        empty_title: copy.empty_title.to_owned(),
        empty_hint: copy.empty_hint.to_owned(),
        footer: copy.footer.to_owned(),
        done_marker: copy.done_marker.to_owned(),
        delete_marker: copy.delete_marker.to_owned(),
    }
}

/// One row of the rendered task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form; also the list key.
    pub task_id: String,
    pub text: String,
    pub done: bool,
}

/// Renderable screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub draft_text: String,
    pub items: Vec<TaskItem>,
    /// Render the empty state instead of the list when `true`.
    pub is_empty: bool,
}

/// Alert contents for a rejected add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptView {
    pub title: String,
    pub message: String,
}

/// Result envelope for `TaskListSession::add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether a task was created.
    pub ok: bool,
    /// Created task ID on success.
    pub task_id: Option<String>,
    /// Alert to show immediately on failure.
    pub prompt: Option<PromptView>,
    /// Whether the UI should blur the input and hide the keyboard.
    pub dismiss_input: bool,
}

/// Task list state for one screen instance.
///
/// Dart owns the handle; dropping it discards the list.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Default)]
pub struct TaskListSession {
    controller: TaskListController,
}

impl TaskListSession {
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors every text-field change into the draft.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_draft_text(&mut self, text: String) {
        self.controller.set_draft_text(text);
    }

    /// Commits the draft (Add button or submit-on-enter).
    ///
    /// # FFI contract
    /// - Never panics.
    /// - Failure carries the prompt to show; draft is left as typed.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add(&mut self) -> TaskActionResponse {
        match self.controller.add() {
            Ok(added) => TaskActionResponse {
                ok: true,
                task_id: Some(added.id.to_string()),
                prompt: None,
                dismiss_input: added.dismiss_input,
            },
            Err(err) => {
                let prompt = ValidationPrompt::for_error(&err);
                TaskActionResponse {
                    ok: false,
                    task_id: None,
                    prompt: Some(PromptView {
                        title: prompt.title.to_owned(),
                        message: prompt.message.to_owned(),
                    }),
                    dismiss_input: false,
                }
            }
        }
    }

    /// Tap-to-toggle. Returns whether a task matched.
    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle(&mut self, task_id: String) -> bool {
        parse_task_id(&task_id).is_some_and(|id| self.controller.toggle(id))
    }

    /// Tap-to-delete. Returns whether a task was removed.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete(&mut self, task_id: String) -> bool {
        parse_task_id(&task_id).is_some_and(|id| self.controller.delete(id))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn snapshot(&self) -> TaskListView {
        let snapshot = self.controller.snapshot();
        TaskListView {
            draft_text: snapshot.draft_text,
            items: snapshot.tasks.iter().map(to_task_item).collect(),
            is_empty: snapshot.is_empty,
        }
    }
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    match Uuid::parse_str(raw.trim()) {
        Ok(id) => Some(id),
        Err(err) => {
            debug!("event=task_id_parse module=ffi status=noop error={err}");
            None
        }
    }
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        task_id: task.id.to_string(),
        text: task.text().to_owned(),
        done: task.done,
    }
}
