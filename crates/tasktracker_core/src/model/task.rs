//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record rendered by every presentation layer.
//! - Enforce text/id invariants at construction and decode time.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is trimmed and never empty.
//! - `text` does not change after creation; only `done` is mutable.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task; the only lookup key for toggle/delete.
pub type TaskId = Uuid;

/// Validation error for task creation and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty or whitespace-only after trimming.
    EmptyText,
    /// Stored text carries leading/trailing whitespace.
    UntrimmedText,
    /// Nil UUID is not a valid task identity.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "empty task"),
            Self::UntrimmedText => write!(f, "task text must be trimmed"),
            Self::NilId => write!(f, "task id must not be nil"),
        }
    }
}

impl Error for TaskValidationError {}

/// Single to-do item owned by a task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    text: String,
    pub done: bool,
}

/// Unvalidated wire shape; converted into `Task` through `validate()`.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    text: String,
    #[serde(default)]
    done: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        let task = Self {
            id: value.id,
            text: value.text,
            done: value.done,
        };
        task.validate()?;
        Ok(task)
    }
}

/// Whitespace set stripped from task text: Unicode `White_Space` plus the
/// zero-width no-break space (U+FEFF), without NEXT LINE (U+0085).
///
/// Matches the trim applied by the mobile text field, so a draft the UI
/// considers blank is also blank here.
pub fn is_task_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        other => other.is_whitespace(),
    }
}

/// Trims leading/trailing `is_task_whitespace` characters.
pub fn trim_task_text(text: &str) -> &str {
    text.trim_matches(is_task_whitespace)
}

impl Task {
    /// Creates an open task with a generated id from raw user input.
    ///
    /// Surrounding whitespace is trimmed before the emptiness check.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyText` when `text` is blank.
    pub fn new(text: &str) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates an open task with a caller-provided id.
    ///
    /// # Errors
    /// - `TaskValidationError::NilId` for `Uuid::nil()`.
    /// - `TaskValidationError::EmptyText` when `text` is blank.
    pub fn with_id(id: TaskId, text: &str) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            text: trim_task_text(text).to_string(),
            done: false,
        };
        task.validate()?;
        Ok(task)
    }

    /// Trimmed task text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    /// Checks identity and text invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        let trimmed = trim_task_text(&self.text);
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        if trimmed != self.text {
            return Err(TaskValidationError::UntrimmedText);
        }
        Ok(())
    }
}
