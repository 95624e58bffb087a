//! Renderable snapshot of a task list screen.

use crate::model::task::Task;
use serde::Serialize;

/// Owned copy of `{ draft_text, tasks, is_empty }`.
///
/// Built through `new`, `is_empty` mirrors `tasks.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListSnapshot {
    pub draft_text: String,
    pub tasks: Vec<Task>,
    pub is_empty: bool,
}

impl TaskListSnapshot {
    pub fn new(draft_text: String, tasks: Vec<Task>) -> Self {
        let is_empty = tasks.is_empty();
        Self {
            draft_text,
            tasks,
            is_empty,
        }
    }
}
