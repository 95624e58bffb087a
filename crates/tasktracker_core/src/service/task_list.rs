//! Task list use-case controller.
//!
//! # Responsibility
//! - Own the draft input text and the ordered task list for one screen.
//! - Provide the add/toggle/delete entry points invoked by UI gestures.
//!
//! # Invariants
//! - Task ids in the list are unique.
//! - List order is append order; delete never reorders survivors.
//! - A failed `add()` leaves draft and list untouched.
//! - Logs carry ids and counts only, never task or draft text.

use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::view::snapshot::TaskListSnapshot;
use log::{debug, info, warn};

/// Result of a successful `add()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddedTask {
    /// Id of the appended task.
    pub id: TaskId,
    /// Signal for the input surface to blur/dismiss the keyboard.
    pub dismiss_input: bool,
}

/// In-memory state holder for one task list screen.
#[derive(Debug, Default)]
pub struct TaskListController {
    draft_text: String,
    tasks: Vec<Task>,
}

impl TaskListController {
    /// Creates an empty controller with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the draft text verbatim.
    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    /// Current uncommitted input text.
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    /// Tasks in display (append) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the empty state should be rendered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Commits the current draft as a new open task.
    ///
    /// # Contract
    /// - Appends exactly one task with `text = trim(draft)` and `done = false`.
    /// - Clears the draft and requests input dismissal on success.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyText` when the trimmed draft is empty;
    ///   no state changes in that case.
    pub fn add(&mut self) -> Result<AddedTask, TaskValidationError> {
        let task = match Task::new(&self.draft_text) {
            Ok(task) => task,
            Err(err) => {
                warn!(
                    "event=task_add module=task_list status=error reason={} draft_len={}",
                    err,
                    self.draft_text.chars().count()
                );
                return Err(err);
            }
        };

        let id = task.id;
        self.tasks.push(task);
        self.draft_text.clear();
        info!(
            "event=task_add module=task_list status=ok task_id={} count={}",
            id,
            self.tasks.len()
        );

        Ok(AddedTask {
            id,
            dismiss_input: true,
        })
    }

    /// Flips `done` on the matching task.
    ///
    /// Unknown ids are a no-op. Returns whether a task matched.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle();
                info!(
                    "event=task_toggle module=task_list status=ok task_id={} done={}",
                    id, task.done
                );
                true
            }
            None => {
                debug!("event=task_toggle module=task_list status=noop task_id={id}");
                false
            }
        }
    }

    /// Removes the matching task, keeping the order of the rest.
    ///
    /// Unknown ids are a no-op. Returns whether a task was removed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=task_delete module=task_list status=noop task_id={id}");
            return false;
        };

        self.tasks.remove(index);
        info!(
            "event=task_delete module=task_list status=ok task_id={} count={}",
            id,
            self.tasks.len()
        );
        true
    }

    /// Owned copy of the renderable state.
    pub fn snapshot(&self) -> TaskListSnapshot {
        TaskListSnapshot::new(self.draft_text.clone(), self.tasks.clone())
    }
}
