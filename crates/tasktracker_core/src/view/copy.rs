//! Fixed user-visible texts of the task list screen.
//!
//! # Responsibility
//! - Keep header, input, empty-state and footer wording in one place.
//! - Map add failures to the prompt the UI shows immediately.

use crate::model::task::TaskValidationError;

/// Static wording rendered around the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_placeholder: &'static str,
    pub add_label: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub footer: &'static str,
    pub done_marker: &'static str,
    pub delete_marker: &'static str,
}

impl Default for ScreenCopy {
    fn default() -> Self {
        Self {
            title: "Volunteers Task Tracker",
            subtitle: "Keep track of all your tasks",
            input_placeholder: "Enter a new task...",
            add_label: "Add",
            empty_title: "No tasks pending",
            empty_hint: "Add a task",
            footer: "Made by Natalie Mashele",
            done_marker: "✓",
            delete_marker: "❌",
        }
    }
}

/// Alert shown when `add()` is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPrompt {
    pub title: &'static str,
    pub message: &'static str,
}

impl ValidationPrompt {
    pub fn for_error(error: &TaskValidationError) -> Self {
        let message = match error {
            TaskValidationError::EmptyText => "Please enter a task first!",
            // Decode-only failures; `add()` never yields these.
            TaskValidationError::UntrimmedText | TaskValidationError::NilId => {
                "That task could not be saved."
            }
        };
        Self {
            title: "Oops!",
            message,
        }
    }
}
