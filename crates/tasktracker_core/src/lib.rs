//! Core domain logic for the task tracker screen.
//! This crate is the single source of truth for task list invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::task::{is_task_whitespace, trim_task_text, Task, TaskId, TaskValidationError};
pub use service::task_list::{AddedTask, TaskListController};
pub use view::copy::{ScreenCopy, ValidationPrompt};
pub use view::snapshot::TaskListSnapshot;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
