//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by the controller and presentation layers.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard removal from the in-memory list; nothing is persisted.

pub mod task;
