//! Presentation-facing read models.
//!
//! # Responsibility
//! - Provide owned snapshots of controller state for rendering.
//! - Keep the fixed screen texts in one place for every UI adapter.

pub mod copy;
pub mod snapshot;
