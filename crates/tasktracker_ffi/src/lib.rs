//! Flutter bridge for the task tracker core.

pub mod api;
