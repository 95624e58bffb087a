//! Core use-case services.
//!
//! # Responsibility
//! - Hold screen state and expose the mutating entry points UI layers call.
//! - Keep UI/FFI layers free of list bookkeeping.

pub mod task_list;
