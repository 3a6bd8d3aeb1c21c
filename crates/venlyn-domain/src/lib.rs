//! Venlyn Domain Layer
//!
//! This crate contains the domain model shared by the Venlyn Ops engines.
//! It defines the read-only record shapes that the persistence layer
//! materializes, the closed enums for call and task classification, and the
//! trait interfaces through which engines receive data.
//!
//! ## Key Concepts
//!
//! - **CallRecord**: one inbound call with its outcome classification
//! - **Disposition**: the outcome of a call (answered, missed, booked, ...)
//! - **Intent**: the AI's classification of the caller's purpose
//! - **FollowUpTask**: a pending action with a due timestamp
//! - **TimeWindow**: a half-open `[from, to)` interval scoping aggregation
//!
//! ## Architecture
//!
//! Records here are immutable inputs: they are owned and mutated by the
//! persistence layer and only ever read by the engines. No function in this
//! crate reads a clock; the current time is always a caller-supplied
//! parameter so every computation downstream stays deterministic.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod call;
pub mod task;
pub mod traits;
pub mod window;

// Re-exports for convenience
pub use call::{CallId, CallRecord, Disposition, Intent};
pub use task::{ContactId, FollowUpTask, TaskId, TaskLink, TaskPriority, TaskStatus};
pub use window::{TimeWindow, TimestampMs};
