//! # Task Tracker
//!
//! A small command-line tracker for short personal tasks. Tasks live in a single JSON
//! file and move through three states: `todo`, `ongoing` and `done`.
//!
//! ## Quick Start
//!
//! ```bash
//! task-tracker --add "Buy milk"
//! task-tracker --update 0 "Buy milk and eggs"
//! task-tracker --ongoing 0
//! task-tracker --done 0
//! task-tracker --list done
//! task-tracker --remove 0
//! ```
//!
//! Every invocation performs exactly one action: load the file, apply the change or
//! query, and write the file back when it changed.
//!
//! Data is stored in `res/tasks.json` under the working directory unless `--db` or the
//! `TASK_TRACKER_DB` environment variable points elsewhere:
//!
//! ```json
//! { "tasks": { "0": { "description": "Buy milk", "status": "todo",
//!   "createdAt": "2024-05-01T09:00:00.123456789+00:00",
//!   "updatedAt": "2024-05-01T09:00:00.123456789+00:00" } } }
//! ```

pub mod cli;
pub mod cmd;
pub mod db;
pub mod error;
pub mod fields;
pub mod store;
pub mod task;

pub use error::{Result, TrackerError};
pub use store::TaskStore;
