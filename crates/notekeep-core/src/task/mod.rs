//! Task domain module.
//!
//! This module contains the task and subtask models that the tasks screens
//! fetch and edit, and the port for the tasks endpoints.

mod api;
mod model;

pub use api::TasksApi;
pub use model::{Subtask, Task, TaskDraft, TaskUpdate, format_created_at};
