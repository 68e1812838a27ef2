//! Tasks endpoints port.

use super::model::{Task, TaskDraft, TaskUpdate};
use crate::error::Result;
use crate::id::ResourceId;
use async_trait::async_trait;

/// Remote access to the user's tasks.
///
/// Every call is authorized with the bearer `token` of the current session.
#[async_trait]
pub trait TasksApi: Send + Sync {
    /// Calls `GET /tasks`. A response without `data` yields an empty list.
    async fn list_tasks(&self, token: &str) -> Result<Vec<Task>>;

    /// Calls `GET /tasks/{id}`.
    async fn get_task(&self, token: &str, id: &ResourceId) -> Result<Task>;

    /// Calls `POST /tasks`.
    async fn create_task(&self, token: &str, draft: &TaskDraft) -> Result<()>;

    /// Calls `PUT /tasks/{id}`.
    async fn update_task(&self, token: &str, id: &ResourceId, update: &TaskUpdate) -> Result<()>;

    /// Calls `DELETE /tasks/{id}`.
    async fn delete_task(&self, token: &str, id: &ResourceId) -> Result<()>;
}
