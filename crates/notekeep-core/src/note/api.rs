//! Notes endpoints port.

use super::model::{Note, NoteDraft};
use crate::error::Result;
use crate::id::ResourceId;
use async_trait::async_trait;

/// Remote access to the user's notes.
///
/// Every call is authorized with the bearer `token` of the current session.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// Calls `GET /notes`. A response without `data` yields an empty list.
    async fn list_notes(&self, token: &str) -> Result<Vec<Note>>;

    /// Calls `GET /notes/{id}`.
    async fn get_note(&self, token: &str, id: &ResourceId) -> Result<Note>;

    /// Calls `POST /notes`.
    async fn create_note(&self, token: &str, draft: &NoteDraft) -> Result<()>;

    /// Calls `PUT /notes/{id}`.
    async fn update_note(&self, token: &str, id: &ResourceId, draft: &NoteDraft) -> Result<()>;

    /// Calls `DELETE /notes/{id}`.
    async fn delete_note(&self, token: &str, id: &ResourceId) -> Result<()>;
}
