//! Endpoint implementations of the remote ports.

use crate::client::HttpApiClient;
use crate::envelope::DataEnvelope;
use async_trait::async_trait;
use notekeep_core::auth::{AuthApi, Credentials, LoginResponse};
use notekeep_core::category::{CategoriesApi, Category, CategoryDraft};
use notekeep_core::note::{Note, NoteDraft, NotesApi};
use notekeep_core::task::{Task, TaskDraft, TaskUpdate, TasksApi};
use notekeep_core::{NotekeepError, ResourceId, Result};
use reqwest::Method;

#[async_trait]
impl AuthApi for HttpApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let url = self.endpoints().login();
        tracing::debug!(url = %url, email = %credentials.email, "logging in");

        let request = self.request(Method::POST, &url, None).json(credentials);
        self.send_json(request).await
    }
}

#[async_trait]
impl NotesApi for HttpApiClient {
    async fn list_notes(&self, token: &str) -> Result<Vec<Note>> {
        self.get_list(&self.endpoints().notes(), token).await
    }

    async fn get_note(&self, token: &str, id: &ResourceId) -> Result<Note> {
        self.get_data(&self.endpoints().note(id), token, "note")
            .await
    }

    async fn create_note(&self, token: &str, draft: &NoteDraft) -> Result<()> {
        let request = self
            .request(Method::POST, &self.endpoints().notes(), Some(token))
            .json(draft);
        self.send(request).await?;
        Ok(())
    }

    async fn update_note(&self, token: &str, id: &ResourceId, draft: &NoteDraft) -> Result<()> {
        let request = self
            .request(Method::PUT, &self.endpoints().note(id), Some(token))
            .json(draft);
        self.send(request).await?;
        Ok(())
    }

    async fn delete_note(&self, token: &str, id: &ResourceId) -> Result<()> {
        let request = self.request(Method::DELETE, &self.endpoints().note(id), Some(token));
        self.send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl CategoriesApi for HttpApiClient {
    async fn list_categories(&self, token: &str) -> Result<Vec<Category>> {
        self.get_list(&self.endpoints().categories(), token).await
    }

    async fn create_category(&self, token: &str, draft: &CategoryDraft) -> Result<Category> {
        let url = self.endpoints().categories();
        let request = self.request(Method::POST, &url, Some(token)).json(draft);

        let envelope: DataEnvelope<Category> = self.send_json(request).await?;
        envelope
            .data
            .ok_or_else(|| NotekeepError::api(201, "created category missing from response"))
    }
}

#[async_trait]
impl TasksApi for HttpApiClient {
    async fn list_tasks(&self, token: &str) -> Result<Vec<Task>> {
        self.get_list(&self.endpoints().tasks(), token).await
    }

    async fn get_task(&self, token: &str, id: &ResourceId) -> Result<Task> {
        self.get_data(&self.endpoints().task(id), token, "task")
            .await
    }

    async fn create_task(&self, token: &str, draft: &TaskDraft) -> Result<()> {
        let request = self
            .request(Method::POST, &self.endpoints().tasks(), Some(token))
            .json(draft);
        self.send(request).await?;
        Ok(())
    }

    async fn update_task(&self, token: &str, id: &ResourceId, update: &TaskUpdate) -> Result<()> {
        let request = self
            .request(Method::PUT, &self.endpoints().task(id), Some(token))
            .json(update);
        self.send(request).await?;
        Ok(())
    }

    async fn delete_task(&self, token: &str, id: &ResourceId) -> Result<()> {
        let request = self.request(Method::DELETE, &self.endpoints().task(id), Some(token));
        self.send(request).await?;
        Ok(())
    }
}
