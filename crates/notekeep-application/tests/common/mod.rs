//! Hand-written port doubles shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use notekeep_application::screen::ScreenContext;
use notekeep_application::{SessionStore, StackNavigator};
use notekeep_core::alert::AlertSink;
use notekeep_core::auth::{AuthApi, Credentials, LoginResponse, User};
use notekeep_core::category::{CategoriesApi, Category, CategoryDraft};
use notekeep_core::note::{Note, NoteDraft, NotesApi};
use notekeep_core::route::Route;
use notekeep_core::session::SecureStore;
use notekeep_core::task::{Task, TaskDraft, TaskUpdate, TasksApi};
use notekeep_core::{NotekeepError, ResourceId, Result};
use notekeep_infrastructure::MemorySecureStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Records every alert instead of showing it.
#[derive(Default)]
pub struct RecordingAlerts {
    alerts: Mutex<Vec<(String, String)>>,
}

impl RecordingAlerts {
    pub fn all(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.all().into_iter().map(|(_, message)| message).collect()
    }

    pub fn last_message(&self) -> Option<String> {
        self.messages().pop()
    }

    pub fn count(&self) -> usize {
        self.alerts.lock().unwrap().len()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, title: &str, message: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

/// Secure store whose operations fail on demand.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemorySecureStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub fail_deletes: AtomicBool,
}

impl FlakyStore {
    pub fn failing_writes() -> Self {
        let store = Self::default();
        store.fail_writes.store(true, Ordering::SeqCst);
        store
    }

    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.peek(key)
    }
}

#[async_trait]
impl SecureStore for FlakyStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(NotekeepError::storage("keychain unavailable"));
        }
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(NotekeepError::storage("keychain is read-only"));
        }
        self.inner.set_item(key, value).await
    }

    async fn delete_item(&self, key: &str) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(NotekeepError::storage("keychain is read-only"));
        }
        self.inner.delete_item(key).await
    }
}

/// In-memory stand-in for the Keep service.
#[derive(Default)]
pub struct MockBackend {
    pub fail: AtomicBool,
    gate: Mutex<Option<Arc<Notify>>>,
    pub calls: Mutex<Vec<String>>,
    pub tokens: Mutex<Vec<String>>,
    pub credentials: Mutex<Vec<Credentials>>,
    pub login_user: Mutex<Option<User>>,
    pub notes: Mutex<Vec<Note>>,
    pub tasks: Mutex<Vec<Task>>,
    pub categories: Mutex<Vec<Category>>,
    pub note_drafts: Mutex<Vec<NoteDraft>>,
    pub task_drafts: Mutex<Vec<TaskDraft>>,
    pub task_updates: Mutex<Vec<TaskUpdate>>,
    pub category_drafts: Mutex<Vec<CategoryDraft>>,
}

impl MockBackend {
    pub fn failing() -> Self {
        let backend = Self::default();
        backend.fail.store(true, Ordering::SeqCst);
        backend
    }

    /// Makes every call wait until the returned handle is notified.
    pub fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, call: String, token: Option<&str>) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if let Some(token) = token {
            self.tokens.lock().unwrap().push(token.to_string());
        }

        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(NotekeepError::network("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for MockBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.enter("POST /login".to_string(), None).await?;
        self.credentials.lock().unwrap().push(credentials.clone());

        let user = self
            .login_user
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| NotekeepError::api(401, "Unauthorized"))?;
        Ok(LoginResponse {
            access_token: "token-123".to_string(),
            user,
        })
    }
}

#[async_trait]
impl NotesApi for MockBackend {
    async fn list_notes(&self, token: &str) -> Result<Vec<Note>> {
        self.enter("GET /notes".to_string(), Some(token)).await?;
        Ok(self.notes.lock().unwrap().clone())
    }

    async fn get_note(&self, token: &str, id: &ResourceId) -> Result<Note> {
        self.enter(format!("GET /notes/{}", id), Some(token)).await?;
        self.notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| &n.id == id)
            .cloned()
            .ok_or_else(|| NotekeepError::api(404, "Not Found"))
    }

    async fn create_note(&self, token: &str, draft: &NoteDraft) -> Result<()> {
        self.enter("POST /notes".to_string(), Some(token)).await?;
        self.note_drafts.lock().unwrap().push(draft.clone());
        Ok(())
    }

    async fn update_note(&self, token: &str, id: &ResourceId, draft: &NoteDraft) -> Result<()> {
        self.enter(format!("PUT /notes/{}", id), Some(token)).await?;
        self.note_drafts.lock().unwrap().push(draft.clone());
        Ok(())
    }

    async fn delete_note(&self, token: &str, id: &ResourceId) -> Result<()> {
        self.enter(format!("DELETE /notes/{}", id), Some(token))
            .await
    }
}

#[async_trait]
impl CategoriesApi for MockBackend {
    async fn list_categories(&self, token: &str) -> Result<Vec<Category>> {
        self.enter("GET /categories".to_string(), Some(token)).await?;
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn create_category(&self, token: &str, draft: &CategoryDraft) -> Result<Category> {
        self.enter("POST /categories".to_string(), Some(token)).await?;
        self.category_drafts.lock().unwrap().push(draft.clone());

        let mut categories = self.categories.lock().unwrap();
        let category = Category {
            id: ResourceId::from(100 + categories.len() as u64),
            name: draft.name.clone(),
            color: Some(draft.color.clone()),
        };
        categories.push(category.clone());
        Ok(category)
    }
}

#[async_trait]
impl TasksApi for MockBackend {
    async fn list_tasks(&self, token: &str) -> Result<Vec<Task>> {
        self.enter("GET /tasks".to_string(), Some(token)).await?;
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn get_task(&self, token: &str, id: &ResourceId) -> Result<Task> {
        self.enter(format!("GET /tasks/{}", id), Some(token)).await?;
        self.tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| NotekeepError::api(404, "Not Found"))
    }

    async fn create_task(&self, token: &str, draft: &TaskDraft) -> Result<()> {
        self.enter("POST /tasks".to_string(), Some(token)).await?;
        self.task_drafts.lock().unwrap().push(draft.clone());
        Ok(())
    }

    async fn update_task(&self, token: &str, id: &ResourceId, update: &TaskUpdate) -> Result<()> {
        self.enter(format!("PUT /tasks/{}", id), Some(token)).await?;
        self.task_updates.lock().unwrap().push(update.clone());
        Ok(())
    }

    async fn delete_task(&self, token: &str, id: &ResourceId) -> Result<()> {
        self.enter(format!("DELETE /tasks/{}", id), Some(token))
            .await
    }
}

pub fn user() -> User {
    User::new(1, "Alice", "alice@example.com")
}

pub fn note(id: u64, title: &str, content: &str, category_ids: &[u64]) -> Note {
    Note {
        id: ResourceId::from(id),
        title: title.to_string(),
        content: content.to_string(),
        categories: category_ids
            .iter()
            .map(|c| Category {
                id: ResourceId::from(*c),
                name: format!("cat-{}", c),
                color: None,
            })
            .collect(),
        created_at: None,
    }
}

pub fn task(id: u64, description: &str) -> Task {
    Task {
        id: ResourceId::from(id),
        description: description.to_string(),
        is_completed: false,
        user_id: None,
        note_id: None,
        subtasks: Vec::new(),
        created_at: None,
        updated_at: None,
        note: None,
        title: None,
        content: None,
    }
}

/// Wiring shared by the screen tests.
pub struct Harness {
    pub store: Arc<SessionStore>,
    pub navigator: Arc<StackNavigator>,
    pub alerts: Arc<RecordingAlerts>,
    pub backend: Arc<MockBackend>,
}

impl Harness {
    pub async fn signed_in() -> Self {
        let harness = Self::with_backend(MockBackend::default()).await;
        harness.store.sign_in("token-123", user()).await;
        harness
    }

    pub async fn signed_out() -> Self {
        Self::with_backend(MockBackend::default()).await
    }

    pub async fn with_backend(backend: MockBackend) -> Self {
        let store = Arc::new(SessionStore::new(Arc::new(MemorySecureStore::new())));
        store.restore().await;

        let navigator = Arc::new(StackNavigator::new(Route::Home));
        Self {
            store,
            navigator,
            alerts: Arc::new(RecordingAlerts::default()),
            backend: Arc::new(backend),
        }
    }

    pub fn ctx(&self) -> ScreenContext {
        ScreenContext::new(
            self.store.clone(),
            self.navigator.clone(),
            self.alerts.clone(),
        )
    }
}
