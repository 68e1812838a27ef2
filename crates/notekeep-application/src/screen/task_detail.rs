use super::messages;
use super::{InFlight, Outcome, ScreenContext};
use notekeep_core::ResourceId;
use notekeep_core::note::strip_html;
use notekeep_core::task::{Task, TaskUpdate, TasksApi};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct TaskForm {
    task: Option<Task>,
    title: String,
    content: String,
}

/// Editor for an existing task.
pub struct TaskDetailScreen {
    ctx: ScreenContext,
    api: Arc<dyn TasksApi>,
    id: ResourceId,
    form: Mutex<TaskForm>,
    loading: InFlight,
    saving: InFlight,
}

impl TaskDetailScreen {
    pub fn new(ctx: ScreenContext, api: Arc<dyn TasksApi>, id: ResourceId) -> Self {
        Self {
            ctx,
            api,
            id,
            form: Mutex::new(TaskForm::default()),
            loading: InFlight::new(),
            saving: InFlight::new(),
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn task(&self) -> Option<Task> {
        self.form.lock().unwrap().task.clone()
    }

    pub fn title(&self) -> String {
        self.form.lock().unwrap().title.clone()
    }

    pub fn content(&self) -> String {
        self.form.lock().unwrap().content.clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.form.lock().unwrap().title = title.into();
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.form.lock().unwrap().content = content.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    /// Fetches the task. The title falls back to the description for tasks
    /// that were never edited.
    pub async fn load(&self) -> Outcome {
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let Some(_loading) = self.loading.try_begin() else {
            return Outcome::Skipped;
        };

        match self.api.get_task(&token, &self.id).await {
            Ok(task) => {
                let mut form = self.form.lock().unwrap();
                form.title = task.display_title().to_string();
                form.content = strip_html(task.content.as_deref().unwrap_or_default());
                form.task = Some(task);
                Outcome::Done
            }
            Err(e) => self.ctx.fail("get_task", &e, messages::TASK_FETCH_FAILED),
        }
    }

    pub async fn save(&self) -> Outcome {
        let update = {
            let form = self.form.lock().unwrap();
            TaskUpdate {
                title: form.title.clone(),
                content: form.content.clone(),
            }
        };
        if update.title.trim().is_empty() {
            return self.ctx.reject(messages::TITLE_EMPTY);
        }
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let Some(_saving) = self.saving.try_begin() else {
            return Outcome::Skipped;
        };

        match self.api.update_task(&token, &self.id, &update).await {
            Ok(()) => {
                tracing::info!(task_id = %self.id, "task updated");
                let outcome = self.ctx.succeed(messages::TASK_UPDATED);
                self.ctx.navigator.back();
                outcome
            }
            Err(e) => self.ctx.fail("update_task", &e, messages::TASK_UPDATE_FAILED),
        }
    }

    pub async fn delete(&self) -> Outcome {
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let Some(_saving) = self.saving.try_begin() else {
            return Outcome::Skipped;
        };

        match self.api.delete_task(&token, &self.id).await {
            Ok(()) => {
                tracing::info!(task_id = %self.id, "task deleted");
                let outcome = self.ctx.succeed(messages::TASK_DELETED);
                self.ctx.navigator.back();
                outcome
            }
            Err(e) => self.ctx.fail("delete_task", &e, messages::TASK_DELETE_FAILED),
        }
    }
}
