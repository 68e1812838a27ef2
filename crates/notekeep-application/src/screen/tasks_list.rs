use super::messages;
use super::{InFlight, Outcome, ScreenContext};
use notekeep_core::task::{Task, TasksApi};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct TaskList {
    tasks: Vec<Task>,
    query: String,
}

/// Task list with a client-side search box.
pub struct TasksListScreen {
    ctx: ScreenContext,
    api: Arc<dyn TasksApi>,
    list: Mutex<TaskList>,
    loading: InFlight,
}

impl TasksListScreen {
    pub fn new(ctx: ScreenContext, api: Arc<dyn TasksApi>) -> Self {
        Self {
            ctx,
            api,
            list: Mutex::new(TaskList::default()),
            loading: InFlight::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.list.lock().unwrap().tasks.clone()
    }

    /// Tasks whose description contains the search text, ignoring case.
    /// Everything when the search text is empty.
    pub fn visible_tasks(&self) -> Vec<Task> {
        let list = self.list.lock().unwrap();
        if list.query.is_empty() {
            return list.tasks.clone();
        }
        list.tasks
            .iter()
            .filter(|t| t.matches(&list.query))
            .cloned()
            .collect()
    }

    pub fn search(&self, text: impl Into<String>) {
        self.list.lock().unwrap().query = text.into();
    }

    pub async fn fetch(&self) -> Outcome {
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let Some(_loading) = self.loading.try_begin() else {
            return Outcome::Skipped;
        };

        match self.api.list_tasks(&token).await {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "tasks loaded");
                self.list.lock().unwrap().tasks = tasks;
                Outcome::Done
            }
            Err(e) => self.ctx.fail("list_tasks", &e, messages::TASKS_FETCH_FAILED),
        }
    }

    pub async fn sign_out(&self) {
        self.ctx.session.sign_out().await;
    }
}
