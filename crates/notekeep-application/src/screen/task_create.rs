use super::messages;
use super::{InFlight, NotePicker, Outcome, ScreenContext};
use notekeep_core::ResourceId;
use notekeep_core::note::NotesApi;
use notekeep_core::task::{Subtask, TaskDraft, TasksApi};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct TaskForm {
    title: String,
    is_completed: bool,
    subtasks: Vec<Subtask>,
}

/// Form for a new task attached to one of the user's notes.
pub struct TaskCreateScreen {
    ctx: ScreenContext,
    api: Arc<dyn TasksApi>,
    form: Mutex<TaskForm>,
    notes: NotePicker,
    saving: InFlight,
}

impl TaskCreateScreen {
    pub fn new(ctx: ScreenContext, tasks: Arc<dyn TasksApi>, notes: Arc<dyn NotesApi>) -> Self {
        Self {
            notes: NotePicker::new(ctx.clone(), notes),
            ctx,
            api: tasks,
            form: Mutex::new(TaskForm::default()),
            saving: InFlight::new(),
        }
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.form.lock().unwrap().title = title.into();
    }

    pub fn set_completed(&self, is_completed: bool) {
        self.form.lock().unwrap().is_completed = is_completed;
    }

    pub fn subtasks(&self) -> Vec<Subtask> {
        self.form.lock().unwrap().subtasks.clone()
    }

    /// Appends a subtask. Blank text is ignored.
    pub fn add_subtask(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.form.lock().unwrap().subtasks.push(Subtask::new(text));
    }

    pub fn remove_subtask(&self, index: usize) {
        let mut form = self.form.lock().unwrap();
        if index < form.subtasks.len() {
            form.subtasks.remove(index);
        }
    }

    pub fn toggle_subtask(&self, index: usize) {
        if let Some(subtask) = self.form.lock().unwrap().subtasks.get_mut(index) {
            subtask.is_completed = !subtask.is_completed;
        }
    }

    pub fn notes(&self) -> &NotePicker {
        &self.notes
    }

    pub async fn toggle_dropdown(&self) -> Outcome {
        self.notes.toggle_dropdown().await
    }

    pub fn select_note(&self, id: ResourceId) {
        self.notes.select(id);
    }

    /// Posts the task, using the title as its description, then returns to the
    /// previous screen.
    pub async fn create(&self) -> Outcome {
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let (title, is_completed, subtasks) = {
            let form = self.form.lock().unwrap();
            (form.title.clone(), form.is_completed, form.subtasks.clone())
        };
        if title.trim().is_empty() {
            return self.ctx.reject(messages::TASK_TITLE_REQUIRED);
        }
        let Some(note_id) = self.notes.selected() else {
            return self.ctx.reject(messages::TASK_NOTE_REQUIRED);
        };
        let Some(_saving) = self.saving.try_begin() else {
            return Outcome::Skipped;
        };

        let draft = TaskDraft {
            description: title,
            note_id,
            is_completed,
            subtasks,
        };
        match self.api.create_task(&token, &draft).await {
            Ok(()) => {
                tracing::info!(note_id = %draft.note_id, "task created");
                let outcome = self.ctx.succeed(messages::TASK_CREATED);
                self.ctx.navigator.back();
                outcome
            }
            Err(e) => self.ctx.fail("create_task", &e, messages::TASK_CREATE_FAILED),
        }
    }
}
