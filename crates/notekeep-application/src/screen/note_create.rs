use super::messages;
use super::{CategoryPicker, InFlight, Outcome, ScreenContext};
use notekeep_core::ResourceId;
use notekeep_core::category::CategoriesApi;
use notekeep_core::note::{NoteDraft, NotesApi};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct NoteForm {
    title: String,
    content: String,
}

pub struct NoteCreateScreen {
    ctx: ScreenContext,
    api: Arc<dyn NotesApi>,
    form: Mutex<NoteForm>,
    categories: CategoryPicker,
    saving: InFlight,
}

impl NoteCreateScreen {
    pub fn new(
        ctx: ScreenContext,
        notes: Arc<dyn NotesApi>,
        categories: Arc<dyn CategoriesApi>,
    ) -> Self {
        Self {
            categories: CategoryPicker::new(ctx.clone(), categories),
            ctx,
            api: notes,
            form: Mutex::new(NoteForm::default()),
            saving: InFlight::new(),
        }
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.form.lock().unwrap().title = title.into();
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.form.lock().unwrap().content = content.into();
    }

    pub fn categories(&self) -> &CategoryPicker {
        &self.categories
    }

    pub async fn toggle_dropdown(&self) -> Outcome {
        self.categories.toggle_dropdown().await
    }

    pub fn toggle_category(&self, id: &ResourceId) {
        self.categories.toggle(id);
    }

    /// Posts the new note. The form is cleared on success.
    pub async fn create(&self) -> Outcome {
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let (title, content) = {
            let form = self.form.lock().unwrap();
            (form.title.clone(), form.content.clone())
        };
        if title.trim().is_empty() || content.trim().is_empty() {
            return self.ctx.reject(messages::NOTE_FIELDS_REQUIRED);
        }
        let Some(_saving) = self.saving.try_begin() else {
            return Outcome::Skipped;
        };

        let draft = NoteDraft::from_plain(title, &content, self.categories.selected());
        match self.api.create_note(&token, &draft).await {
            Ok(()) => {
                tracing::info!("note created");
                *self.form.lock().unwrap() = NoteForm::default();
                self.categories.preselect(Vec::new());
                self.ctx.succeed(messages::NOTE_CREATED)
            }
            Err(e) => self.ctx.fail("create_note", &e, messages::NOTE_CREATE_FAILED),
        }
    }
}
