use super::messages;
use super::{CategoryPicker, InFlight, Outcome, ScreenContext};
use notekeep_core::ResourceId;
use notekeep_core::category::CategoriesApi;
use notekeep_core::note::{Note, NoteDraft, NotesApi, strip_html};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct NoteForm {
    note: Option<Note>,
    title: String,
    content: String,
}

/// Editor for an existing note.
///
/// The body is edited as plain text: HTML tags are stripped on load and the
/// text is wrapped in a paragraph on save.
pub struct NoteDetailScreen {
    ctx: ScreenContext,
    api: Arc<dyn NotesApi>,
    id: ResourceId,
    form: Mutex<NoteForm>,
    categories: CategoryPicker,
    loading: InFlight,
    saving: InFlight,
}

impl NoteDetailScreen {
    pub fn new(
        ctx: ScreenContext,
        notes: Arc<dyn NotesApi>,
        categories: Arc<dyn CategoriesApi>,
        id: ResourceId,
    ) -> Self {
        Self {
            categories: CategoryPicker::new(ctx.clone(), categories),
            ctx,
            api: notes,
            id,
            form: Mutex::new(NoteForm::default()),
            loading: InFlight::new(),
            saving: InFlight::new(),
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn note(&self) -> Option<Note> {
        self.form.lock().unwrap().note.clone()
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

    pub fn categories(&self) -> &CategoryPicker {
        &self.categories
    }

    pub async fn toggle_dropdown(&self) -> Outcome {
        self.categories.toggle_dropdown().await
    }

    pub fn toggle_category(&self, id: &ResourceId) {
        self.categories.toggle(id);
    }

    pub async fn create_category(&self, name: &str) -> Outcome {
        self.categories.create(name).await
    }

    /// Fetches the note and fills the form with it.
    pub async fn load(&self) -> Outcome {
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let Some(_loading) = self.loading.try_begin() else {
            return Outcome::Skipped;
        };

        match self.api.get_note(&token, &self.id).await {
            Ok(note) => {
                self.categories.preselect(note.category_ids());
                let mut form = self.form.lock().unwrap();
                form.title = note.title.clone();
                form.content = strip_html(&note.content);
                form.note = Some(note);
                Outcome::Done
            }
            Err(e) => self.ctx.fail("get_note", &e, messages::NOTE_FETCH_FAILED),
        }
    }

    /// Sends the edited note and returns to the previous screen.
    pub async fn save(&self) -> Outcome {
        let (title, content) = {
            let form = self.form.lock().unwrap();
            (form.title.clone(), form.content.clone())
        };
        if title.trim().is_empty() {
            return self.ctx.reject(messages::TITLE_EMPTY);
        }
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let Some(_saving) = self.saving.try_begin() else {
            return Outcome::Skipped;
        };

        let draft = NoteDraft::from_plain(title, &content, self.categories.selected());
        match self.api.update_note(&token, &self.id, &draft).await {
            Ok(()) => {
                tracing::info!(note_id = %self.id, "note updated");
                let outcome = self.ctx.succeed(messages::NOTE_UPDATED);
                self.ctx.navigator.back();
                outcome
            }
            Err(e) => self.ctx.fail("update_note", &e, messages::NOTE_UPDATE_FAILED),
        }
    }

    /// Deletes the note and returns to the previous screen.
    pub async fn delete(&self) -> Outcome {
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let Some(_saving) = self.saving.try_begin() else {
            return Outcome::Skipped;
        };

        match self.api.delete_note(&token, &self.id).await {
            Ok(()) => {
                tracing::info!(note_id = %self.id, "note deleted");
                let outcome = self.ctx.succeed(messages::NOTE_DELETED);
                self.ctx.navigator.back();
                outcome
            }
            Err(e) => self.ctx.fail("delete_note", &e, messages::NOTE_DELETE_FAILED),
        }
    }
}
