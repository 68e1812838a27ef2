use super::messages;
use super::{InFlight, Outcome, ScreenContext};
use notekeep_core::note::{Note, NotesApi};
use std::sync::{Arc, Mutex};

/// Home screen listing the user's notes.
pub struct NotesListScreen {
    ctx: ScreenContext,
    api: Arc<dyn NotesApi>,
    notes: Mutex<Vec<Note>>,
    loading: InFlight,
}

impl NotesListScreen {
    pub fn new(ctx: ScreenContext, api: Arc<dyn NotesApi>) -> Self {
        Self {
            ctx,
            api,
            notes: Mutex::new(Vec::new()),
            loading: InFlight::new(),
        }
    }

    pub fn notes(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    pub async fn fetch(&self) -> Outcome {
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let Some(_loading) = self.loading.try_begin() else {
            return Outcome::Skipped;
        };

        match self.api.list_notes(&token).await {
            Ok(notes) => {
                tracing::debug!(count = notes.len(), "notes loaded");
                *self.notes.lock().unwrap() = notes;
                Outcome::Done
            }
            Err(e) => self.ctx.fail("list_notes", &e, messages::NOTES_FETCH_FAILED),
        }
    }
}
