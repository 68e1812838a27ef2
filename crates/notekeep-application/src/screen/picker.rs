//! Dropdown pickers shared by the note and task screens.

use super::messages;
use super::{InFlight, Outcome, ScreenContext};
use notekeep_core::ResourceId;
use notekeep_core::category::{CATEGORY_COLORS, CategoriesApi, Category, CategoryDraft};
use notekeep_core::note::{Note, NotesApi};
use rand::seq::SliceRandom;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct CategoryState {
    open: bool,
    categories: Vec<Category>,
    selected: Vec<ResourceId>,
}

/// Multi-select category dropdown.
///
/// Categories are fetched from the service each time the dropdown opens.
pub struct CategoryPicker {
    ctx: ScreenContext,
    api: Arc<dyn CategoriesApi>,
    state: Mutex<CategoryState>,
    loading: InFlight,
}

impl CategoryPicker {
    pub fn new(ctx: ScreenContext, api: Arc<dyn CategoriesApi>) -> Self {
        Self {
            ctx,
            api,
            state: Mutex::new(CategoryState::default()),
            loading: InFlight::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().unwrap().open
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.state.lock().unwrap().categories.clone()
    }

    pub fn selected(&self) -> Vec<ResourceId> {
        self.state.lock().unwrap().selected.clone()
    }

    /// Replaces the selection, e.g. with the categories of a loaded note.
    pub fn preselect(&self, ids: Vec<ResourceId>) {
        self.state.lock().unwrap().selected = ids;
    }

    /// Opens or closes the dropdown. Opening fetches the categories.
    pub async fn toggle_dropdown(&self) -> Outcome {
        let open = {
            let mut state = self.state.lock().unwrap();
            state.open = !state.open;
            state.open
        };

        if open { self.fetch().await } else { Outcome::Done }
    }

    pub async fn fetch(&self) -> Outcome {
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let Some(_loading) = self.loading.try_begin() else {
            return Outcome::Skipped;
        };

        match self.api.list_categories(&token).await {
            Ok(categories) => {
                tracing::debug!(count = categories.len(), "categories loaded");
                self.state.lock().unwrap().categories = categories;
                Outcome::Done
            }
            Err(e) => self
                .ctx
                .fail("list_categories", &e, messages::CATEGORIES_FETCH_FAILED),
        }
    }

    /// Adds `id` to the selection, or removes it if already selected.
    pub fn toggle(&self, id: &ResourceId) {
        let mut state = self.state.lock().unwrap();
        if let Some(pos) = state.selected.iter().position(|s| s == id) {
            state.selected.remove(pos);
        } else {
            state.selected.push(id.clone());
        }
    }

    /// Creates a category with a random palette colour and selects it.
    pub async fn create(&self, name: &str) -> Outcome {
        let name = name.trim();
        if name.is_empty() {
            return self.ctx.reject(messages::CATEGORY_NAME_EMPTY);
        }
        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };

        let draft = CategoryDraft {
            name: name.to_string(),
            color: random_color().to_string(),
        };

        match self.api.create_category(&token, &draft).await {
            Ok(category) => {
                tracing::info!(category_id = %category.id, "category created");
                let mut state = self.state.lock().unwrap();
                state.selected.push(category.id.clone());
                state.categories.push(category);
                drop(state);
                self.ctx.succeed(messages::CATEGORY_CREATED)
            }
            Err(e) => self
                .ctx
                .fail("create_category", &e, messages::CATEGORY_CREATE_FAILED),
        }
    }
}

fn random_color() -> &'static str {
    CATEGORY_COLORS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(CATEGORY_COLORS[0])
}

#[derive(Default)]
struct NoteState {
    open: bool,
    notes: Vec<Note>,
    selected: Option<ResourceId>,
}

/// Single-select dropdown listing the user's notes.
pub struct NotePicker {
    ctx: ScreenContext,
    api: Arc<dyn NotesApi>,
    state: Mutex<NoteState>,
    loading: InFlight,
}

impl NotePicker {
    pub fn new(ctx: ScreenContext, api: Arc<dyn NotesApi>) -> Self {
        Self {
            ctx,
            api,
            state: Mutex::new(NoteState::default()),
            loading: InFlight::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().unwrap().open
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.lock().unwrap().notes.clone()
    }

    pub fn selected(&self) -> Option<ResourceId> {
        self.state.lock().unwrap().selected.clone()
    }

    /// Title of the selected note, if it is among the fetched notes.
    pub fn selected_title(&self) -> Option<String> {
        let state = self.state.lock().unwrap();
        let id = state.selected.as_ref()?;
        state
            .notes
            .iter()
            .find(|n| &n.id == id)
            .map(|n| n.title.clone())
    }

    /// Opens or closes the dropdown. Opening fetches the notes.
    pub async fn toggle_dropdown(&self) -> Outcome {
        let open = {
            let mut state = self.state.lock().unwrap();
            state.open = !state.open;
            state.open
        };

        if !open {
            return Outcome::Done;
        }

        let Some(token) = self.ctx.require_token() else {
            return Outcome::Rejected;
        };
        let Some(_loading) = self.loading.try_begin() else {
            return Outcome::Skipped;
        };

        match self.api.list_notes(&token).await {
            Ok(notes) => {
                self.state.lock().unwrap().notes = notes;
                Outcome::Done
            }
            Err(e) => self
                .ctx
                .fail("list_notes", &e, messages::NOTE_CHOICES_FETCH_FAILED),
        }
    }

    /// Selects `id` and closes the dropdown.
    pub fn select(&self, id: ResourceId) {
        let mut state = self.state.lock().unwrap();
        state.selected = Some(id);
        state.open = false;
    }
}
