use super::app::App;
use super::confirm;
use anyhow::Result;
use colored::Colorize;
use notekeep_application::screen::{
    NoteCreateScreen, NoteDetailScreen, NotesListScreen, Outcome,
};
use notekeep_core::ResourceId;
use notekeep_core::note::Note;
use notekeep_core::route::Route;

/// Changes requested by `notes edit`.
pub struct NoteEdit {
    pub title: Option<String>,
    pub content: Option<String>,
    pub toggle_categories: Vec<String>,
    pub new_category: Option<String>,
}

fn print_note_line(note: &Note) {
    let categories = note
        .categories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if categories.is_empty() {
        println!("{:>5}  {}", note.id.to_string().dimmed(), note.title.bold());
    } else {
        println!(
            "{:>5}  {}  {}",
            note.id.to_string().dimmed(),
            note.title.bold(),
            format!("[{}]", categories).cyan()
        );
    }
}

pub async fn list(app: &App) -> Result<Outcome> {
    app.open_authenticated(Route::Home)?;

    let screen = NotesListScreen::new(app.ctx(), app.api.clone());
    let outcome = screen.fetch().await;
    if outcome.is_done() {
        let notes = screen.notes();
        if notes.is_empty() {
            println!("{}", "No notes yet.".dimmed());
        }
        for note in &notes {
            print_note_line(note);
        }
    }
    Ok(outcome)
}

pub async fn show(app: &App, id: ResourceId) -> Result<Outcome> {
    app.open_authenticated(Route::NoteDetail(id.clone()))?;

    let screen = NoteDetailScreen::new(app.ctx(), app.api.clone(), app.api.clone(), id);
    let outcome = screen.load().await;
    if let Some(note) = screen.note() {
        print_note_line(&note);
        println!();
        println!("{}", screen.content());
    }
    Ok(outcome)
}

pub async fn create(
    app: &App,
    title: String,
    content: String,
    categories: Vec<String>,
) -> Result<Outcome> {
    app.open_authenticated(Route::NoteCreate)?;

    let screen = NoteCreateScreen::new(app.ctx(), app.api.clone(), app.api.clone());
    screen.set_title(title);
    screen.set_content(content);
    for id in categories {
        screen.toggle_category(&ResourceId::from(id));
    }
    Ok(screen.create().await)
}

pub async fn edit(app: &App, id: ResourceId, edit: NoteEdit) -> Result<Outcome> {
    app.open_authenticated(Route::NoteDetail(id.clone()))?;

    let screen = NoteDetailScreen::new(app.ctx(), app.api.clone(), app.api.clone(), id);
    let outcome = screen.load().await;
    if !outcome.is_done() {
        return Ok(outcome);
    }

    if let Some(title) = edit.title {
        screen.set_title(title);
    }
    if let Some(content) = edit.content {
        screen.set_content(content);
    }
    for category in edit.toggle_categories {
        screen.toggle_category(&ResourceId::from(category));
    }
    if let Some(name) = edit.new_category {
        let outcome = screen.create_category(&name).await;
        if !outcome.is_done() {
            return Ok(outcome);
        }
    }

    Ok(screen.save().await)
}

pub async fn delete(app: &App, id: ResourceId, yes: bool) -> Result<Outcome> {
    app.open_authenticated(Route::NoteDetail(id.clone()))?;

    if !yes && !confirm(&format!("Delete note {}?", id))? {
        println!("{}", "Cancelled.".dimmed());
        return Ok(Outcome::Skipped);
    }

    let screen = NoteDetailScreen::new(app.ctx(), app.api.clone(), app.api.clone(), id);
    Ok(screen.delete().await)
}
