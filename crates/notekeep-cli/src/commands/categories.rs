use super::app::App;
use anyhow::Result;
use colored::Colorize;
use notekeep_application::screen::{CategoryPicker, Outcome};
use notekeep_core::route::Route;

pub async fn list(app: &App) -> Result<Outcome> {
    app.open_authenticated(Route::NoteCreate)?;

    let picker = CategoryPicker::new(app.ctx(), app.api.clone());
    let outcome = picker.fetch().await;
    if outcome.is_done() {
        for category in picker.categories() {
            let color = category.color.as_deref().unwrap_or("-");
            println!(
                "{:>5}  {}  {}",
                category.id.to_string().dimmed(),
                category.name.bold(),
                color.dimmed()
            );
        }
    }
    Ok(outcome)
}

pub async fn create(app: &App, name: &str) -> Result<Outcome> {
    app.open_authenticated(Route::NoteCreate)?;

    let picker = CategoryPicker::new(app.ctx(), app.api.clone());
    let outcome = picker.create(name).await;
    if let Some(category) = picker.categories().last() {
        println!(
            "{:>5}  {}",
            category.id.to_string().dimmed(),
            category.name.bold()
        );
    }
    Ok(outcome)
}
