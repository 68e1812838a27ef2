use super::app::App;
use super::confirm;
use anyhow::Result;
use colored::Colorize;
use notekeep_application::screen::{
    Outcome, TaskCreateScreen, TaskDetailScreen, TasksListScreen,
};
use notekeep_core::ResourceId;
use notekeep_core::route::Route;
use notekeep_core::task::Task;

fn print_task_line(task: &Task) {
    let mark = if task.is_completed {
        "[x]".green()
    } else {
        "[ ]".normal()
    };
    let note = task
        .note
        .as_ref()
        .map(|n| format!("  ({})", n.title))
        .unwrap_or_default();

    println!(
        "{:>5}  {} {}{}  {}",
        task.id.to_string().dimmed(),
        mark,
        task.description,
        note.cyan(),
        task.created_label().dimmed()
    );
}

pub async fn list(app: &App, search: Option<String>) -> Result<Outcome> {
    app.open_authenticated(Route::Explore)?;

    let screen = TasksListScreen::new(app.ctx(), app.api.clone());
    let outcome = screen.fetch().await;
    if outcome.is_done() {
        if let Some(search) = search {
            screen.search(search);
        }
        let tasks = screen.visible_tasks();
        if tasks.is_empty() {
            println!("{}", "No tasks.".dimmed());
        }
        for task in &tasks {
            print_task_line(task);
        }
    }
    Ok(outcome)
}

pub async fn show(app: &App, id: ResourceId) -> Result<Outcome> {
    app.open_authenticated(Route::TaskDetail(id.clone()))?;

    let screen = TaskDetailScreen::new(app.ctx(), app.api.clone(), id);
    let outcome = screen.load().await;
    if let Some(task) = screen.task() {
        println!("{}", screen.title().bold());
        println!("{}", task.created_label().dimmed());
        if !screen.content().is_empty() {
            println!();
            println!("{}", screen.content());
        }
        for subtask in &task.subtasks {
            let mark = if subtask.is_completed { "[x]" } else { "[ ]" };
            println!("  {} {}", mark, subtask.description);
        }
    }
    Ok(outcome)
}

pub async fn create(
    app: &App,
    title: String,
    note: Option<String>,
    subtasks: Vec<String>,
    completed: bool,
) -> Result<Outcome> {
    app.open_authenticated(Route::TaskCreate)?;

    let screen = TaskCreateScreen::new(app.ctx(), app.api.clone(), app.api.clone());
    screen.set_title(title);
    screen.set_completed(completed);
    for subtask in &subtasks {
        screen.add_subtask(subtask);
    }
    if let Some(note) = note {
        screen.select_note(ResourceId::from(note));
    }
    Ok(screen.create().await)
}

pub async fn edit(
    app: &App,
    id: ResourceId,
    title: Option<String>,
    content: Option<String>,
) -> Result<Outcome> {
    app.open_authenticated(Route::TaskDetail(id.clone()))?;

    let screen = TaskDetailScreen::new(app.ctx(), app.api.clone(), id);
    let outcome = screen.load().await;
    if !outcome.is_done() {
        return Ok(outcome);
    }

    if let Some(title) = title {
        screen.set_title(title);
    }
    if let Some(content) = content {
        screen.set_content(content);
    }
    Ok(screen.save().await)
}

pub async fn delete(app: &App, id: ResourceId, yes: bool) -> Result<Outcome> {
    app.open_authenticated(Route::TaskDetail(id.clone()))?;

    if !yes && !confirm(&format!("Delete task {}?", id))? {
        println!("{}", "Cancelled.".dimmed());
        return Ok(Outcome::Skipped);
    }

    let screen = TaskDetailScreen::new(app.ctx(), app.api.clone(), id);
    Ok(screen.delete().await)
}
