use super::app::App;
use super::prompt_password;
use anyhow::Result;
use colored::Colorize;
use notekeep_application::screen::{LoginScreen, Outcome};
use notekeep_core::route::Route;

/// Environment variable read when `--password` is omitted.
pub const PASSWORD_ENV: &str = "NOTEKEEP_PASSWORD";

pub async fn login(app: &App, email: String, password: Option<String>) -> Result<Outcome> {
    let shown = app.open(Route::Login);
    if !shown.is_login_area() {
        let who = app.store.user().map(|u| u.email).unwrap_or_default();
        println!("✅ Already signed in {}", who.dimmed());
        return Ok(Outcome::Done);
    }

    let password = match password.or_else(|| std::env::var(PASSWORD_ENV).ok()) {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };

    let screen = LoginScreen::new(app.ctx(), app.api.clone());
    screen.set_email(email);
    screen.set_password(password);

    let outcome = screen.submit().await;
    for line in screen.debug_log() {
        tracing::debug!(target: "notekeep::login", "{}", line);
    }

    if outcome.is_done() {
        let landed = app.settle();
        let user = app.store.user();
        println!(
            "✅ Signed in as {} ({})",
            user.as_ref().map(|u| u.name.as_str()).unwrap_or_default().bold(),
            user.as_ref().map(|u| u.email.as_str()).unwrap_or_default()
        );
        tracing::debug!(route = %landed, "login finished");
    }
    Ok(outcome)
}

pub async fn logout(app: &App) -> Outcome {
    app.store.sign_out().await;
    let landed = app.settle();
    tracing::debug!(route = %landed, "logout finished");
    println!("👋 Signed out");
    Outcome::Done
}

pub fn whoami(app: &App) -> Result<Outcome> {
    app.open_authenticated(Route::Home)?;

    match app.store.user() {
        Some(user) => {
            println!("{} {}", "Name: ".dimmed(), user.name);
            println!("{} {}", "Email:".dimmed(), user.email);
            println!("{} {}", "Id:   ".dimmed(), user.id);
        }
        None => println!("Signed in (no profile stored)"),
    }
    Ok(Outcome::Done)
}
