use super::app::App;
use colored::Colorize;
use notekeep_application::screen::Outcome;
use notekeep_core::route::Route;

/// Prints where `path` lands once the route guard has run.
pub fn show(app: &App, path: &str) -> Outcome {
    let requested = Route::parse(path);
    let shown = app.open(requested.clone());

    if shown == requested {
        println!("{}", shown.path().green());
    } else {
        println!(
            "{} {} {}",
            requested.path().dimmed(),
            "→".yellow(),
            shown.path().yellow().bold()
        );
    }
    Outcome::Done
}
