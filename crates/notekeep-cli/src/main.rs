use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::app::App;
use notekeep_application::screen::Outcome;

#[derive(Parser)]
#[command(name = "notekeep")]
#[command(about = "notekeep - notes and tasks for the Keep service", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Default)]
pub struct GlobalOpts {
    /// Directory holding config.toml, the secure store and the logs
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Configuration file to use instead of <config-dir>/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Secure store file to use instead of <config-dir>/secure_store.json
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or change the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(flatten)]
    Session(SessionCommands),
}

/// Commands that run against a restored session.
#[derive(Subcommand)]
enum SessionCommands {
    /// Sign in and remember the session
    Login {
        email: String,
        /// Password; read from NOTEKEEP_PASSWORD or prompted when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the current session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Manage notes
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },
    /// Manage tasks
    Tasks {
        #[command(subcommand)]
        action: TasksAction,
    },
    /// Manage note categories
    Categories {
        #[command(subcommand)]
        action: CategoriesAction,
    },
    /// Show where a path would land with the current session
    Route { path: String },
}

#[derive(Subcommand)]
enum NotesAction {
    /// List notes
    List,
    /// Show one note
    Show { id: String },
    /// Create a note
    Create {
        title: String,
        content: String,
        /// Category id to attach (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// Edit a note
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Category id to attach or detach (repeatable)
        #[arg(long = "toggle-category")]
        toggle_categories: Vec<String>,
        /// Create a category and attach it
        #[arg(long)]
        new_category: Option<String>,
    },
    /// Delete a note
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum TasksAction {
    /// List tasks
    List {
        /// Only show tasks whose description contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one task
    Show { id: String },
    /// Create a task attached to a note
    Create {
        title: String,
        /// Id of the note the task belongs to
        #[arg(long)]
        note: Option<String>,
        /// Subtask text (repeatable)
        #[arg(long = "subtask")]
        subtasks: Vec<String>,
        #[arg(long)]
        completed: bool,
    },
    /// Edit a task
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a task
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum CategoriesAction {
    /// List categories
    List,
    /// Create a category with a random colour
    Create { name: String },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Persist a new API base URL
    SetApiUrl { url: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&cli.global)?,
            ConfigAction::SetApiUrl { url } => commands::config::set_api_url(&cli.global, &url)?,
        },
        Commands::Session(command) => {
            let app = App::bootstrap(&cli.global).await?;
            run_session_command(&app, command).await?
        }
    };

    Ok(match outcome {
        Outcome::Done | Outcome::Skipped => ExitCode::SUCCESS,
        Outcome::Rejected | Outcome::Failed => ExitCode::FAILURE,
    })
}

async fn run_session_command(app: &App, command: SessionCommands) -> Result<Outcome> {
    let outcome = match command {
        SessionCommands::Login { email, password } => {
            commands::auth::login(app, email, password).await?
        }
        SessionCommands::Logout => commands::auth::logout(app).await,
        SessionCommands::Whoami => commands::auth::whoami(app)?,
        SessionCommands::Notes { action } => match action {
            NotesAction::List => commands::notes::list(app).await?,
            NotesAction::Show { id } => commands::notes::show(app, id.into()).await?,
            NotesAction::Create {
                title,
                content,
                categories,
            } => commands::notes::create(app, title, content, categories).await?,
            NotesAction::Edit {
                id,
                title,
                content,
                toggle_categories,
                new_category,
            } => {
                let edit = commands::notes::NoteEdit {
                    title,
                    content,
                    toggle_categories,
                    new_category,
                };
                commands::notes::edit(app, id.into(), edit).await?
            }
            NotesAction::Delete { id, yes } => commands::notes::delete(app, id.into(), yes).await?,
        },
        SessionCommands::Tasks { action } => match action {
            TasksAction::List { search } => commands::tasks::list(app, search).await?,
            TasksAction::Show { id } => commands::tasks::show(app, id.into()).await?,
            TasksAction::Create {
                title,
                note,
                subtasks,
                completed,
            } => commands::tasks::create(app, title, note, subtasks, completed).await?,
            TasksAction::Edit { id, title, content } => {
                commands::tasks::edit(app, id.into(), title, content).await?
            }
            TasksAction::Delete { id, yes } => commands::tasks::delete(app, id.into(), yes).await?,
        },
        SessionCommands::Categories { action } => match action {
            CategoriesAction::List => commands::categories::list(app).await?,
            CategoriesAction::Create { name } => commands::categories::create(app, &name).await?,
        },
        SessionCommands::Route { path } => commands::route::show(app, &path),
    };

    Ok(outcome)
}
