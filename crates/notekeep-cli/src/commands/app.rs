use super::alerts::TerminalAlerts;
use crate::GlobalOpts;
use anyhow::{Context, Result};
use colored::Colorize;
use notekeep_application::screen::ScreenContext;
use notekeep_application::{RouteCoordinator, SessionStore, StackNavigator};
use notekeep_core::route::{Navigator, Route};
use notekeep_infrastructure::logging::init_logging;
use notekeep_infrastructure::{ConfigService, FileSecureStore, NotekeepPaths, ServiceType};
use notekeep_interaction::HttpApiClient;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

/// Builds the config service honouring `--config-dir` and `--config`.
pub fn config_service(opts: &GlobalOpts) -> Result<ConfigService> {
    match &opts.config {
        Some(path) => Ok(ConfigService::with_path(path.clone())),
        None => {
            let paths = NotekeepPaths::new(opts.config_dir.as_deref());
            ConfigService::new(&paths).context("Failed to locate the configuration directory")
        }
    }
}

/// Everything a session command needs, wired once per invocation.
pub struct App {
    pub api: Arc<HttpApiClient>,
    pub store: Arc<SessionStore>,
    pub navigator: Arc<StackNavigator>,
    coordinator: RouteCoordinator,
    alerts: Arc<TerminalAlerts>,
    _log_guard: Option<WorkerGuard>,
}

impl App {
    /// Loads the configuration, starts logging and restores the session.
    pub async fn bootstrap(opts: &GlobalOpts) -> Result<Self> {
        let paths = NotekeepPaths::new(opts.config_dir.as_deref());
        let config = config_service(opts)?
            .get_config()
            .context("Failed to load configuration")?;

        let log_dir = paths
            .get_path(ServiceType::Logs)
            .context("Failed to locate the log directory")?;
        let log_guard = match init_logging(&config.log_level, &log_dir) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("{} {}", "warning:".yellow().bold(), e);
                None
            }
        };

        let store_path = match &opts.store {
            Some(path) => path.clone(),
            None => paths
                .get_path(ServiceType::SecureStore)
                .context("Failed to locate the secure store")?,
        };
        tracing::debug!(store = %store_path.display(), api = %config.api_base_url, "bootstrapping");

        let store = Arc::new(SessionStore::new(Arc::new(FileSecureStore::with_path(
            store_path,
        ))));
        store.restore().await;

        let navigator = Arc::new(StackNavigator::new(Route::Home));
        let coordinator = RouteCoordinator::new(store.subscribe(), navigator.clone());

        Ok(Self {
            api: Arc::new(HttpApiClient::from_config(&config)),
            store,
            navigator,
            coordinator,
            alerts: Arc::new(TerminalAlerts),
            _log_guard: log_guard,
        })
    }

    pub fn ctx(&self) -> ScreenContext {
        ScreenContext::new(
            self.store.clone(),
            self.navigator.clone(),
            self.alerts.clone(),
        )
    }

    /// Navigates to `route` and lets the route guard redirect it.
    ///
    /// Returns the route actually shown.
    pub fn open(&self, route: Route) -> Route {
        self.navigator.push(route);
        self.coordinator.evaluate();
        self.navigator.current()
    }

    /// Re-applies the route guard after the session changed.
    pub fn settle(&self) -> Route {
        self.coordinator.evaluate();
        self.navigator.current()
    }

    /// Opens an authenticated screen, failing when the guard sends the user
    /// to the login screen instead.
    pub fn open_authenticated(&self, route: Route) -> Result<()> {
        let shown = self.open(route);
        if shown.is_login_area() {
            anyhow::bail!("Not signed in. Run `notekeep login <email>` first.");
        }
        Ok(())
    }
}
