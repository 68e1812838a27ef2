use notekeep_core::route::{Navigator, Route, redirect_for};
use notekeep_core::session::Session;
use std::sync::Arc;
use tokio::sync::watch;

/// Keeps the navigator's location consistent with the session.
///
/// Each evaluation looks at the latest session snapshot and the current
/// location, and replaces the location when the route guard asks for it.
/// A redirect moves the location into the other route group, so the follow-up
/// evaluation it triggers is a no-op.
pub struct RouteCoordinator {
    session: watch::Receiver<Session>,
    navigator: Arc<dyn Navigator>,
}

impl RouteCoordinator {
    pub fn new(session: watch::Receiver<Session>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// Runs one guard pass and applies the redirect, if any.
    pub fn evaluate(&self) -> Option<Route> {
        let session = self.session.borrow().clone();
        let location = self.navigator.current();

        let target = redirect_for(&session, &location)?;
        tracing::info!(from = %location, to = %target, "redirecting");
        self.navigator.replace(target.clone());
        Some(target)
    }

    /// Re-evaluates on every session or location change.
    ///
    /// Returns once the session store has been dropped.
    pub async fn run(mut self) {
        let mut location = self.navigator.watch_location();

        loop {
            self.session.borrow_and_update();
            location.borrow_and_update();
            self.evaluate();

            tokio::select! {
                changed = self.session.changed() => {
                    if changed.is_err() {
                        tracing::debug!("session store dropped; route coordinator stopping");
                        break;
                    }
                }
                changed = location.changed() => {
                    if changed.is_err() {
                        tracing::debug!("navigator dropped; route coordinator stopping");
                        break;
                    }
                }
            }
        }
    }
}
