//! Screen controllers.
//!
//! Each controller owns the form state of one screen and talks to the remote
//! ports with the session token. Failures are reported through the
//! [`AlertSink`] and summarized by the returned [`Outcome`]; controllers never
//! return errors to their caller.

mod in_flight;
mod login;
pub mod messages;
mod note_create;
mod note_detail;
mod notes_list;
mod picker;
mod task_create;
mod task_detail;
mod tasks_list;

pub use in_flight::{InFlight, InFlightGuard};
pub use login::LoginScreen;
pub use note_create::NoteCreateScreen;
pub use note_detail::NoteDetailScreen;
pub use notes_list::NotesListScreen;
pub use picker::{CategoryPicker, NotePicker};
pub use task_create::TaskCreateScreen;
pub use task_detail::TaskDetailScreen;
pub use tasks_list::TasksListScreen;

use crate::session::SessionStore;
use notekeep_core::NotekeepError;
use notekeep_core::alert::AlertSink;
use notekeep_core::route::Navigator;
use std::sync::Arc;

/// Result of a screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action completed.
    Done,
    /// The same action was already in flight; nothing was sent.
    Skipped,
    /// Local validation or a missing token stopped the action.
    Rejected,
    /// The remote call failed.
    Failed,
}

impl Outcome {
    pub fn is_done(self) -> bool {
        self == Outcome::Done
    }
}

/// Collaborators shared by every screen.
#[derive(Clone)]
pub struct ScreenContext {
    pub session: Arc<SessionStore>,
    pub navigator: Arc<dyn Navigator>,
    pub alerts: Arc<dyn AlertSink>,
}

impl ScreenContext {
    pub fn new(
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
        alerts: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            session,
            navigator,
            alerts,
        }
    }

    /// The session token, or an alert when there is none.
    pub(crate) fn require_token(&self) -> Option<String> {
        let token = self.session.token();
        if token.is_none() {
            self.alerts
                .alert(messages::ERROR_TITLE, messages::TOKEN_UNAVAILABLE);
        }
        token
    }

    pub(crate) fn reject(&self, message: &str) -> Outcome {
        self.alerts.alert(messages::ERROR_TITLE, message);
        Outcome::Rejected
    }

    pub(crate) fn fail(&self, action: &str, error: &NotekeepError, message: &str) -> Outcome {
        if error.is_unauthorized() {
            tracing::warn!(action, error = %error, "session token rejected by the service");
        } else {
            tracing::warn!(action, error = %error, "screen action failed");
        }
        self.alerts.alert(messages::ERROR_TITLE, message);
        Outcome::Failed
    }

    pub(crate) fn succeed(&self, message: &str) -> Outcome {
        self.alerts.alert(messages::SUCCESS_TITLE, message);
        Outcome::Done
    }
}
