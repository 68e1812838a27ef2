//! Session store.

use notekeep_core::Result;
use notekeep_core::auth::User;
use notekeep_core::session::{SECURE_TOKEN_KEY, SECURE_USER_DATA_KEY, SecureStore, Session};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

/// Single source of truth for "is a user logged in".
///
/// Holds the current [`Session`] in a `watch` channel: the token and the user
/// are always replaced together, and every change is published to the
/// receivers handed out by [`SessionStore::subscribe`].
///
/// Persistence failures are logged and swallowed. The in-memory state still
/// changes, so a session whose credentials could not be written remains usable
/// until the process exits.
pub struct SessionStore {
    storage: Arc<dyn SecureStore>,
    state: watch::Sender<Session>,
    restore_started: AtomicBool,
}

impl SessionStore {
    /// Creates a store in the loading state.
    pub fn new(storage: Arc<dyn SecureStore>) -> Self {
        let (state, _) = watch::channel(Session::loading());
        Self {
            storage,
            state,
            restore_started: AtomicBool::new(false),
        }
    }

    /// Subscribes to session changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token().map(str::to_string)
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Rebuilds the session from secure storage. Runs once per store; later
    /// calls are ignored.
    ///
    /// A persisted user record that is not valid JSON, or lacks an id or an
    /// email, invalidates the whole session: both entries are removed and the
    /// store settles signed out. Read failures also settle signed out.
    pub async fn restore(&self) {
        if self.restore_started.swap(true, Ordering::SeqCst) {
            tracing::warn!("session restore requested twice; ignoring");
            return;
        }

        let session = match self.read_persisted().await {
            Ok((token, None)) => Session::restored(token, None),
            Ok((None, Some(_))) => {
                tracing::warn!("persisted user record without a token; clearing it");
                self.clear_persisted().await;
                Session::signed_out()
            }
            Ok((Some(token), Some(raw))) => match User::from_persisted(&raw) {
                Ok(user) => Session::restored(Some(token), Some(user)),
                Err(e) => {
                    tracing::error!(error = %e, "persisted session is corrupt; signing out");
                    self.clear_persisted().await;
                    Session::signed_out()
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to read persisted session");
                Session::signed_out()
            }
        };

        tracing::info!(
            signed_in = session.has_token(),
            user_id = session.user().map(|u| u.id.to_string()),
            "session restored"
        );
        self.publish(session);
    }

    /// Records a successful login and persists it.
    ///
    /// Does not navigate: redirection follows from the published state change.
    pub async fn sign_in(&self, token: &str, user: User) {
        if token.is_empty() {
            tracing::warn!(user_id = %user.id, "login returned an empty token; staying signed out");
            self.sign_out().await;
            return;
        }

        if let Err(e) = self.write_persisted(token, &user).await {
            tracing::error!(
                error = %e,
                "failed to persist session; it will not survive a restart"
            );
        }

        tracing::info!(user_id = %user.id, "signed in");
        self.publish(Session::signed_in(token, user));
    }

    /// Clears the session and its persisted credentials. Safe to call when
    /// already signed out.
    pub async fn sign_out(&self) {
        self.clear_persisted().await;
        tracing::info!("signed out");
        self.publish(Session::signed_out());
    }

    async fn read_persisted(&self) -> Result<(Option<String>, Option<String>)> {
        let token = self
            .storage
            .get_item(SECURE_TOKEN_KEY)
            .await?
            .filter(|t| !t.is_empty());
        let user = self.storage.get_item(SECURE_USER_DATA_KEY).await?;
        Ok((token, user))
    }

    async fn write_persisted(&self, token: &str, user: &User) -> Result<()> {
        let user_data = user.to_persisted()?;
        self.storage.set_item(SECURE_TOKEN_KEY, token).await?;
        self.storage
            .set_item(SECURE_USER_DATA_KEY, &user_data)
            .await?;
        Ok(())
    }

    async fn clear_persisted(&self) {
        for key in [SECURE_TOKEN_KEY, SECURE_USER_DATA_KEY] {
            if let Err(e) = self.storage.delete_item(key).await {
                tracing::error!(key, error = %e, "failed to delete persisted credential");
            }
        }
    }

    /// Publishes `session` unless it equals the current value, so receivers
    /// are woken once per actual transition.
    fn publish(&self, session: Session) {
        self.state.send_if_modified(|current| {
            if *current == session {
                false
            } else {
                *current = session;
                true
            }
        });
    }
}
