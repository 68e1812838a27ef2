//! Session snapshot model.

use crate::auth::User;

/// The client-side record of whether a user is authenticated and who they are.
///
/// Fields are private so that a user can never be observed without a token:
/// every constructor drops the user when no token is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    is_loading: bool,
}

impl Session {
    /// The state before the persisted credentials have been read.
    pub fn loading() -> Self {
        Self {
            token: None,
            user: None,
            is_loading: true,
        }
    }

    /// A settled state with no user.
    pub fn signed_out() -> Self {
        Self {
            token: None,
            user: None,
            is_loading: false,
        }
    }

    /// A settled state for a user who has just signed in.
    ///
    /// An empty token does not authenticate anyone and yields a signed-out
    /// state.
    pub fn signed_in(token: impl Into<String>, user: User) -> Self {
        Self::restored(Some(token.into()), Some(user))
    }

    /// A settled state rebuilt from secure storage.
    ///
    /// A token may be restored without a user record; a user record without a
    /// usable token is discarded. Empty tokens count as absent.
    pub fn restored(token: Option<String>, user: Option<User>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        let user = if token.is_some() { user } else { None };
        Self {
            token,
            user,
            is_loading: false,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}
