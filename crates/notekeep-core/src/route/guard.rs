//! Route guard.
//!
//! Keeps the visible screen consistent with the session: signed-out users are
//! sent to the login screen, signed-in users are sent away from it.

use super::model::{Route, RouteGroup};
use crate::session::Session;

/// Decides whether the current location must be replaced.
///
/// Returns `None` while the session is still being restored, so no redirect
/// fires before the persisted credentials are known.
///
/// Applying the returned route moves the location to the other group, which
/// makes the next evaluation return `None`.
pub fn decide(has_token: bool, is_loading: bool, group: RouteGroup) -> Option<Route> {
    if is_loading {
        return None;
    }

    match (has_token, group) {
        (false, RouteGroup::Authenticated) => Some(Route::Login),
        (true, RouteGroup::Login) => Some(Route::Home),
        _ => None,
    }
}

/// [`decide`] for a session snapshot and a location.
pub fn redirect_for(session: &Session, location: &Route) -> Option<Route> {
    decide(session.has_token(), session.is_loading(), location.group())
}
