//! Route model.
//!
//! Routes render to and parse from the path strings the app has always used,
//! so that a persisted or typed location resolves to the same screen.

use crate::id::ResourceId;
use std::fmt;

/// Reserved name of the route group holding the screens reachable without a
/// session.
pub const LOGIN_GROUP: &str = "(auth)";

/// Which side of the authentication boundary a route lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteGroup {
    /// Screens under `/(auth)/...`.
    Login,
    /// Every other screen.
    Authenticated,
}

/// A screen location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/(auth)/Login`
    Login,
    /// `/`, the notes list.
    Home,
    /// `/explore`, the tasks list.
    Explore,
    /// `/notes/create`
    NoteCreate,
    /// `/notes/{id}`
    NoteDetail(ResourceId),
    /// `/taches/createTaches`
    TaskCreate,
    /// `/taches/{id}`
    TaskDetail(ResourceId),
    /// Any other path, kept verbatim.
    Other(String),
}

impl Route {
    /// Parses a path. Group segments such as `(tabs)` are transparent, except
    /// the reserved login group which is kept to classify unknown paths.
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if segments.first() == Some(&LOGIN_GROUP) {
            return match segments.get(1..) {
                Some(["Login"]) => Route::Login,
                _ => Route::Other(normalize(&segments)),
            };
        }

        let visible: Vec<&str> = segments
            .iter()
            .copied()
            .filter(|s| !(s.starts_with('(') && s.ends_with(')')))
            .collect();

        match visible.as_slice() {
            [] | ["home"] | ["index"] => Route::Home,
            ["explore"] => Route::Explore,
            ["notes", "create"] => Route::NoteCreate,
            ["notes", id] => Route::NoteDetail(ResourceId::from(*id)),
            ["taches", "createTaches"] => Route::TaskCreate,
            ["taches", id] => Route::TaskDetail(ResourceId::from(*id)),
            _ => Route::Other(normalize(&segments)),
        }
    }

    /// Canonical path of the route.
    pub fn path(&self) -> String {
        match self {
            Route::Login => format!("/{}/Login", LOGIN_GROUP),
            Route::Home => "/".to_string(),
            Route::Explore => "/explore".to_string(),
            Route::NoteCreate => "/notes/create".to_string(),
            Route::NoteDetail(id) => format!("/notes/{}", id),
            Route::TaskCreate => "/taches/createTaches".to_string(),
            Route::TaskDetail(id) => format!("/taches/{}", id),
            Route::Other(path) => path.clone(),
        }
    }

    /// The group the route belongs to, decided by its first path segment.
    pub fn group(&self) -> RouteGroup {
        match self {
            Route::Login => RouteGroup::Login,
            Route::Other(path)
                if path.split('/').find(|s| !s.is_empty()) == Some(LOGIN_GROUP) =>
            {
                RouteGroup::Login
            }
            _ => RouteGroup::Authenticated,
        }
    }

    pub fn is_login_area(&self) -> bool {
        self.group() == RouteGroup::Login
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn normalize(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}
