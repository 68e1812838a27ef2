//! Routing domain module.
//!
//! # Module Structure
//!
//! - `model`: routes, route groups and path parsing
//! - `guard`: the redirect decision between the login and authenticated areas
//! - `navigator`: the navigation port the redirect is applied through

mod guard;
mod model;
mod navigator;

pub use guard::{decide, redirect_for};
pub use model::{LOGIN_GROUP, Route, RouteGroup};
pub use navigator::Navigator;
