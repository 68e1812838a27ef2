//! Authentication domain module.
//!
//! # Module Structure
//!
//! - `model`: user record and login payloads
//! - `api`: the login port implemented by the REST client

mod api;
mod model;

pub use api::AuthApi;
pub use model::{Credentials, LoginResponse, User};
