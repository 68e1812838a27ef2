//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: the in-memory session snapshot
//! - `storage`: secure key-value storage port and the credential keys

mod model;
mod storage;

pub use model::Session;
pub use storage::{SECURE_TOKEN_KEY, SECURE_USER_DATA_KEY, SecureStore};
