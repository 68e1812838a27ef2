pub mod alert;
pub mod auth;
pub mod category;
pub mod config;
pub mod error;
pub mod id;
pub mod note;
pub mod route;
pub mod session;
pub mod task;

// Re-export common types
pub use error::{NotekeepError, Result};
pub use id::ResourceId;
