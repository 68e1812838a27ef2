//! Session lifecycle.
//!
//! The [`SessionStore`] is the only shared mutable state of the client.

mod store;

pub use store::SessionStore;
