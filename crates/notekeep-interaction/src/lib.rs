//! REST client for the Keep service.
//!
//! `HttpApiClient` implements every remote port defined in `notekeep-core`
//! (`AuthApi`, `NotesApi`, `CategoriesApi`, `TasksApi`) on top of a single
//! `reqwest::Client`.

mod client;
mod envelope;
mod resources;

pub use client::HttpApiClient;
pub use envelope::DataEnvelope;
