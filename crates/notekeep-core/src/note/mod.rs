//! Note domain module.
//!
//! # Module Structure
//!
//! - `model`: notes and the create/update payload
//! - `content`: conversion between stored HTML and editable plain text
//! - `api`: the notes endpoints port

mod api;
mod content;
mod model;

pub use api::NotesApi;
pub use content::{strip_html, wrap_paragraph};
pub use model::{Note, NoteDraft, NoteSummary};
