//! Note models.

use super::content::wrap_paragraph;
use crate::category::Category;
use crate::id::ResourceId;
use serde::{Deserialize, Serialize};

/// A note as returned by the notes endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: ResourceId,
    pub title: String,
    /// HTML body.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Note {
    pub fn category_ids(&self) -> Vec<ResourceId> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }
}

/// The subset of a note embedded in task payloads and note pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: ResourceId,
    pub title: String,
}

impl From<&Note> for NoteSummary {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
        }
    }
}

/// Body of `POST /notes` and `PUT /notes/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    pub title: String,
    /// HTML body.
    pub content: String,
    pub categories: Vec<ResourceId>,
}

impl NoteDraft {
    /// Builds a draft from plain-text content, wrapping it as a paragraph.
    pub fn from_plain(title: impl Into<String>, text: &str, categories: Vec<ResourceId>) -> Self {
        Self {
            title: title.into(),
            content: wrap_paragraph(text),
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_without_categories() {
        let note: Note =
            serde_json::from_str(r#"{"id": 1, "title": "T", "content": "<p>c</p>"}"#).unwrap();
        assert!(note.categories.is_empty());
        assert!(note.created_at.is_none());
    }

    #[test]
    fn test_draft_body() {
        let draft = NoteDraft::from_plain("Groceries", "milk", vec![ResourceId::from(2)]);
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"title": "Groceries", "content": "<p>milk</p>", "categories": [2]})
        );
    }
}
