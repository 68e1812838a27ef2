//! Category model.

use crate::id::ResourceId;
use serde::{Deserialize, Serialize};

/// Palette new categories draw their colour from.
pub const CATEGORY_COLORS: [&str; 8] = [
    "#9C27B0", "#2196F3", "#4CAF50", "#FF9800", "#E91E63", "#607D8B", "#F44336", "#009688",
];

/// A label attached to notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: ResourceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Body of `POST /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
}
