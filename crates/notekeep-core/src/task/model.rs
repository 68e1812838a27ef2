//! Task domain model.

use crate::id::ResourceId;
use crate::note::NoteSummary;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A checklist item belonging to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    /// Absent until the service has stored the subtask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Subtask {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
            is_completed: false,
        }
    }
}

/// A task as returned by the tasks endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: ResourceId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_id: Option<ResourceId>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// The note the task is attached to, when the service embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<NoteSummary>,
    /// Set once the task has been edited through `PUT /tasks/{id}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// HTML body set through `PUT /tasks/{id}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Task {
    /// Title shown on the detail screen: the edited title, else the description.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.description)
    }

    /// Human readable creation date, see [`format_created_at`].
    pub fn created_label(&self) -> String {
        format_created_at(self.created_at.as_deref().unwrap_or_default())
    }

    /// Case-insensitive substring match on the description.
    pub fn matches(&self, query: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    pub description: String,
    pub note_id: ResourceId,
    pub is_completed: bool,
    pub subtasks: Vec<Subtask>,
}

/// Body of `PUT /tasks/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub content: String,
}

const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Formats a service timestamp as `5 mars 2024`.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS` and bare dates.
/// Anything else renders as `Date inconnue`.
pub fn format_created_at(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_FR[date.month0() as usize],
            date.year()
        ),
        Err(_) => "Date inconnue".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_json() -> &'static str {
        r#"{
            "id": 3,
            "description": "Buy Milk",
            "is_completed": false,
            "user_id": 1,
            "note_id": 2,
            "subtasks": [{"id": 10, "description": "check fridge", "is_completed": true}],
            "created_at": "2024-03-05T10:00:00.000000Z",
            "updated_at": "2024-03-05T10:00:00.000000Z",
            "note": {"id": 2, "title": "Groceries"}
        }"#
    }

    #[test]
    fn test_parse_task() {
        let task: Task = serde_json::from_str(task_json()).unwrap();
        assert_eq!(task.subtasks.len(), 1);
        assert!(task.subtasks[0].is_completed);
        assert_eq!(task.note.as_ref().unwrap().title, "Groceries");
        assert_eq!(task.display_title(), "Buy Milk");
        assert_eq!(task.created_label(), "5 mars 2024");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let task: Task = serde_json::from_str(task_json()).unwrap();
        assert!(task.matches("milk"));
        assert!(task.matches("BUY"));
        assert!(!task.matches("bread"));
    }

    #[test]
    fn test_format_created_at_variants() {
        assert_eq!(format_created_at("2023-12-31 23:00:00"), "31 déc. 2023");
        assert_eq!(format_created_at("2024-08-01"), "1 août 2024");
        assert_eq!(format_created_at("yesterday"), "Date inconnue");
        assert_eq!(format_created_at(""), "Date inconnue");
    }

    #[test]
    fn test_new_subtask_omits_id() {
        let body = serde_json::to_value(Subtask::new("step")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"description": "step", "is_completed": false})
        );
    }
}
