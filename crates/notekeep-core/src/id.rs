//! Identifiers for remote resources.
//!
//! The Keep service is inconsistent about id types: most endpoints return
//! integers, some screens round-trip them as strings. `ResourceId` accepts
//! both on the way in and writes canonical integers back as integers; any
//! other text (`"007"`, `"+5"`) stays a string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a note, task, subtask, category or user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric form when the id is an unsigned integer.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Numeric form only when it prints back to exactly the same text.
    fn canonical_u64(&self) -> Option<u64> {
        self.as_u64().filter(|n| n.to_string() == self.0)
    }

    /// Mirrors a JavaScript truthiness check on the raw id: empty strings
    /// and the integer zero do not identify anything.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty() || self.as_u64() == Some(0)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.canonical_u64() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numbers_and_strings() {
        let ids: Vec<ResourceId> = serde_json::from_str(r#"[12, "abc", "7"]"#).unwrap();
        assert_eq!(ids[0].as_str(), "12");
        assert_eq!(ids[1].as_str(), "abc");
        assert_eq!(ids[2].as_u64(), Some(7));
    }

    #[test]
    fn test_numeric_ids_serialize_as_numbers() {
        let json = serde_json::to_string(&vec![ResourceId::from(3), ResourceId::from("x")]).unwrap();
        assert_eq!(json, r#"[3,"x"]"#);
    }

    #[test]
    fn test_non_canonical_numbers_stay_strings() {
        let ids = vec![ResourceId::from("007"), ResourceId::from("+5"), ResourceId::from("0")];
        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(json, r#"["007","+5",0]"#);

        let back: Vec<ResourceId> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ids);
    }

    #[test]
    fn test_blank_ids() {
        assert!(ResourceId::from(0).is_blank());
        assert!(ResourceId::from("  ").is_blank());
        assert!(!ResourceId::from(1).is_blank());
    }
}
