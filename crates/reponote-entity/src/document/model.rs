//! Document record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tag::ClassificationTag;

/// A logical note with file revisions and a comment thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Free-form description (may be empty).
    #[serde(default)]
    pub description: String,
    /// Classification tag submitted at creation, when the backend echoes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// When the document was created.
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Description for listings, with a placeholder when empty.
    pub fn summary(&self) -> &str {
        if self.description.trim().is_empty() {
            "No description."
        } else {
            &self.description
        }
    }
}

/// Payload for `POST /documents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Document title.
    pub title: String,
    /// Document description.
    pub description: String,
    /// Tag inferred from the attached file.
    pub tags: ClassificationTag,
}
