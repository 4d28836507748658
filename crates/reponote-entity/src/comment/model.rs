//! Comment record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in a document's discussion thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: i64,
    /// The document being discussed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<i64>,
    /// Author display name.
    pub username: String,
    /// Comment body, possibly multi-line.
    pub content: String,
    /// When the comment was posted.
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// Target document.
    pub document_id: i64,
    /// Comment body.
    pub content: String,
}
