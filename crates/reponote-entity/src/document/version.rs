//! Document version record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One uploaded file revision of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    /// Unique version identifier.
    pub id: i64,
    /// The document this version belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<i64>,
    /// Sequential version number.
    pub version_number: i32,
    /// Uploaded file name, including its extension.
    pub file_name: String,
    /// When this version was uploaded.
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    /// Retrieval URL, absolute or server-relative.
    pub download_url: String,
}
