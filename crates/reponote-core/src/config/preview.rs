//! File preview configuration.

use serde::{Deserialize, Serialize};

/// Settings used when turning stored file URLs into preview targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Origin prefixed to server-relative file URLs, e.g. `https://notes.example`.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// External viewer used for office documents.
    #[serde(default = "default_office_viewer_url")]
    pub office_viewer_url: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            office_viewer_url: default_office_viewer_url(),
        }
    }
}

fn default_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_office_viewer_url() -> String {
    "https://docs.google.com/viewer".to_string()
}
