//! Backend service endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base URLs of the backend services and transport settings.
///
/// The auth, document, version and comment services are deployed
/// independently, so each has its own base URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the auth service (serves `POST /token`).
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// Base URL of the document service (serves `/documents`).
    #[serde(default = "default_documents_url")]
    pub documents_url: String,
    /// Base URL of the version service (serves `/versions`).
    #[serde(default = "default_versions_url")]
    pub versions_url: String,
    /// Base URL of the comment service (serves `/comments`).
    #[serde(default = "default_comments_url")]
    pub comments_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl ApiConfig {
    /// Point every service at the same base URL.
    pub fn single_host(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            auth_url: base.clone(),
            documents_url: base.clone(),
            versions_url: base.clone(),
            comments_url: base,
            request_timeout_seconds: default_request_timeout(),
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            documents_url: default_documents_url(),
            versions_url: default_versions_url(),
            comments_url: default_comments_url(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_auth_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_documents_url() -> String {
    "http://localhost:8002".to_string()
}

fn default_versions_url() -> String {
    "http://localhost:8003".to_string()
}

fn default_comments_url() -> String {
    "http://localhost:8004".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
