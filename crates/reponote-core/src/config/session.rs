//! Session persistence configuration.

use serde::{Deserialize, Serialize};

/// Where the bearer token lives between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Whether the token is written to `token_file` after login.
    #[serde(default = "default_true")]
    pub persist: bool,
    /// Path to the token file.
    #[serde(default = "default_token_file")]
    pub token_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist: true,
            token_file: default_token_file(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_token_file() -> String {
    "data/session/token".to_string()
}
