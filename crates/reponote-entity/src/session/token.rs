//! Bearer token returned by the auth service.

use serde::{Deserialize, Serialize};

/// An issued access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The opaque bearer token.
    pub access_token: String,
    /// Token scheme, `bearer` unless the service says otherwise.
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}
