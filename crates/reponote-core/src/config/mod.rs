//! Client configuration schemas.
//!
//! Configuration is deserialized from TOML files via the `config` crate.
//! Each sub-module represents a logical configuration section, and every
//! section falls back to defaults when absent.

pub mod api;
pub mod logging;
pub mod preview;
pub mod session;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::logging::LoggingConfig;
use self::preview::PreviewConfig;
use self::session::SessionConfig;

use crate::error::AppError;

/// Root client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend service endpoints.
    #[serde(default)]
    pub api: ApiConfig,
    /// Preview resolution settings.
    #[serde(default)]
    pub preview: PreviewConfig,
    /// Session token persistence.
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration.
    ///
    /// Merges `config/default.toml` (if present), the explicitly given file
    /// (which must exist), and environment variables prefixed with
    /// `REPONOTE__`, e.g. `REPONOTE__API__AUTH_URL`.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        Self::load_with_env(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("REPONOTE")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(path: Option<&str>, env: config::Environment) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::new(path, config::FileFormat::Toml));
        }

        let config = builder
            .add_source(env)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
