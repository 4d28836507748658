//! Process-wide session token storage.
//!
//! The token is set after a successful login, read by the transport on
//! every request, and cleared on logout or when the backend rejects it.
//! When persistence is enabled it is mirrored to a file so separate CLI
//! invocations share one session.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use reponote_core::config::session::SessionConfig;
use reponote_core::error::AppError;
use reponote_core::result::AppResult;

/// Shared handle to the current bearer token.
///
/// Cloning the store yields another handle to the same token.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    /// The current token, if authenticated.
    token: Arc<RwLock<Option<String>>>,
    /// Token file, when persistence is enabled.
    file: Option<PathBuf>,
}

impl SessionStore {
    /// Create a store that only lives for the current process.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Create a store backed by `path`, loading any token already saved there.
    pub async fn persistent(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let token = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Some(raw.trim().to_string()).filter(|t| !t.is_empty()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read session file {}: {e}",
                    path.display()
                )));
            }
        };

        debug!(path = %path.display(), restored = token.is_some(), "Session store opened");

        Ok(Self {
            token: Arc::new(RwLock::new(token)),
            file: Some(path),
        })
    }

    /// Build a store from configuration.
    pub async fn from_config(config: &SessionConfig) -> AppResult<Self> {
        if config.persist {
            Self::persistent(&config.token_file).await
        } else {
            Ok(Self::in_memory())
        }
    }

    /// Store a freshly issued token.
    pub async fn set(&self, token: &str) -> AppResult<()> {
        if let Some(path) = &self.file {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, token).await?;
        }

        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    /// The current token, if any.
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Whether a token is currently held.
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Forget the token and remove its file.
    pub async fn clear(&self) -> AppResult<()> {
        *self.token.write().await = None;

        if let Some(path) = &self.file {
            match tokio::fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
