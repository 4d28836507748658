//! # reponote-client
//!
//! reqwest-based transport for the RepoNote services: the token endpoint,
//! the document/version/comment endpoints, and the process-wide session
//! store that carries the bearer token between them.

pub mod auth;
pub mod documents;
pub mod http;
pub mod session;

use std::sync::Arc;

use reponote_core::config::ClientConfig;
use reponote_core::result::AppResult;

pub use auth::{HttpAuthApi, LoginError};
pub use documents::HttpDocumentApi;
pub use http::HttpTransport;
pub use session::SessionStore;

/// The wired set of service clients sharing one session.
#[derive(Debug, Clone)]
pub struct RepoNoteClient {
    /// Shared session store.
    pub session: SessionStore,
    /// Auth service client.
    pub auth: Arc<HttpAuthApi>,
    /// Document, version and comment service client.
    pub documents: Arc<HttpDocumentApi>,
}

impl RepoNoteClient {
    /// Build the clients around an existing session.
    pub fn new(config: &ClientConfig, session: SessionStore) -> AppResult<Self> {
        let transport = HttpTransport::new(&config.api, session.clone())?;

        Ok(Self {
            auth: Arc::new(HttpAuthApi::new(
                transport.clone(),
                config.api.auth_url.clone(),
            )),
            documents: Arc::new(HttpDocumentApi::new(
                transport,
                config.api.clone(),
                config.preview.origin.clone(),
            )),
            session,
        })
    }

    /// Build the clients, restoring the session described by the config.
    pub async fn from_config(config: &ClientConfig) -> AppResult<Self> {
        let session = SessionStore::from_config(&config.session).await?;
        Self::new(config, session)
    }
}
