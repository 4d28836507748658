//! Token endpoint client and login failure classification.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use reponote_core::error::{AppError, ErrorKind};
use reponote_core::result::AppResult;
use reponote_core::traits::AuthApi;
use reponote_core::url;
use reponote_entity::AccessToken;

use crate::http::{self, HttpTransport};

/// Why a login attempt failed.
///
/// The cases are distinguished by how far the request got: rejected by
/// the server, never answered, or never sent.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The server answered with a non-success status.
    #[error("Login failed: {status} {reason}{}", detail_suffix(.detail))]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
        /// `detail` from the body, or the raw body.
        detail: String,
    },
    /// The request was sent but no response arrived.
    #[error("Login failed: no response received from {url}. Check network or server status.")]
    NoResponse {
        /// Token endpoint that was tried.
        url: String,
        /// Transport failure.
        #[source]
        source: reqwest::Error,
    },
    /// The request could not be constructed.
    #[error("Login failed: {message}")]
    Request {
        /// Construction failure description.
        message: String,
    },
    /// The server accepted the credentials but the token was unreadable.
    #[error("Login failed: unreadable token response ({message})")]
    InvalidResponse {
        /// Decoding failure description.
        message: String,
    },
}

/// `" - {detail}"`, or nothing when the server gave no detail.
fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(" - {detail}")
    }
}

impl LoginError {
    /// Classify a reqwest send failure.
    fn from_send(url: &str, err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Request {
                message: err.to_string(),
            }
        } else {
            Self::NoResponse {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

impl From<LoginError> for AppError {
    fn from(err: LoginError) -> Self {
        let message = err.to_string();
        match err {
            LoginError::Rejected { status, .. } if status >= 500 => {
                AppError::new(ErrorKind::ExternalService, message)
            }
            LoginError::Rejected { .. } => AppError::new(ErrorKind::Authentication, message),
            LoginError::NoResponse { source, .. } => {
                AppError::with_source(ErrorKind::Transport, message, source)
            }
            LoginError::Request { .. } => AppError::new(ErrorKind::Request, message),
            LoginError::InvalidResponse { .. } => AppError::new(ErrorKind::Serialization, message),
        }
    }
}

/// [`AuthApi`] over HTTP. Stores the issued token in the transport's session.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    /// Shared transport.
    transport: HttpTransport,
    /// Base URL of the auth service.
    base_url: String,
}

impl HttpAuthApi {
    /// Creates a new auth client.
    pub fn new(transport: HttpTransport, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Full URL of the token endpoint.
    pub fn token_url(&self) -> String {
        url::join(&self.base_url, "token")
    }

    /// Exchange credentials for a token without touching the session.
    pub async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AccessToken, LoginError> {
        let token_url = self.token_url();

        let response = self
            .transport
            .client()
            .post(&token_url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| LoginError::from_send(&token_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = http::read_text(response).await;
            return Err(LoginError::Rejected {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
                detail: http::extract_detail(&body),
            });
        }

        response
            .json::<AccessToken>()
            .await
            .map_err(|e| LoginError::InvalidResponse {
                message: e.to_string(),
            })
    }

    /// Forget the stored token.
    pub async fn logout(&self) -> AppResult<()> {
        self.transport.session().clear().await?;
        info!("Logged out");
        Ok(())
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, username: &str, password: &str) -> AppResult<AccessToken> {
        let token = match self.request_token(username, password).await {
            Ok(token) => token,
            Err(e) => {
                warn!(username, error = %e, "Login rejected");
                return Err(e.into());
            }
        };

        self.transport.session().set(&token.access_token).await?;
        info!(username, "Login successful");
        Ok(token)
    }
}
