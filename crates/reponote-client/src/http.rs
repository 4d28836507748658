//! Shared reqwest transport.
//!
//! Owns the pooled [`reqwest::Client`], attaches the session bearer token,
//! and maps transport failures and non-success statuses into [`AppError`].

use bytes::Bytes;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use reponote_core::config::api::ApiConfig;
use reponote_core::error::{AppError, ErrorKind};
use reponote_core::result::AppResult;

use crate::session::SessionStore;

/// Pooled HTTP client bound to a session.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Underlying reqwest client.
    client: reqwest::Client,
    /// Bearer token source.
    session: SessionStore,
}

impl HttpTransport {
    /// Build a transport with the configured timeout.
    pub fn new(config: &ApiConfig, session: SessionStore) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, session })
    }

    /// The raw reqwest client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// The session this transport authenticates with.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Send `request` with the bearer token and decode a JSON body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: &str,
    ) -> AppResult<T> {
        let body = self.send(request, resource).await?;
        serde_json::from_slice(&body).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Malformed {resource} payload: {e}"),
                e,
            )
        })
    }

    /// Send `request` with the bearer token and return the raw body.
    pub async fn send(&self, request: RequestBuilder, resource: &str) -> AppResult<Bytes> {
        let request = match self.session.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(send_error)?;
        let status = response.status();
        debug!(%status, url = %response.url(), resource, "Response received");

        if status.is_success() {
            return response.bytes().await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Transport,
                    format!("Failed to read {resource} response: {e}"),
                    e,
                )
            });
        }

        if status == StatusCode::UNAUTHORIZED {
            if let Err(e) = self.session.clear().await {
                warn!(error = %e, "Failed to clear rejected session");
            }
        }

        Err(status_error(status, &read_text(response).await))
    }
}

/// Read a failure body, tolerating read errors.
pub(crate) async fn read_text(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

/// Map a send failure: request-construction errors versus no response.
pub(crate) fn send_error(err: reqwest::Error) -> AppError {
    if err.is_builder() {
        AppError::with_source(ErrorKind::Request, format!("Invalid request: {err}"), err)
    } else {
        let target = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "server".to_string());
        AppError::with_source(
            ErrorKind::Transport,
            format!("No response received from {target}: {err}"),
            err,
        )
    }
}

/// Map a non-success status and its body into an error.
pub(crate) fn status_error(status: StatusCode, body: &str) -> AppError {
    let message = describe_status(status, body);

    let kind = match status {
        StatusCode::UNAUTHORIZED => ErrorKind::Authentication,
        StatusCode::FORBIDDEN => ErrorKind::Authorization,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ErrorKind::Validation,
        _ => ErrorKind::ExternalService,
    };

    AppError::new(kind, message)
}

/// `"{code} {reason} - {detail}"`, dropping the detail when there is none.
pub(crate) fn describe_status(status: StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown Status");
    let detail = extract_detail(body);

    if detail.is_empty() {
        format!("{} {}", status.as_u16(), reason)
    } else {
        format!("{} {} - {}", status.as_u16(), reason, detail)
    }
}

/// Pull the FastAPI-style `detail` field out of an error body.
///
/// Falls back to the whole body when it has no `detail`.
pub(crate) fn extract_detail(body: &str) -> String {
    let body = body.trim();

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => serde_json::Value::Object(map).to_string(),
        },
        Ok(other) => other.to_string(),
        Err(_) => body.to_string(),
    }
}
