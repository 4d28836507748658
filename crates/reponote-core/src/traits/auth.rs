//! Authentication service trait.

use async_trait::async_trait;

use reponote_entity::AccessToken;

use crate::result::AppResult;

/// Exchanges credentials for a bearer token.
#[async_trait]
pub trait AuthApi: Send + Sync + 'static {
    /// Submit `username`/`password` to the token endpoint.
    async fn login(&self, username: &str, password: &str) -> AppResult<AccessToken>;
}
