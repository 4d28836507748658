//! Integration tests for login, logout and bearer token propagation.

mod helpers;

use helpers::{PASSWORD, TOKEN, TestBackend, USERNAME, closed_address};
use reponote_client::{HttpAuthApi, HttpTransport, LoginError, RepoNoteClient, SessionStore};
use reponote_core::config::api::ApiConfig;
use reponote_core::error::ErrorKind;
use reponote_core::traits::{AuthApi, DocumentApi};

#[tokio::test]
async fn test_login_stores_token() {
    let backend = TestBackend::start().await;
    let client = backend.client();

    let token = client.auth.login(USERNAME, PASSWORD).await.unwrap();

    assert_eq!(token.access_token, TOKEN);
    assert_eq!(client.session.token().await.as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn test_wrong_password_is_rejected_with_server_detail() {
    let backend = TestBackend::start().await;
    let client = backend.client();

    let err = client.auth.request_token(USERNAME, "wrong").await.unwrap_err();
    match &err {
        LoginError::Rejected {
            status, detail, ..
        } => {
            assert_eq!(*status, 401);
            assert_eq!(detail, "Incorrect username or password");
        }
        other => panic!("unexpected error {other:?}"),
    }

    let app_err = client.auth.login(USERNAME, "wrong").await.unwrap_err();
    assert_eq!(app_err.kind, ErrorKind::Authentication);
    assert_eq!(
        app_err.message,
        "Login failed: 401 Unauthorized - Incorrect username or password"
    );
    assert!(!client.session.is_authenticated().await);
}

#[tokio::test]
async fn test_unreachable_server_reports_no_response() {
    let base = closed_address().await;
    let session = SessionStore::in_memory();
    let transport = HttpTransport::new(&ApiConfig::single_host(base.clone()), session).unwrap();
    let auth = HttpAuthApi::new(transport, base.clone());

    let err = auth.login(USERNAME, PASSWORD).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Transport);
    assert_eq!(
        err.message,
        format!(
            "Login failed: no response received from {}/token. Check network or server status.",
            base
        )
    );
}

#[tokio::test]
async fn test_malformed_url_is_request_error() {
    let transport =
        HttpTransport::new(&ApiConfig::default(), SessionStore::in_memory()).unwrap();
    let auth = HttpAuthApi::new(transport, "not a url");

    let err = auth.request_token(USERNAME, PASSWORD).await.unwrap_err();
    assert!(matches!(err, LoginError::Request { .. }));
    assert!(err.to_string().starts_with("Login failed: "));
}

#[tokio::test]
async fn test_token_is_sent_on_later_requests() {
    let backend = TestBackend::start().await;
    let client = backend.client();

    client.documents.list_documents().await.unwrap();
    assert_eq!(backend.last_auth_header(), None);

    client.auth.login(USERNAME, PASSWORD).await.unwrap();
    client.documents.list_documents().await.unwrap();
    assert_eq!(backend.last_auth_header(), Some(format!("Bearer {TOKEN}")));
}

#[tokio::test]
async fn test_logout_drops_token() {
    let backend = TestBackend::start().await;
    let client = backend.logged_in_client().await;

    client.auth.logout().await.unwrap();
    client.documents.list_documents().await.unwrap();

    assert!(!client.session.is_authenticated().await);
    assert_eq!(backend.last_auth_header(), None);
}

#[tokio::test]
async fn test_session_survives_restart_when_persisted() {
    let backend = TestBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("session").join("token");

    let mut config = backend.config();
    config.session.persist = true;
    config.session.token_file = token_file.to_string_lossy().into_owned();

    let first = RepoNoteClient::from_config(&config).await.unwrap();
    first.auth.login(USERNAME, PASSWORD).await.unwrap();
    assert!(token_file.exists());

    let second = RepoNoteClient::from_config(&config).await.unwrap();
    assert_eq!(second.session.token().await.as_deref(), Some(TOKEN));
}
