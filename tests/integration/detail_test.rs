//! Integration tests for the document detail bundle and comment posting.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use helpers::{TOKEN, TestBackend, USERNAME};
use reponote_core::error::ErrorKind;
use reponote_core::traits::DocumentApi;
use reponote_service::{DetailAggregator, PreviewResolver, PreviewStrategy};

fn aggregator(client: &reponote_client::RepoNoteClient) -> DetailAggregator {
    let api: Arc<dyn DocumentApi> = client.documents.clone();
    DetailAggregator::new(api)
}

#[tokio::test]
async fn test_load_detail_bundle() {
    let backend = TestBackend::start().await;
    let client = backend.client();

    let detail = aggregator(&client).load(1).await.unwrap();

    assert_eq!(detail.document.title, "Advanced Calculus Week 1");
    assert_eq!(detail.versions.len(), 2);
    assert_eq!(detail.versions[0].version_number, 2);
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].username, "grace");
}

#[tokio::test]
async fn test_preview_uses_current_version_with_absolute_url() {
    let backend = TestBackend::start().await;
    let client = backend.client();
    let resolver = PreviewResolver::new(&backend.config().preview);

    let detail = aggregator(&client).load(1).await.unwrap();
    let preview = detail.preview(&resolver).unwrap();

    let file_url = format!("{}/files/notes.docx", backend.base_url);
    match preview {
        PreviewStrategy::ExternalOfficeViewer {
            viewer_url,
            file_url: target,
        } => {
            assert_eq!(target, file_url);
            assert!(viewer_url.starts_with("https://docs.google.com/viewer?url=http%3A%2F%2F127.0.0.1%3A"));
            assert!(viewer_url.ends_with("%2Ffiles%2Fnotes.docx&embedded=true"));
        }
        other => panic!("unexpected preview {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_document_is_not_found() {
    let backend = TestBackend::start().await;
    let client = backend.client();

    let err = aggregator(&client).load(999).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.message.contains("404 Not Found - Document not found"));
}

#[tokio::test]
async fn test_comment_failure_fails_whole_detail() {
    let backend = TestBackend::start().await;
    backend.state.fail_comments.store(true, Ordering::SeqCst);
    let client = backend.client();

    let err = aggregator(&client).load(1).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert!(err.message.starts_with("Failed to load comments"));
    assert!(err.message.contains("comment store unavailable"));
}

#[tokio::test]
async fn test_posting_comment_appends_one_record() {
    let backend = TestBackend::start().await;
    let client = backend.logged_in_client().await;

    let detail = aggregator(&client).load(1).await.unwrap();
    let mut thread = detail.into_thread();
    let posted = thread
        .submit(client.documents.as_ref(), "Thanks, this helped")
        .await
        .unwrap();

    assert_eq!(posted.username, USERNAME);
    assert_eq!(posted.content, "Thanks, this helped");
    assert_eq!(thread.len(), 2);
    assert_eq!(backend.last_auth_header(), Some(format!("Bearer {TOKEN}")));

    let reloaded = aggregator(&client).load(1).await.unwrap();
    assert_eq!(reloaded.comments.len(), 2);
}

#[tokio::test]
async fn test_posting_comment_without_session_is_rejected() {
    let backend = TestBackend::start().await;
    let client = backend.client();

    let detail = aggregator(&client).load(1).await.unwrap();
    let mut thread = detail.into_thread();
    let err = thread
        .submit(client.documents.as_ref(), "Anonymous note")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authentication);
    assert!(err.message.starts_with("Failed to post comment"));
    assert_eq!(thread.len(), 1);
}

#[tokio::test]
async fn test_blank_comment_is_not_sent() {
    let backend = TestBackend::start().await;
    let client = backend.logged_in_client().await;

    let detail = aggregator(&client).load(1).await.unwrap();
    let before = backend.request_count();
    let mut thread = detail.into_thread();
    let err = thread
        .submit(client.documents.as_ref(), "   ")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(backend.request_count(), before);
}
