//! Integration tests for the upload flow, the recent listing and downloads.

mod helpers;

use std::sync::Arc;

use bytes::Bytes;
use helpers::TestBackend;
use reponote_cli::commands::download::{self, DownloadArgs};
use reponote_core::error::ErrorKind;
use reponote_core::traits::DocumentApi;
use reponote_entity::ClassificationTag;
use reponote_service::{DocumentCatalog, UploadFile, UploadRequest, UploadService};

fn api(client: &reponote_client::RepoNoteClient) -> Arc<dyn DocumentApi> {
    client.documents.clone()
}

#[tokio::test]
async fn test_upload_creates_tagged_document_and_version() {
    let backend = TestBackend::start().await;
    let client = backend.logged_in_client().await;

    let outcome = UploadService::new(api(&client))
        .upload(UploadRequest {
            title: "Lecture 2".to_string(),
            description: "Sequences".to_string(),
            file: Some(UploadFile {
                name: "lecture2.pdf".to_string(),
                content: Bytes::from_static(b"%PDF-1.7"),
            }),
        })
        .await
        .unwrap();

    assert_eq!(outcome.tag, ClassificationTag::Pdf);
    assert_eq!(outcome.document.title, "Lecture 2");
    assert_eq!(outcome.document.tags.as_deref(), Some("PDF"));

    let version = outcome.version.unwrap();
    assert_eq!(version.file_name, "lecture2.pdf");
    assert_eq!(version.version_number, 1);
    assert_eq!(version.document_id, Some(outcome.document.id));

    let stored = backend.state.files.lock().unwrap().get("lecture2.pdf").cloned();
    assert_eq!(stored.as_deref(), Some(&b"%PDF-1.7"[..]));
}

#[tokio::test]
async fn test_upload_without_file_is_general() {
    let backend = TestBackend::start().await;
    let client = backend.logged_in_client().await;

    let outcome = UploadService::new(api(&client))
        .upload(UploadRequest {
            title: "Reading list".to_string(),
            description: String::new(),
            file: None,
        })
        .await
        .unwrap();

    assert_eq!(outcome.tag, ClassificationTag::General);
    assert!(outcome.version.is_none());
}

#[tokio::test]
async fn test_upload_from_disk_infers_tag_from_name() {
    let backend = TestBackend::start().await;
    let client = backend.logged_in_client().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solver.py");
    std::fs::write(&path, "print('hi')").unwrap();

    let file = UploadFile::from_path(&path, None).await.unwrap();
    let outcome = UploadService::new(api(&client))
        .upload(UploadRequest {
            title: "Solver".to_string(),
            description: String::new(),
            file: Some(file),
        })
        .await
        .unwrap();

    assert_eq!(outcome.tag, ClassificationTag::Code);
    assert_eq!(outcome.version.unwrap().file_name, "solver.py");
}

#[tokio::test]
async fn test_upload_requires_session() {
    let backend = TestBackend::start().await;
    let client = backend.client();

    let err = UploadService::new(api(&client))
        .upload(UploadRequest {
            title: "Lecture 3".to_string(),
            description: String::new(),
            file: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authentication);
    assert!(err.message.starts_with("Failed to create document"));
}

#[tokio::test]
async fn test_recent_lists_newest_first_with_limit() {
    let backend = TestBackend::start().await;
    let client = backend.logged_in_client().await;
    let service = UploadService::new(api(&client));

    for title in ["First", "Second"] {
        service
            .upload(UploadRequest {
                title: title.to_string(),
                description: String::new(),
                file: None,
            })
            .await
            .unwrap();
    }

    let catalog = DocumentCatalog::new(api(&client));
    let all = catalog.recent(None).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First", "Advanced Calculus Week 1"]);

    let limited = catalog.recent(Some(1)).await.unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].title, "Second");
}

#[tokio::test]
async fn test_download_resolves_relative_url() {
    let backend = TestBackend::start().await;
    let client = backend.client();

    let versions = client.documents.list_versions(1).await.unwrap();
    let current = versions.first().unwrap();
    let content = client.documents.download(&current.download_url).await.unwrap();

    assert_eq!(&content[..], b"docx-bytes");
}

#[tokio::test]
async fn test_download_missing_file_is_not_found() {
    let backend = TestBackend::start().await;
    let client = backend.client();

    let err = client.documents.download("/files/missing.bin").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

fn seed_version(backend: &TestBackend, document_id: i64, file_name: &str) {
    backend.state.versions.lock().unwrap().insert(
        document_id,
        vec![serde_json::json!({
            "id": 50, "document_id": document_id, "version_number": 1,
            "file_name": file_name, "created_at": "2024-03-06T09:00:00",
            "download_url": "/files/notes.docx"
        })],
    );
}

#[tokio::test]
async fn test_download_keeps_server_file_name_inside_target_dir() {
    let backend = TestBackend::start().await;
    seed_version(&backend, 5, "../escaped.txt");
    let client = backend.client();

    let root = tempfile::tempdir().unwrap();
    let target_dir = root.path().join("downloads");
    std::fs::create_dir(&target_dir).unwrap();

    download::execute(
        &DownloadArgs {
            id: 5,
            version: None,
            output: None,
            dir: Some(target_dir.clone()),
        },
        &client,
    )
    .await
    .unwrap();

    assert_eq!(
        std::fs::read(target_dir.join("escaped.txt")).unwrap(),
        b"docx-bytes"
    );
    assert!(!root.path().join("escaped.txt").exists());
}

#[tokio::test]
async fn test_download_rejects_name_without_file_part() {
    let backend = TestBackend::start().await;
    seed_version(&backend, 6, "..");
    let client = backend.client();
    let target_dir = tempfile::tempdir().unwrap();

    let err = download::execute(
        &DownloadArgs {
            id: 6,
            version: None,
            output: None,
            dir: Some(target_dir.path().to_path_buf()),
        },
        &client,
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(std::fs::read_dir(target_dir.path()).unwrap().count(), 0);
}
