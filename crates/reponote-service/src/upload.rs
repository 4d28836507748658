//! Document creation with an optional first version.

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use reponote_core::error::AppError;
use reponote_core::result::AppResult;
use reponote_core::traits::DocumentApi;
use reponote_entity::{ClassificationTag, CreateDocument, Document, Version};

use crate::classify::TagClassifier;

/// A file selected for upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// File name sent to the server, including its extension.
    pub name: String,
    /// File content.
    pub content: Bytes,
}

impl UploadFile {
    /// Read a file from disk, optionally overriding its name.
    pub async fn from_path(path: &Path, name: Option<String>) -> AppResult<Self> {
        let name = match name {
            Some(name) => name,
            None => path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    AppError::validation(format!("Not a file path: {}", path.display()))
                })?,
        };

        let content = tokio::fs::read(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read {}: {e}", path.display()))
        })?;

        Ok(Self {
            name,
            content: Bytes::from(content),
        })
    }
}

/// Input of the upload flow.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Document title; must not be blank.
    pub title: String,
    /// Document description.
    pub description: String,
    /// File to attach as the first version.
    pub file: Option<UploadFile>,
}

/// What the upload flow created.
#[derive(Debug, Clone, Serialize)]
pub struct UploadOutcome {
    /// The created document.
    pub document: Document,
    /// The created version, when a file was attached.
    pub version: Option<Version>,
    /// The tag submitted with the document.
    pub tag: ClassificationTag,
}

/// Creates documents and uploads their first version.
#[derive(Clone)]
pub struct UploadService {
    api: Arc<dyn DocumentApi>,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService").finish()
    }
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(api: Arc<dyn DocumentApi>) -> Self {
        Self { api }
    }

    /// Create the document tagged from the file name, then upload the file.
    ///
    /// There is no rollback: if the file upload fails the document stays.
    pub async fn upload(&self, request: UploadRequest) -> AppResult<UploadOutcome> {
        if request.title.trim().is_empty() {
            return Err(AppError::validation("Document title must not be blank"));
        }

        let tag = TagClassifier::classify(request.file.as_ref().map(|f| f.name.as_str()));

        let payload = CreateDocument {
            title: request.title,
            description: request.description,
            tags: tag,
        };

        let document = self
            .api
            .create_document(&payload)
            .await
            .map_err(|e| e.context("Failed to create document"))?;

        let version = match request.file {
            Some(file) => Some(
                self.api
                    .upload_version(document.id, &file.name, file.content)
                    .await
                    .map_err(|e| {
                        e.context(format!(
                            "Document {} created but file upload failed",
                            document.id
                        ))
                    })?,
            ),
            None => None,
        };

        info!(
            document_id = document.id,
            %tag,
            with_file = version.is_some(),
            "Upload completed"
        );

        Ok(UploadOutcome {
            document,
            version,
            tag,
        })
    }
}
