//! Document, version and comment service trait.

use async_trait::async_trait;
use bytes::Bytes;

use reponote_entity::{Comment, CreateComment, CreateDocument, Document, Version};

use crate::result::AppResult;

/// The remote endpoints the document services consume.
///
/// Every method is a single request/response round trip. Implementations
/// perform no retries; failures are reported as-is.
#[async_trait]
pub trait DocumentApi: Send + Sync + 'static {
    /// `GET /documents/{id}`.
    async fn get_document(&self, id: i64) -> AppResult<Document>;

    /// `GET /documents`, in backend order.
    async fn list_documents(&self) -> AppResult<Vec<Document>>;

    /// `POST /documents`.
    async fn create_document(&self, payload: &CreateDocument) -> AppResult<Document>;

    /// `GET /versions/{document_id}`, in backend order.
    async fn list_versions(&self, document_id: i64) -> AppResult<Vec<Version>>;

    /// `POST /versions?document_id={id}` with a multipart `file` part.
    async fn upload_version(
        &self,
        document_id: i64,
        file_name: &str,
        content: Bytes,
    ) -> AppResult<Version>;

    /// `GET /comments/{document_id}`, in backend order.
    async fn list_comments(&self, document_id: i64) -> AppResult<Vec<Comment>>;

    /// `POST /comments`.
    async fn create_comment(&self, payload: &CreateComment) -> AppResult<Comment>;

    /// Fetch the bytes behind a version's retrieval URL.
    async fn download(&self, url: &str) -> AppResult<Bytes>;
}
