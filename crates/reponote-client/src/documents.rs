//! HTTP implementation of the document, version and comment endpoints.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use reponote_core::config::api::ApiConfig;
use reponote_core::error::AppError;
use reponote_core::result::AppResult;
use reponote_core::traits::DocumentApi;
use reponote_core::url;
use reponote_entity::{Comment, CreateComment, CreateDocument, Document, Version};

use crate::http::HttpTransport;

/// [`DocumentApi`] backed by the remote document, version and comment services.
#[derive(Debug, Clone)]
pub struct HttpDocumentApi {
    /// Shared transport.
    transport: HttpTransport,
    /// Service base URLs.
    endpoints: ApiConfig,
    /// Origin used to resolve server-relative download URLs.
    origin: String,
}

impl HttpDocumentApi {
    /// Creates a new document API client.
    pub fn new(transport: HttpTransport, endpoints: ApiConfig, origin: impl Into<String>) -> Self {
        Self {
            transport,
            endpoints,
            origin: origin.into(),
        }
    }

    fn documents(&self, path: &str) -> String {
        url::join(&self.endpoints.documents_url, path)
    }

    fn versions(&self, path: &str) -> String {
        url::join(&self.endpoints.versions_url, path)
    }

    fn comments(&self, path: &str) -> String {
        url::join(&self.endpoints.comments_url, path)
    }
}

#[async_trait]
impl DocumentApi for HttpDocumentApi {
    async fn get_document(&self, id: i64) -> AppResult<Document> {
        let request = self.transport.client().get(self.documents(&format!("documents/{id}")));
        self.transport.send_json(request, "document").await
    }

    async fn list_documents(&self) -> AppResult<Vec<Document>> {
        let request = self.transport.client().get(self.documents("documents"));
        let documents: Vec<Document> = self.transport.send_json(request, "document list").await?;
        debug!(count = documents.len(), "Documents listed");
        Ok(documents)
    }

    async fn create_document(&self, payload: &CreateDocument) -> AppResult<Document> {
        let request = self
            .transport
            .client()
            .post(self.documents("documents"))
            .json(payload);
        let document: Document = self.transport.send_json(request, "document").await?;
        info!(document_id = document.id, tags = %payload.tags, "Document created");
        Ok(document)
    }

    async fn list_versions(&self, document_id: i64) -> AppResult<Vec<Version>> {
        let request = self
            .transport
            .client()
            .get(self.versions(&format!("versions/{document_id}")));
        self.transport.send_json(request, "version list").await
    }

    async fn upload_version(
        &self,
        document_id: i64,
        file_name: &str,
        content: Bytes,
    ) -> AppResult<Version> {
        let size = content.len();
        let mime = mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .to_string();

        let part = Part::bytes(content.to_vec())
            .file_name(file_name.to_string())
            .mime_str(&mime)
            .map_err(|e| AppError::request(format!("Invalid content type '{mime}': {e}")))?;

        let request = self
            .transport
            .client()
            .post(self.versions("versions"))
            .query(&[("document_id", document_id)])
            .multipart(Form::new().part("file", part));

        let version: Version = self.transport.send_json(request, "version").await?;
        info!(
            document_id,
            version_number = version.version_number,
            file_name,
            size,
            "Version uploaded"
        );
        Ok(version)
    }

    async fn list_comments(&self, document_id: i64) -> AppResult<Vec<Comment>> {
        let request = self
            .transport
            .client()
            .get(self.comments(&format!("comments/{document_id}")));
        self.transport.send_json(request, "comment list").await
    }

    async fn create_comment(&self, payload: &CreateComment) -> AppResult<Comment> {
        let request = self
            .transport
            .client()
            .post(self.comments("comments"))
            .json(payload);
        let comment: Comment = self.transport.send_json(request, "comment").await?;
        info!(
            document_id = payload.document_id,
            comment_id = comment.id,
            "Comment posted"
        );
        Ok(comment)
    }

    async fn download(&self, url: &str) -> AppResult<Bytes> {
        let target = url::absolutize(&self.origin, url);
        let request = self.transport.client().get(&target);
        let body = self.transport.send(request, "file").await?;
        debug!(url = %target, size = body.len(), "File downloaded");
        Ok(body)
    }
}
