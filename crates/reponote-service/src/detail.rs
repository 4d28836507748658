//! All-or-nothing loading of a document detail page.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use reponote_core::result::AppResult;
use reponote_core::traits::DocumentApi;
use reponote_entity::{Comment, Document, Version};

use crate::comments::CommentThread;
use crate::preview::{PreviewResolver, PreviewStrategy};

/// A document together with its version history and discussion.
///
/// Lists keep the order the backend returned them in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentDetail {
    /// Document metadata.
    pub document: Document,
    /// Version history, newest first.
    pub versions: Vec<Version>,
    /// Comments.
    pub comments: Vec<Comment>,
}

impl DocumentDetail {
    /// The version to preview: the first one listed.
    pub fn current_version(&self) -> Option<&Version> {
        self.versions.first()
    }

    /// Look up a version by its number.
    pub fn version(&self, version_number: i32) -> Option<&Version> {
        self.versions
            .iter()
            .find(|v| v.version_number == version_number)
    }

    /// Preview strategy for the current version, if there is one.
    pub fn preview(&self, resolver: &PreviewResolver) -> Option<PreviewStrategy> {
        self.current_version()
            .map(|v| resolver.resolve(&v.file_name, &v.download_url))
    }

    /// Hand the loaded comments to a thread, ready for submissions.
    pub fn into_thread(self) -> CommentThread {
        CommentThread::new(self.document.id, self.comments)
    }
}

/// Fans out the three detail lookups and joins them.
#[derive(Clone)]
pub struct DetailAggregator {
    api: Arc<dyn DocumentApi>,
}

impl std::fmt::Debug for DetailAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailAggregator").finish()
    }
}

impl DetailAggregator {
    /// Creates a new aggregator.
    pub fn new(api: Arc<dyn DocumentApi>) -> Self {
        Self { api }
    }

    /// Load the document, its versions and its comments concurrently.
    ///
    /// Succeeds only if all three lookups succeed. Otherwise the first
    /// failure is returned, naming the resource, and nothing else is kept.
    pub async fn load(&self, document_id: i64) -> AppResult<DocumentDetail> {
        let api = self.api.as_ref();

        let result = tokio::try_join!(
            async {
                api.get_document(document_id)
                    .await
                    .map_err(|e| e.context("Failed to load document"))
            },
            async {
                api.list_versions(document_id)
                    .await
                    .map_err(|e| e.context("Failed to load versions"))
            },
            async {
                api.list_comments(document_id)
                    .await
                    .map_err(|e| e.context("Failed to load comments"))
            },
        );

        let (document, versions, comments) = match result {
            Ok(parts) => parts,
            Err(e) => {
                warn!(document_id, error = %e, "Document detail unavailable");
                return Err(e);
            }
        };

        debug!(
            document_id,
            versions = versions.len(),
            comments = comments.len(),
            "Document detail loaded"
        );

        Ok(DocumentDetail {
            document,
            versions,
            comments,
        })
    }
}
