//! Recent-documents listing.

use std::sync::Arc;

use reponote_core::result::AppResult;
use reponote_core::traits::DocumentApi;
use reponote_entity::Document;

/// Lists documents in the order the backend returns them (newest first).
#[derive(Clone)]
pub struct DocumentCatalog {
    api: Arc<dyn DocumentApi>,
}

impl std::fmt::Debug for DocumentCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentCatalog").finish()
    }
}

impl DocumentCatalog {
    /// Creates a new catalog.
    pub fn new(api: Arc<dyn DocumentApi>) -> Self {
        Self { api }
    }

    /// Recent documents, truncated to `limit` without re-sorting.
    pub async fn recent(&self, limit: Option<usize>) -> AppResult<Vec<Document>> {
        let mut documents = self
            .api
            .list_documents()
            .await
            .map_err(|e| e.context("Failed to list documents"))?;

        if let Some(limit) = limit {
            documents.truncate(limit);
        }
        Ok(documents)
    }
}
