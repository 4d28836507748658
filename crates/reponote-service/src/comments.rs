//! Append-only comment thread for one document.

use tracing::{info, warn};

use reponote_core::error::AppError;
use reponote_core::result::AppResult;
use reponote_core::traits::DocumentApi;
use reponote_entity::{Comment, CreateComment};

/// The in-memory comment list of a document.
///
/// The list only grows, and only after the server has accepted a
/// submission. Prior entries are never reordered or rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    document_id: i64,
    comments: Vec<Comment>,
}

impl CommentThread {
    /// Wrap the comments already loaded for `document_id`.
    pub fn new(document_id: i64, comments: Vec<Comment>) -> Self {
        Self {
            document_id,
            comments,
        }
    }

    /// The document this thread belongs to.
    pub fn document_id(&self) -> i64 {
        self.document_id
    }

    /// Comments in the order the backend returned them, then submission order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of comments.
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Whether the thread has no comments.
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Post `content` and append the server's record.
    ///
    /// Blank content is rejected without a network call. On failure the
    /// thread is left untouched.
    pub async fn submit(&mut self, api: &dyn DocumentApi, content: &str) -> AppResult<&Comment> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Comment content must not be blank"));
        }

        let payload = CreateComment {
            document_id: self.document_id,
            content: content.to_string(),
        };

        let comment = api.create_comment(&payload).await.map_err(|e| {
            warn!(document_id = self.document_id, error = %e, "Comment submission failed");
            e.context("Failed to post comment")
        })?;

        info!(
            document_id = self.document_id,
            comment_id = comment.id,
            "Comment appended"
        );
        self.comments.push(comment);
        Ok(&self.comments[self.comments.len() - 1])
    }
}
