//! # reponote-service
//!
//! Client-side document logic for RepoNote:
//!
//! - [`classify::TagClassifier`] infers a content tag from a file name.
//! - [`preview::PreviewResolver`] picks how a stored file is previewed.
//! - [`detail::DetailAggregator`] loads a document, its versions and its
//!   comments as one all-or-nothing bundle.
//! - [`comments::CommentThread`] appends new comments after the server
//!   accepts them.
//! - [`upload::UploadService`] and [`catalog::DocumentCatalog`] back the
//!   upload flow and the recent-documents listing.

pub mod catalog;
pub mod classify;
pub mod comments;
pub mod detail;
pub mod preview;
pub mod upload;


pub use catalog::DocumentCatalog;
pub use classify::TagClassifier;
pub use comments::CommentThread;
pub use detail::{DetailAggregator, DocumentDetail};
pub use preview::{PreviewResolver, PreviewStrategy};
pub use upload::{UploadFile, UploadOutcome, UploadRequest, UploadService};
