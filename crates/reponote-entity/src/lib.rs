//! # reponote-entity
//!
//! Records exchanged with the RepoNote backend services. Every struct in
//! this crate mirrors a JSON payload returned or accepted by one of the
//! document, version, comment or auth endpoints. All records derive
//! `Debug`, `Clone`, `Serialize` and `Deserialize`.

pub mod comment;
pub mod document;
pub mod session;
pub mod timestamp;

pub use comment::{Comment, CreateComment};
pub use document::{ClassificationTag, CreateDocument, Document, Version};
pub use session::AccessToken;
