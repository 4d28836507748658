//! # reponote-core
//!
//! Core crate for RepoNote. Contains the unified error system, the client
//! configuration schema, and the service traits that the HTTP transport
//! implements and the document services consume.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod url;

pub use error::AppError;
pub use result::AppResult;
