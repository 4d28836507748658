//! Service traits defined in `reponote-core` and implemented by the
//! transport in `reponote-client`.

pub mod auth;
pub mod document;

pub use auth::AuthApi;
pub use document::DocumentApi;
