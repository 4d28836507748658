//! Authentication session records.

pub mod token;

pub use token::AccessToken;
