//! Comment thread records.

pub mod model;

pub use model::{Comment, CreateComment};
