//! Document domain records.

pub mod model;
pub mod tag;
pub mod version;

pub use model::{CreateDocument, Document};
pub use tag::ClassificationTag;
pub use version::Version;
