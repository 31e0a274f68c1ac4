//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod category;
pub mod content;
pub mod error;
pub mod ids;
pub mod prelude;
pub mod severity;

// Intentionally curated re-exports for downstream consumers.
pub use category::CategoryKey;
pub use content::{Badge, Content};
pub use error::{ModelError, Result as ModelResult};
pub use ids::ContentId;
pub use severity::Severity;
