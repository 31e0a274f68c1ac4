//! Presentation focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in marquee-core or other presentation layers.

pub use super::category::CategoryKey;
pub use super::content::{
    Badge, Content, PLACEHOLDER_IMAGE, UNKNOWN_TITLE, UNRATED,
};
pub use super::ids::ContentId;
pub use super::severity::Severity;
