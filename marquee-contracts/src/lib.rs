//! Trait surfaces describing the collaborators the browsing engine talks to.
//!
//! The engine never owns a catalog, a persistence backend, a toast renderer
//! or a detail popup directly; it reaches them through these traits so hosts
//! can plug in their own implementations.

pub mod catalog_like;
pub mod detail;
pub mod layout;
pub mod notify;
pub mod preferences;

/// Frequently used trait combinators for UI and orchestration crates.
pub mod prelude {
    pub use super::catalog_like::CatalogSource;
    pub use super::detail::DetailPanel;
    pub use super::layout::{LayoutProbe, RowMeasurement};
    pub use super::notify::{DEFAULT_NOTIFICATION_DURATION, Notifier};
    pub use super::preferences::PreferencesStore;
}
