//! Marquee core
//!
//! Headless engine behind a media browsing page: horizontally scrolling
//! content rows (the carousel engine), the catalog queries that feed them,
//! card and detail projections, user preferences, toasts, and the header and
//! hero state machines. Hosts feed input events in and apply the returned
//! frames and view models; nothing here touches a real DOM.

pub mod actions;
pub mod browse;
pub mod carousel;
pub mod catalog;
pub mod constants;
pub mod detail;
pub mod embed;
pub mod error;
pub mod feedback;
pub mod header;
pub mod hero;
pub mod preferences;
pub mod timing;
pub mod view;

pub use browse::{BrowsePage, BrowseSettings};
pub use carousel::{
    CarouselConfig, NavDirection, RenderFrame, SliderController,
    SliderMessage, SliderState, WheelDirection,
};
pub use catalog::Catalog;
pub use error::{CatalogError, StorageError};
pub use preferences::{JsonFileStore, MemoryStore, Preferences};

/// Re-exports most callers need.
pub mod prelude {
    pub use crate::browse::{BrowsePage, BrowseSettings};
    pub use crate::carousel::prelude::*;
    pub use crate::catalog::Catalog;
    pub use crate::preferences::{
        JsonFileStore, KeyValueStore, MemoryStore, Preferences,
    };
    pub use marquee_contracts::prelude::*;
    pub use marquee_model::prelude::*;
}
