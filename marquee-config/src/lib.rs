//! Configuration library for Marquee.
//!
//! Resolves slider geometry, input tuning, rate-limit windows and the
//! preference store location from an optional `.env`, an optional
//! `marquee.toml`/`marquee.json`, and `MARQUEE_*` environment overrides, in
//! that order. Guard rails reject values the engine cannot work with and
//! collect warnings for values that are legal but probably unintended.

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    ConfigMetadata, ConfigSource, MarqueeConfig, StorageConfig, TimingConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
