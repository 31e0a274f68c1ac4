pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use marquee_core::{
    BrowseSettings, CarouselConfig, JsonFileStore, Preferences, StorageError,
};

/// Where the file layer of the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// No file; built-in defaults plus environment overrides.
    #[default]
    Default,
    /// Path handed to the loader directly.
    Explicit(PathBuf),
    /// `$MARQUEE_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// `$MARQUEE_CONFIG_JSON`.
    EnvInline,
    /// One of the default file locations.
    File(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ConfigSource::Explicit(path)
            | ConfigSource::EnvPath(path)
            | ConfigSource::File(path) => Some(path),
            ConfigSource::Default | ConfigSource::EnvInline => None,
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct MarqueeConfig {
    pub slider: CarouselConfig,
    pub timing: TimingConfig,
    pub storage: StorageConfig,
    pub metadata: ConfigMetadata,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            slider: CarouselConfig::default(),
            timing: TimingConfig::default(),
            storage: StorageConfig::default(),
            metadata: ConfigMetadata::default(),
        }
    }
}

impl MarqueeConfig {
    pub fn browse_settings(&self) -> BrowseSettings {
        BrowseSettings {
            carousel: self.slider,
            resize_debounce: self.timing.resize_debounce,
            scroll_throttle: self.timing.scroll_throttle,
            search_debounce: self.timing.search_debounce,
        }
    }

    /// Configured preference file, or the platform default.
    pub fn preferences_path(&self) -> Result<PathBuf, StorageError> {
        match &self.storage.preferences_path {
            Some(path) => Ok(path.clone()),
            None => JsonFileStore::default_path(),
        }
    }

    pub fn open_preferences(
        &self,
    ) -> Result<Preferences<JsonFileStore>, StorageError> {
        let store = JsonFileStore::open(self.preferences_path()?)?;
        Ok(Preferences::new(store))
    }
}

/// Rate-limit windows for host events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    pub resize_debounce: Duration,
    pub scroll_throttle: Duration,
    pub search_debounce: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let settings = BrowseSettings::default();
        Self {
            resize_debounce: settings.resize_debounce,
            scroll_throttle: settings.scroll_throttle,
            search_debounce: settings.search_debounce,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// `None` resolves to the platform data directory.
    pub preferences_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub source: ConfigSource,
    pub env_file_loaded: bool,
    /// Environment variables that overrode a file or default value.
    pub env_overrides: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_defaults() {
        let config = MarqueeConfig::default();
        assert_eq!(config.browse_settings(), BrowseSettings::default());
        assert_eq!(config.metadata.source, ConfigSource::Default);
        assert!(config.metadata.env_overrides.is_empty());
    }

    #[test]
    fn explicit_preferences_path_wins() {
        let mut config = MarqueeConfig::default();
        config.storage.preferences_path = Some(PathBuf::from("/tmp/p.json"));
        assert_eq!(
            config.preferences_path().unwrap(),
            PathBuf::from("/tmp/p.json")
        );
    }

    #[test]
    fn source_paths() {
        assert!(ConfigSource::Default.path().is_none());
        assert!(ConfigSource::EnvInline.path().is_none());
        let p = PathBuf::from("marquee.toml");
        assert_eq!(ConfigSource::File(p.clone()).path(), Some(&p));
    }
}
