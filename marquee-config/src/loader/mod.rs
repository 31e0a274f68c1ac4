pub mod error;

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use marquee_core::CarouselConfig;
use tracing::{debug, info, warn};

use self::error::ConfigLoadError;
use super::models::sources::{
    CONFIG_JSON_VAR, EnvConfig, FileConfig, ITEM_GAP_VAR, ITEM_WIDTH_VAR,
    ITEMS_PER_PAGE_VAR, POINTER_SENSITIVITY_VAR, PREFERENCES_PATH_VAR,
    RESIZE_DEBOUNCE_VAR, SCROLL_THROTTLE_VAR, SEARCH_DEBOUNCE_VAR,
    TOUCH_SENSITIVITY_VAR, WHEEL_DIRECTION_VAR,
};
use super::models::{
    ConfigMetadata, ConfigSource, MarqueeConfig, StorageConfig, TimingConfig,
};
use super::util::parse_duration;
use super::validation::{self, ConfigWarnings};

const DEFAULT_CONFIG_LOCATIONS: &[&str] =
    &["marquee.toml", "marquee.json", "config/marquee.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Do not read any `.env` file.
    pub skip_env_file: bool,
    /// Directory searched for the default config files. Defaults to the
    /// working directory.
    pub search_dir: Option<PathBuf>,
    /// Use these values instead of the process environment.
    pub env: Option<EnvConfig>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: MarqueeConfig,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.options.skip_env_file = true;
        self
    }

    pub fn with_search_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.options.search_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.options.env = Some(env);
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;

        let env = match &self.options.env {
            Some(env) => env.clone(),
            None => EnvConfig::gather(),
        };

        let (file_config, source) = self.load_file_config(&env)?;
        let (config, warnings) =
            compose_config(file_config, &env, source, env_file_loaded)?;

        info!(
            source = ?config.metadata.source,
            overrides = ?config.metadata.env_overrides,
            env_file = env_file_loaded,
            "configuration loaded"
        );
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => warn!(hint = %hint, "{}", warning.message),
                None => warn!("{}", warning.message),
            }
        }

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if self.options.skip_env_file {
            return Ok(false);
        }
        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };
        Ok(loaded)
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            let config = read_required(path)?;
            return Ok((Some(config), ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = &env.config_path {
            let config = read_required(path)?;
            return Ok((Some(config), ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let config = FileConfig::parse_json(raw).map_err(|source| {
                ConfigLoadError::File {
                    origin: CONFIG_JSON_VAR.to_string(),
                    source,
                }
            })?;
            return Ok((Some(config), ConfigSource::EnvInline));
        }

        let base = self.options.search_dir.clone().unwrap_or_default();
        let found = DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| base.join(candidate))
            .find(|candidate| candidate.exists());

        match found {
            Some(path) => {
                let config = read_required(&path)?;
                Ok((Some(config), ConfigSource::File(path)))
            }
            None => {
                debug!("no marquee config file found; using defaults");
                Ok((None, ConfigSource::Default))
            }
        }
    }
}

fn read_required(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    FileConfig::load_from_file(path).map_err(|source| ConfigLoadError::File {
        origin: path.display().to_string(),
        source,
    })
}

fn compose_config(
    file_config: Option<FileConfig>,
    env: &EnvConfig,
    source: ConfigSource,
    env_file_loaded: bool,
) -> Result<(MarqueeConfig, ConfigWarnings), ConfigLoadError> {
    let FileConfig {
        slider: file_slider,
        timing: file_timing,
        storage: file_storage,
    } = file_config.unwrap_or_default();

    let mut slider = CarouselConfig::default();
    if let Some(width) = file_slider.item_width {
        slider.item_width = width;
    }
    if let Some(gap) = file_slider.item_spacing {
        slider.item_spacing = gap;
    }
    if let Some(per_page) = file_slider.items_per_page {
        slider.items_per_page = per_page;
    }
    if let Some(sensitivity) = file_slider.pointer_drag_sensitivity {
        slider.pointer_drag_sensitivity = sensitivity;
    }
    if let Some(sensitivity) = file_slider.touch_drag_sensitivity {
        slider.touch_drag_sensitivity = sensitivity;
    }
    if let Some(raw) = file_slider.wheel_direction.as_deref() {
        slider.wheel_direction = parse_value("slider.wheel_direction", raw)?;
    }

    let mut timing = TimingConfig::default();
    if let Some(raw) = file_timing.resize_debounce.as_deref() {
        timing.resize_debounce = parse_window("timing.resize_debounce", raw)?;
    }
    if let Some(raw) = file_timing.scroll_throttle.as_deref() {
        timing.scroll_throttle = parse_window("timing.scroll_throttle", raw)?;
    }
    if let Some(raw) = file_timing.search_debounce.as_deref() {
        timing.search_debounce = parse_window("timing.search_debounce", raw)?;
    }

    let mut storage = StorageConfig {
        preferences_path: file_storage.preferences_path,
    };

    let mut overrides = Vec::new();
    let mut apply = |key: &'static str, raw: &Option<String>| -> Option<String> {
        raw.clone().inspect(|_| overrides.push(key))
    };

    if let Some(raw) = apply(ITEM_WIDTH_VAR, &env.item_width) {
        slider.item_width = parse_value(ITEM_WIDTH_VAR, &raw)?;
    }
    if let Some(raw) = apply(ITEM_GAP_VAR, &env.item_gap) {
        slider.item_spacing = parse_value(ITEM_GAP_VAR, &raw)?;
    }
    if let Some(raw) = apply(ITEMS_PER_PAGE_VAR, &env.items_per_page) {
        slider.items_per_page = parse_value(ITEMS_PER_PAGE_VAR, &raw)?;
    }
    if let Some(raw) = apply(WHEEL_DIRECTION_VAR, &env.wheel_direction) {
        slider.wheel_direction = parse_value(WHEEL_DIRECTION_VAR, &raw)?;
    }
    if let Some(raw) =
        apply(POINTER_SENSITIVITY_VAR, &env.pointer_drag_sensitivity)
    {
        slider.pointer_drag_sensitivity =
            parse_value(POINTER_SENSITIVITY_VAR, &raw)?;
    }
    if let Some(raw) = apply(TOUCH_SENSITIVITY_VAR, &env.touch_drag_sensitivity)
    {
        slider.touch_drag_sensitivity =
            parse_value(TOUCH_SENSITIVITY_VAR, &raw)?;
    }
    if let Some(raw) = apply(RESIZE_DEBOUNCE_VAR, &env.resize_debounce) {
        timing.resize_debounce = parse_window(RESIZE_DEBOUNCE_VAR, &raw)?;
    }
    if let Some(raw) = apply(SCROLL_THROTTLE_VAR, &env.scroll_throttle) {
        timing.scroll_throttle = parse_window(SCROLL_THROTTLE_VAR, &raw)?;
    }
    if let Some(raw) = apply(SEARCH_DEBOUNCE_VAR, &env.search_debounce) {
        timing.search_debounce = parse_window(SEARCH_DEBOUNCE_VAR, &raw)?;
    }
    if let Some(path) = &env.preferences_path {
        storage.preferences_path = Some(path.clone());
        overrides.push(PREFERENCES_PATH_VAR);
    }

    let mut warnings = ConfigWarnings::default();
    if matches!(source, ConfigSource::Default) && overrides.is_empty() {
        warnings.push_with_hint(
            "No marquee.toml detected; using built-in defaults",
            "Run `marqueectl config show` to print a starting configuration",
        );
    }

    let config = MarqueeConfig {
        slider,
        timing,
        storage,
        metadata: ConfigMetadata {
            source,
            env_file_loaded,
            env_overrides: overrides,
        },
    };

    let guard_warnings = validation::apply_guard_rails(&config)?;
    warnings.extend(guard_warnings);

    Ok((config, warnings))
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigLoadError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|err: T::Err| ConfigLoadError::invalid(key, raw, err))
}

fn parse_window(
    key: &'static str,
    raw: &str,
) -> Result<Duration, ConfigLoadError> {
    parse_duration(raw).map_err(|err| ConfigLoadError::invalid(key, raw, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::carousel::WheelDirection;

    #[test]
    fn env_overrides_file_values() {
        let file = FileConfig::parse_from_str(
            r#"
            [slider]
            item_width = 240
            items_per_page = 4

            [timing]
            search_debounce = "1s"
            "#,
            "test",
        )
        .unwrap();
        let env = EnvConfig {
            item_width: Some("200".into()),
            wheel_direction: Some("Inverted".into()),
            search_debounce: Some("450ms".into()),
            ..EnvConfig::default()
        };

        let (config, _) =
            compose_config(Some(file), &env, ConfigSource::EnvInline, false)
                .unwrap();
        assert_eq!(config.slider.item_width, 200.0);
        assert_eq!(config.slider.items_per_page, 4);
        assert_eq!(config.slider.wheel_direction, WheelDirection::Inverted);
        assert_eq!(config.timing.search_debounce, Duration::from_millis(450));
        assert_eq!(
            config.metadata.env_overrides,
            vec![ITEM_WIDTH_VAR, WHEEL_DIRECTION_VAR, SEARCH_DEBOUNCE_VAR]
        );
    }

    #[test]
    fn bad_values_name_their_source() {
        let env = EnvConfig {
            items_per_page: Some("six".into()),
            ..EnvConfig::default()
        };
        let err = compose_config(None, &env, ConfigSource::Default, false)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidValue {
                key: ITEMS_PER_PAGE_VAR,
                ..
            }
        ));

        let file = FileConfig::parse_json(
            r#"{"slider": {"wheel_direction": "sideways"}}"#,
        )
        .unwrap();
        let err = compose_config(
            Some(file),
            &EnvConfig::default(),
            ConfigSource::EnvInline,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("slider.wheel_direction"));
    }

    #[test]
    fn guard_rails_run_after_overrides() {
        let env = EnvConfig {
            items_per_page: Some("0".into()),
            ..EnvConfig::default()
        };
        assert!(matches!(
            compose_config(None, &env, ConfigSource::Default, false),
            Err(ConfigLoadError::GuardRail(_))
        ));
    }

    #[test]
    fn pure_defaults_warn_once() {
        let (config, warnings) = compose_config(
            None,
            &EnvConfig::default(),
            ConfigSource::Default,
            false,
        )
        .unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.slider, CarouselConfig::default());
    }
}
