use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::MarqueeConfig;
use crate::util::{format_duration, non_blank};

/// Raw configuration as written in `marquee.toml` or `marquee.json`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub slider: FileSliderConfig,
    #[serde(default)]
    pub timing: FileTimingConfig,
    #[serde(default)]
    pub storage: FileStorageConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileSliderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer_drag_sensitivity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub touch_drag_sensitivity: Option<f32>,
    /// `natural` or `inverted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheel_direction: Option<String>,
}

/// Durations are strings such as `"250ms"`; bare integers are milliseconds.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileTimingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_debounce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_throttle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_debounce: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileStorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences_path: Option<PathBuf>,
}

impl FileConfig {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read marquee config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid marquee config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid marquee config {}: {}",
                        path.display(),
                        err
                    )
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse marquee config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid marquee config json: {err}"))
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string(self).context("failed to render marquee config")
    }
}

impl From<&MarqueeConfig> for FileConfig {
    fn from(config: &MarqueeConfig) -> Self {
        let slider = &config.slider;
        let timing = &config.timing;
        Self {
            slider: FileSliderConfig {
                item_width: Some(slider.item_width),
                item_spacing: Some(slider.item_spacing),
                items_per_page: Some(slider.items_per_page),
                pointer_drag_sensitivity: Some(slider.pointer_drag_sensitivity),
                touch_drag_sensitivity: Some(slider.touch_drag_sensitivity),
                wheel_direction: Some(
                    slider.wheel_direction.as_str().to_string(),
                ),
            },
            timing: FileTimingConfig {
                resize_debounce: Some(format_duration(timing.resize_debounce)),
                scroll_throttle: Some(format_duration(timing.scroll_throttle)),
                search_debounce: Some(format_duration(timing.search_debounce)),
            },
            storage: FileStorageConfig {
                preferences_path: config.storage.preferences_path.clone(),
            },
        }
    }
}

pub const CONFIG_PATH_VAR: &str = "MARQUEE_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "MARQUEE_CONFIG_JSON";
pub const ITEM_WIDTH_VAR: &str = "MARQUEE_ITEM_WIDTH";
pub const ITEM_GAP_VAR: &str = "MARQUEE_ITEM_GAP";
pub const ITEMS_PER_PAGE_VAR: &str = "MARQUEE_ITEMS_PER_PAGE";
pub const WHEEL_DIRECTION_VAR: &str = "MARQUEE_WHEEL_DIRECTION";
pub const POINTER_SENSITIVITY_VAR: &str = "MARQUEE_POINTER_DRAG_SENSITIVITY";
pub const TOUCH_SENSITIVITY_VAR: &str = "MARQUEE_TOUCH_DRAG_SENSITIVITY";
pub const RESIZE_DEBOUNCE_VAR: &str = "MARQUEE_RESIZE_DEBOUNCE";
pub const SCROLL_THROTTLE_VAR: &str = "MARQUEE_SCROLL_THROTTLE";
pub const SEARCH_DEBOUNCE_VAR: &str = "MARQUEE_SEARCH_DEBOUNCE";
pub const PREFERENCES_PATH_VAR: &str = "MARQUEE_PREFERENCES_PATH";

/// Environment-derived configuration values, kept raw until the loader
/// parses them so a bad value can be reported with its variable name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
    pub item_width: Option<String>,
    pub item_gap: Option<String>,
    pub items_per_page: Option<String>,
    pub wheel_direction: Option<String>,
    pub pointer_drag_sensitivity: Option<String>,
    pub touch_drag_sensitivity: Option<String>,
    pub resize_debounce: Option<String>,
    pub scroll_throttle: Option<String>,
    pub search_debounce: Option<String>,
    pub preferences_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| non_blank(lookup(name));

        Self {
            config_path: var(CONFIG_PATH_VAR).map(PathBuf::from),
            config_json: var(CONFIG_JSON_VAR),
            item_width: var(ITEM_WIDTH_VAR),
            item_gap: var(ITEM_GAP_VAR),
            items_per_page: var(ITEMS_PER_PAGE_VAR),
            wheel_direction: var(WHEEL_DIRECTION_VAR),
            pointer_drag_sensitivity: var(POINTER_SENSITIVITY_VAR),
            touch_drag_sensitivity: var(TOUCH_SENSITIVITY_VAR),
            resize_debounce: var(RESIZE_DEBOUNCE_VAR),
            scroll_throttle: var(SCROLL_THROTTLE_VAR),
            search_debounce: var(SEARCH_DEBOUNCE_VAR),
            preferences_path: var(PREFERENCES_PATH_VAR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn toml_sections_are_optional() {
        let parsed: FileConfig = toml::from_str(
            r#"
            [slider]
            item_width = 240
            wheel_direction = "inverted"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.slider.item_width, Some(240.0));
        assert_eq!(parsed.slider.wheel_direction.as_deref(), Some("inverted"));
        assert_eq!(parsed.timing, FileTimingConfig::default());
    }

    #[test]
    fn unknown_extension_falls_back_to_json() {
        let parsed = FileConfig::parse_from_str(
            r#"{"timing": {"search_debounce": "500ms"}}"#,
            "inline",
        )
        .unwrap();
        assert_eq!(parsed.timing.search_debounce.as_deref(), Some("500ms"));

        let err = FileConfig::parse_from_str("[slider", "broken").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn rendered_toml_parses_back() {
        let config = MarqueeConfig::default();
        let rendered = FileConfig::from(&config).to_toml_string().unwrap();
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, FileConfig::from(&config));
        assert!(rendered.contains("wheel_direction = \"natural\""));
    }

    #[test]
    fn env_lookup_skips_blank_values() {
        let vars = HashMap::from([
            (ITEM_WIDTH_VAR, "200"),
            (ITEM_GAP_VAR, "  "),
            (PREFERENCES_PATH_VAR, "/data/prefs.json"),
        ]);
        let env = EnvConfig::from_lookup(|name| {
            vars.get(name).map(|v| v.to_string())
        });
        assert_eq!(env.item_width.as_deref(), Some("200"));
        assert_eq!(env.item_gap, None);
        assert_eq!(
            env.preferences_path,
            Some(PathBuf::from("/data/prefs.json"))
        );
    }
}
