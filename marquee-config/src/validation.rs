use std::time::Duration;

use thiserror::Error;

use super::models::MarqueeConfig;

/// Sensitivities above this make a short drag fling across whole pages.
const HIGH_SENSITIVITY: f32 = 5.0;
/// Debounce windows above this feel unresponsive.
const SLOW_WINDOW: Duration = Duration::from_secs(2);

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("slider item width must be a positive number, got {0}")]
    InvalidItemWidth(f32),
    #[error("slider item spacing must be zero or positive, got {0}")]
    InvalidItemSpacing(f32),
    #[error("slider items per page must be at least 1")]
    ZeroItemsPerPage,
    #[error("{field} must be a positive number, got {value}")]
    InvalidSensitivity { field: &'static str, value: f32 },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &MarqueeConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    let slider = &config.slider;

    if !slider.item_width.is_finite() || slider.item_width <= 0.0 {
        return Err(ConfigGuardRailError::InvalidItemWidth(slider.item_width));
    }
    if !slider.item_spacing.is_finite() || slider.item_spacing < 0.0 {
        return Err(ConfigGuardRailError::InvalidItemSpacing(
            slider.item_spacing,
        ));
    }
    if slider.items_per_page == 0 {
        return Err(ConfigGuardRailError::ZeroItemsPerPage);
    }

    for (field, value) in [
        ("pointer drag sensitivity", slider.pointer_drag_sensitivity),
        ("touch drag sensitivity", slider.touch_drag_sensitivity),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigGuardRailError::InvalidSensitivity {
                field,
                value,
            });
        }
        if value > HIGH_SENSITIVITY {
            warnings.push_with_hint(
                format!("{field} of {value} is unusually high"),
                "Values between 1.0 and 2.0 track the finger closely",
            );
        }
    }

    let timing = &config.timing;
    if timing.scroll_throttle.is_zero() {
        warnings.push("scroll throttle is zero; every scroll event is handled");
    }
    for (name, window) in [
        ("resize debounce", timing.resize_debounce),
        ("search debounce", timing.search_debounce),
    ] {
        if window > SLOW_WINDOW {
            warnings.push_with_hint(
                format!("{name} of {window:?} will feel unresponsive"),
                "Typical values are 250ms to 500ms",
            );
        }
    }

    Ok(warnings)
}
