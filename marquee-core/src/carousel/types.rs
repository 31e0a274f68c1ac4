//! Shared types for the carousel engine

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{input, layout};

/// Which way a row moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Backward,
    Forward,
}

impl NavDirection {
    /// Sign applied to step sizes: -1 backward, +1 forward.
    pub const fn sign(self) -> f32 {
        match self {
            NavDirection::Backward => -1.0,
            NavDirection::Forward => 1.0,
        }
    }
}

/// How a vertical wheel delta maps onto horizontal row movement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WheelDirection {
    /// Positive delta (wheel down) moves forward.
    #[default]
    Natural,
    /// Positive delta moves backward.
    Inverted,
}

impl WheelDirection {
    /// Direction for a wheel delta, or `None` when the delta carries no
    /// movement.
    pub fn direction_for(self, delta_y: f32) -> Option<NavDirection> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return None;
        }
        let positive = delta_y > 0.0;
        let forward = match self {
            WheelDirection::Natural => positive,
            WheelDirection::Inverted => !positive,
        };
        Some(if forward {
            NavDirection::Forward
        } else {
            NavDirection::Backward
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            WheelDirection::Natural => "natural",
            WheelDirection::Inverted => "inverted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wheel direction '{0}' (expected natural or inverted)")]
pub struct ParseWheelDirectionError(pub String);

impl FromStr for WheelDirection {
    type Err = ParseWheelDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natural" => Ok(WheelDirection::Natural),
            "inverted" => Ok(WheelDirection::Inverted),
            _ => Err(ParseWheelDirectionError(s.to_string())),
        }
    }
}

/// Input device behind a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragSource {
    /// Mouse or pen.
    Pointer,
    Touch,
}

/// Static configuration shared by every row of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub item_width: f32,
    pub item_spacing: f32,
    pub items_per_page: usize,
    pub pointer_drag_sensitivity: f32,
    pub touch_drag_sensitivity: f32,
    pub wheel_direction: WheelDirection,
}

impl CarouselConfig {
    /// Defaults for standard 300px poster cards.
    pub const fn poster_defaults() -> Self {
        Self {
            item_width: layout::CARD_WIDTH,
            item_spacing: layout::CARD_GAP,
            items_per_page: layout::ITEMS_PER_PAGE,
            pointer_drag_sensitivity: input::POINTER_DRAG_SENSITIVITY,
            touch_drag_sensitivity: input::TOUCH_DRAG_SENSITIVITY,
            wheel_direction: WheelDirection::Natural,
        }
    }

    /// Distance from one card's leading edge to the next.
    pub fn stride(&self) -> f32 {
        self.item_width + self.item_spacing
    }

    /// Offset change of one navigation button press.
    pub fn page_step(&self) -> f32 {
        self.stride() * self.items_per_page as f32
    }

    /// Offset change of one wheel notch.
    pub fn wheel_step(&self) -> f32 {
        self.stride()
    }

    pub fn drag_sensitivity(&self, source: DragSource) -> f32 {
        match source {
            DragSource::Pointer => self.pointer_drag_sensitivity,
            DragSource::Touch => self.touch_drag_sensitivity,
        }
    }

    /// Track length of a row holding `count` cards.
    pub fn track_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let n = count as f32;
        n * self.item_width + (n - 1.0) * self.item_spacing
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::poster_defaults()
    }
}
