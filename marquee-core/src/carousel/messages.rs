//! Input events for the slider engine

use marquee_model::CategoryKey;

use super::types::{DragSource, NavDirection};

#[derive(Debug, Clone, PartialEq)]
pub enum SliderMessage {
    // Navigation controls
    Navigate(CategoryKey, NavDirection),

    // Drag
    DragStart {
        key: CategoryKey,
        source: DragSource,
        x: f32,
    },
    DragMove {
        key: CategoryKey,
        x: f32,
    },
    DragEnd(CategoryKey),
    /// Pointer released anywhere on the page.
    ReleaseAll,

    // Wheel and hover
    Wheel {
        key: CategoryKey,
        delta_y: f32,
    },
    PointerEntered(CategoryKey),
    PointerLeft(CategoryKey),
}

impl SliderMessage {
    /// Row the message targets, if any.
    pub fn key(&self) -> Option<&CategoryKey> {
        match self {
            SliderMessage::Navigate(key, _)
            | SliderMessage::DragStart { key, .. }
            | SliderMessage::DragMove { key, .. }
            | SliderMessage::DragEnd(key)
            | SliderMessage::Wheel { key, .. }
            | SliderMessage::PointerEntered(key)
            | SliderMessage::PointerLeft(key) => Some(key),
            SliderMessage::ReleaseAll => None,
        }
    }
}
