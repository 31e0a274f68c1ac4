//! Pointer hover tracking
//!
//! Wheel input only drives the row under the pointer. Enter and leave events
//! can arrive out of order when the pointer crosses between adjacent rows, so
//! a leave only clears hover if it names the row that currently holds it.

use marquee_model::CategoryKey;

#[derive(Debug, Default, Clone)]
pub struct HoverTracker {
    hovered: Option<CategoryKey>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, key: CategoryKey) {
        self.hovered = Some(key);
    }

    pub fn leave(&mut self, key: &CategoryKey) {
        if self.hovered.as_ref() == Some(key) {
            self.hovered = None;
        }
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&CategoryKey> {
        self.hovered.as_ref()
    }

    pub fn is_hovered(&self, key: &CategoryKey) -> bool {
        self.hovered.as_ref() == Some(key)
    }
}
