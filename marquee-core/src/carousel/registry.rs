//! SliderController: owner of every row's state, keyed by category

use std::collections::HashMap;

use marquee_model::{CategoryKey, ContentId};
use tracing::debug;

use super::hover::HoverTracker;
use super::input::drag;
use super::render::{RenderFrame, render};
use super::state::SliderState;
use super::types::CarouselConfig;

#[derive(Debug, Default)]
pub struct SliderController {
    config: CarouselConfig,
    sliders: HashMap<CategoryKey, SliderState>,
    /// Registration order, which is page order.
    order: Vec<CategoryKey>,
    hover: HoverTracker,
}

impl SliderController {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Register a row, or refresh the items of an existing one.
    ///
    /// Existing rows keep their offset; bounds follow on the next
    /// measurement.
    pub fn register(
        &mut self,
        key: CategoryKey,
        item_ids: Vec<ContentId>,
    ) -> &mut SliderState {
        if !self.sliders.contains_key(&key) {
            debug!(row = %key, items = item_ids.len(), "registering slider");
            self.order.push(key.clone());
        }
        let state = self
            .sliders
            .entry(key)
            .or_insert_with_key(|k| SliderState::new(k.clone(), Vec::new()));
        state.set_items(item_ids);
        state
    }

    pub fn get(&self, key: &CategoryKey) -> Option<&SliderState> {
        self.sliders.get(key)
    }

    pub fn get_mut(&mut self, key: &CategoryKey) -> Option<&mut SliderState> {
        self.sliders.get_mut(key)
    }

    pub fn remove(&mut self, key: &CategoryKey) -> Option<SliderState> {
        self.order.retain(|k| k != key);
        self.hover.leave(key);
        self.sliders.remove(key)
    }

    /// Row keys in page order.
    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.order.iter()
    }

    /// Rows in page order.
    pub fn iter(&self) -> impl Iterator<Item = &SliderState> {
        self.order.iter().filter_map(|k| self.sliders.get(k))
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    pub fn hover(&self) -> &HoverTracker {
        &self.hover
    }

    pub fn hover_mut(&mut self) -> &mut HoverTracker {
        &mut self.hover
    }

    /// Config and one row, borrowed together for the input adapters.
    pub(crate) fn split_mut(
        &mut self,
        key: &CategoryKey,
    ) -> Option<(&CarouselConfig, &mut SliderState, &HoverTracker)> {
        let state = self.sliders.get_mut(key)?;
        Some((&self.config, state, &self.hover))
    }

    /// End every active drag session, returning frames for the rows that
    /// were dragging.
    pub fn end_all_drags(&mut self) -> Vec<RenderFrame> {
        let mut frames = Vec::new();
        for key in &self.order {
            if let Some(state) = self.sliders.get_mut(key)
                && state.is_dragging()
                && let Some(frame) = drag::end(state).into_frame()
            {
                frames.push(frame);
            }
        }
        frames
    }

    /// Current frame of every row, in page order.
    pub fn frames(&self) -> Vec<RenderFrame> {
        self.iter().map(render).collect()
    }
}
