//! Bounds recalculation after layout changes.

use std::collections::HashMap;

use marquee_contracts::layout::{LayoutProbe, RowMeasurement};
use marquee_model::CategoryKey;
use tracing::{debug, warn};

use super::registry::SliderController;
use super::render::{RenderFrame, render};
use super::types::CarouselConfig;

/// Re-measure every row, re-clamp offsets and return a fresh frame for each
/// row in page order.
///
/// Rows the probe cannot measure keep their last known bounds.
pub fn recalculate_bounds(
    controller: &mut SliderController,
    probe: &dyn LayoutProbe,
) -> Vec<RenderFrame> {
    let keys: Vec<CategoryKey> = controller.keys().cloned().collect();
    let mut frames = Vec::with_capacity(keys.len());
    for key in keys {
        let Some(state) = controller.get_mut(&key) else {
            continue;
        };
        match probe.measure(&key) {
            Some(measurement) => {
                let before = state.offset();
                state.apply_measurement(measurement);
                if state.offset() != before {
                    debug!(
                        row = %key,
                        before,
                        after = state.offset(),
                        "offset re-clamped"
                    );
                }
            }
            None => warn!(row = %key, "row not measurable; keeping bounds"),
        }
        frames.push(render(state));
    }
    frames
}

/// Layout probe that derives track widths from card geometry.
///
/// Useful where there is no real layout engine: the CLI, headless hosts and
/// tests. Every row shares one viewport width.
#[derive(Debug, Clone)]
pub struct ComputedLayout {
    config: CarouselConfig,
    viewport_width: f32,
    item_counts: HashMap<CategoryKey, usize>,
}

impl ComputedLayout {
    /// Snapshot the item counts of every row in `controller`.
    pub fn new(controller: &SliderController, viewport_width: f32) -> Self {
        let item_counts = controller
            .iter()
            .map(|s| (s.key().clone(), s.item_ids().len()))
            .collect();
        Self {
            config: *controller.config(),
            viewport_width,
            item_counts,
        }
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width;
    }
}

impl LayoutProbe for ComputedLayout {
    fn measure(&self, row: &CategoryKey) -> Option<RowMeasurement> {
        let count = *self.item_counts.get(row)?;
        Some(RowMeasurement::new(
            self.config.track_width(count),
            self.viewport_width,
        ))
    }
}
