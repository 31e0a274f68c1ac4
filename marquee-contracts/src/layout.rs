use marquee_model::CategoryKey;
use std::collections::HashMap;

/// Live layout of one row as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowMeasurement {
    /// Full scrollable length of the track in pixels.
    pub track_width: f32,
    /// Visible width of the row container in pixels.
    pub viewport_width: f32,
}

impl RowMeasurement {
    pub const fn new(track_width: f32, viewport_width: f32) -> Self {
        Self {
            track_width,
            viewport_width,
        }
    }

    /// Largest valid offset for this layout, never negative.
    pub fn max_scroll(&self) -> f32 {
        let max = self.track_width - self.viewport_width;
        if max.is_finite() && max > 0.0 { max } else { 0.0 }
    }
}

/// Source of live row measurements.
///
/// Hosts answer from their real layout; `None` means the row's container is
/// not currently laid out (removed, hidden) and the caller keeps the last
/// known bounds.
pub trait LayoutProbe {
    fn measure(&self, row: &CategoryKey) -> Option<RowMeasurement>;
}

/// Fixed measurements, for hosts that lay rows out once and for tests.
impl LayoutProbe for HashMap<CategoryKey, RowMeasurement> {
    fn measure(&self, row: &CategoryKey) -> Option<RowMeasurement> {
        self.get(row).copied()
    }
}
