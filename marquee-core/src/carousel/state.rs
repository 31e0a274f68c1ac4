//! SliderState: per-row offset store
//!
//! The offset is authoritative. Every write goes through [`clamp_offset`],
//! so `0 <= offset <= max_scroll` holds after any mutation.

use marquee_contracts::layout::RowMeasurement;
use marquee_model::{CategoryKey, ContentId};

use super::render::Transition;
use super::types::DragSource;

/// Clamp a candidate offset into `[0, max_scroll]`.
///
/// Non-finite candidates collapse to 0, and so does a non-positive or
/// non-finite `max_scroll`.
pub fn clamp_offset(candidate: f32, max_scroll: f32) -> f32 {
    let max = if max_scroll.is_finite() && max_scroll > 0.0 {
        max_scroll
    } else {
        0.0
    };
    if !candidate.is_finite() {
        return 0.0;
    }
    candidate.clamp(0.0, max)
}

/// One in-flight drag on a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub source: DragSource,
    pub origin_offset: f32,
    pub origin_x: f32,
    pub sensitivity: f32,
}

impl DragSession {
    /// Offset proposed for a pointer at `x`. Dragging left moves forward.
    pub fn candidate(&self, x: f32) -> f32 {
        self.origin_offset - (x - self.origin_x) * self.sensitivity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    #[default]
    Idle,
    Dragging(DragSession),
}

#[derive(Debug, Clone)]
pub struct SliderState {
    key: CategoryKey,
    item_ids: Vec<ContentId>,
    offset: f32,
    max_scroll: f32,
    measurement: Option<RowMeasurement>,
    input: InputState,
    transition: Transition,
}

impl SliderState {
    pub fn new(key: CategoryKey, item_ids: Vec<ContentId>) -> Self {
        Self {
            key,
            item_ids,
            offset: 0.0,
            max_scroll: 0.0,
            measurement: None,
            input: InputState::Idle,
            transition: Transition::Animated,
        }
    }

    pub fn key(&self) -> &CategoryKey {
        &self.key
    }

    pub fn item_ids(&self) -> &[ContentId] {
        &self.item_ids
    }

    /// Replace the row's items. Bounds follow on the next measurement.
    pub fn set_items(&mut self, item_ids: Vec<ContentId>) {
        self.item_ids = item_ids;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_scroll(&self) -> f32 {
        self.max_scroll
    }

    pub fn measurement(&self) -> Option<RowMeasurement> {
        self.measurement
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.input, InputState::Dragging(_))
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        match &self.input {
            InputState::Dragging(session) => Some(session),
            InputState::Idle => None,
        }
    }

    /// Whether any adapter can move this row.
    pub fn can_scroll(&self) -> bool {
        self.max_scroll > 0.0
    }

    /// Clamp and store a candidate offset, returning the stored value.
    pub fn write_offset(&mut self, candidate: f32) -> f32 {
        self.offset = clamp_offset(candidate, self.max_scroll);
        self.offset
    }

    /// Adopt a fresh layout measurement and re-clamp the offset.
    pub fn apply_measurement(&mut self, measurement: RowMeasurement) {
        self.measurement = Some(measurement);
        self.max_scroll = measurement.max_scroll();
        self.offset = clamp_offset(self.offset, self.max_scroll);
    }

    pub(crate) fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    pub(crate) fn set_input(&mut self, input: InputState) {
        self.input = input;
    }
}
