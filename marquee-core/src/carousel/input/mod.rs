//! Input adapters
//!
//! Each adapter reads the row's current offset, proposes a candidate, clamps
//! it through the row and reports what happened. Adapters take the row by
//! `&mut`, so a read-compute-write can never interleave with another.

pub mod button;
pub mod drag;
pub mod wheel;

use super::render::RenderFrame;

/// Result of feeding one input event to a row.
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    /// The offset was written (possibly unchanged after clamping).
    Applied(RenderFrame),
    /// The row has nothing to scroll; no state changed.
    NotScrollable,
    /// A drag session owns the row.
    Busy,
    /// The event carried no movement for this row.
    Ignored,
}

impl InputOutcome {
    pub fn frame(&self) -> Option<&RenderFrame> {
        match self {
            InputOutcome::Applied(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn into_frame(self) -> Option<RenderFrame> {
        match self {
            InputOutcome::Applied(frame) => Some(frame),
            _ => None,
        }
    }

    /// Whether the host should suppress its own default handling.
    pub fn is_handled(&self) -> bool {
        matches!(self, InputOutcome::Applied(_))
    }
}
