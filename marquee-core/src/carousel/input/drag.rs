//! Pointer and touch drag sessions.
//!
//! A session captures the offset and pointer position at start; every move
//! proposes an offset relative to that origin rather than the last move, so
//! dropped move events never accumulate error.

use tracing::debug;

use super::InputOutcome;
use crate::carousel::render::{Transition, render};
use crate::carousel::state::{DragSession, InputState, SliderState};
use crate::carousel::types::{CarouselConfig, DragSource};

pub fn begin(
    state: &mut SliderState,
    config: &CarouselConfig,
    source: DragSource,
    x: f32,
) -> InputOutcome {
    if state.is_dragging() {
        return InputOutcome::Busy;
    }
    if !state.can_scroll() {
        return InputOutcome::NotScrollable;
    }
    if !x.is_finite() {
        return InputOutcome::Ignored;
    }

    let session = DragSession {
        source,
        origin_offset: state.offset(),
        origin_x: x,
        sensitivity: config.drag_sensitivity(source),
    };
    state.set_input(InputState::Dragging(session));
    state.set_transition(Transition::Immediate);
    debug!(row = %state.key(), ?source, origin = session.origin_offset, "drag start");
    InputOutcome::Applied(render(state))
}

pub fn move_to(state: &mut SliderState, x: f32) -> InputOutcome {
    let Some(session) = state.drag_session().copied() else {
        return InputOutcome::Ignored;
    };
    if !x.is_finite() {
        return InputOutcome::Ignored;
    }
    state.write_offset(session.candidate(x));
    InputOutcome::Applied(render(state))
}

pub fn end(state: &mut SliderState) -> InputOutcome {
    if !state.is_dragging() {
        return InputOutcome::Ignored;
    }
    state.set_input(InputState::Idle);
    state.set_transition(Transition::Animated);
    debug!(row = %state.key(), offset = state.offset(), "drag end");
    InputOutcome::Applied(render(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::input::{button, wheel};
    use crate::carousel::types::NavDirection;
    use marquee_contracts::layout::RowMeasurement;
    use marquee_model::CategoryKey;

    fn row(max_scroll: f32) -> SliderState {
        let mut s = SliderState::new(CategoryKey::originals(), Vec::new());
        s.apply_measurement(RowMeasurement::new(1000.0 + max_scroll, 1000.0));
        s
    }

    #[test]
    fn pointer_drag_scales_by_sensitivity() {
        let cfg = CarouselConfig::default();
        let mut s = row(3000.0);
        s.write_offset(600.0);

        let start = begin(&mut s, &cfg, DragSource::Pointer, 500.0);
        assert_eq!(start.frame().unwrap().transition, Transition::Immediate);

        move_to(&mut s, 400.0);
        assert_eq!(s.offset(), 750.0);
        move_to(&mut s, 700.0);
        assert_eq!(s.offset(), 300.0);

        let done = end(&mut s);
        assert_eq!(done.frame().unwrap().transition, Transition::Animated);
        assert!(!s.is_dragging());
    }

    #[test]
    fn touch_drag_is_one_to_one_and_clamped() {
        let cfg = CarouselConfig::default();
        let mut s = row(500.0);
        begin(&mut s, &cfg, DragSource::Touch, 100.0);
        move_to(&mut s, 50.0);
        assert_eq!(s.offset(), 50.0);
        move_to(&mut s, -2000.0);
        assert_eq!(s.offset(), 500.0);
        move_to(&mut s, 9000.0);
        assert_eq!(s.offset(), 0.0);
    }

    #[test]
    fn drag_owns_the_row() {
        let cfg = CarouselConfig::default();
        let mut s = row(3000.0);
        begin(&mut s, &cfg, DragSource::Pointer, 0.0);

        assert_eq!(
            begin(&mut s, &cfg, DragSource::Touch, 10.0),
            InputOutcome::Busy
        );
        assert_eq!(
            button::press(&mut s, &cfg, NavDirection::Forward),
            InputOutcome::Busy
        );
        assert_eq!(wheel::scroll(&mut s, &cfg, 1.0), InputOutcome::Busy);
        assert_eq!(s.offset(), 0.0);
    }

    #[test]
    fn moves_without_session_are_ignored() {
        let mut s = row(3000.0);
        assert_eq!(move_to(&mut s, 10.0), InputOutcome::Ignored);
        assert_eq!(end(&mut s), InputOutcome::Ignored);
    }
}
