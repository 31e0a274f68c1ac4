use tracing::debug;

use super::InputOutcome;
use crate::carousel::render::{Transition, render};
use crate::carousel::state::SliderState;
use crate::carousel::types::CarouselConfig;

/// Move a row one card for a wheel notch.
///
/// Callers gate this on the pointer being over the row. Only an
/// [`InputOutcome::Applied`] result should suppress the host's default page
/// scroll.
pub fn scroll(
    state: &mut SliderState,
    config: &CarouselConfig,
    delta_y: f32,
) -> InputOutcome {
    let Some(direction) = config.wheel_direction.direction_for(delta_y) else {
        return InputOutcome::Ignored;
    };
    if state.is_dragging() {
        return InputOutcome::Busy;
    }
    if !state.can_scroll() {
        return InputOutcome::NotScrollable;
    }

    let candidate = state.offset() + direction.sign() * config.wheel_step();
    let after = state.write_offset(candidate);
    state.set_transition(Transition::Animated);
    debug!(row = %state.key(), delta_y, after, "wheel step");
    InputOutcome::Applied(render(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::types::WheelDirection;
    use marquee_contracts::layout::RowMeasurement;
    use marquee_model::CategoryKey;

    fn row(max_scroll: f32) -> SliderState {
        let mut s = SliderState::new(CategoryKey::popular(), Vec::new());
        s.apply_measurement(RowMeasurement::new(1000.0 + max_scroll, 1000.0));
        s
    }

    #[test]
    fn positive_delta_steps_forward() {
        let cfg = CarouselConfig::default();
        let mut s = row(2000.0);
        let out = scroll(&mut s, &cfg, 100.0);
        assert!(out.is_handled());
        assert_eq!(s.offset(), 308.0);
    }

    #[test]
    fn step_clamps_at_max() {
        let cfg = CarouselConfig::default();
        let mut s = row(200.0);
        scroll(&mut s, &cfg, 3.0);
        assert_eq!(s.offset(), 200.0);
    }

    #[test]
    fn inverted_policy_steps_backward() {
        let cfg = CarouselConfig {
            wheel_direction: WheelDirection::Inverted,
            ..CarouselConfig::default()
        };
        let mut s = row(2000.0);
        s.write_offset(1000.0);
        scroll(&mut s, &cfg, 100.0);
        assert_eq!(s.offset(), 692.0);
    }

    #[test]
    fn zero_delta_and_flat_rows_are_not_handled() {
        let cfg = CarouselConfig::default();
        let mut s = row(2000.0);
        assert_eq!(scroll(&mut s, &cfg, 0.0), InputOutcome::Ignored);

        let mut flat = row(0.0);
        let out = scroll(&mut flat, &cfg, 50.0);
        assert_eq!(out, InputOutcome::NotScrollable);
        assert!(!out.is_handled());
    }
}
