use tracing::debug;

use super::InputOutcome;
use crate::carousel::render::{Transition, render};
use crate::carousel::state::SliderState;
use crate::carousel::types::{CarouselConfig, NavDirection};

/// Move a row one page in `direction`.
pub fn press(
    state: &mut SliderState,
    config: &CarouselConfig,
    direction: NavDirection,
) -> InputOutcome {
    if state.is_dragging() {
        debug!(row = %state.key(), "nav press ignored during drag");
        return InputOutcome::Busy;
    }
    if !state.can_scroll() {
        return InputOutcome::NotScrollable;
    }

    let before = state.offset();
    let candidate = before + direction.sign() * config.page_step();
    let after = state.write_offset(candidate);
    state.set_transition(Transition::Animated);
    debug!(
        row = %state.key(),
        ?direction,
        before,
        after,
        "nav press"
    );
    InputOutcome::Applied(render(state))
}
