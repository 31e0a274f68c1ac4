//! Message routing for the slider engine

use tracing::{debug, warn};

use super::input::{InputOutcome, button, drag, wheel};
use super::messages::SliderMessage;
use super::registry::SliderController;
use super::render::RenderFrame;

/// What the host must do after a slider message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderUpdate {
    /// Frames to apply, one per row that changed.
    pub frames: Vec<RenderFrame>,
    /// The host should cancel its default handling of the source event.
    pub suppress_default: bool,
}

impl SliderUpdate {
    fn from_outcome(outcome: InputOutcome) -> Self {
        let suppress_default = outcome.is_handled();
        Self {
            frames: outcome.into_frame().into_iter().collect(),
            suppress_default,
        }
    }
}

/// Route one message to its row.
///
/// Messages for unknown rows are logged and dropped.
pub fn handle_slider_message(
    controller: &mut SliderController,
    message: SliderMessage,
) -> SliderUpdate {
    match message {
        SliderMessage::ReleaseAll => SliderUpdate {
            frames: controller.end_all_drags(),
            suppress_default: false,
        },
        SliderMessage::PointerEntered(key) => {
            if controller.get(&key).is_some() {
                controller.hover_mut().enter(key);
            }
            SliderUpdate::default()
        }
        SliderMessage::PointerLeft(key) => {
            controller.hover_mut().leave(&key);
            SliderUpdate::default()
        }
        message => {
            let Some(key) = message.key().cloned() else {
                return SliderUpdate::default();
            };
            let Some((config, state, hover)) = controller.split_mut(&key)
            else {
                warn!(row = %key, "slider message for unknown row");
                return SliderUpdate::default();
            };

            let is_wheel = matches!(message, SliderMessage::Wheel { .. });
            let outcome = match message {
                SliderMessage::Navigate(_, direction) => {
                    button::press(state, config, direction)
                }
                SliderMessage::DragStart { source, x, .. } => {
                    drag::begin(state, config, source, x)
                }
                SliderMessage::DragMove { x, .. } => drag::move_to(state, x),
                SliderMessage::DragEnd(_) => drag::end(state),
                SliderMessage::Wheel { delta_y, .. } => {
                    if hover.is_hovered(&key) {
                        wheel::scroll(state, config, delta_y)
                    } else {
                        debug!(row = %key, "wheel outside hovered row");
                        InputOutcome::Ignored
                    }
                }
                _ => InputOutcome::Ignored,
            };

            // Only wheel steps cancel native page scrolling.
            let mut update = SliderUpdate::from_outcome(outcome);
            update.suppress_default &= is_wheel;
            update
        }
    }
}
