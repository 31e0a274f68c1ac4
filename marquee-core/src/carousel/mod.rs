//! Slider engine
//!
//! Horizontally scrolling content rows. Each row keeps one clamped scroll
//! offset which three input sources (navigation buttons, pointer/touch drag,
//! wheel) read and write. After every write the row is projected into a
//! [`RenderFrame`] carrying the transform and the enabled state of the
//! navigation controls.
//!
//! All rows are owned by a [`SliderController`]; hosts route input through
//! [`handle_slider_message`] and layout changes through
//! [`recalculate_bounds`].

pub mod bounds;
pub mod hover;
pub mod input;
pub mod messages;
pub mod registry;
pub mod render;
pub mod state;
pub mod types;
pub mod update;

pub use bounds::{ComputedLayout, recalculate_bounds};
pub use hover::HoverTracker;
pub use input::InputOutcome;
pub use messages::SliderMessage;
pub use registry::SliderController;
pub use render::{NavAffordances, RenderFrame, Transition, render};
pub use state::{DragSession, InputState, SliderState, clamp_offset};
pub use types::*;
pub use update::{SliderUpdate, handle_slider_message};

pub mod prelude {
    pub use super::{
        CarouselConfig, ComputedLayout, DragSource, InputOutcome,
        NavAffordances, NavDirection, RenderFrame, SliderController,
        SliderMessage, SliderState, SliderUpdate, Transition, WheelDirection,
        handle_slider_message, recalculate_bounds,
    };
}
