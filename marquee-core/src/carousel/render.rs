//! Render sync: project a row's offset into what the host draws.

use marquee_model::CategoryKey;
use serde::Serialize;

use super::state::SliderState;

/// Whether the track animates toward its new position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// Eased transform; buttons and wheel.
    #[default]
    Animated,
    /// Follows the input exactly; active drags.
    Immediate,
}

impl Transition {
    /// CSS `transition` value for hosts rendering to a stylesheet.
    pub const fn css(self) -> &'static str {
        match self {
            Transition::Animated => "transform 0.3s ease-out",
            Transition::Immediate => "none",
        }
    }
}

/// Enabled state of the two navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavAffordances {
    pub backward_enabled: bool,
    pub forward_enabled: bool,
}

/// Everything the host needs to draw one row after an update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub key: CategoryKey,
    pub offset: f32,
    pub translate_x: f32,
    pub transition: Transition,
    pub nav: NavAffordances,
}

impl RenderFrame {
    /// CSS transform string, e.g. `translateX(-308px)`.
    pub fn transform(&self) -> String {
        format!("translateX({}px)", self.translate_x)
    }
}

/// Derive a row's frame from its current state.
pub fn render(state: &SliderState) -> RenderFrame {
    let offset = state.offset();
    RenderFrame {
        key: state.key().clone(),
        offset,
        translate_x: if offset == 0.0 { 0.0 } else { -offset },
        transition: state.transition(),
        nav: NavAffordances {
            backward_enabled: offset > 0.0,
            forward_enabled: offset < state.max_scroll(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_contracts::layout::RowMeasurement;

    #[test]
    fn affordances_follow_boundaries() {
        let mut s = SliderState::new(CategoryKey::trending(), Vec::new());
        s.apply_measurement(RowMeasurement::new(2200.0, 1000.0));

        let start = render(&s);
        assert!(!start.nav.backward_enabled);
        assert!(start.nav.forward_enabled);
        assert_eq!(start.transform(), "translateX(0px)");

        s.write_offset(308.0);
        let mid = render(&s);
        assert!(mid.nav.backward_enabled && mid.nav.forward_enabled);
        assert_eq!(mid.transform(), "translateX(-308px)");

        s.write_offset(1e6);
        let end = render(&s);
        assert!(end.nav.backward_enabled);
        assert!(!end.nav.forward_enabled);
        assert_eq!(end.translate_x, -1200.0);
    }

    #[test]
    fn unscrollable_row_disables_both() {
        let mut s = SliderState::new(CategoryKey::top10(), Vec::new());
        s.apply_measurement(RowMeasurement::new(600.0, 1000.0));
        assert_eq!(render(&s).nav, NavAffordances::default());
    }
}
