use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use marquee_core::carousel::{
    CarouselConfig, ComputedLayout, DragSource, NavDirection, RenderFrame,
    SliderController, SliderMessage, handle_slider_message,
    recalculate_bounds, render,
};
use marquee_model::{CategoryKey, ContentId};
use serde::Serialize;
use tracing::debug;

use super::{Session, print_json};

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Next,
    Prev,
    Wheel(f32),
    Drag { source: DragSource, from: f32, to: f32 },
    Resize(f32),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let mut parts = raw.trim().split(':');
        let head = parts.next().unwrap_or_default().to_ascii_lowercase();
        let mut number = |what: &str| -> Result<f32> {
            let part = parts
                .next()
                .ok_or_else(|| anyhow!("step '{raw}' is missing {what}"))?;
            part.parse()
                .with_context(|| format!("step '{raw}' has a bad {what}"))
        };

        let step = match head.as_str() {
            "next" => Step::Next,
            "prev" => Step::Prev,
            "wheel" => Step::Wheel(number("delta")?),
            "drag" | "touch" => {
                let from = number("start x")?;
                let to = number("end x")?;
                let source = if head == "touch" {
                    DragSource::Touch
                } else {
                    DragSource::Pointer
                };
                Step::Drag { source, from, to }
            }
            "resize" => Step::Resize(number("width")?),
            other => bail!(
                "unknown step '{other}' (expected next, prev, wheel, drag, touch or resize)"
            ),
        };
        if parts.next().is_some() {
            bail!("step '{raw}' has trailing fields");
        }
        Ok(step)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => write!(f, "next"),
            Step::Prev => write!(f, "prev"),
            Step::Wheel(delta) => write!(f, "wheel:{delta}"),
            Step::Drag {
                source: DragSource::Pointer,
                from,
                to,
            } => write!(f, "drag:{from}:{to}"),
            Step::Drag {
                source: DragSource::Touch,
                from,
                to,
            } => write!(f, "touch:{from}:{to}"),
            Step::Resize(width) => write!(f, "resize:{width}"),
        }
    }
}

#[derive(Debug)]
pub struct SimulateOptions {
    pub row: String,
    pub items: Option<usize>,
    pub viewport: f32,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceLine {
    pub step: String,
    /// The row handled the step, even if clamping left it in place.
    pub applied: bool,
    pub frame: RenderFrame,
}

pub fn simulate(session: &Session, options: SimulateOptions) -> Result<()> {
    let key = CategoryKey::new(options.row.as_str())
        .with_context(|| format!("invalid row key '{}'", options.row))?;

    let ids: Vec<ContentId> = match options.items {
        Some(count) => (1..=count as u64).map(ContentId).collect(),
        None => {
            let catalog = session.catalog()?;
            let (_, items) = catalog
                .categories()
                .find(|(k, _)| **k == key)
                .ok_or_else(|| anyhow!("catalog has no row '{key}'"))?;
            items.iter().map(|item| item.id).collect()
        }
    };

    let trace = run(
        session.config.slider,
        key,
        ids,
        options.viewport,
        &options.steps,
    )?;

    if session.json {
        return print_json(&trace);
    }
    for line in &trace {
        let frame = &line.frame;
        println!(
            "{:<16} offset={:>8.1}  {:<22} prev={} next={}{}",
            line.step,
            frame.offset,
            frame.transform(),
            on_off(frame.nav.backward_enabled),
            on_off(frame.nav.forward_enabled),
            if line.applied { "" } else { "  (ignored)" }
        );
    }
    Ok(())
}

/// Replay `steps` against a single measured row. The pointer is treated as
/// resting over the row throughout, so wheel input applies.
pub fn run(
    config: CarouselConfig,
    key: CategoryKey,
    ids: Vec<ContentId>,
    viewport: f32,
    steps: &[Step],
) -> Result<Vec<TraceLine>> {
    let mut controller = SliderController::new(config);
    controller.register(key.clone(), ids);
    let mut layout = ComputedLayout::new(&controller, viewport);
    recalculate_bounds(&mut controller, &layout);
    handle_slider_message(
        &mut controller,
        SliderMessage::PointerEntered(key.clone()),
    );

    let current = |controller: &SliderController| -> Result<RenderFrame> {
        controller
            .get(&key)
            .map(render)
            .ok_or_else(|| anyhow!("row '{key}' vanished"))
    };

    let mut trace = vec![TraceLine {
        step: "start".to_string(),
        applied: true,
        frame: current(&controller)?,
    }];

    for step in steps {
        let frames = match *step {
            Step::Next => send(
                &mut controller,
                SliderMessage::Navigate(key.clone(), NavDirection::Forward),
            ),
            Step::Prev => send(
                &mut controller,
                SliderMessage::Navigate(key.clone(), NavDirection::Backward),
            ),
            Step::Wheel(delta_y) => send(
                &mut controller,
                SliderMessage::Wheel {
                    key: key.clone(),
                    delta_y,
                },
            ),
            Step::Drag { source, from, to } => {
                let mut frames = send(
                    &mut controller,
                    SliderMessage::DragStart {
                        key: key.clone(),
                        source,
                        x: from,
                    },
                );
                frames.extend(send(
                    &mut controller,
                    SliderMessage::DragMove {
                        key: key.clone(),
                        x: to,
                    },
                ));
                frames.extend(send(
                    &mut controller,
                    SliderMessage::DragEnd(key.clone()),
                ));
                frames
            }
            Step::Resize(width) => {
                layout.set_viewport_width(width);
                recalculate_bounds(&mut controller, &layout)
            }
        };
        debug!(%step, frames = frames.len(), "simulated step");

        let applied = !frames.is_empty();
        let frame = match frames.into_iter().last() {
            Some(frame) => frame,
            None => current(&controller)?,
        };
        trace.push(TraceLine {
            step: step.to_string(),
            applied,
            frame,
        });
    }
    Ok(trace)
}

fn send(
    controller: &mut SliderController,
    message: SliderMessage,
) -> Vec<RenderFrame> {
    handle_slider_message(controller, message).frames
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(trace: &[TraceLine]) -> Vec<f32> {
        trace.iter().map(|line| line.frame.offset).collect()
    }

    #[test]
    fn steps_parse() {
        assert_eq!("next".parse::<Step>().unwrap(), Step::Next);
        assert_eq!("wheel:-53".parse::<Step>().unwrap(), Step::Wheel(-53.0));
        assert_eq!(
            "touch:100:-200".parse::<Step>().unwrap(),
            Step::Drag {
                source: DragSource::Touch,
                from: 100.0,
                to: -200.0
            }
        );
        assert!("wheel".parse::<Step>().is_err());
        assert!("jump:3".parse::<Step>().is_err());
        assert!("resize:10:20".parse::<Step>().is_err());
    }

    #[test]
    fn steps_display_as_parsed() {
        for raw in ["next", "prev", "wheel:-53", "drag:0:-400", "resize:900"] {
            assert_eq!(raw.parse::<Step>().unwrap().to_string(), raw);
        }
    }

    #[test]
    fn replay_clamps_every_frame() {
        // 20 cards: 6152 wide, 4952 scrollable at 1200.
        let ids = (1..=20).map(ContentId).collect();
        let steps = [
            Step::Next,
            Step::Next,
            Step::Next,
            Step::Wheel(10.0),
            Step::Prev,
        ];
        let trace = run(
            CarouselConfig::default(),
            CategoryKey::trending(),
            ids,
            1200.0,
            &steps,
        )
        .unwrap();
        assert_eq!(
            offsets(&trace),
            vec![0.0, 1848.0, 3696.0, 4952.0, 4952.0, 3104.0]
        );
        assert!(trace[4].applied);
        assert!(trace[0].frame.nav.forward_enabled);
        assert!(!trace[0].frame.nav.backward_enabled);
    }

    #[test]
    fn flat_row_reports_ignored_steps() {
        // 3 cards: 916 wide, nothing to scroll at 1200.
        let ids = (1..=3).map(ContentId).collect();
        let trace = run(
            CarouselConfig::default(),
            CategoryKey::action(),
            ids,
            1200.0,
            &[Step::Next, Step::Wheel(40.0)],
        )
        .unwrap();
        assert!(trace[1..].iter().all(|line| !line.applied));
        assert!(trace.iter().all(|line| line.frame.offset == 0.0));
    }

    #[test]
    fn drag_and_resize() {
        let ids = (1..=20).map(ContentId).collect();
        let steps = [
            Step::Drag {
                source: DragSource::Pointer,
                from: 500.0,
                to: 300.0,
            },
            Step::Resize(6152.0),
        ];
        let trace = run(
            CarouselConfig::default(),
            CategoryKey::trending(),
            ids,
            1200.0,
            &steps,
        )
        .unwrap();
        assert_eq!(trace[1].frame.offset, 300.0);
        assert_eq!(trace[2].frame.offset, 0.0);
        assert!(!trace[2].frame.nav.forward_enabled);
    }
}
