use crate::animation::checkpoints::{CheckpointSeries, interpolate};
use crate::animation::ease::Ease;
use crate::foundation::core::{ElementBox, Viewport};
use crate::foundation::error::ScrollworkResult;
use crate::motion::hover::{HoverLoop, HoverState};
use crate::motion::trigger::{Pose, Reveal, TriggerOptions, TriggeredReveal};

/// Concurrent ripple rings per cycle.
pub const RIPPLE_COUNT: usize = 3;

/// Final ring diameter in px.
pub const RIPPLE_SIZE: f64 = 1000.0;

/// "Get in touch" call to action: fades in once on first view, and emits radar ripples that
/// keep looping only while hovered.
#[derive(Clone, Debug)]
pub struct GetInTouch {
    hover: HoverState,
    ripple: HoverLoop,
    size: CheckpointSeries<f64>,
    opacity: CheckpointSeries<f64>,
    entrance: TriggeredReveal,
}

impl GetInTouch {
    /// Mount at `now`. One ripple cycle plays on mount.
    pub fn new(ripple: HoverLoop, now: f64) -> ScrollworkResult<Self> {
        Ok(Self {
            hover: HoverState::bind(now),
            ripple,
            size: CheckpointSeries::new([0.0, 1.0], [0.0, RIPPLE_SIZE])?.with_ease(Ease::EASE),
            opacity: CheckpointSeries::new(
                [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0],
                [0.0, 0.7, 0.5, 0.0],
            )?
            .with_ease(Ease::EASE),
            entrance: TriggeredReveal::new(
                TriggerOptions::ONCE,
                Reveal {
                    initial: Pose {
                        opacity: 0.0,
                        scale: 0.9,
                        ..Pose::REST
                    },
                    animate: Pose::REST,
                    delay: 0.0,
                    duration: 1.2,
                    ease: Ease::EASE_IN_OUT,
                },
            ),
        })
    }

    /// Pointer event on the heading.
    pub fn set_hovered(&mut self, hovered: bool, now: f64) {
        self.hover.set(hovered, now);
    }

    /// Feed layout for the one-shot entrance.
    pub fn observe(&mut self, el: Option<ElementBox>, viewport: Viewport, now: f64) -> bool {
        self.entrance.update(el, viewport, now)
    }

    /// Hover state.
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Outputs at `now`.
    pub fn frame(&self, now: f64) -> GetInTouchFrame {
        let generation = self.hover.generation();
        let ripples = (0..RIPPLE_COUNT)
            .map(|i| {
                let phase = self.ripple.phase(&self.hover, i, now);
                RippleFrame {
                    key: format!("{generation}-{i}"),
                    phase,
                    size: interpolate(phase, &self.size),
                    opacity: interpolate(phase, &self.opacity),
                }
            })
            .collect();
        GetInTouchFrame {
            heading: self.entrance.pose(now),
            hovered: self.hover.is_hovered(),
            ripples,
        }
    }
}

/// Call-to-action outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GetInTouchFrame {
    /// Heading entrance pose.
    pub heading: Pose,
    /// Whether the pointer is over the heading.
    pub hovered: bool,
    /// One entry per ring.
    pub ripples: Vec<RippleFrame>,
}

/// One ring.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RippleFrame {
    /// Identity that changes on every hover-in so rings restart.
    pub key: String,
    /// Iteration progress in `[0, 1]`.
    pub phase: f64,
    /// Diameter in px.
    pub size: f64,
    /// Ring opacity.
    pub opacity: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/ripple.rs"]
mod tests;
