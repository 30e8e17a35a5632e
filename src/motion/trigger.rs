use crate::animation::ease::Ease;
use crate::animation::value::Lerp;
use crate::foundation::core::{ElementBox, Viewport};

/// Options for a [`ViewportTrigger`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerOptions {
    /// After the first visible transition, ignore further intersection changes.
    pub once: bool,
    /// Visible fraction required to count as visible. `0` means any overlap.
    pub amount: f64,
}

impl TriggerOptions {
    /// One-shot trigger firing on any overlap.
    pub const ONCE: Self = Self {
        once: true,
        amount: 0.0,
    };

    /// Toggling trigger firing on any overlap.
    pub const TOGGLE: Self = Self {
        once: false,
        amount: 0.0,
    };
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self::ONCE
    }
}

/// Intersection-driven visibility state for one element.
#[derive(Clone, Debug)]
pub struct ViewportTrigger {
    options: TriggerOptions,
    visible: bool,
    changed_at: Option<f64>, // time of the last state change
}

impl ViewportTrigger {
    /// New trigger in the not-visible state.
    pub fn new(options: TriggerOptions) -> Self {
        Self {
            options,
            visible: false,
            changed_at: None,
        }
    }

    /// Feed the element's current visible fraction. Returns the resulting state.
    pub fn observe(&mut self, visible_fraction: f64, now: f64) -> bool {
        if self.visible && self.options.once {
            return true;
        }
        let hit = visible_fraction > 0.0 && visible_fraction >= self.options.amount;
        if hit != self.visible {
            tracing::trace!(visible = hit, now, "viewport trigger changed");
            self.visible = hit;
            self.changed_at = Some(now);
        }
        self.visible
    }

    /// Observe from layout. An unmounted element counts as not intersecting.
    pub fn update(&mut self, el: Option<ElementBox>, viewport: Viewport, now: f64) -> bool {
        let fraction = el.map_or(0.0, |el| viewport.visible_fraction(el));
        self.observe(fraction, now)
    }

    /// Current state.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the state can no longer change.
    pub fn is_terminal(&self) -> bool {
        self.visible && self.options.once
    }

    /// Seconds since the last state change, if any.
    pub fn elapsed(&self, now: f64) -> Option<f64> {
        self.changed_at.map(|t| (now - t).max(0.0))
    }

    /// Options in effect.
    pub fn options(&self) -> TriggerOptions {
        self.options
    }
}

/// Animatable pose for trigger-gated entrances.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl Pose {
    /// Fully visible, untransformed.
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Hidden, shifted down by `y` px.
    pub fn hidden_below(y: f64) -> Self {
        Self {
            opacity: 0.0,
            y,
            ..Self::REST
        }
    }

    /// Hidden, shifted horizontally by `x` px.
    pub fn hidden_beside(x: f64) -> Self {
        Self {
            opacity: 0.0,
            x,
            ..Self::REST
        }
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: a.opacity + (b.opacity - a.opacity) * t,
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
            scale: a.scale + (b.scale - a.scale) * t,
        }
    }
}

/// An `initial -> animate` pair played when a trigger becomes visible.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reveal {
    /// Pose before the trigger fires.
    pub initial: Pose,
    /// Pose after the transition completes.
    pub animate: Pose,
    /// Seconds between the trigger firing and motion starting.
    pub delay: f64,
    /// Transition length in seconds.
    pub duration: f64,
    /// Timing curve.
    pub ease: Ease,
}

impl Reveal {
    /// Fade/slide up by `y` px over `duration` seconds after `delay`.
    pub fn rise(y: f64, duration: f64, delay: f64) -> Self {
        Self {
            initial: Pose::hidden_below(y),
            animate: Pose::REST,
            delay,
            duration,
            ease: Ease::EASE_OUT,
        }
    }

    /// Plain fade.
    pub fn fade(duration: f64, delay: f64) -> Self {
        Self::rise(0.0, duration, delay)
    }

    /// Normalized transition progress for a visible trigger `elapsed` seconds after firing.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.ease.apply(local / self.duration)
    }

    /// Progress of the exit transition `elapsed` seconds after leaving; no delay.
    pub fn exit_progress(&self, elapsed: f64) -> f64 {
        Self { delay: 0.0, ..*self }.progress(elapsed)
    }
}

/// A [`ViewportTrigger`] driving one [`Reveal`].
///
/// Each state change starts from the pose reached at that moment, so a toggling trigger that
/// exits mid-entrance plays back from where the element is rather than from `animate`.
#[derive(Clone, Debug)]
pub struct TriggeredReveal {
    trigger: ViewportTrigger,
    reveal: Reveal,
    from: Pose,
}

impl TriggeredReveal {
    /// Not-visible trigger resting at `reveal.initial`.
    pub fn new(options: TriggerOptions, reveal: Reveal) -> Self {
        Self {
            trigger: ViewportTrigger::new(options),
            reveal,
            from: reveal.initial,
        }
    }

    /// Feed a visible fraction. Returns the resulting state.
    pub fn observe(&mut self, visible_fraction: f64, now: f64) -> bool {
        let before = self.trigger.is_visible();
        let pose = self.pose(now);
        let visible = self.trigger.observe(visible_fraction, now);
        if visible != before {
            self.from = pose;
        }
        visible
    }

    /// Observe from layout. An unmounted element counts as not intersecting.
    pub fn update(&mut self, el: Option<ElementBox>, viewport: Viewport, now: f64) -> bool {
        let fraction = el.map_or(0.0, |el| viewport.visible_fraction(el));
        self.observe(fraction, now)
    }

    /// Pose at `now`.
    pub fn pose(&self, now: f64) -> Pose {
        let Some(elapsed) = self.trigger.elapsed(now) else {
            return self.reveal.initial;
        };
        if self.trigger.is_visible() {
            Pose::lerp(&self.from, &self.reveal.animate, self.reveal.progress(elapsed))
        } else {
            Pose::lerp(
                &self.from,
                &self.reveal.initial,
                self.reveal.exit_progress(elapsed),
            )
        }
    }

    /// Underlying trigger.
    pub fn trigger(&self) -> &ViewportTrigger {
        &self.trigger
    }

    /// Reveal being played.
    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }
}

/// Per-child delays for a staggered group (`delay_children + i * step`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    /// Delay before the first child.
    pub delay_children: f64,
    /// Additional delay per child.
    pub step: f64,
}

impl Stagger {
    /// Delay for child `i`.
    pub fn delay(&self, i: usize) -> f64 {
        self.delay_children + i as f64 * self.step
    }

    /// One reveal per child, sharing `template` apart from the delay.
    pub fn reveals(&self, count: usize, template: Reveal) -> Vec<Reveal> {
        (0..count)
            .map(|i| Reveal {
                delay: template.delay + self.delay(i),
                ..template
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/trigger.rs"]
mod tests;
