use crate::animation::ease::Ease;
use crate::content::about::PROFILE_MARQUEE;
use crate::foundation::core::{ElementBox, Viewport};
use crate::motion::trigger::{Reveal, TriggerOptions, TriggeredReveal};

/// Seconds the profile strip takes to glide back to rest under the pointer.
pub const STRIP_SETTLE: f64 = 0.5;

/// Endless linear scroll of a text strip from `from` to `to` px, restarting each `duration`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Marquee {
    /// Strip text.
    pub text: String,
    /// Offset at the start of each loop.
    pub from: f64,
    /// Offset at the end of each loop.
    pub to: f64,
    /// Seconds per loop.
    pub duration: f64,
}

impl Marquee {
    /// New marquee.
    pub fn new(text: impl Into<String>, from: f64, to: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            from,
            to,
            duration,
        }
    }

    /// Horizontal offset `elapsed` seconds into the loop.
    pub fn x_at(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return self.from;
        }
        let t = elapsed.max(0.0).rem_euclid(self.duration) / self.duration;
        self.from + (self.to - self.from) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Looping { since: f64 },
    Settling { from: f64, since: f64 },
}

/// A marquee that glides back to rest while hovered and restarts its loop on leave.
#[derive(Clone, Debug)]
pub struct PausableMarquee {
    marquee: Marquee,
    settle: f64,
    ease: Ease,
    motion: Motion,
}

impl PausableMarquee {
    /// Start looping at `now`; hovering settles to `x = 0` over `settle` seconds.
    pub fn new(marquee: Marquee, settle: f64, ease: Ease, now: f64) -> Self {
        Self {
            marquee,
            settle,
            ease,
            motion: Motion::Looping { since: now },
        }
    }

    /// Pointer event on the strip.
    pub fn set_hovered(&mut self, hovered: bool, now: f64) {
        self.motion = match (self.motion, hovered) {
            (Motion::Looping { .. }, true) => Motion::Settling {
                from: self.x(now),
                since: now,
            },
            (Motion::Settling { .. }, false) => Motion::Looping { since: now },
            (m, _) => m,
        };
    }

    /// Whether the strip is paused under the pointer.
    pub fn is_hovered(&self) -> bool {
        matches!(self.motion, Motion::Settling { .. })
    }

    /// Horizontal offset at `now`.
    pub fn x(&self, now: f64) -> f64 {
        match self.motion {
            Motion::Looping { since } => self.marquee.x_at(now - since),
            Motion::Settling { from, since } => {
                let t = if self.settle > 0.0 {
                    (now - since) / self.settle
                } else {
                    1.0
                };
                from * (1.0 - self.ease.apply(t))
            }
        }
    }

    /// Strip text.
    pub fn text(&self) -> &str {
        &self.marquee.text
    }
}

/// The profile page's running strip: two copies of the tagline, 2000 px every 30 s.
pub fn profile_marquee() -> Marquee {
    Marquee::new([PROFILE_MARQUEE; 2].join(" "), 0.0, -2000.0, 30.0)
}

/// Profile page strip. Fades in once on first view, then loops and settles under the pointer.
#[derive(Clone, Debug)]
pub struct ProfileStrip {
    marquee: PausableMarquee,
    entrance: TriggeredReveal,
}

impl ProfileStrip {
    /// Mount at `now`.
    pub fn new(now: f64) -> Self {
        Self {
            marquee: PausableMarquee::new(profile_marquee(), STRIP_SETTLE, Ease::EASE_OUT, now),
            entrance: TriggeredReveal::new(TriggerOptions::ONCE, Reveal::fade(0.8, 0.6)),
        }
    }

    /// Feed layout for the one-shot fade.
    pub fn observe(&mut self, el: Option<ElementBox>, viewport: Viewport, now: f64) -> bool {
        self.entrance.update(el, viewport, now)
    }

    /// Pointer event on the strip.
    pub fn set_hovered(&mut self, hovered: bool, now: f64) {
        self.marquee.set_hovered(hovered, now);
    }

    /// Outputs at `now`.
    pub fn frame(&self, now: f64) -> StripFrame {
        StripFrame {
            text: self.marquee.text().to_owned(),
            x: self.marquee.x(now),
            opacity: self.entrance.pose(now).opacity,
            hovered: self.marquee.is_hovered(),
        }
    }
}

/// Profile strip outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StripFrame {
    /// Strip text.
    pub text: String,
    /// Horizontal offset in px.
    pub x: f64,
    /// Entrance opacity.
    pub opacity: f64,
    /// Whether the strip is paused under the pointer.
    pub hovered: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/marquee.rs"]
mod tests;
