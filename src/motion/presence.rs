use crate::animation::ease::Ease;

/// Lifecycle of a region that animates in and out (menu overlay, footer takeover).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresencePhase {
    /// Fully hidden and unmounted.
    Closed,
    /// Enter transition running.
    Opening,
    /// Fully shown.
    Open,
    /// Exit transition running.
    Closing,
}

/// `closed -> opening -> open -> closing -> closed`, advanced by frame time.
///
/// Toggling mid-flight reverses from the current position rather than jumping.
#[derive(Clone, Debug)]
pub struct Presence {
    phase: PresencePhase,
    position: f64, // linear 0 (closed) .. 1 (open)
    duration: f64,
    ease: Ease,
}

impl Presence {
    /// New closed presence with a fixed enter/exit duration in seconds.
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            phase: PresencePhase::Closed,
            position: 0.0,
            duration: duration.max(0.0),
            ease,
        }
    }

    /// Drive toward open (`true`) or closed (`false`).
    pub fn set_open(&mut self, open: bool) {
        let next = match (self.phase, open) {
            (PresencePhase::Closed | PresencePhase::Closing, true) => PresencePhase::Opening,
            (PresencePhase::Open | PresencePhase::Opening, false) => PresencePhase::Closing,
            (phase, _) => phase,
        };
        if next != self.phase {
            tracing::debug!(from = ?self.phase, to = ?next, "presence toggled");
            self.phase = next;
        }
        if self.duration == 0.0 {
            self.tick(0.0);
        }
    }

    /// Open.
    pub fn open(&mut self) {
        self.set_open(true);
    }

    /// Close.
    pub fn close(&mut self) {
        self.set_open(false);
    }

    /// Flip the target state.
    pub fn toggle(&mut self) {
        let opening = matches!(self.phase, PresencePhase::Closed | PresencePhase::Closing);
        self.set_open(opening);
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> PresencePhase {
        let step = if self.duration > 0.0 {
            dt.max(0.0) / self.duration
        } else {
            1.0
        };
        match self.phase {
            PresencePhase::Opening => {
                self.position = (self.position + step).min(1.0);
                if self.position >= 1.0 {
                    self.phase = PresencePhase::Open;
                }
            }
            PresencePhase::Closing => {
                self.position = (self.position - step).max(0.0);
                if self.position <= 0.0 {
                    self.phase = PresencePhase::Closed;
                }
            }
            PresencePhase::Open | PresencePhase::Closed => {}
        }
        self.phase
    }

    /// Current phase.
    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    /// Whether the region should be rendered at all.
    pub fn is_visible(&self) -> bool {
        self.phase != PresencePhase::Closed
    }

    /// Whether the region is, or is heading, open.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, PresencePhase::Opening | PresencePhase::Open)
    }

    /// Eased openness in `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.ease.apply(self.position)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/presence.rs"]
mod tests;
