/// Pointer hover state for one interactive region.
///
/// Every event applies immediately; the latest event always wins. Each enter starts a new
/// animation generation so hover-gated loops restart from phase zero.
#[derive(Clone, Debug)]
pub struct HoverState {
    hovered: bool,
    generation: u64,
    cycle_start: f64,       // time the current generation began
    left_at: Option<f64>,   // last leave within the current generation
}

impl HoverState {
    /// Bind a new region, mounted at `now`.
    pub fn bind(now: f64) -> Self {
        Self {
            hovered: false,
            generation: 0,
            cycle_start: now,
            left_at: Some(now),
        }
    }

    /// Pointer entered the region.
    pub fn on_enter(&mut self, now: f64) {
        if !self.hovered {
            self.generation += 1;
            self.cycle_start = now;
            self.left_at = None;
        }
        self.hovered = true;
    }

    /// Pointer left the region.
    pub fn on_leave(&mut self, now: f64) {
        if self.hovered {
            self.left_at = Some(now);
        }
        self.hovered = false;
    }

    /// Apply a pointer event by direction.
    pub fn set(&mut self, hovered: bool, now: f64) {
        if hovered {
            self.on_enter(now);
        } else {
            self.on_leave(now);
        }
    }

    /// Current state.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Number of enter transitions so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A looping animation that repeats forever only while hovered.
///
/// Instance `i` starts `i * stagger` seconds into each generation. Between iterations it rests
/// for `repeat_delay` seconds. When the pointer leaves, the iteration in flight completes
/// and the loop stops.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoverLoop {
    /// Length of one iteration in seconds.
    pub duration: f64,
    /// Phase offset between concurrent instances.
    pub stagger: f64,
    /// Rest between iterations.
    pub repeat_delay: f64,
}

impl HoverLoop {
    fn period(&self) -> f64 {
        self.duration + self.repeat_delay
    }

    fn iteration_at(&self, local: f64) -> f64 {
        let period = self.period();
        if period <= 0.0 {
            return 0.0;
        }
        (local.max(0.0) / period).floor()
    }

    /// Normalized iteration progress of `instance` at `now`: `0` before it starts, `1` when
    /// resting after its final iteration.
    pub fn phase(&self, hover: &HoverState, instance: usize, now: f64) -> f64 {
        let offset = instance as f64 * self.stagger;
        let local = now - hover.cycle_start - offset;
        if local < 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }

        let iteration = self.iteration_at(local);
        if !hover.hovered {
            let allowed = hover
                .left_at
                .map_or(0.0, |left| self.iteration_at(left - hover.cycle_start - offset));
            if iteration > allowed {
                return 1.0;
            }
        }
        let pos = local - iteration * self.period();
        (pos / self.duration).min(1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/hover.rs"]
mod tests;
