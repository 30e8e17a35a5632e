use crate::animation::checkpoints::CheckpointSeries;
use crate::animation::value::Lerp;
use crate::foundation::error::{ScrollworkError, ScrollworkResult};

/// Parameters for splitting a progress range into staged windows.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSpec {
    /// Number of windows.
    pub count: usize,
    /// Progress where the first window starts.
    pub base: f64,
    /// Length of every window.
    pub size: f64,
    /// Distance between the end of one window and the start of the next.
    pub gap: f64,
    /// Interior edge as a fraction of `size` (e.g. `0.55`).
    pub edge_fraction: f64,
    /// Extra tail granted to the final window only.
    pub tail_extra: f64,
}

impl WindowSpec {
    /// Check parameter ranges. Overrunning `[0, 1]` is allowed.
    pub fn validate(&self) -> ScrollworkResult<()> {
        if !(self.size > 0.0 && self.size.is_finite()) {
            return Err(ScrollworkError::animation("window size must be > 0"));
        }
        if !self.base.is_finite() || !self.gap.is_finite() {
            return Err(ScrollworkError::animation(
                "window base and gap must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&self.edge_fraction) {
            return Err(ScrollworkError::animation(
                "window edge fraction must be in [0, 1]",
            ));
        }
        if !(self.tail_extra >= 0.0 && self.tail_extra.is_finite()) {
            return Err(ScrollworkError::animation("window tail must be >= 0"));
        }
        Ok(())
    }

    /// Compute every window once.
    ///
    /// `start_i = base + i * (size + gap)`, `end_i = start_i + size`; the last window's
    /// `full_end` adds `tail_extra`.
    #[tracing::instrument(level = "debug")]
    pub fn allocate(&self) -> ScrollworkResult<WindowAllocation> {
        self.validate()?;
        let stride = self.size + self.gap;
        let windows: Vec<TimelineWindow> = (0..self.count)
            .map(|index| {
                let start = self.base + index as f64 * stride;
                let end = start + self.size;
                let is_last = index + 1 == self.count;
                TimelineWindow {
                    index,
                    start,
                    edge: start + self.size * self.edge_fraction,
                    end,
                    full_end: if is_last { end + self.tail_extra } else { end },
                }
            })
            .collect();

        let alloc = WindowAllocation { windows };
        if alloc.overruns() {
            tracing::debug!(
                reach = alloc.reach(),
                "window allocation runs past progress 1.0; trailing windows never complete"
            );
        }
        Ok(alloc)
    }
}

/// One allocated sub-range of progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimelineWindow {
    /// Position in the sequence.
    pub index: usize,
    /// Window start.
    pub start: f64,
    /// Interior edge between `start` and `end`.
    pub edge: f64,
    /// Window end.
    pub end: f64,
    /// End including the tail (equals `end` except on the final window).
    pub full_end: f64,
}

impl TimelineWindow {
    /// Series over `[start, edge, end]`.
    pub fn series<T: Lerp + Clone>(&self, outputs: [T; 3]) -> ScrollworkResult<CheckpointSeries<T>> {
        CheckpointSeries::new([self.start, self.edge, self.end], outputs)
    }

    /// Series over `[start, edge, end, full_end]`.
    pub fn series_with_tail<T: Lerp + Clone>(
        &self,
        outputs: [T; 4],
    ) -> ScrollworkResult<CheckpointSeries<T>> {
        CheckpointSeries::new([self.start, self.edge, self.end, self.full_end], outputs)
    }

    /// Boundary at this window's start.
    pub fn start_boundary(&self) -> Boundary {
        Boundary::new(self.start)
    }
}

/// Result of [`WindowSpec::allocate`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WindowAllocation {
    windows: Vec<TimelineWindow>,
}

impl WindowAllocation {
    /// All windows in order.
    pub fn windows(&self) -> &[TimelineWindow] {
        &self.windows
    }

    /// The final window, if any.
    pub fn terminal(&self) -> Option<&TimelineWindow> {
        self.windows.last()
    }

    /// Furthest progress any window reaches.
    pub fn reach(&self) -> f64 {
        self.windows.last().map_or(0.0, |w| w.full_end)
    }

    /// Whether some window extends past progress `1.0`.
    pub fn overruns(&self) -> bool {
        self.reach() > 1.0
    }
}

/// A progress point derived once from an allocation and shared by every dependent series.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Boundary {
    at: f64,
}

impl Boundary {
    /// Wrap a progress position.
    pub fn new(at: f64) -> Self {
        Self { at }
    }

    /// The boundary position.
    pub fn at(&self) -> f64 {
        self.at
    }

    /// Position shifted by `delta` (negative to lead the boundary).
    pub fn offset(&self, delta: f64) -> f64 {
        self.at + delta
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
