use smallvec::SmallVec;

use crate::animation::ease::Ease;
use crate::animation::value::Lerp;
use crate::foundation::error::{ScrollworkError, ScrollworkResult};

/// One `(input, output)` pair of a piecewise-linear curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Checkpoint<T> {
    /// Progress position of this checkpoint.
    pub input: f64,
    /// Output value at `input`.
    pub output: T,
}

/// Ordered checkpoints mapping a progress value to an output.
///
/// Inputs must be non-decreasing; the series never sorts them. Construction rejects unsorted
/// or empty input so that sampling itself cannot fail.
#[derive(Clone, Debug)]
pub struct CheckpointSeries<T> {
    points: SmallVec<[Checkpoint<T>; 4]>,
    ease: Ease, // applied to each segment's local t
}

impl<T> CheckpointSeries<T>
where
    T: Lerp + Clone,
{
    /// Zip parallel input/output lists into a validated series.
    pub fn new(
        inputs: impl IntoIterator<Item = f64>,
        outputs: impl IntoIterator<Item = T>,
    ) -> ScrollworkResult<Self> {
        let inputs: SmallVec<[f64; 4]> = inputs.into_iter().collect();
        let outputs: Vec<T> = outputs.into_iter().collect();
        if inputs.len() != outputs.len() {
            return Err(ScrollworkError::animation(format!(
                "checkpoint inputs ({}) and outputs ({}) differ in length",
                inputs.len(),
                outputs.len()
            )));
        }
        Self::from_points(
            inputs
                .into_iter()
                .zip(outputs)
                .map(|(input, output)| Checkpoint { input, output })
                .collect(),
        )
    }

    /// Build from explicit checkpoints.
    pub fn from_points(points: SmallVec<[Checkpoint<T>; 4]>) -> ScrollworkResult<Self> {
        if points.is_empty() {
            return Err(ScrollworkError::animation(
                "checkpoint series needs at least one checkpoint",
            ));
        }
        if points.iter().any(|c| !c.input.is_finite()) {
            return Err(ScrollworkError::animation(
                "checkpoint inputs must be finite",
            ));
        }
        if !points.windows(2).all(|w| w[0].input <= w[1].input) {
            return Err(ScrollworkError::animation(
                "checkpoint inputs must be sorted (non-decreasing)",
            ));
        }
        if !points.windows(2).all(|w| T::compatible(&w[0].output, &w[1].output)) {
            return Err(ScrollworkError::animation(
                "checkpoint outputs must share one template structure",
            ));
        }
        Ok(Self {
            points,
            ease: Ease::Linear,
        })
    }

    /// A series that always yields `value`.
    pub fn constant(value: T) -> Self {
        let mut points = SmallVec::new();
        points.push(Checkpoint {
            input: 0.0,
            output: value,
        });
        Self {
            points,
            ease: Ease::Linear,
        }
    }

    /// Apply `ease` to every segment.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// The checkpoints in order.
    pub fn points(&self) -> &[Checkpoint<T>] {
        &self.points
    }

    /// First checkpoint input.
    pub fn first_input(&self) -> f64 {
        self.points[0].input
    }

    /// Last checkpoint input.
    pub fn last_input(&self) -> f64 {
        self.points[self.points.len() - 1].input
    }

    /// Sample the curve at `progress`.
    ///
    /// Returns the first output at or below the first input and the last output at or above
    /// the last input. On an interior step (two equal inputs) the later checkpoint wins at
    /// and beyond the shared input.
    pub fn sample(&self, progress: f64) -> T {
        let first = &self.points[0];
        let last = &self.points[self.points.len() - 1];
        if progress.is_nan() || progress <= first.input {
            return first.output.clone();
        }
        if progress >= last.input {
            return last.output.clone();
        }

        // first.input < progress < last.input, so 1 <= idx < len.
        let idx = self.points.partition_point(|c| c.input <= progress);

        let a = &self.points[idx - 1];
        let b = &self.points[idx];
        let denom = b.input - a.input;
        if denom <= 0.0 {
            return b.output.clone();
        }
        let t = self.ease.apply((progress - a.input) / denom);
        T::lerp(&a.output, &b.output, t)
    }
}

/// Sample `series` at `progress`.
pub fn interpolate<T: Lerp + Clone>(progress: f64, series: &CheckpointSeries<T>) -> T {
    series.sample(progress)
}

/// Map a progress value through a closure, for outputs that are computed rather than
/// interpolated (e.g. `rgb(255 - 255v, ...)`).
pub fn transform<T>(progress: f64, f: impl Fn(f64) -> T) -> T {
    f(progress)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/checkpoints.rs"]
mod tests;
