use crate::animation::checkpoints::{CheckpointSeries, interpolate, transform};
use crate::animation::value::{StyleTemplate, format_number};
use crate::config::RevealConfig;
use crate::foundation::error::ScrollworkResult;

/// Clip path that shows the left `v` fraction of a line.
pub fn inset_clip(v: f64) -> String {
    transform(v, |v| format!("inset(0 {}% 0 0)", format_number((1.0 - v) * 100.0)))
}

/// Left-to-right reveal of consecutive text lines, each with its own progress window.
#[derive(Clone, Debug)]
pub struct LineReveal {
    lines: Vec<String>,
    reveal: Vec<CheckpointSeries<f64>>,
    clip: Vec<CheckpointSeries<StyleTemplate>>,
}

impl LineReveal {
    /// Line `i` reveals over `[base + i*step, base + i*step + span]`.
    pub fn new<S: Into<String>>(
        cfg: RevealConfig,
        lines: impl IntoIterator<Item = S>,
    ) -> ScrollworkResult<Self> {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let hidden = StyleTemplate::parse(&inset_clip(0.0))?;
        let shown = StyleTemplate::parse(&inset_clip(1.0))?;

        let mut reveal = Vec::with_capacity(lines.len());
        let mut clip = Vec::with_capacity(lines.len());
        for i in 0..lines.len() {
            let start = cfg.base + i as f64 * cfg.step;
            let end = start + cfg.span;
            reveal.push(CheckpointSeries::new([start, end], [0.0, 1.0])?);
            clip.push(CheckpointSeries::new(
                [start, end],
                [hidden.clone(), shown.clone()],
            )?);
        }
        Ok(Self {
            lines,
            reveal,
            clip,
        })
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Every line at progress `p`.
    pub fn sample(&self, p: f64) -> Vec<LineFrame> {
        self.lines
            .iter()
            .zip(self.reveal.iter().zip(&self.clip))
            .map(|(text, (reveal, clip))| LineFrame {
                text: text.clone(),
                reveal: interpolate(p, reveal),
                clip_path: interpolate(p, clip).render(),
            })
            .collect()
    }
}

/// One revealed line.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineFrame {
    /// Line text.
    pub text: String,
    /// Revealed fraction in `[0, 1]`.
    pub reveal: f64,
    /// `inset(0 X% 0 0)` clip.
    pub clip_path: String,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/reveal.rs"]
mod tests;
