use crate::animation::checkpoints::{CheckpointSeries, interpolate};
use crate::config::RevealConfig;
use crate::foundation::core::Progress;
use crate::foundation::error::ScrollworkResult;
use crate::motion::progress::ScrollOffset;
use crate::scene::controller::{Scene, SceneFrame, SceneKind};
use crate::scene::reveal::{LineFrame, LineReveal};

/// Profile copy, one entry per revealed line.
pub const PROFILE_LINES: [&str; 9] = [
    "I'm Kai.",
    "AI Engineer and Web Developer.",
    "I build intelligent systems and",
    "decentralized applications, based in",
    "Ho Chi Minh City, Vietnam,",
    "with AI and blockchain at the core.",
    "I create experiences that empower",
    "creativity and innovation,",
    "transforming how we connect with technology.",
];

/// Profile section: a brightening greeting and a line-by-line text reveal.
#[derive(Clone, Debug)]
pub struct ProfileScene {
    hello_opacity: CheckpointSeries<f64>,
    lines: LineReveal,
}

impl ProfileScene {
    /// Build with the given line timing.
    #[tracing::instrument(level = "debug")]
    pub fn new(reveal: RevealConfig) -> ScrollworkResult<Self> {
        Ok(Self {
            hello_opacity: CheckpointSeries::new([0.0, 0.3, 1.0], [0.6, 0.9, 1.0])?,
            lines: LineReveal::new(reveal, PROFILE_LINES)?,
        })
    }

    /// Typed frame at `progress`.
    pub fn frame(&self, progress: Progress) -> ProfileFrame {
        let p = progress.get();
        ProfileFrame {
            hello_opacity: interpolate(p, &self.hello_opacity),
            lines: self.lines.sample(p),
        }
    }
}

impl Scene for ProfileScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Profile
    }

    fn offset(&self) -> ScrollOffset {
        ScrollOffset::ENTER_TO_EXIT
    }

    fn sample(&self, progress: Progress) -> SceneFrame {
        SceneFrame::Profile(self.frame(progress))
    }
}

/// Profile outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProfileFrame {
    /// "Hello" label opacity.
    pub hello_opacity: f64,
    /// Revealed lines.
    pub lines: Vec<LineFrame>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/profile.rs"]
mod tests;
