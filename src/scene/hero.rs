use crate::animation::checkpoints::{CheckpointSeries, interpolate};
use crate::animation::value::StyleTemplate;
use crate::foundation::core::Progress;
use crate::foundation::error::ScrollworkResult;
use crate::motion::progress::ScrollOffset;
use crate::scene::controller::{Scene, SceneFrame, SceneKind};

/// A bracketed category label floating over the hero.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HeroLabel {
    /// Label text.
    pub text: &'static str,
    /// Text shown by the custom cursor while hovering the label.
    pub cursor: &'static str,
    /// Seconds after load before the label fades in.
    pub delay: f64,
}

/// Hero labels, left to right.
pub const HERO_LABELS: [HeroLabel; 4] = [
    HeroLabel {
        text: "[AI/ML SOLUTIONS]",
        cursor: "AI & MACHINE LEARNING",
        delay: 2.8,
    },
    HeroLabel {
        text: "[WEB DEVELOPMENT]",
        cursor: "FULL-STACK DEVELOPMENT",
        delay: 3.0,
    },
    HeroLabel {
        text: "[WEB3 & BLOCKCHAIN]",
        cursor: "DECENTRALIZED APPS",
        delay: 3.2,
    },
    HeroLabel {
        text: "[DATA VISUALIZATION]",
        cursor: "INTERACTIVE DASHBOARDS",
        delay: 3.4,
    },
];

/// Pinned hero: the backdrop zooms and blurs away as the section scrolls out.
#[derive(Clone, Debug)]
pub struct HeroScene {
    scale: CheckpointSeries<f64>,
    filter: CheckpointSeries<StyleTemplate>,
    pattern_opacity: CheckpointSeries<f64>,
    overlay_opacity: CheckpointSeries<f64>,
}

impl HeroScene {
    /// Build every binding.
    #[tracing::instrument(level = "debug")]
    pub fn new() -> ScrollworkResult<Self> {
        Ok(Self {
            scale: CheckpointSeries::new([0.0, 1.0], [1.0, 1.9])?,
            filter: CheckpointSeries::new(
                [0.0, 1.0],
                [
                    StyleTemplate::parse("blur(0px)")?,
                    StyleTemplate::parse("blur(14px)")?,
                ],
            )?,
            pattern_opacity: CheckpointSeries::new([0.0, 0.8, 1.0], [0.3, 0.15, 0.0])?,
            overlay_opacity: CheckpointSeries::new([0.0, 0.8, 1.0], [1.0, 0.5, 0.0])?,
        })
    }

    /// Typed frame at `progress`.
    pub fn frame(&self, progress: Progress) -> HeroFrame {
        let p = progress.get();
        HeroFrame {
            scale: interpolate(p, &self.scale),
            filter: interpolate(p, &self.filter).render(),
            pattern_opacity: interpolate(p, &self.pattern_opacity),
            overlay_opacity: interpolate(p, &self.overlay_opacity),
            labels: HERO_LABELS.to_vec(),
        }
    }
}

impl Scene for HeroScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Hero
    }

    fn offset(&self) -> ScrollOffset {
        ScrollOffset::PIN_TO_EXIT
    }

    fn sample(&self, progress: Progress) -> SceneFrame {
        SceneFrame::Hero(self.frame(progress))
    }
}

/// Hero outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeroFrame {
    /// Backdrop scale.
    pub scale: f64,
    /// Backdrop `blur(Xpx)` filter.
    pub filter: String,
    /// Grid pattern opacity.
    pub pattern_opacity: f64,
    /// Left text overlay opacity.
    pub overlay_opacity: f64,
    /// Category labels.
    pub labels: Vec<HeroLabel>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/hero.rs"]
mod tests;
