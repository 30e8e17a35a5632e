use crate::animation::checkpoints::{CheckpointSeries, interpolate, transform};
use crate::config::FooterConfig;
use crate::foundation::core::{Progress, Rgba};
use crate::foundation::error::ScrollworkResult;
use crate::motion::progress::ScrollOffset;
use crate::scene::controller::{Scene, SceneFrame, SceneKind};

/// Footer takeover tracked on the whole page wrapper.
///
/// In the last sliver of the page the background turns white and the text turns black; once
/// the transition passes the open threshold the footer counts as open.
#[derive(Clone, Debug)]
pub struct FooterScene {
    transition: CheckpointSeries<f64>,
    open_threshold: f64,
}

impl FooterScene {
    /// Build from config.
    #[tracing::instrument(level = "debug")]
    pub fn new(cfg: FooterConfig) -> ScrollworkResult<Self> {
        Ok(Self {
            transition: CheckpointSeries::new(
                [cfg.transition_start, cfg.transition_end],
                [0.0, 1.0],
            )?,
            open_threshold: cfg.open_threshold,
        })
    }

    /// Typed frame at page progress.
    pub fn frame(&self, progress: Progress) -> FooterFrame {
        let v = interpolate(progress.get(), &self.transition);
        let ink = transform(v, |v| {
            let c = 255.0 - 255.0 * v;
            Rgba::rgb(c, c, c)
        });
        FooterFrame {
            transition: v,
            text_color: ink.to_css(),
            pattern_color: ink.to_css(),
            backdrop: Rgba::rgba(255.0, 255.0, 255.0, v).to_css(),
            open: v > self.open_threshold,
        }
    }

    /// Whether the footer is open at page progress.
    pub fn is_open(&self, progress: Progress) -> bool {
        self.frame(progress).open
    }
}

impl Scene for FooterScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Footer
    }

    fn offset(&self) -> ScrollOffset {
        ScrollOffset::CONTAIN
    }

    fn sample(&self, progress: Progress) -> SceneFrame {
        SceneFrame::Footer(self.frame(progress))
    }
}

/// Footer outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FooterFrame {
    /// Transition value in `[0, 1]`.
    pub transition: f64,
    /// Page text color.
    pub text_color: String,
    /// Line pattern color.
    pub pattern_color: String,
    /// White backdrop fading in.
    pub backdrop: String,
    /// Derived open flag read by the menu overlay.
    pub open: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/footer.rs"]
mod tests;
