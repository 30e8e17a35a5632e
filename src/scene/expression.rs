use crate::animation::checkpoints::{CheckpointSeries, interpolate};
use crate::animation::timeline::{Boundary, TimelineWindow, WindowAllocation};
use crate::animation::value::Percent;
use crate::config::ExpressionConfig;
use crate::foundation::core::Progress;
use crate::foundation::error::{ScrollworkError, ScrollworkResult};
use crate::motion::progress::ScrollOffset;
use crate::scene::controller::{Scene, SceneFrame, SceneKind};

/// Card artwork, one per window in order; the last one goes fullscreen.
pub const EXPRESSION_IMAGES: [&str; 5] = [
    "/works/flipside/flipside.png",
    "/works/void/void.png",
    "/works/n-ova/n-ova.png",
    "/works/genie/genie.png",
    "/works/climalens/climalens.png",
];

const CORNER_Z: i32 = 5;
const FULLSCREEN_Z: i32 = 30;
const CORNER_FADE_LEAD: f64 = 0.02;
const FULLSCREEN_FADE_LEAD: f64 = 0.01;

#[derive(Clone, Debug)]
struct ExpressionItem {
    image: String,
    x: CheckpointSeries<Percent>,
    y: CheckpointSeries<Percent>,
    scale: CheckpointSeries<f64>,
    opacity: CheckpointSeries<f64>,
    z_index: i32,
    fullscreen: bool,
}

impl ExpressionItem {
    fn corner(window: &TimelineWindow, target: [f64; 2], image: String) -> ScrollworkResult<Self> {
        let [tx, ty] = target;
        Ok(Self {
            image,
            x: window.series([Percent(0.0), Percent(tx), Percent(2.0 * tx)])?,
            y: window.series([Percent(0.0), Percent(ty), Percent(2.0 * ty)])?,
            scale: window.series([0.6, 1.0, 0.9])?,
            opacity: CheckpointSeries::new(
                [
                    window.start - CORNER_FADE_LEAD,
                    window.start,
                    window.edge,
                    window.end,
                ],
                [0.0, 1.0, 1.0, 0.0],
            )?,
            z_index: CORNER_Z,
            fullscreen: false,
        })
    }

    fn fullscreen(window: &TimelineWindow, image: String) -> ScrollworkResult<Self> {
        Ok(Self {
            image,
            x: CheckpointSeries::constant(Percent(0.0)),
            y: CheckpointSeries::constant(Percent(0.0)),
            scale: window.series_with_tail([0.6, 0.8, 1.2, 9.0])?,
            opacity: CheckpointSeries::new(
                [
                    (window.start - FULLSCREEN_FADE_LEAD).min(0.0),
                    window.start - FULLSCREEN_FADE_LEAD,
                    window.start,
                    window.full_end,
                ],
                [0.0, 0.0, 1.0, 1.0],
            )?,
            z_index: FULLSCREEN_Z,
            fullscreen: true,
        })
    }

    fn sample(&self, p: f64) -> ExpressionItemFrame {
        ExpressionItemFrame {
            image: self.image.clone(),
            x: interpolate(p, &self.x).to_string(),
            y: interpolate(p, &self.y).to_string(),
            scale: interpolate(p, &self.scale),
            opacity: interpolate(p, &self.opacity),
            z_index: self.z_index,
            fullscreen: self.fullscreen,
        }
    }
}

/// Staged reveal: cards fly out to the corners one after another, then the last card scales
/// up to fill the screen while the heading fades.
#[derive(Clone, Debug)]
pub struct ExpressionScene {
    allocation: WindowAllocation,
    boundary: Boundary,
    heading: CheckpointSeries<f64>,
    items: Vec<ExpressionItem>,
}

impl ExpressionScene {
    /// Allocate windows and build every binding.
    #[tracing::instrument(level = "debug", skip(cfg))]
    pub fn new(cfg: &ExpressionConfig) -> ScrollworkResult<Self> {
        let allocation = cfg.windows.allocate()?;
        let Some(terminal) = allocation.terminal().copied() else {
            return Err(ScrollworkError::validation(
                "expression scene needs at least one window",
            ));
        };
        let corners = &allocation.windows()[..allocation.windows().len() - 1];
        if corners.len() != cfg.targets.len() {
            return Err(ScrollworkError::validation(format!(
                "expression scene has {} corner windows but {} targets",
                corners.len(),
                cfg.targets.len()
            )));
        }

        let image = |i: usize| {
            EXPRESSION_IMAGES
                .get(i)
                .map_or_else(String::new, |s| (*s).to_owned())
        };
        let mut items = corners
            .iter()
            .zip(&cfg.targets)
            .map(|(w, &t)| ExpressionItem::corner(w, t, image(w.index)))
            .collect::<ScrollworkResult<Vec<_>>>()?;
        items.push(ExpressionItem::fullscreen(&terminal, image(terminal.index))?);

        if !(cfg.heading_lead >= 0.0) {
            return Err(ScrollworkError::validation(
                "expression heading_lead must be >= 0",
            ));
        }

        // Heading and fullscreen card share one boundary so the handoff is exact. The outer
        // inputs stretch to cover a boundary that lands outside [0, 1].
        let boundary = terminal.start_boundary();
        let b = boundary.at();
        let first = b.min(0.0);
        let heading = CheckpointSeries::new(
            [
                first,
                boundary.offset(-cfg.heading_lead).max(first),
                b,
                b.max(1.0),
            ],
            [1.0, 1.0, 0.0, 0.0],
        )?;

        Ok(Self {
            allocation,
            boundary,
            heading,
            items,
        })
    }

    /// The allocated windows.
    pub fn allocation(&self) -> &WindowAllocation {
        &self.allocation
    }

    /// Progress where the fullscreen card takes over.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Typed frame at `progress`.
    pub fn frame(&self, progress: Progress) -> ExpressionFrame {
        let p = progress.get();
        ExpressionFrame {
            heading_opacity: interpolate(p, &self.heading),
            items: self.items.iter().map(|it| it.sample(p)).collect(),
        }
    }
}

impl Scene for ExpressionScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Expression
    }

    fn offset(&self) -> ScrollOffset {
        ScrollOffset::CONTAIN
    }

    fn sample(&self, progress: Progress) -> SceneFrame {
        SceneFrame::Expression(self.frame(progress))
    }
}

/// Expression outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExpressionFrame {
    /// Section heading opacity.
    pub heading_opacity: f64,
    /// One entry per card, in window order.
    pub items: Vec<ExpressionItemFrame>,
}

/// One card's style.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExpressionItemFrame {
    /// Image path.
    pub image: String,
    /// Horizontal translation, e.g. `"-48%"`.
    pub x: String,
    /// Vertical translation.
    pub y: String,
    /// Scale factor.
    pub scale: f64,
    /// Opacity.
    pub opacity: f64,
    /// Stacking order.
    pub z_index: i32,
    /// Whether this is the card that scales to fill the screen.
    pub fullscreen: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/expression.rs"]
mod tests;
