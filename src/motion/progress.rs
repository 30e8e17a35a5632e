use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{ElementBox, Progress, Viewport};
use crate::foundation::error::ScrollworkError;

/// Reference point along an element or the viewport, as a fraction of its height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Top edge (`0`).
    Start,
    /// Middle (`0.5`).
    Center,
    /// Bottom edge (`1`).
    End,
    /// Arbitrary fraction of the height.
    Fraction(f64),
}

impl Anchor {
    /// Fraction of the height this anchor refers to.
    pub fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
            Self::Fraction(f) => f,
        }
    }
}

impl FromStr for Anchor {
    type Err = ScrollworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            other => other
                .parse::<f64>()
                .map(Self::Fraction)
                .map_err(|_| ScrollworkError::validation(format!("unknown anchor \"{other}\""))),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Center => f.write_str("center"),
            Self::End => f.write_str("end"),
            Self::Fraction(v) => write!(f, "{v}"),
        }
    }
}

/// "Element anchor meets viewport anchor".
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgePair {
    /// Point on the tracked element.
    pub element: Anchor,
    /// Point on the viewport.
    pub viewport: Anchor,
}

impl EdgePair {
    /// Pair two anchors.
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which this pair of anchors coincide.
    fn scroll_at(self, el: ElementBox, viewport_height: f64) -> f64 {
        el.top() + self.element.fraction() * el.height() - self.viewport.fraction() * viewport_height
    }
}

impl FromStr for EdgePair {
    type Err = ScrollworkError;

    /// Parses `"<element> <viewport>"`, e.g. `"start end"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(e), Some(v), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ScrollworkError::validation(format!(
                "edge pair \"{s}\" must be two anchors"
            )));
        };
        Ok(Self::new(e.parse()?, v.parse()?))
    }
}

impl fmt::Display for EdgePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

/// The start/end reference pair defining a tracked scroll range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollOffset {
    /// Where progress is `0`.
    pub start: EdgePair,
    /// Where progress is `1`.
    pub end: EdgePair,
}

impl ScrollOffset {
    /// Element enters at the viewport bottom through leaving at the viewport top.
    pub const ENTER_TO_EXIT: Self = Self {
        start: EdgePair::new(Anchor::Start, Anchor::End),
        end: EdgePair::new(Anchor::End, Anchor::Start),
    };

    /// Element top at viewport top through element bottom at viewport bottom.
    pub const CONTAIN: Self = Self {
        start: EdgePair::new(Anchor::Start, Anchor::Start),
        end: EdgePair::new(Anchor::End, Anchor::End),
    };

    /// Element top at viewport top through element bottom at viewport top.
    pub const PIN_TO_EXIT: Self = Self {
        start: EdgePair::new(Anchor::Start, Anchor::Start),
        end: EdgePair::new(Anchor::End, Anchor::Start),
    };

    /// Scroll offsets `(s_start, s_end)` for an element and viewport height.
    pub fn scroll_range(self, el: ElementBox, viewport_height: f64) -> (f64, f64) {
        (
            self.start.scroll_at(el, viewport_height),
            self.end.scroll_at(el, viewport_height),
        )
    }
}

/// Normalized progress of `viewport.scroll_y` through the range `offset` defines for `el`.
///
/// A degenerate range reads `1` once scroll has reached it and `0` before.
pub fn track(el: ElementBox, viewport: Viewport, offset: ScrollOffset) -> Progress {
    let (s0, s1) = offset.scroll_range(el, viewport.height);
    let span = s1 - s0;
    if span.abs() <= f64::EPSILON {
        return if viewport.scroll_y >= s1 {
            Progress::END
        } else {
            Progress::START
        };
    }
    Progress::new((viewport.scroll_y - s0) / span)
}

/// A subscribed progress reading for one tracked element.
///
/// Holds the last valid reading while the element has no layout box.
#[derive(Clone, Debug)]
pub struct ProgressSource {
    offset: ScrollOffset,
    last: Progress,
}

impl ProgressSource {
    /// New source reading `0` until the first update with a mounted element.
    pub fn new(offset: ScrollOffset) -> Self {
        Self {
            offset,
            last: Progress::START,
        }
    }

    /// Offsets this source tracks.
    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// Recompute from the current scroll/resize snapshot.
    pub fn update(&mut self, el: Option<ElementBox>, viewport: Viewport) -> Progress {
        match el {
            Some(el) => self.last = track(el, viewport, self.offset),
            None => tracing::debug!("tracked element not mounted; holding last progress"),
        }
        self.last
    }

    /// Most recent reading.
    pub fn get(&self) -> Progress {
        self.last
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/progress.rs"]
mod tests;
