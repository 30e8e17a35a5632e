use crate::animation::value::format_number;
use crate::foundation::error::{ScrollworkError, ScrollworkResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Normalized scroll fraction in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Progress(f64);

impl Progress {
    /// Progress at the start of a tracked range.
    pub const START: Self = Self(0.0);
    /// Progress at the end of a tracked range.
    pub const END: Self = Self(1.0);

    /// Create a progress value, clamping into `[0, 1]`. NaN maps to `0`.
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self::START;
        }
        Self(v.clamp(0.0, 1.0))
    }

    /// Raw fraction.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Layout box of a tracked element in document coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBox {
    /// Document-space rectangle.
    pub rect: Rect,
}

impl ElementBox {
    /// Create a box from its document-space origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> ScrollworkResult<Self> {
        if !(width >= 0.0 && height >= 0.0) {
            return Err(ScrollworkError::validation(
                "ElementBox width and height must be >= 0",
            ));
        }
        Ok(Self {
            rect: Rect::new(x, y, x + width, y + height),
        })
    }

    /// Full-width band starting at `top` with the given `height`.
    pub fn band(top: f64, height: f64) -> ScrollworkResult<Self> {
        Self::new(0.0, top, 0.0, height)
    }

    /// Document-space top edge.
    pub fn top(self) -> f64 {
        self.rect.y0
    }

    /// Element height.
    pub fn height(self) -> f64 {
        self.rect.height()
    }
}

/// The visible window onto the document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Vertical scroll offset of the viewport's top edge.
    pub scroll_y: f64,
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport.
    pub fn new(scroll_y: f64, width: f64, height: f64) -> ScrollworkResult<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ScrollworkError::validation(
                "Viewport width and height must be > 0",
            ));
        }
        Ok(Self {
            scroll_y,
            width,
            height,
        })
    }

    /// Viewport rectangle in document coordinates.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.scroll_y + self.height)
    }

    /// Fraction of `el` that lies inside the viewport, in `[0, 1]`.
    ///
    /// Zero-height elements count as fully visible when their top edge is inside the
    /// viewport's vertical span.
    pub fn visible_fraction(self, el: ElementBox) -> f64 {
        let vp = self.rect();
        let h = el.height();
        if h <= 0.0 {
            let y = el.top();
            return if y >= vp.y0 && y <= vp.y1 { 1.0 } else { 0.0 };
        }
        let overlap = (el.rect.y1.min(vp.y1) - el.rect.y0.max(vp.y0)).max(0.0);
        (overlap / h).clamp(0.0, 1.0)
    }
}

/// 8-bit RGB color with straight alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Opaque color from channels in `[0, 255]`.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with alpha.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque white.
    pub fn white() -> Self {
        Self::rgb(255.0, 255.0, 255.0)
    }

    /// Opaque black.
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// CSS serialization: `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(self) -> String {
        let ch = |v: f64| format_number(v.clamp(0.0, 255.0));
        let a = self.a.clamp(0.0, 1.0);
        if a >= 1.0 {
            format!("rgb({}, {}, {})", ch(self.r), ch(self.g), ch(self.b))
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                ch(self.r),
                ch(self.g),
                ch(self.b),
                format_number(a)
            )
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
