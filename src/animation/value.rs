use std::fmt;

use smallvec::SmallVec;

use crate::foundation::core::{Rgba, Vec2};
use crate::foundation::error::{ScrollworkError, ScrollworkResult};

/// Values that can be blended linearly between two checkpoints.
pub trait Lerp: Sized {
    /// Blend `a` toward `b` by `t` (`t` is not clamped here).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;

    /// Whether `a` and `b` can be blended. Only structured values override this.
    fn compatible(_a: &Self, _b: &Self) -> bool {
        true
    }
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

/// A percentage length such as `48%`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Percent(pub f64);

impl Lerp for Percent {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self(a.0 + (b.0 - a.0) * t)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", format_number(self.0))
    }
}

/// Render a number the way style strings expect: integers without a fraction, others
/// rounded to four decimals.
pub fn format_number(v: f64) -> String {
    let r = (v * 10_000.0).round() / 10_000.0;
    let r = if r == 0.0 { 0.0 } else { r }; // drop negative zero
    if r.fract() == 0.0 && r.abs() < 1e15 {
        format!("{}", r as i64)
    } else {
        format!("{r}")
    }
}

/// A style string with fixed literal text and interpolatable numeric slots.
///
/// `"inset(0 40% 0 0)"` parses into literals `["inset(", " ", "% ", " ", ")"]` and numbers
/// `[0, 40, 0, 0]`. Two templates blend only when their literals match exactly.
///
/// Numbers are decimal with an optional sign and fraction; exponents are not recognized.
/// Hex colours (`#fff`) are rejected: interpolate colours as [`Rgba`] instead.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleTemplate {
    literals: Vec<String>,        // len == numbers.len() + 1
    numbers: SmallVec<[f64; 4]>,
}

impl StyleTemplate {
    /// Parse a style string. Numbers glued to identifiers (`translate3d`) stay literal.
    pub fn parse(s: &str) -> ScrollworkResult<Self> {
        let bytes = s.as_bytes();
        let mut literals = Vec::new();
        let mut numbers = SmallVec::new();
        let mut lit_start = 0usize;
        let mut i = 0usize;

        while i < bytes.len() {
            if bytes[i] == b'#' && bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit) {
                return Err(ScrollworkError::animation(format!(
                    "hex colour in template \"{s}\"; use Rgba for colours"
                )));
            }
            let prev_is_ident =
                i > 0 && (bytes[i - 1].is_ascii_alphanumeric() || bytes[i - 1] == b'_');
            let digit_at = |j: usize| bytes.get(j).is_some_and(u8::is_ascii_digit);
            let starts_number = !prev_is_ident
                && match bytes[i] {
                    b'0'..=b'9' => true,
                    b'.' => digit_at(i + 1),
                    b'-' => digit_at(i + 1) || (bytes.get(i + 1) == Some(&b'.') && digit_at(i + 2)),
                    _ => false,
                };
            if !starts_number {
                i += 1;
                continue;
            }

            let num_start = i;
            if bytes[i] == b'-' {
                i += 1;
            }
            let mut seen_dot = false;
            while i < bytes.len() && (bytes[i].is_ascii_digit() || (bytes[i] == b'.' && !seen_dot)) {
                seen_dot |= bytes[i] == b'.';
                i += 1;
            }
            let text = &s[num_start..i];
            let value: f64 = text.parse().map_err(|_| {
                ScrollworkError::animation(format!("invalid number \"{text}\" in template \"{s}\""))
            })?;
            literals.push(s[lit_start..num_start].to_owned());
            numbers.push(value);
            lit_start = i;
        }
        literals.push(s[lit_start..].to_owned());

        Ok(Self { literals, numbers })
    }

    /// Numeric slots in order of appearance.
    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }

    /// Replace numeric slots, keeping literals.
    pub fn with_numbers(&self, numbers: &[f64]) -> ScrollworkResult<Self> {
        if numbers.len() != self.numbers.len() {
            return Err(ScrollworkError::animation(format!(
                "template expects {} numbers, got {}",
                self.numbers.len(),
                numbers.len()
            )));
        }
        Ok(Self {
            literals: self.literals.clone(),
            numbers: numbers.iter().copied().collect(),
        })
    }

    /// Render back to a style string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, lit) in self.literals.iter().enumerate() {
            out.push_str(lit);
            if let Some(n) = self.numbers.get(i) {
                out.push_str(&format_number(*n));
            }
        }
        out
    }
}

impl fmt::Display for StyleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::str::FromStr for StyleTemplate {
    type Err = ScrollworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Lerp for StyleTemplate {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if !Self::compatible(a, b) {
            return a.clone();
        }
        Self {
            literals: a.literals.clone(),
            numbers: a
                .numbers
                .iter()
                .zip(b.numbers.iter())
                .map(|(x, y)| x + (y - x) * t)
                .collect(),
        }
    }

    fn compatible(a: &Self, b: &Self) -> bool {
        a.literals == b.literals
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
