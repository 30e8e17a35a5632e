use std::path::Path;

use anyhow::Context as _;

use crate::animation::timeline::WindowSpec;
use crate::foundation::error::{ScrollworkError, ScrollworkResult};
use crate::motion::hover::HoverLoop;

/// Tunable constants for every scene. Defaults reproduce the shipped site.
///
/// Any field may be omitted from a JSON file; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Staged card reveal on the home page.
    pub expression: ExpressionConfig,
    /// Per-line reveal on the profile section.
    pub profile_lines: RevealConfig,
    /// Per-line reveal on the service intro.
    pub service_intro: RevealConfig,
    /// Footer takeover at the bottom of each page.
    pub footer: FooterConfig,
    /// Menu overlay transition.
    pub menu: MenuConfig,
    /// Hover-gated radar ripple on the contact call-to-action.
    pub ripple: HoverLoop,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            expression: ExpressionConfig::default(),
            profile_lines: RevealConfig {
                base: 0.2,
                step: 0.05,
                span: 0.3,
            },
            service_intro: RevealConfig {
                base: 0.05,
                step: 0.04,
                span: 0.25,
            },
            footer: FooterConfig::default(),
            menu: MenuConfig::default(),
            ripple: HoverLoop {
                duration: 2.5,
                stagger: 0.35,
                repeat_delay: 0.55,
            },
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> ScrollworkResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollworkResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check ranges that the scenes rely on.
    pub fn validate(&self) -> ScrollworkResult<()> {
        self.expression.windows.validate()?;
        if self.expression.targets.len() + 1 != self.expression.windows.count {
            return Err(ScrollworkError::validation(format!(
                "expression needs {} corner targets for {} windows, got {}",
                self.expression.windows.count.saturating_sub(1),
                self.expression.windows.count,
                self.expression.targets.len()
            )));
        }
        if !(self.expression.heading_lead >= 0.0) {
            return Err(ScrollworkError::validation(
                "expression heading_lead must be >= 0",
            ));
        }
        for (name, r) in [
            ("profile_lines", &self.profile_lines),
            ("service_intro", &self.service_intro),
        ] {
            if !(r.span > 0.0) || !(r.step >= 0.0) {
                return Err(ScrollworkError::validation(format!(
                    "{name}: span must be > 0 and step >= 0"
                )));
            }
        }
        let f = &self.footer;
        if !(f.transition_start < f.transition_end) {
            return Err(ScrollworkError::validation(
                "footer transition_start must be < transition_end",
            ));
        }
        if !(0.0..=1.0).contains(&f.open_threshold) {
            return Err(ScrollworkError::validation(
                "footer open_threshold must be in [0, 1]",
            ));
        }
        if !(self.menu.duration >= 0.0) {
            return Err(ScrollworkError::validation("menu duration must be >= 0"));
        }
        let r = &self.ripple;
        if !(r.duration > 0.0) || !(r.repeat_delay >= 0.0) || !(r.stagger >= 0.0) {
            return Err(ScrollworkError::validation(
                "ripple duration must be > 0, stagger and repeat_delay >= 0",
            ));
        }
        Ok(())
    }
}

/// Expression scene parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpressionConfig {
    /// Window allocation; the last window is the fullscreen one.
    pub windows: WindowSpec,
    /// Fly-out targets `[x%, y%]` at the interior edge for each non-terminal card.
    pub targets: Vec<[f64; 2]>,
    /// How far before the terminal window's start the heading begins to fade.
    pub heading_lead: f64,
}

impl Default for ExpressionConfig {
    fn default() -> Self {
        Self {
            windows: WindowSpec {
                count: 5,
                base: 0.12,
                size: 0.15,
                gap: 0.03,
                edge_fraction: 0.55,
                tail_extra: 0.18,
            },
            targets: vec![[-48.0, -40.0], [48.0, -40.0], [-48.0, 40.0], [48.0, 40.0]],
            heading_lead: 0.05,
        }
    }
}

/// Staggered line reveal: line `i` covers `[base + i*step, base + i*step + span]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealConfig {
    /// Progress where the first line starts revealing.
    pub base: f64,
    /// Delay between consecutive lines.
    pub step: f64,
    /// Progress length of one line's reveal.
    pub span: f64,
}

/// Footer takeover constants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// Page progress where the color transition starts.
    pub transition_start: f64,
    /// Page progress where the color transition completes.
    pub transition_end: f64,
    /// Transition value above which the footer counts as open.
    pub open_threshold: f64,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            transition_start: 0.98,
            transition_end: 1.0,
            open_threshold: 0.1,
        }
    }
}

/// Menu overlay constants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    /// Slide duration in seconds.
    pub duration: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { duration: 0.5 }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
