use std::fmt;
use std::str::FromStr;

use crate::config::SiteConfig;
use crate::foundation::core::Progress;
use crate::foundation::error::{ScrollworkError, ScrollworkResult};
use crate::motion::progress::ScrollOffset;
use crate::scene::expression::{ExpressionFrame, ExpressionScene};
use crate::scene::footer::{FooterFrame, FooterScene};
use crate::scene::hero::{HeroFrame, HeroScene};
use crate::scene::profile::{ProfileFrame, ProfileScene};
use crate::scene::service::{ServiceFrame, ServiceScene};

/// A scroll-linked section: one progress source fanned out to many element outputs.
///
/// Every binding is built when the scene is constructed; sampling is infallible.
pub trait Scene: fmt::Debug {
    /// Stable identifier.
    fn kind(&self) -> SceneKind;
    /// Edges the section's progress source tracks.
    fn offset(&self) -> ScrollOffset;
    /// Every output at one progress snapshot.
    fn sample(&self, progress: Progress) -> SceneFrame;
}

/// Sampled outputs of one scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "scene", rename_all = "snake_case")]
pub enum SceneFrame {
    /// Staged card reveal.
    Expression(ExpressionFrame),
    /// Pinned hero zoom.
    Hero(HeroFrame),
    /// Profile text reveal.
    Profile(ProfileFrame),
    /// Service art and intro.
    Service(ServiceFrame),
    /// Footer takeover.
    Footer(FooterFrame),
}

/// Names of the scroll-linked scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Staged card reveal on the home page.
    Expression,
    /// Hero section zoom and blur.
    Hero,
    /// Profile section.
    Profile,
    /// Service section.
    Service,
    /// Footer takeover on the page wrapper.
    Footer,
}

impl SceneKind {
    /// Every scene in page order.
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::Profile,
        Self::Service,
        Self::Expression,
        Self::Footer,
    ];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expression => "expression",
            Self::Hero => "hero",
            Self::Profile => "profile",
            Self::Service => "service",
            Self::Footer => "footer",
        }
    }

    /// Build this scene from config.
    pub fn build(self, cfg: &SiteConfig) -> ScrollworkResult<Box<dyn Scene>> {
        Ok(match self {
            Self::Expression => Box::new(ExpressionScene::new(&cfg.expression)?),
            Self::Hero => Box::new(HeroScene::new()?),
            Self::Profile => Box::new(ProfileScene::new(cfg.profile_lines)?),
            Self::Service => Box::new(ServiceScene::new(cfg.service_intro)?),
            Self::Footer => Box::new(FooterScene::new(cfg.footer)?),
        })
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneKind {
    type Err = ScrollworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ScrollworkError::validation(format!("unknown scene '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/controller.rs"]
mod tests;
