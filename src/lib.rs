//! Scrollwork is the motion engine behind a scroll-driven portfolio site.
//!
//! Scroll position becomes a normalized progress value per section; ordered checkpoint series
//! map that progress to style outputs. On top of that sit viewport triggers, hover-gated loops,
//! presence transitions and the static content and routes of the site:
//!
//! - Build scenes from a [`SiteConfig`] via [`SceneKind::build`]
//! - Mount them on a [`Stage`] and feed one [`FrameInput`] per frame
//! - Resolve paths with [`Route::parse`] and [`render`] them into a [`View`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Progress-to-value mapping.
pub mod animation;
/// Serde-backed tunables.
pub mod config;
/// Static site content.
pub mod content;
/// Shared primitives.
pub mod foundation;
/// Input-driven state.
pub mod motion;
/// Site sections.
pub mod scene;
/// Routing and views.
pub mod site;

pub use crate::animation::checkpoints::{CheckpointSeries, interpolate, transform};
pub use crate::animation::ease::Ease;
pub use crate::animation::timeline::{Boundary, WindowAllocation, WindowSpec};
pub use crate::animation::value::{Lerp, Percent, StyleTemplate};
pub use crate::config::SiteConfig;
pub use crate::foundation::core::{ElementBox, Progress, Rgba, Viewport};
pub use crate::foundation::error::{ScrollworkError, ScrollworkResult};
pub use crate::motion::progress::{ScrollOffset, track};
pub use crate::motion::stage::{FrameInput, Stage, StageFrame};
pub use crate::motion::trigger::{TriggerOptions, ViewportTrigger};
pub use crate::scene::controller::{Scene, SceneFrame, SceneKind};
pub use crate::site::route::Route;
pub use crate::site::view::{View, render};
