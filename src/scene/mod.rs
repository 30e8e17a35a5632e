//! Site sections wired from one input to many element outputs.

/// Scene trait, frames and scene lookup.
pub mod controller;
/// Staged card reveal with a fullscreen finale.
pub mod expression;
/// Footer takeover.
pub mod footer;
/// Hero zoom and blur.
pub mod hero;
/// Looping text strips.
pub mod marquee;
/// Menu overlay.
pub mod menu;
/// Profile section.
pub mod profile;
/// Per-line clip reveal.
pub mod reveal;
/// Contact call-to-action ripple.
pub mod ripple;
/// Service section art.
pub mod service;
/// Home-page works cards and marquee.
pub mod works;
