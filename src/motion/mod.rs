//! Input-driven state: scroll progress, viewport triggers, hover and presence, and the stage
//! that owns them per mounted section.

/// Hover state and hover-gated loops.
pub mod hover;
/// Open/close transitions.
pub mod presence;
/// Scroll progress tracking.
pub mod progress;
/// Per-section ownership and frame dispatch.
pub mod stage;
/// Viewport intersection triggers and entrance reveals.
pub mod trigger;
