//! Shared primitives: geometry, progress, colors and the crate error type.

/// Progress, layout boxes, viewport and colors.
pub mod core;
/// Error taxonomy and result alias.
pub mod error;
