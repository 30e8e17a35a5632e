//! Progress-to-value mapping.
//!
//! Everything here is pure: checkpoint series are validated on construction and sampling a
//! series never fails.

/// Ordered `(input, output)` series and the interpolation entry points.
pub mod checkpoints;
/// Easing curves for segment-local `t`.
pub mod ease;
/// Sequential window allocation and shared boundaries.
pub mod timeline;
/// Interpolatable value types and style templates.
pub mod value;
