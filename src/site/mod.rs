//! Routing and page view models.

/// Path resolution.
pub mod route;
/// View models per page.
pub mod view;
