//! Static site content.

/// Profile and contact copy.
pub mod about;
/// Menu, social links and contact block.
pub mod nav;
/// Project catalog, ordering and filters.
pub mod projects;
