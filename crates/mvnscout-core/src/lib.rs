//! mvnscout-core: locate a Maven repository's archetype catalog and derive
//! the per-entry URL hierarchy from package coordinates.

pub mod catalog;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod repo_layout;
