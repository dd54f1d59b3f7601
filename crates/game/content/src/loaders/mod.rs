//! Content loaders for reading chase data from files.
//!
//! Each loader parses one file format into validated chase-core types. The
//! [`ContentFactory`] ties them to a directory layout.

pub mod config;
pub mod factory;
pub mod level;
pub mod roster;

pub use config::ConfigLoader;
pub use factory::{ContentFactory, Scenario};
pub use level::LevelLoader;
pub use roster::{GhostSpec, Roster, RosterLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
