//! Data-driven level content and loaders.
//!
//! This crate reads the static inputs of a chase session from RON/TOML files:
//! - Level geometry: playfield size, maze walls and the ghost cage (RON)
//! - Rosters: the player and the ghosts with their personalities (RON)
//! - Engine tunables: [`chase_core::ChaseConfig`] overrides (TOML)
//!
//! The classic 640×480 maze ships under `data/classic/` and is reachable
//! through [`ContentFactory::classic`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, GhostSpec, LevelLoader, LoadResult, Roster, RosterLoader,
    Scenario,
};
