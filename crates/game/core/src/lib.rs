//! Deterministic pursuit engine for maze-chase ghosts.
//!
//! `chase-core` owns the rules: how a ghost picks a target, which compass
//! direction it takes, how it keeps clear of other ghosts, and how those
//! decisions are committed tick by tick. Everything here is pure and free of
//! I/O; level data, logging sinks and the game loop live in other crates.
//! All ghost movement flows through [`engine::step_all_agents`].
pub mod ai;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod state;

pub use ai::{
    AiContext, CrowdSeparator, DIRECTIONS, DirectionEvaluation, DirectionScorer, PlayerView,
    Target, TargetSelector, TargetSource, select_target,
};
pub use config::ChaseConfig;
pub use engine::{AgentStep, apply_level_up, respawn_agent, speed_bonus, step_all_agents};
pub use env::{Cage, CollisionOracle, Level, MapDimensions, PcgRng, RandomSource, SequenceRng};
pub use error::{ChaseError, ConfigError, ErrorSeverity};
pub use geometry::{Point, Wall};
pub use state::{Agent, ChaseState, Pellets, Personality, Player, Tick};
