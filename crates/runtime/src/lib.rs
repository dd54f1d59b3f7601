//! Session runtime for the chase engine.
//!
//! This crate wraps the pure rules of `chase-core` into a stateful session:
//! it owns the RNG stream, moves the player, reports what each tick did and
//! handles the between-round events (level-up, respawn). It does no I/O;
//! content comes in through `chase-content`.
//!
//! Modules are organized by responsibility:
//! - [`simulation`] hosts the session object and its builder
//! - [`player`] implements four-way player movement
//! - [`report`] defines tick and run summaries
//! - [`config`] reads session settings from the environment
pub mod config;
pub mod error;
pub mod player;
pub mod report;
pub mod simulation;

pub use config::SimConfig;
pub use error::{Result, RuntimeError};
pub use player::{Heading, move_player};
pub use report::{Contact, RunSummary, TickReport};
pub use simulation::{LevelUp, Simulation, SimulationBuilder};
