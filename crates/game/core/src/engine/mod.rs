//! Tick execution and the level-scoped events around it.
//!
//! [`step_all_agents`] is the per-tick entry point. [`progression`] and
//! [`respawn`] cover the two things that happen between ticks: ghosts speeding
//! up on level-up and being scattered to new positions.

pub mod progression;
pub mod respawn;
mod stepper;

pub use progression::{apply_level_up, speed_bonus};
pub use respawn::{find_open_point, respawn_agent};
pub use stepper::{AgentStep, step_all_agents};
