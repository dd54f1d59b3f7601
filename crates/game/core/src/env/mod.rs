//! Read-only environment consumed by the engine.
//!
//! The environment is everything an agent can query but never mutate during a
//! tick: level geometry (through [`CollisionOracle`]) and the random stream
//! (through [`RandomSource`]).

mod level;
pub mod rng;

pub use level::{Cage, CollisionOracle, Level, MapDimensions};
pub use rng::{PcgRng, RandomSource, SequenceRng};
