//! Random repositioning of ghosts (new life, new level).
//!
//! Candidates are drawn uniformly over the playfield and the first one clear
//! of walls and cage wins. The search is bounded; on exhaustion the ghost
//! keeps its position. Only the position is overwritten: heading memory and
//! speed carry over.

use crate::env::{CollisionOracle, MapDimensions, RandomSource};
use crate::geometry::Point;
use crate::state::Agent;

/// Draws up to `attempts` random points and returns the first open one.
pub fn find_open_point<R>(
    dimensions: MapDimensions,
    radius: f64,
    oracle: &dyn CollisionOracle,
    attempts: u32,
    rng: &mut R,
) -> Option<Point>
where
    R: RandomSource + ?Sized,
{
    (0..attempts).find_map(|_| {
        let candidate = Point::new(
            rng.next_unit() * dimensions.width,
            rng.next_unit() * dimensions.height,
        );
        (!oracle.is_blocked(candidate, radius)).then_some(candidate)
    })
}

/// Moves `agent` to a random open point. Returns the new position, or `None`
/// when every attempt was blocked.
pub fn respawn_agent<R>(
    agent: &mut Agent,
    dimensions: MapDimensions,
    oracle: &dyn CollisionOracle,
    attempts: u32,
    rng: &mut R,
) -> Option<Point>
where
    R: RandomSource + ?Sized,
{
    let position = find_open_point(dimensions, agent.radius, oracle, attempts, rng)?;
    agent.position = position;
    Some(position)
}
