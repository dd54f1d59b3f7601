use crate::config::ChaseConfig;
use crate::env::CollisionOracle;
use crate::geometry::Point;
use crate::state::{Agent, Player};

/// Read-only context shared by every decision made during a tick.
///
/// Bundles the level's collision oracle with the tunables so the targeting,
/// steering and separation layers never reach for globals.
#[derive(Clone, Copy)]
pub struct AiContext<'a> {
    pub oracle: &'a dyn CollisionOracle,
    pub config: &'a ChaseConfig,
}

impl<'a> AiContext<'a> {
    pub fn new(oracle: &'a dyn CollisionOracle, config: &'a ChaseConfig) -> Self {
        Self { oracle, config }
    }

    /// Movement check: walls and cage.
    pub fn is_blocked(&self, agent: &Agent, point: Point) -> bool {
        self.oracle.is_blocked(point, agent.radius)
    }

    /// Target check: walls only. The cage never disqualifies a target.
    pub fn hits_wall(&self, agent: &Agent, point: Point) -> bool {
        self.oracle.collides_with_wall(point, agent.radius)
    }
}

/// What a ghost knows about the player this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerView {
    pub position: Point,
    /// Unit vector of the player's facing.
    pub heading: Point,
}

impl PlayerView {
    pub const fn new(position: Point, heading: Point) -> Self {
        Self { position, heading }
    }
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self::new(player.position, player.heading())
    }
}
