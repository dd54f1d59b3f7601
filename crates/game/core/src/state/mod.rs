//! Mutable simulation state: the ghosts, the player, the pellets and the tick
//! counter.
//!
//! Geometry lives in [`crate::env`]; everything here changes from tick to tick.

mod agent;
mod pellets;

use core::fmt;

use sha2::{Digest, Sha256};

pub use agent::{Agent, Personality, Player};
pub use pellets::Pellets;

/// Discrete simulation step counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of everything that moves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChaseState {
    pub tick: Tick,
    pub player: Player,
    pub ghosts: Vec<Agent>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pellets: Pellets,
    #[cfg_attr(feature = "serde", serde(default))]
    pub score: u64,
}

impl ChaseState {
    pub fn new(player: Player, ghosts: Vec<Agent>) -> Self {
        Self {
            tick: Tick::ZERO,
            player,
            ghosts,
            pellets: Pellets::default(),
            score: 0,
        }
    }

    pub fn with_pellets(mut self, pellets: Pellets) -> Self {
        self.pellets = pellets;
        self
    }

    /// SHA-256 over the exact bit patterns of every position and direction.
    ///
    /// Two runs produce equal digests only when they are bit-for-bit identical,
    /// which is what replay checks need.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.tick.0.to_le_bytes());
        hash_point(&mut hasher, self.player.position);
        hasher.update(self.player.angle.to_bits().to_le_bytes());
        for ghost in &self.ghosts {
            hash_point(&mut hasher, ghost.position);
            hash_point(&mut hasher, ghost.last_direction);
            hasher.update(ghost.speed.to_bits().to_le_bytes());
        }
        hasher.update(self.score.to_le_bytes());
        for pellet in self.pellets.points() {
            hash_point(&mut hasher, *pellet);
        }
        hasher.finalize().into()
    }
}

fn hash_point(hasher: &mut Sha256, point: crate::geometry::Point) {
    hasher.update(point.x.to_bits().to_le_bytes());
    hasher.update(point.y.to_bits().to_le_bytes());
}
