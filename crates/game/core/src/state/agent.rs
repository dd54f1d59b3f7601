use core::fmt;

use crate::error::ConfigError;
use crate::geometry::Point;

/// Fixed behavioural variant deciding how a ghost picks its target.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Personality {
    /// Heads straight for the player.
    Chaser,
    /// Aims at a point ahead of the player's heading.
    Ambush,
    /// Hovers between the player and its scatter point.
    Patrol,
    /// Chases from afar, retreats when close, wanders occasionally.
    Random,
}

/// Autonomous pursuer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub position: Point,
    pub radius: f64,
    pub speed: f64,
    pub personality: Personality,
    /// Personal fallback target, assumed reachable by level design.
    pub scatter: Point,
    /// Direction committed on the last successful move; zero before the first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_direction: Point,
}

impl Agent {
    pub fn new(
        position: Point,
        radius: f64,
        speed: f64,
        personality: Personality,
        scatter: Point,
    ) -> Result<Self, ConfigError> {
        let agent = Self {
            position,
            radius,
            speed,
            personality,
            scatter,
            last_direction: Point::ZERO,
        };
        agent.validate()?;
        Ok(agent)
    }

    /// Checks the invariants the engine relies on: finite coordinates,
    /// non-negative radius and a strictly positive speed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.position.is_finite() {
            return Err(ConfigError::NonFiniteCoordinate { field: "position" });
        }
        if !self.scatter.is_finite() {
            return Err(ConfigError::NonFiniteCoordinate { field: "scatter" });
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ConfigError::InvalidRadius {
                radius: self.radius,
            });
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed { speed: self.speed });
        }
        Ok(())
    }

    pub fn with_last_direction(mut self, direction: Point) -> Self {
        self.last_direction = direction;
        self
    }

    pub fn distance_to(&self, point: Point) -> f64 {
        self.position.distance(point)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.personality, self.position)
    }
}

/// The player as seen by the ghosts: a position and a facing angle.
///
/// Ghosts only read it; moving the player belongs to the caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub position: Point,
    pub radius: f64,
    /// Facing angle in radians; 0 faces right, π/2 faces down.
    #[cfg_attr(feature = "serde", serde(default))]
    pub angle: f64,
    #[cfg_attr(feature = "serde", serde(default = "Player::default_speed"))]
    pub speed: f64,
}

impl Player {
    pub const DEFAULT_SPEED: f64 = 2.0;

    pub fn new(position: Point, radius: f64) -> Self {
        Self {
            position,
            radius,
            angle: 0.0,
            speed: Self::DEFAULT_SPEED,
        }
    }

    /// Same invariants as [`Agent::validate`], plus a finite facing angle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.position.is_finite() {
            return Err(ConfigError::NonFiniteCoordinate { field: "position" });
        }
        if !self.angle.is_finite() {
            return Err(ConfigError::NonFiniteCoordinate { field: "angle" });
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ConfigError::InvalidRadius {
                radius: self.radius,
            });
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed { speed: self.speed });
        }
        Ok(())
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Unit vector the player is facing.
    pub fn heading(&self) -> Point {
        Point::from_angle(self.angle)
    }

    #[cfg(feature = "serde")]
    fn default_speed() -> f64 {
        Self::DEFAULT_SPEED
    }
}
