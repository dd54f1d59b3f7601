use crate::error::ConfigError;
use crate::geometry::{Point, Wall};

/// Static collision oracle answering "is this circle inside an obstacle?".
///
/// Implementations only read immutable geometry, so a single oracle can be
/// shared by every agent evaluated during a tick.
pub trait CollisionOracle: Send + Sync {
    /// Circle overlaps one of the maze walls.
    fn collides_with_wall(&self, point: Point, radius: f64) -> bool;

    /// Circle overlaps one of the cage walls.
    fn collides_with_cage(&self, point: Point, radius: f64) -> bool;

    /// Circle overlaps any obstacle in the level.
    fn is_blocked(&self, point: Point, radius: f64) -> bool {
        self.collides_with_wall(point, radius) || self.collides_with_cage(point, radius)
    }
}

/// Playfield extent. Agents and respawn points live inside `[0, width) × [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: f64,
    pub height: f64,
}

impl MapDimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when a circle of `radius` at `point` lies fully inside the playfield.
    pub fn contains_circle(&self, point: Point, radius: f64) -> bool {
        point.x - radius >= 0.0
            && point.y - radius >= 0.0
            && point.x + radius <= self.width
            && point.y + radius <= self.height
    }
}

/// The ghosts' home: four walls forming a rectangular enclosure.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cage {
    pub top: Wall,
    pub right: Wall,
    pub bottom: Wall,
    pub left: Wall,
}

impl Cage {
    /// Builds the four walls of an enclosure whose outer edge is `outline`.
    pub fn enclosing(outline: Wall, thickness: f64) -> Self {
        Self {
            top: Wall::new(outline.x, outline.y, outline.width, thickness),
            right: Wall::new(
                outline.right() - thickness,
                outline.y,
                thickness,
                outline.height,
            ),
            bottom: Wall::new(
                outline.x,
                outline.bottom() - thickness,
                outline.width,
                thickness,
            ),
            left: Wall::new(outline.x, outline.y, thickness, outline.height),
        }
    }

    pub fn walls(&self) -> [Wall; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// Outer bounding box of the enclosure.
    pub fn outline(&self) -> Wall {
        let x = self.left.x;
        let y = self.top.y;
        Wall::new(
            x,
            y,
            self.right.right() - x,
            self.bottom.bottom() - y,
        )
    }
}

/// Immutable level geometry: playfield bounds, maze walls and an optional cage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub dimensions: MapDimensions,
    pub walls: Vec<Wall>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cage: Option<Cage>,
}

impl Level {
    pub fn new(dimensions: MapDimensions, walls: Vec<Wall>, cage: Option<Cage>) -> Self {
        Self {
            dimensions,
            walls,
            cage,
        }
    }

    /// A level with no obstacles at all.
    pub fn open(dimensions: MapDimensions) -> Self {
        Self::new(dimensions, Vec::new(), None)
    }

    /// Checks that every rectangle is finite with positive extent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let MapDimensions { width, height } = self.dimensions;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidDimensions { width, height });
        }

        let cage_walls = self.cage.iter().flat_map(|cage| cage.walls());
        for (index, wall) in self.walls.iter().copied().chain(cage_walls).enumerate() {
            let finite = [wall.x, wall.y, wall.width, wall.height]
                .iter()
                .all(|value| value.is_finite());
            if !finite || wall.width <= 0.0 || wall.height <= 0.0 {
                return Err(ConfigError::DegenerateWall { index });
            }
        }

        Ok(())
    }
}

impl CollisionOracle for Level {
    fn collides_with_wall(&self, point: Point, radius: f64) -> bool {
        self.walls
            .iter()
            .any(|wall| wall.overlaps_circle(point, radius))
    }

    fn collides_with_cage(&self, point: Point, radius: f64) -> bool {
        self.cage.is_some_and(|cage| {
            cage.walls()
                .iter()
                .any(|wall| wall.overlaps_circle(point, radius))
        })
    }
}
