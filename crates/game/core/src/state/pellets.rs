//! Pellets laid out on a regular grid; eating the last one clears the level.
use crate::env::Level;
use crate::geometry::{Point, Wall};

/// Remaining pellets, in generation order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pellets {
    points: Vec<Point>,
}

impl Pellets {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Lays a pellet every `spacing` units on both axes, starting one spacing
    /// in from the edge.
    ///
    /// Grid points inside the cage outline, or within `buffer` of any maze or
    /// cage wall, are skipped. Both tests include the boundary.
    pub fn generate(level: &Level, spacing: f64, buffer: f64) -> Self {
        let dimensions = level.dimensions;
        let outline = level.cage.map(|cage| cage.outline());
        let obstacles: Vec<Wall> = level
            .walls
            .iter()
            .copied()
            .chain(level.cage.iter().flat_map(|cage| cage.walls()))
            .map(|wall| grow(wall, buffer))
            .collect();

        let mut points = Vec::new();
        for x in grid(spacing, dimensions.width - spacing) {
            for y in grid(spacing, dimensions.height - spacing) {
                let point = Point::new(x, y);
                if outline.is_some_and(|outline| outline.contains(point)) {
                    continue;
                }
                if obstacles.iter().any(|wall| wall.contains(point)) {
                    continue;
                }
                points.push(point);
            }
        }
        Self { points }
    }

    /// Removes every pellet strictly closer than `radius` to `center` and
    /// returns how many were eaten.
    pub fn collect(&mut self, center: Point, radius: f64) -> usize {
        let before = self.points.len();
        self.points.retain(|pellet| pellet.distance(center) >= radius);
        before - self.points.len()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Multiples of `step` from `step` up to and including `limit`.
///
/// Computed by index so long rows do not drift.
fn grid(step: f64, limit: f64) -> impl Iterator<Item = f64> {
    (1u32..)
        .map(move |i| step * f64::from(i))
        .take_while(move |value| *value <= limit)
}

fn grow(wall: Wall, margin: f64) -> Wall {
    Wall::new(
        wall.x - margin,
        wall.y - margin,
        wall.width + 2.0 * margin,
        wall.height + 2.0 * margin,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Cage, MapDimensions};

    fn dims() -> MapDimensions {
        MapDimensions::new(120.0, 90.0)
    }

    #[test]
    fn open_level_fills_the_interior_grid() {
        let pellets = Pellets::generate(&Level::open(dims()), 30.0, 10.0);
        // x in {30, 60, 90}, y in {30, 60}
        assert_eq!(pellets.len(), 6);
        assert_eq!(pellets.points()[0], Point::new(30.0, 30.0));
        assert_eq!(pellets.points()[5], Point::new(90.0, 60.0));
    }

    #[test]
    fn buffer_edge_counts_as_blocked() {
        // Wall right edge at 50; pellet at x=60 is exactly `buffer` away.
        let level = Level::new(dims(), vec![Wall::new(40.0, 0.0, 10.0, 90.0)], None);
        let pellets = Pellets::generate(&level, 30.0, 10.0);
        assert!(pellets.points().iter().all(|p| p.x != 60.0 && p.x != 30.0));
        assert_eq!(pellets.len(), 2);
    }

    #[test]
    fn cage_interior_stays_empty() {
        let cage = Cage::enclosing(Wall::new(20.0, 20.0, 80.0, 50.0), 2.0);
        let level = Level::new(dims(), Vec::new(), Some(cage));
        let pellets = Pellets::generate(&level, 30.0, 0.0);
        assert!(pellets.is_empty());
    }

    #[test]
    fn collect_removes_only_pellets_inside_radius() {
        let mut pellets = Pellets::new(vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ]);
        assert_eq!(pellets.collect(Point::new(0.0, 0.0), 10.0), 2);
        assert_eq!(pellets.points(), &[Point::new(10.0, 0.0)]);
        assert_eq!(pellets.collect(Point::new(0.0, 0.0), 10.0), 0);
    }
}
