//! Continuous 2D geometry shared by every layer of the engine.
//!
//! Positions, direction vectors and obstacle rectangles all live in world
//! units (the classic playfield is 640×480). Nothing here knows about agents
//! or levels; it is plain vector math.
use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2D coordinate or direction vector.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` (radians, screen coordinates: +y is down).
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// The zero vector normalizes to itself instead of producing NaNs.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / length, self.y / length)
    }

    /// Midpoint between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Axis-aligned rectangle in world space.
///
/// `(x, y)` is the top-left corner; width and height extend right and down.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Wall {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inflated overlap test: does a circle of `radius` centred on `point`
    /// touch this rectangle's bounding box grown by `radius` on every side?
    ///
    /// Edges are exclusive, so a circle resting exactly on a face is free.
    #[inline]
    pub fn overlaps_circle(&self, point: Point, radius: f64) -> bool {
        point.x + radius > self.x
            && point.x - radius < self.right()
            && point.y + radius > self.y
            && point.y - radius < self.bottom()
    }

    /// Plain point containment with inclusive edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_stays_zero() {
        assert_eq!(Point::ZERO.normalize(), Point::ZERO);
    }

    #[test]
    fn normalize_produces_unit_length() {
        let unit = Point::new(3.0, 4.0).normalize();
        assert!((unit.length() - 1.0).abs() < 1e-12);
        assert!((unit.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn overlap_is_inflated_by_radius() {
        let wall = Wall::new(100.0, 100.0, 10.0, 10.0);

        assert!(wall.overlaps_circle(Point::new(95.0, 105.0), 6.0));
        // Touching exactly is not an overlap.
        assert!(!wall.overlaps_circle(Point::new(95.0, 105.0), 5.0));
        assert!(!wall.overlaps_circle(Point::new(50.0, 50.0), 20.0));
    }

    #[test]
    fn from_angle_points_down_at_half_pi() {
        let heading = Point::from_angle(core::f64::consts::FRAC_PI_2);
        assert!(heading.x.abs() < 1e-12);
        assert!((heading.y - 1.0).abs() < 1e-12);
    }
}
