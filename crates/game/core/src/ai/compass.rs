//! The fixed eight-way movement compass.
use core::f64::consts::FRAC_1_SQRT_2;

use crate::geometry::Point;

/// Candidate movement directions, in evaluation order.
///
/// Order matters: it decides ties in the direction scorer and which
/// direction the wall-only fallback returns first.
pub const DIRECTIONS: [Point; 8] = [
    Point::new(1.0, 0.0),                       // right
    Point::new(-1.0, 0.0),                      // left
    Point::new(0.0, 1.0),                       // down
    Point::new(0.0, -1.0),                      // up
    Point::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),   // down-right
    Point::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),  // down-left
    Point::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),  // up-right
    Point::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2), // up-left
];

/// True for the zero vector or any entry of [`DIRECTIONS`].
pub fn is_compass_or_zero(direction: Point) -> bool {
    direction.is_zero() || DIRECTIONS.contains(&direction)
}
