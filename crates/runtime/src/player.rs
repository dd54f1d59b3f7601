//! Player movement: four headings, one step per tick.
//!
//! A move is taken only when the destination keeps the player's circle inside
//! the playfield and clear of every obstacle. Blocked or not, the facing
//! angle follows the requested heading, so AMBUSH ghosts read the player's
//! intent rather than its last successful move.

use core::f64::consts::{FRAC_PI_2, PI};

use chase_core::{CollisionOracle, MapDimensions, Player, Point};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub fn vector(self) -> Point {
        match self {
            Heading::Up => Point::new(0.0, -1.0),
            Heading::Down => Point::new(0.0, 1.0),
            Heading::Left => Point::new(-1.0, 0.0),
            Heading::Right => Point::new(1.0, 0.0),
        }
    }

    /// Facing angle in radians, y axis pointing down.
    pub fn angle(self) -> f64 {
        match self {
            Heading::Right => 0.0,
            Heading::Down => FRAC_PI_2,
            Heading::Left => PI,
            Heading::Up => -FRAC_PI_2,
        }
    }
}

/// Attempts one step. Returns whether the player moved.
pub fn move_player(
    player: &mut Player,
    heading: Heading,
    dimensions: MapDimensions,
    oracle: &dyn CollisionOracle,
) -> bool {
    player.angle = heading.angle();

    let next = player.position + heading.vector() * player.speed;
    if !dimensions.contains_circle(next, player.radius) || oracle.is_blocked(next, player.radius) {
        return false;
    }
    player.position = next;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chase_core::{Level, Wall};

    fn level() -> Level {
        Level::new(
            MapDimensions::new(200.0, 200.0),
            vec![Wall::new(100.0, 0.0, 10.0, 50.0)],
            None,
        )
    }

    #[test]
    fn steps_by_speed_and_faces_heading() {
        let level = level();
        let mut player = Player::new(Point::new(50.0, 100.0), 10.0);

        assert!(move_player(&mut player, Heading::Down, level.dimensions, &level));
        assert_eq!(player.position, Point::new(50.0, 102.0));
        assert!((player.heading().y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn playfield_edge_stops_the_player() {
        let level = level();
        let mut player = Player::new(Point::new(11.0, 100.0), 10.0);

        assert!(!move_player(&mut player, Heading::Left, level.dimensions, &level));
        assert_eq!(player.position, Point::new(11.0, 100.0));
        assert_eq!(player.angle, PI);
    }

    #[test]
    fn walls_stop_the_player() {
        let level = level();
        let mut player = Player::new(Point::new(89.0, 20.0), 10.0);

        assert!(!move_player(&mut player, Heading::Right, level.dimensions, &level));
        assert_eq!(player.position.x, 89.0);
    }

    #[test]
    fn headings_parse_case_insensitively() {
        assert_eq!("UP".parse::<Heading>().unwrap(), Heading::Up);
        assert_eq!(Heading::Left.to_string(), "left");
    }
}
