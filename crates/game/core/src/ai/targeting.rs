//! Personality-driven target selection.
//!
//! Each [`Personality`] has its own handler. Every handler terminates in a
//! concrete point: when all probes hit walls the agent falls back to its
//! scatter point, which is never checked (levels place scatter points in the
//! open by construction).
//!
//! Probes test walls only, using the agent's own radius.

use super::compass::DIRECTIONS;
use super::context::{AiContext, PlayerView};
use crate::env::RandomSource;
use crate::geometry::Point;
use crate::state::{Agent, Personality};

/// Why a particular point was chosen. Useful for tracing and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TargetSource {
    /// The player's exact position.
    Player,
    /// CHASER: open probe next to a walled-in player.
    Probe,
    /// AMBUSH: point `distance` units ahead of the player.
    Ahead { distance: f64 },
    /// PATROL: midpoint between player and scatter point.
    Midpoint,
    /// RANDOM: wander point picked this tick.
    Wander,
    /// Fallback.
    Scatter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub point: Point,
    pub source: TargetSource,
}

impl Target {
    const fn new(point: Point, source: TargetSource) -> Self {
        Self { point, source }
    }

    fn scatter(agent: &Agent) -> Self {
        Self::new(agent.scatter, TargetSource::Scatter)
    }
}

/// Dispatches to the handler for the agent's personality.
pub struct TargetSelector;

impl TargetSelector {
    pub fn select<R>(agent: &Agent, player: PlayerView, ctx: &AiContext<'_>, rng: &mut R) -> Target
    where
        R: RandomSource + ?Sized,
    {
        match agent.personality {
            Personality::Chaser => chaser(agent, player, ctx),
            Personality::Ambush => ambush(agent, player, ctx),
            Personality::Patrol => patrol(agent, player, ctx),
            Personality::Random => random(agent, player, ctx, rng),
        }
    }
}

/// Convenience wrapper returning only the point.
pub fn select_target<R>(agent: &Agent, player: PlayerView, ctx: &AiContext<'_>, rng: &mut R) -> Point
where
    R: RandomSource + ?Sized,
{
    TargetSelector::select(agent, player, ctx, rng).point
}

fn chaser(agent: &Agent, player: PlayerView, ctx: &AiContext<'_>) -> Target {
    if !ctx.hits_wall(agent, player.position) {
        return Target::new(player.position, TargetSource::Player);
    }

    let radius = ctx.config.chaser_probe_radius;
    let mut best: Option<(f64, Point)> = None;
    for direction in DIRECTIONS {
        let probe = player.position + direction * radius;
        if ctx.hits_wall(agent, probe) {
            continue;
        }
        let distance = agent.distance_to(probe);
        // Strictly closer replaces; the first of equals stays.
        if best.is_none_or(|(best_distance, _)| distance < best_distance) {
            best = Some((distance, probe));
        }
    }

    match best {
        Some((_, probe)) => Target::new(probe, TargetSource::Probe),
        None => Target::scatter(agent),
    }
}

fn ambush(agent: &Agent, player: PlayerView, ctx: &AiContext<'_>) -> Target {
    let config = ctx.config;
    for i in 0..config.ambush_probe_count() {
        let distance = config.ambush_max_distance - config.ambush_step * f64::from(i);
        if distance <= 0.0 {
            break;
        }
        let probe = player.position + player.heading * distance;
        if !ctx.hits_wall(agent, probe) {
            return Target::new(probe, TargetSource::Ahead { distance });
        }
    }
    Target::scatter(agent)
}

fn patrol(agent: &Agent, player: PlayerView, ctx: &AiContext<'_>) -> Target {
    if agent.distance_to(player.position) < ctx.config.patrol_radius {
        let midpoint = player.position.midpoint(agent.scatter);
        if !ctx.hits_wall(agent, midpoint) {
            return Target::new(midpoint, TargetSource::Midpoint);
        }
    }
    Target::new(player.position, TargetSource::Player)
}

fn random<R>(agent: &Agent, player: PlayerView, ctx: &AiContext<'_>, rng: &mut R) -> Target
where
    R: RandomSource + ?Sized,
{
    let config = ctx.config;
    if rng.next_unit() < config.wander_chance {
        for _ in 0..config.wander_attempts {
            let angle = rng.next_angle();
            let probe = agent.position + Point::from_angle(angle) * config.wander_radius;
            if !ctx.hits_wall(agent, probe) {
                return Target::new(probe, TargetSource::Wander);
            }
        }
    }

    if agent.distance_to(player.position) > config.random_chase_distance {
        Target::new(player.position, TargetSource::Player)
    } else {
        Target::scatter(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChaseConfig;
    use crate::env::{Cage, CollisionOracle, Level, MapDimensions, SequenceRng};
    use crate::geometry::Wall;

    fn open_level() -> Level {
        Level::open(MapDimensions::new(640.0, 480.0))
    }

    fn ghost(personality: Personality, x: f64, y: f64) -> Agent {
        Agent::new(Point::new(x, y), 10.0, 2.0, personality, Point::new(20.0, 20.0)).unwrap()
    }

    fn facing_right(x: f64, y: f64) -> PlayerView {
        PlayerView::new(Point::new(x, y), Point::new(1.0, 0.0))
    }

    fn select(agent: &Agent, player: PlayerView, level: &Level, rng: &mut SequenceRng) -> Target {
        let config = ChaseConfig::default();
        let ctx = AiContext::new(level, &config);
        TargetSelector::select(agent, player, &ctx, rng)
    }

    #[test]
    fn chaser_targets_open_player_exactly() {
        let level = open_level();
        let agent = ghost(Personality::Chaser, 100.0, 100.0);
        let player = facing_right(321.5, 222.25);

        let target = select(&agent, player, &level, &mut SequenceRng::default());
        assert_eq!(target, Target::new(player.position, TargetSource::Player));
    }

    #[test]
    fn select_target_returns_the_chosen_point() {
        let level = open_level();
        let config = ChaseConfig::default();
        let ctx = AiContext::new(&level, &config);
        let agent = ghost(Personality::Ambush, 100.0, 100.0);

        let point = select_target(&agent, facing_right(300.0, 240.0), &ctx, &mut SequenceRng::default());
        assert_eq!(point, Point::new(380.0, 240.0));
    }

    #[test]
    fn chaser_picks_nearest_open_probe_around_walled_player() {
        // Wall covering the player and all four diagonal probes.
        let level = Level::new(
            MapDimensions::new(640.0, 480.0),
            vec![Wall::new(280.0, 180.0, 80.0, 70.0)],
            None,
        );
        let agent = ghost(Personality::Chaser, 100.0, 210.0);
        let player = facing_right(320.0, 210.0);

        let target = select(&agent, player, &level, &mut SequenceRng::default());
        // The left probe only touches the inflated wall, so it is open and nearest.
        assert_eq!(target.source, TargetSource::Probe);
        assert_eq!(target.point, Point::new(270.0, 210.0));
    }

    #[test]
    fn chaser_falls_back_to_scatter_when_boxed_in() {
        let level = Level::new(
            MapDimensions::new(640.0, 480.0),
            vec![Wall::new(200.0, 100.0, 240.0, 240.0)],
            None,
        );
        let agent = ghost(Personality::Chaser, 50.0, 50.0);
        let target = select(&agent, facing_right(320.0, 220.0), &level, &mut SequenceRng::default());
        assert_eq!(target, Target::new(agent.scatter, TargetSource::Scatter));
    }

    #[test]
    fn chaser_ignores_cage_when_checking_player() {
        let cage = Cage::enclosing(Wall::new(220.0, 165.0, 200.0, 150.0), 12.0);
        let level = Level::new(MapDimensions::new(640.0, 480.0), Vec::new(), Some(cage));
        let agent = ghost(Personality::Chaser, 100.0, 100.0);
        // Standing on the cage's top wall.
        let player = facing_right(320.0, 170.0);

        let target = select(&agent, player, &level, &mut SequenceRng::default());
        assert_eq!(target.source, TargetSource::Player);
    }

    #[test]
    fn ambush_targets_full_distance_in_the_open() {
        let level = open_level();
        let agent = ghost(Personality::Ambush, 100.0, 100.0);
        let target = select(&agent, facing_right(300.0, 240.0), &level, &mut SequenceRng::default());

        assert_eq!(target.point, Point::new(380.0, 240.0));
        assert_eq!(target.source, TargetSource::Ahead { distance: 80.0 });
    }

    #[test]
    fn ambush_points_on_the_cage_rim_still_count_as_open() {
        let cage = Cage::enclosing(Wall::new(220.0, 165.0, 200.0, 150.0), 12.0);
        let level = Level::new(MapDimensions::new(640.0, 480.0), Vec::new(), Some(cage));
        let agent = ghost(Personality::Ambush, 100.0, 100.0);
        // Every candidate from 80 down to 10 lies on the cage's top wall.
        let player = facing_right(230.0, 171.0);

        let target = select(&agent, player, &level, &mut SequenceRng::default());

        assert_eq!(target.source, TargetSource::Ahead { distance: 80.0 });
        assert_eq!(target.point, Point::new(310.0, 171.0));
        assert!(level.is_blocked(target.point, agent.radius));
    }

    #[test]
    fn ambush_shortens_until_clear_of_wall() {
        // Inflated wall spans x in (350, 420): probes at 80, 70 and 60 are blocked.
        let level = Level::new(
            MapDimensions::new(640.0, 480.0),
            vec![Wall::new(360.0, 200.0, 50.0, 80.0)],
            None,
        );
        let agent = ghost(Personality::Ambush, 100.0, 100.0);
        let target = select(&agent, facing_right(300.0, 240.0), &level, &mut SequenceRng::default());

        assert_eq!(target.source, TargetSource::Ahead { distance: 50.0 });
        assert_eq!(target.point, Point::new(350.0, 240.0));
    }

    #[test]
    fn ambush_falls_back_to_scatter_when_all_probes_blocked() {
        let level = Level::new(
            MapDimensions::new(640.0, 480.0),
            vec![Wall::new(300.0, 200.0, 100.0, 80.0)],
            None,
        );
        let agent = ghost(Personality::Ambush, 100.0, 100.0);
        let target = select(&agent, facing_right(300.0, 240.0), &level, &mut SequenceRng::default());
        assert_eq!(target.source, TargetSource::Scatter);
    }

    #[test]
    fn patrol_cuts_to_midpoint_when_close() {
        let level = open_level();
        let agent = ghost(Personality::Patrol, 300.0, 200.0);
        let target = select(&agent, facing_right(320.0, 240.0), &level, &mut SequenceRng::default());

        assert_eq!(target.source, TargetSource::Midpoint);
        assert_eq!(target.point, Point::new(170.0, 130.0));
    }

    #[test]
    fn patrol_chases_when_far() {
        let level = open_level();
        let agent = ghost(Personality::Patrol, 500.0, 400.0);
        let player = facing_right(100.0, 100.0);
        let target = select(&agent, player, &level, &mut SequenceRng::default());
        assert_eq!(target, Target::new(player.position, TargetSource::Player));
    }

    #[test]
    fn patrol_chases_when_midpoint_is_walled() {
        let level = Level::new(
            MapDimensions::new(640.0, 480.0),
            vec![Wall::new(160.0, 120.0, 20.0, 20.0)],
            None,
        );
        let agent = ghost(Personality::Patrol, 300.0, 200.0);
        let target = select(&agent, facing_right(320.0, 240.0), &level, &mut SequenceRng::default());
        assert_eq!(target.source, TargetSource::Player);
    }

    #[test]
    fn random_chases_distant_player_without_wandering() {
        let level = open_level();
        let agent = ghost(Personality::Random, 50.0, 50.0);
        let mut rng = SequenceRng::new(vec![0.5]);
        let player = facing_right(500.0, 400.0);

        let target = select(&agent, player, &level, &mut rng);
        assert_eq!(target.source, TargetSource::Player);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn random_retreats_to_scatter_when_player_is_near() {
        let level = open_level();
        let agent = ghost(Personality::Random, 300.0, 240.0);
        let target = select(&agent, facing_right(320.0, 240.0), &level, &mut SequenceRng::new(vec![0.9]));
        assert_eq!(target.source, TargetSource::Scatter);
    }

    #[test]
    fn random_wanders_when_the_roll_hits() {
        let level = open_level();
        let agent = ghost(Personality::Random, 300.0, 240.0);
        // Roll 0.01 < 0.02, then angle draw 0.0 → facing right.
        let mut rng = SequenceRng::new(vec![0.01, 0.0]);

        let target = select(&agent, facing_right(320.0, 240.0), &level, &mut rng);
        assert_eq!(target.source, TargetSource::Wander);
        assert_eq!(target.point, Point::new(400.0, 240.0));
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn random_wander_gives_up_after_bounded_attempts() {
        // Every wander point around the agent is inside this wall.
        let level = Level::new(
            MapDimensions::new(640.0, 480.0),
            vec![Wall::new(0.0, 0.0, 640.0, 480.0)],
            None,
        );
        let agent = ghost(Personality::Random, 300.0, 240.0);
        let mut rng = SequenceRng::new(vec![0.0]);

        let target = select(&agent, facing_right(320.0, 240.0), &level, &mut rng);
        assert_eq!(target.source, TargetSource::Scatter);
        // One roll plus ten angles.
        assert_eq!(rng.draws(), 11);
    }
}
