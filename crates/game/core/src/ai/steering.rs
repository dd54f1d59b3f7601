//! Direction scoring (which compass direction moves a ghost towards its target).
//!
//! # Algorithm
//!
//! For every entry of [`DIRECTIONS`], in order:
//!
//! 1. **Look-ahead**: probe `position + direction × speed × step` for
//!    `step = 1..=look_ahead_steps`. Any probe blocked by walls or cage
//!    rejects the direction.
//! 2. **Score** survivors by distance gained towards the target after one
//!    step, plus `continuity_bonus` when the direction agrees with the last
//!    committed one (positive dot product).
//! 3. **Select** the strictly highest score; the earliest direction wins ties.
//!
//! When nothing survives, the first direction whose single step clears the
//! maze walls is taken, ignoring the cage. When even that fails the zero
//! vector is returned and the ghost holds still.

use arrayvec::ArrayVec;

use super::compass::DIRECTIONS;
use super::context::AiContext;
use crate::geometry::Point;
use crate::state::Agent;

/// Score of one compass direction. `score` is `None` when look-ahead rejected it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionEvaluation {
    pub direction: Point,
    pub score: Option<f64>,
}

impl DirectionEvaluation {
    pub fn is_viable(&self) -> bool {
        self.score.is_some()
    }
}

/// Picks the movement direction for one ghost.
pub struct DirectionScorer;

impl DirectionScorer {
    /// Returns a compass direction, or [`Point::ZERO`] when the ghost cannot move.
    pub fn best_direction(agent: &Agent, target: Point, ctx: &AiContext<'_>) -> Point {
        let mut best: Option<(Point, f64)> = None;

        for evaluation in Self::evaluate_all(agent, target, ctx) {
            let Some(score) = evaluation.score else {
                continue;
            };
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((evaluation.direction, score));
            }
        }

        match best {
            Some((direction, _)) => direction,
            None => Self::wall_only_fallback(agent, ctx),
        }
    }

    /// Evaluates every compass direction, in table order.
    pub fn evaluate_all(
        agent: &Agent,
        target: Point,
        ctx: &AiContext<'_>,
    ) -> ArrayVec<DirectionEvaluation, 8> {
        let current_distance = agent.distance_to(target);

        DIRECTIONS
            .iter()
            .map(|&direction| {
                let score = Self::path_is_clear(agent, direction, ctx).then(|| {
                    Self::score(agent, direction, target, current_distance, ctx)
                });
                DirectionEvaluation { direction, score }
            })
            .collect()
    }

    fn path_is_clear(agent: &Agent, direction: Point, ctx: &AiContext<'_>) -> bool {
        (1..=ctx.config.look_ahead_steps).all(|step| {
            let probe = agent.position + direction * (agent.speed * f64::from(step));
            !ctx.is_blocked(agent, probe)
        })
    }

    fn score(
        agent: &Agent,
        direction: Point,
        target: Point,
        current_distance: f64,
        ctx: &AiContext<'_>,
    ) -> f64 {
        let next = agent.position + direction * agent.speed;
        let mut score = current_distance - next.distance(target);
        if direction.dot(agent.last_direction) > 0.0 {
            score += ctx.config.continuity_bonus;
        }
        score
    }

    // Walls only; unlike the look-ahead pass, the cage is not consulted.
    fn wall_only_fallback(agent: &Agent, ctx: &AiContext<'_>) -> Point {
        DIRECTIONS
            .iter()
            .copied()
            .find(|&direction| !ctx.hits_wall(agent, agent.position + direction * agent.speed))
            .unwrap_or(Point::ZERO)
    }
}
