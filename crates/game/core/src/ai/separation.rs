//! Crowd separation between ghosts.
//!
//! A single forward pass, not a relaxation solver: neighbours are visited in
//! index order and each one may nudge the running proposal once. A nudge that
//! would land inside an obstacle is dropped and the pass continues from the
//! value before that nudge.

use super::context::AiContext;
use crate::geometry::Point;
use crate::state::Agent;

pub struct CrowdSeparator;

impl CrowdSeparator {
    /// Pushes `proposed` away from every other agent closer than
    /// `separation_radius`.
    ///
    /// `agents[index]` is the mover; its radius is used for obstacle checks
    /// and it never repels itself. An out-of-range index returns `proposed`
    /// untouched.
    pub fn separate(index: usize, proposed: Point, agents: &[Agent], ctx: &AiContext<'_>) -> Point {
        let Some(mover) = agents.get(index) else {
            return proposed;
        };
        let radius = ctx.config.separation_radius;
        let push = ctx.config.separation_push;

        let mut position = proposed;
        for (other_index, other) in agents.iter().enumerate() {
            if other_index == index {
                continue;
            }
            let distance = position.distance(other.position);
            if distance >= radius {
                continue;
            }

            // Exact overlap normalizes to zero: no push.
            let repulsion = (position - other.position).normalize();
            let strength = (radius - distance) / radius;
            let candidate = position + repulsion * (strength * push);

            if !ctx.is_blocked(mover, candidate) {
                position = candidate;
            }
        }
        position
    }
}
