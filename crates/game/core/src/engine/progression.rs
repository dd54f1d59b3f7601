//! Ghost speed progression across levels.
//!
//! Speed only changes at level-up. Levels 5, 10 and 15 each add a full unit;
//! from level 20 on every level adds a quarter unit. All other levels leave
//! speed unchanged.

use crate::state::Agent;

/// Speed gained when the game advances *to* `level`.
pub fn speed_bonus(level: u32) -> f64 {
    match level {
        5 | 10 | 15 => 1.0,
        20.. => 0.25,
        _ => 0.0,
    }
}

/// Applies the level-up bonus to every ghost and returns it.
pub fn apply_level_up(agents: &mut [Agent], level: u32) -> f64 {
    let bonus = speed_bonus(level);
    if bonus > 0.0 {
        for agent in agents.iter_mut() {
            agent.speed += bonus;
        }
    }
    bonus
}
