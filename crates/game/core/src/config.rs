use crate::error::ConfigError;

/// Tunable parameters of the pursuit engine.
///
/// Defaults reproduce the classic game. Every field can be overridden from a
/// TOML file; missing keys fall back to the defaults below.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChaseConfig {
    /// Forward probes per candidate direction (step 1..=look_ahead_steps).
    pub look_ahead_steps: u32,
    /// Score bonus for continuing roughly in the last direction.
    pub continuity_bonus: f64,

    /// Neighbours closer than this push each other apart.
    pub separation_radius: f64,
    /// Maximum push applied by one neighbour at zero distance.
    pub separation_push: f64,

    /// CHASER: probe distance around a walled-in player.
    pub chaser_probe_radius: f64,
    /// AMBUSH: first probe distance ahead of the player.
    pub ambush_max_distance: f64,
    /// AMBUSH: decrement between probes.
    pub ambush_step: f64,
    /// PATROL: below this distance the patroller cuts towards its scatter point.
    pub patrol_radius: f64,
    /// RANDOM: per-tick chance of picking a wander target.
    pub wander_chance: f64,
    /// RANDOM: angles tried before giving up on wandering this tick.
    pub wander_attempts: u32,
    /// RANDOM: distance of a wander target from the agent.
    pub wander_radius: f64,
    /// RANDOM: beyond this distance the agent chases the player directly.
    pub random_chase_distance: f64,

    /// Respawn: random placements tried before keeping the old position.
    pub respawn_attempts: u32,

    /// Pellets: grid spacing; the first row and column sit one spacing in.
    pub pellet_spacing: f64,
    /// Pellets: clearance kept from every maze and cage wall.
    pub pellet_buffer: f64,
    /// Pellets: score awarded per pellet eaten.
    pub pellet_score: u64,
}

impl ChaseConfig {
    pub const DEFAULT_LOOK_AHEAD_STEPS: u32 = 3;
    pub const DEFAULT_CONTINUITY_BONUS: f64 = 0.5;
    pub const DEFAULT_SEPARATION_RADIUS: f64 = 30.0;
    pub const DEFAULT_SEPARATION_PUSH: f64 = 2.0;
    pub const DEFAULT_CHASER_PROBE_RADIUS: f64 = 50.0;
    pub const DEFAULT_AMBUSH_MAX_DISTANCE: f64 = 80.0;
    pub const DEFAULT_AMBUSH_STEP: f64 = 10.0;
    pub const DEFAULT_PATROL_RADIUS: f64 = 150.0;
    pub const DEFAULT_WANDER_CHANCE: f64 = 0.02;
    pub const DEFAULT_WANDER_ATTEMPTS: u32 = 10;
    pub const DEFAULT_WANDER_RADIUS: f64 = 100.0;
    pub const DEFAULT_RANDOM_CHASE_DISTANCE: f64 = 200.0;
    pub const DEFAULT_RESPAWN_ATTEMPTS: u32 = 256;
    pub const DEFAULT_PELLET_SPACING: f64 = 30.0;
    pub const DEFAULT_PELLET_BUFFER: f64 = 10.0;
    pub const DEFAULT_PELLET_SCORE: u64 = 10;

    /// Upper bound on every per-tick search loop: look-ahead steps, AMBUSH
    /// distances and wander attempts.
    pub const MAX_SEARCH_STEPS: u32 = 64;
    pub const MAX_RESPAWN_ATTEMPTS: u32 = 1 << 16;
    pub const MIN_PELLET_SPACING: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            look_ahead_steps: Self::DEFAULT_LOOK_AHEAD_STEPS,
            continuity_bonus: Self::DEFAULT_CONTINUITY_BONUS,
            separation_radius: Self::DEFAULT_SEPARATION_RADIUS,
            separation_push: Self::DEFAULT_SEPARATION_PUSH,
            chaser_probe_radius: Self::DEFAULT_CHASER_PROBE_RADIUS,
            ambush_max_distance: Self::DEFAULT_AMBUSH_MAX_DISTANCE,
            ambush_step: Self::DEFAULT_AMBUSH_STEP,
            patrol_radius: Self::DEFAULT_PATROL_RADIUS,
            wander_chance: Self::DEFAULT_WANDER_CHANCE,
            wander_attempts: Self::DEFAULT_WANDER_ATTEMPTS,
            wander_radius: Self::DEFAULT_WANDER_RADIUS,
            random_chase_distance: Self::DEFAULT_RANDOM_CHASE_DISTANCE,
            respawn_attempts: Self::DEFAULT_RESPAWN_ATTEMPTS,
            pellet_spacing: Self::DEFAULT_PELLET_SPACING,
            pellet_buffer: Self::DEFAULT_PELLET_BUFFER,
            pellet_score: Self::DEFAULT_PELLET_SCORE,
        }
    }

    /// Number of AMBUSH probes: `max, max - step, …` while the distance stays positive.
    pub fn ambush_probe_count(&self) -> u32 {
        (self.ambush_max_distance / self.ambush_step).ceil() as u32
    }

    /// Rejects values that would make a search unbounded or a score meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("continuity_bonus", self.continuity_bonus),
            ("separation_radius", self.separation_radius),
            ("separation_push", self.separation_push),
            ("chaser_probe_radius", self.chaser_probe_radius),
            ("ambush_max_distance", self.ambush_max_distance),
            ("patrol_radius", self.patrol_radius),
            ("wander_radius", self.wander_radius),
            ("random_chase_distance", self.random_chase_distance),
            ("pellet_buffer", self.pellet_buffer),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTunable { name, value });
            }
        }

        if !self.ambush_step.is_finite()
            || self.ambush_step <= 0.0
            || self.ambush_probe_count() > Self::MAX_SEARCH_STEPS
        {
            return Err(ConfigError::InvalidTunable {
                name: "ambush_step",
                value: self.ambush_step,
            });
        }
        if !(0.0..=1.0).contains(&self.wander_chance) {
            return Err(ConfigError::InvalidTunable {
                name: "wander_chance",
                value: self.wander_chance,
            });
        }
        if !(self.pellet_spacing.is_finite() && self.pellet_spacing >= Self::MIN_PELLET_SPACING) {
            return Err(ConfigError::InvalidTunable {
                name: "pellet_spacing",
                value: self.pellet_spacing,
            });
        }

        let bounded = [
            ("look_ahead_steps", self.look_ahead_steps, 1, Self::MAX_SEARCH_STEPS),
            ("wander_attempts", self.wander_attempts, 0, Self::MAX_SEARCH_STEPS),
            ("respawn_attempts", self.respawn_attempts, 0, Self::MAX_RESPAWN_ATTEMPTS),
        ];
        for (name, count, min, max) in bounded {
            if !(min..=max).contains(&count) {
                return Err(ConfigError::InvalidTunable {
                    name,
                    value: f64::from(count),
                });
            }
        }

        Ok(())
    }
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ChaseConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ambush_probe_count(), 8);
    }

    #[test]
    fn zero_ambush_step_is_rejected() {
        let config = ChaseConfig {
            ambush_step: 0.0,
            ..ChaseConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTunable {
                name: "ambush_step",
                ..
            })
        ));
    }

    #[test]
    fn tiny_ambush_step_is_rejected() {
        // 80 / 1e-6 candidate distances per tick.
        let config = ChaseConfig {
            ambush_step: 1e-6,
            ..ChaseConfig::default()
        };
        assert!(config.ambush_probe_count() > ChaseConfig::MAX_SEARCH_STEPS);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTunable {
                name: "ambush_step",
                ..
            })
        ));
    }

    #[test]
    fn per_tick_search_loops_are_capped() {
        let too_many_wanders = ChaseConfig {
            wander_attempts: ChaseConfig::MAX_SEARCH_STEPS + 1,
            ..ChaseConfig::default()
        };
        assert!(matches!(
            too_many_wanders.validate(),
            Err(ConfigError::InvalidTunable {
                name: "wander_attempts",
                ..
            })
        ));

        let no_look_ahead = ChaseConfig {
            look_ahead_steps: 0,
            ..ChaseConfig::default()
        };
        assert!(no_look_ahead.validate().is_err());

        let deep_look_ahead = ChaseConfig {
            look_ahead_steps: 1000,
            ..ChaseConfig::default()
        };
        assert!(deep_look_ahead.validate().is_err());

        let at_cap = ChaseConfig {
            look_ahead_steps: ChaseConfig::MAX_SEARCH_STEPS,
            wander_attempts: ChaseConfig::MAX_SEARCH_STEPS,
            ..ChaseConfig::default()
        };
        assert!(at_cap.validate().is_ok());
    }

    #[test]
    fn pellet_spacing_has_a_floor() {
        let config = ChaseConfig {
            pellet_spacing: 0.01,
            ..ChaseConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn wander_chance_must_be_a_probability() {
        let config = ChaseConfig {
            wander_chance: 1.5,
            ..ChaseConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
