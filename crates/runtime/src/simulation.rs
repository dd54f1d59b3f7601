//! Session object driving the pursuit engine tick by tick.
//!
//! A [`Simulation`] owns everything that changes during play (the
//! [`ChaseState`], the level counter and the RNG stream) alongside the
//! immutable level and tunables. Eating the last pellet advances the level. Clients build it from a loaded
//! [`Scenario`] and then call [`Simulation::step`] once per frame.

use chase_content::Scenario;
use chase_core::{
    Agent, ChaseConfig, ChaseState, Level, PcgRng, Pellets, Point, apply_level_up, respawn_agent,
    step_all_agents,
};

use serde::Serialize;

use crate::error::{Result, RuntimeError};
use crate::player::{Heading, move_player};
use crate::report::{Contact, RunSummary, TickReport};

/// Result of advancing to the next level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LevelUp {
    pub level: u32,
    pub speed_bonus: f64,
    /// Ghosts that found an open spot; the rest kept their position.
    pub respawned: usize,
}

pub struct Simulation {
    state: ChaseState,
    names: Vec<String>,
    level: Level,
    config: ChaseConfig,
    rng: PcgRng,
    seed: u64,
    level_number: u32,
    player_start: Point,
}

impl Simulation {
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    pub fn state(&self) -> &ChaseState {
        &self.state
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    pub fn ghost(&self, index: usize) -> Result<&Agent> {
        self.state.ghosts.get(index).ok_or(RuntimeError::UnknownAgent {
            index,
            count: self.state.ghosts.len(),
        })
    }

    pub fn ghost_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Advances one tick with no player input.
    pub fn step(&mut self) -> TickReport {
        self.step_with(None)
    }

    /// Advances one tick: player first, then pellets (clearing the last one
    /// levels up), then every ghost in roster order, then contact detection
    /// against the player's new position.
    pub fn step_with(&mut self, input: Option<Heading>) -> TickReport {
        let player_moved = input.map(|heading| {
            move_player(
                &mut self.state.player,
                heading,
                self.level.dimensions,
                &self.level,
            )
        });

        let player = &self.state.player;
        let pellets_eaten = self.state.pellets.collect(player.position, player.radius);
        self.state.score = self
            .state
            .score
            .saturating_add((pellets_eaten as u64).saturating_mul(self.config.pellet_score));
        let level_up = (pellets_eaten > 0 && self.state.pellets.is_empty())
            .then(|| self.advance_level());

        let steps = step_all_agents(
            &mut self.state.ghosts,
            &self.state.player,
            &self.level,
            &self.config,
            &mut self.rng,
        );

        self.state.tick = self.state.tick.next();
        let mut report = TickReport::new(self.state.tick, player_moved, &steps);
        report.pellets_eaten = pellets_eaten;
        report.score = self.state.score;
        report.level_up = level_up;
        // Evaluated after the ghosts move, so a ghost stepping onto the player counts this tick.
        report.contacts = self.contacts();

        for (index, step) in steps.iter().enumerate() {
            if step.direction.is_zero() {
                tracing::warn!(
                    tick = %self.state.tick,
                    ghost = self.ghost_name(index).unwrap_or("?"),
                    "ghost has no open direction"
                );
            }
        }
        tracing::debug!(
            tick = %report.tick,
            moved = report.moved,
            stalled = report.stalled,
            contacts = report.contacts.len(),
            "tick complete"
        );

        report
    }

    /// Runs `ticks` ticks without player input.
    pub fn run(&mut self, ticks: u64) -> RunSummary {
        self.run_with(ticks, |_| None)
    }

    /// Runs `ticks` ticks, asking `input` for the player's heading each tick.
    pub fn run_with<F>(&mut self, ticks: u64, mut input: F) -> RunSummary
    where
        F: FnMut(&ChaseState) -> Option<Heading>,
    {
        let mut summary = RunSummary::default();
        for _ in 0..ticks {
            let heading = input(&self.state);
            let report = self.step_with(heading);
            summary.record(&report);
        }
        tracing::info!(
            ticks = summary.ticks,
            moves = summary.moves,
            stalls = summary.stalls,
            contact_ticks = summary.contact_ticks,
            levels_cleared = summary.levels_cleared,
            score = summary.score,
            "run finished"
        );
        summary
    }

    /// Ghosts currently touching the player, in roster order.
    pub fn contacts(&self) -> Vec<Contact> {
        let player = &self.state.player;
        self.state
            .ghosts
            .iter()
            .enumerate()
            .filter_map(|(index, ghost)| {
                let distance = ghost.distance_to(player.position);
                (distance < player.radius).then(|| Contact {
                    index,
                    name: self.names[index].clone(),
                    distance,
                })
            })
            .collect()
    }

    /// Moves one ghost to a random open point.
    pub fn respawn_ghost(&mut self, index: usize) -> Result<Option<Point>> {
        let count = self.state.ghosts.len();
        let ghost = self
            .state
            .ghosts
            .get_mut(index)
            .ok_or(RuntimeError::UnknownAgent { index, count })?;

        let position = respawn_agent(
            ghost,
            self.level.dimensions,
            &self.level,
            self.config.respawn_attempts,
            &mut self.rng,
        );
        match position {
            Some(point) => tracing::debug!(ghost = %self.names[index], position = %point, "respawned"),
            None => tracing::warn!(
                ghost = %self.names[index],
                attempts = self.config.respawn_attempts,
                "respawn found no open spot; keeping position"
            ),
        }
        Ok(position)
    }

    /// Scatters every ghost. Returns how many found an open spot.
    pub fn respawn_ghosts(&mut self) -> usize {
        (0..self.state.ghosts.len())
            .filter(|&index| matches!(self.respawn_ghost(index), Ok(Some(_))))
            .count()
    }

    /// Moves the player back to `position` and scatters the ghosts, as after
    /// losing a life.
    pub fn reset_round(&mut self, position: Point) -> usize {
        self.state.player.position = position;
        self.respawn_ghosts()
    }

    /// Advances the level counter, applies the speed bonus, puts the player
    /// back at the start, scatters the ghosts and lays out fresh pellets.
    pub fn advance_level(&mut self) -> LevelUp {
        self.level_number += 1;
        let speed_bonus = apply_level_up(&mut self.state.ghosts, self.level_number);
        let respawned = self.reset_round(self.player_start);
        self.state.pellets = generate_pellets(&self.level, &self.config);

        tracing::info!(
            level = self.level_number,
            speed_bonus,
            respawned,
            pellets = self.state.pellets.len(),
            "level up"
        );

        LevelUp {
            level: self.level_number,
            speed_bonus,
            respawned,
        }
    }
}

fn generate_pellets(level: &Level, config: &ChaseConfig) -> Pellets {
    Pellets::generate(level, config.pellet_spacing, config.pellet_buffer)
}

/// Builder for [`Simulation`].
pub struct SimulationBuilder {
    scenario: Option<Scenario>,
    seed: u64,
    level_number: u32,
    pellets: Option<Vec<Point>>,
}

impl SimulationBuilder {
    fn new() -> Self {
        Self {
            scenario: None,
            seed: 0,
            level_number: 1,
            pellets: None,
        }
    }

    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Starting level number (default 1). No speed bonus is applied for it.
    pub fn level_number(mut self, level_number: u32) -> Self {
        self.level_number = level_number;
        self
    }

    /// Replaces the generated pellets of the first level. Later levels are
    /// always generated from the level geometry.
    pub fn pellets(mut self, points: Vec<Point>) -> Self {
        self.pellets = Some(points);
        self
    }

    pub fn build(self) -> Result<Simulation> {
        let Scenario {
            level,
            roster,
            config,
        } = self.scenario.ok_or(RuntimeError::MissingScenario)?;

        level.validate()?;
        config.validate()?;
        roster.player.validate()?;
        for (_, ghost) in &roster.ghosts {
            ghost.validate()?;
        }

        let (names, ghosts): (Vec<_>, Vec<_>) = roster.ghosts.into_iter().unzip();
        let pellets = match self.pellets {
            Some(points) => Pellets::new(points),
            None => generate_pellets(&level, &config),
        };

        tracing::info!(
            seed = self.seed,
            ghosts = ghosts.len(),
            walls = level.walls.len(),
            pellets = pellets.len(),
            "simulation ready"
        );

        let player_start = roster.player.position;
        Ok(Simulation {
            state: ChaseState::new(roster.player, ghosts).with_pellets(pellets),
            names,
            level,
            config,
            rng: PcgRng::new(self.seed),
            seed: self.seed,
            level_number: self.level_number,
            player_start,
        })
    }
}
