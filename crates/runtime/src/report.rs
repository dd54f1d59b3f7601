//! Per-tick and per-run summaries.
use chase_core::{AgentStep, Tick};
use serde::Serialize;

use crate::simulation::LevelUp;

/// A ghost whose centre lies within the player's radius.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contact {
    pub index: usize,
    pub name: String,
    pub distance: f64,
}

/// Outcome of one [`crate::Simulation::step`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TickReport {
    /// Tick that was just completed.
    pub tick: Tick,
    pub player_moved: Option<bool>,
    pub moved: usize,
    pub stalled: usize,
    pub pellets_eaten: usize,
    /// Running score after this tick.
    pub score: u64,
    /// Set when this tick ate the last pellet.
    pub level_up: Option<LevelUp>,
    pub contacts: Vec<Contact>,
}

impl TickReport {
    pub(crate) fn new(tick: Tick, player_moved: Option<bool>, steps: &[AgentStep]) -> Self {
        let moved = steps.iter().filter(|step| step.moved).count();
        Self {
            tick,
            player_moved,
            moved,
            stalled: steps.len() - moved,
            pellets_eaten: 0,
            score: 0,
            level_up: None,
            contacts: Vec::new(),
        }
    }

    pub fn has_contact(&self) -> bool {
        !self.contacts.is_empty()
    }
}

/// Totals over a [`crate::Simulation::run`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub moves: u64,
    pub stalls: u64,
    /// Ticks with at least one contact.
    pub contact_ticks: u64,
    pub first_contact: Option<Tick>,
    pub pellets_eaten: u64,
    pub levels_cleared: u32,
    /// Score at the end of the run, including earlier runs of the session.
    pub score: u64,
}

impl RunSummary {
    pub fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.moves += report.moved as u64;
        self.stalls += report.stalled as u64;
        self.pellets_eaten += report.pellets_eaten as u64;
        self.score = report.score;
        if report.level_up.is_some() {
            self.levels_cleared += 1;
        }
        if report.has_contact() {
            self.contact_ticks += 1;
            self.first_contact.get_or_insert(report.tick);
        }
    }
}
