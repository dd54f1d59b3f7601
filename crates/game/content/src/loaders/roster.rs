//! Roster loader: who is on the board when a level starts.
//!
//! A roster names the player and every ghost. Ghost order in the file is the
//! processing order inside a tick.

use std::path::Path;

use chase_core::{Agent, Personality, Player, Point};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One ghost entry as written in the roster file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhostSpec {
    pub name: String,
    pub personality: Personality,
    pub position: (f64, f64),
    pub radius: f64,
    pub speed: f64,
    pub scatter: (f64, f64),
}

impl GhostSpec {
    fn into_agent(self) -> LoadResult<(String, Agent)> {
        let agent = Agent::new(
            Point::new(self.position.0, self.position.1),
            self.radius,
            self.speed,
            self.personality,
            Point::new(self.scatter.0, self.scatter.1),
        )
        .map_err(|e| anyhow::anyhow!("Invalid ghost '{}': {}", self.name, e))?;
        Ok((self.name, agent))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerRon {
    position: (f64, f64),
    radius: f64,
    #[serde(default)]
    angle: f64,
    #[serde(default = "default_player_speed")]
    speed: f64,
}

fn default_player_speed() -> f64 {
    Player::DEFAULT_SPEED
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RosterRon {
    player: PlayerRon,
    ghosts: Vec<GhostSpec>,
}

/// Validated roster: the player plus named ghosts in processing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub player: Player,
    pub ghosts: Vec<(String, Agent)>,
}

impl Roster {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ghosts.iter().map(|(name, _)| name.as_str())
    }

    pub fn agents(&self) -> Vec<Agent> {
        self.ghosts.iter().map(|(_, agent)| agent.clone()).collect()
    }
}

/// Loader for rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load and validate a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid roster {}: {}", path.display(), e))
    }

    /// Parse and validate roster RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let data: RosterRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let player = Player {
            position: Point::new(data.player.position.0, data.player.position.1),
            radius: data.player.radius,
            angle: data.player.angle,
            speed: data.player.speed,
        };
        player
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid player: {}", e))?;

        let ghosts = data
            .ghosts
            .into_iter()
            .map(GhostSpec::into_agent)
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(Roster { player, ghosts })
    }
}
