//! Content factory for building a chase scenario from a data directory.

use std::path::{Path, PathBuf};

use chase_core::{ChaseConfig, Level};

use crate::loaders::{ConfigLoader, LevelLoader, LoadResult, Roster, RosterLoader};

/// Everything needed to start a session: geometry, participants, tunables.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub level: Level,
    pub roster: Roster,
    pub config: ChaseConfig,
}

/// Content factory that loads a scenario from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── level.ron
/// ├── roster.ron
/// └── config.toml   (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const LEVEL_FILE: &'static str = "level.ron";
    pub const ROSTER_FILE: &'static str = "roster.ron";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The classic 640×480 maze bundled with this crate.
    pub fn classic() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data/classic"))
    }

    /// Load level geometry from `level.ron`.
    pub fn load_level(&self) -> LoadResult<Level> {
        LevelLoader::load(&self.data_dir.join(Self::LEVEL_FILE))
    }

    /// Load the player and ghosts from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join(Self::ROSTER_FILE))
    }

    /// Load tunables from `config.toml`, or defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<ChaseConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            Ok(ChaseConfig::default())
        }
    }

    /// Load all three files.
    pub fn load_scenario(&self) -> LoadResult<Scenario> {
        Ok(Scenario {
            level: self.load_level()?,
            roster: self.load_roster()?,
            config: self.load_config()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
