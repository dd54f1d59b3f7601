//! Session configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Knobs for a headless session that are not engine tunables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// RNG seed; a random one is drawn when unset.
    pub seed: Option<u64>,
    pub ticks: u64,
    /// Scenario directory; the bundled classic maze when unset.
    pub level_dir: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ticks: Self::DEFAULT_TICKS,
            level_dir: None,
        }
    }
}

impl SimConfig {
    /// One minute at 60 ticks per second.
    pub const DEFAULT_TICKS: u64 = 3600;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CHASE_SEED` - RNG seed (default: random)
    /// - `CHASE_TICKS` - Ticks to simulate (default: 3600)
    /// - `CHASE_LEVEL_DIR` - Scenario directory (default: classic maze)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("CHASE_SEED");

        if let Some(ticks) = read_env::<u64>("CHASE_TICKS") {
            config.ticks = ticks;
        }

        config.level_dir = env::var("CHASE_LEVEL_DIR").ok().map(PathBuf::from);

        config
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
