//! Error types surfaced by the simulation API.
use chase_core::{ChaseError, ConfigError, ErrorSeverity};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no ghost at index {index} (roster has {count})")]
    UnknownAgent { index: usize, count: usize },

    #[error("simulation requires a scenario before building")]
    MissingScenario,
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(err) => err.severity(),
            Self::UnknownAgent { .. } => ErrorSeverity::Validation,
            Self::MissingScenario => ErrorSeverity::Internal,
        }
    }
}
