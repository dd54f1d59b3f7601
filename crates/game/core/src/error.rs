//! Error infrastructure for chase-core.
//!
//! The engine itself never fails at tick time: every "nothing valid found"
//! case resolves to an in-band fallback (scatter point, zero vector, agent
//! stays put). The only errors are configuration errors, raised when a level,
//! an agent or the tunables are constructed with values the engine cannot
//! work with.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input; reject and ask for different data.
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all chase errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ChaseError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for the variant, useful in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Rejected level, agent or tunable values.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("agent speed must be positive and finite, got {speed}")]
    NonPositiveSpeed { speed: f64 },

    #[error("agent radius must be non-negative and finite, got {radius}")]
    InvalidRadius { radius: f64 },

    #[error("{field} must be a finite coordinate")]
    NonFiniteCoordinate { field: &'static str },

    #[error("level dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("wall #{index} has non-finite or non-positive extent")]
    DegenerateWall { index: usize },

    #[error("tunable `{name}` is out of range: {value}")]
    InvalidTunable { name: &'static str, value: f64 },
}

impl ChaseError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveSpeed { .. } => "CONFIG_NON_POSITIVE_SPEED",
            Self::InvalidRadius { .. } => "CONFIG_INVALID_RADIUS",
            Self::NonFiniteCoordinate { .. } => "CONFIG_NON_FINITE_COORDINATE",
            Self::InvalidDimensions { .. } => "CONFIG_INVALID_DIMENSIONS",
            Self::DegenerateWall { .. } => "CONFIG_DEGENERATE_WALL",
            Self::InvalidTunable { .. } => "CONFIG_INVALID_TUNABLE",
        }
    }
}
