//! Ghost decision-making.
//!
//! Each tick a ghost runs three layers, all pure functions over read-only
//! context:
//!
//! 1. **Targeting** ([`TargetSelector`]): where does this personality want to go?
//! 2. **Steering** ([`DirectionScorer`]): which compass direction gets there
//!    without running into a wall within the look-ahead window?
//! 3. **Separation** ([`CrowdSeparator`]): nudge the resulting step away from
//!    other ghosts.
//!
//! Committing the result is the stepper's job ([`crate::engine`]).

pub mod compass;
pub mod context;
pub mod separation;
pub mod steering;
pub mod targeting;

pub use compass::{DIRECTIONS, is_compass_or_zero};
pub use context::{AiContext, PlayerView};
pub use separation::CrowdSeparator;
pub use steering::{DirectionEvaluation, DirectionScorer};
pub use targeting::{Target, TargetSelector, TargetSource, select_target};
