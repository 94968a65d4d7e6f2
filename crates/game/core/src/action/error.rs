//! Rejections for action requests.
//!
//! A rejected request mutates nothing; callers may surface it or drop it.

use crate::error::ErrorSeverity;
use crate::grid::GridCoordinate;
use crate::state::{Team, UnitId};

use super::ActionKind;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Another action has not completed yet.
    #[error("another action is still in flight")]
    Busy,

    #[error("unit {0} not found")]
    UnitNotFound(UnitId),

    #[error("unit {unit} fights for the {team} side but the {active} side is acting")]
    NotUnitsTurn { unit: UnitId, team: Team, active: Team },

    /// The unit's action set has no action of this kind.
    #[error("unit {unit} cannot {kind}")]
    ActionUnavailable { unit: UnitId, kind: ActionKind },

    #[error("{target} is not a valid {kind} target")]
    InvalidTarget { kind: ActionKind, target: GridCoordinate },

    #[error("action needs {required} action points but only {available} remain")]
    InsufficientPoints { required: u32, available: u32 },
}

impl ActionError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Busy | Self::InsufficientPoints { .. } => ErrorSeverity::Recoverable,
            Self::UnitNotFound(_)
            | Self::NotUnitsTurn { .. }
            | Self::ActionUnavailable { .. }
            | Self::InvalidTarget { .. } => ErrorSeverity::Validation,
        }
    }
}
