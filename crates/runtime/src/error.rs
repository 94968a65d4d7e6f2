//! Errors surfaced by the runtime API.
//!
//! Wraps core rejections and initialization failures so clients can bubble
//! them up with consistent context.
use thiserror::Error;

use tactics_core::{ActionError, ErrorSeverity, InitializationError, Team, UnitId};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("simulation requires a battle map before building")]
    MissingMap,

    #[error("failed to initialize battle state from map")]
    InitialState(#[source] InitializationError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("an action is still in flight")]
    Busy,

    #[error("it is not the {team} side's turn")]
    NotPlayersTurn { team: Team },

    #[error("no unit selected")]
    NoUnitSelected,

    #[error("no action selected")]
    NoActionSelected,

    #[error("unit {unit} cannot be selected by the {team} side")]
    NotSelectable { unit: UnitId, team: Team },
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Action(err) => err.severity(),
            Self::InitialState(err) => err.severity(),
            Self::Busy | Self::NotPlayersTurn { .. } => ErrorSeverity::Recoverable,
            Self::MissingMap
            | Self::NoUnitSelected
            | Self::NoActionSelected
            | Self::NotSelectable { .. } => ErrorSeverity::Validation,
        }
    }
}
