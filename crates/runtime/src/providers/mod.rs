//! Sources of action requests: the decision engine for AI sides and the
//! player controller for the human side.

pub mod ai;
pub mod player;

pub use ai::{ActionSelector, AiPhase, AiStep, DecisionEngine, ScoredChoice};
pub use player::PlayerController;
