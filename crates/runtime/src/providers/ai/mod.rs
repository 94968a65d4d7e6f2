//! Greedy utility AI.
//!
//! [`ActionSelector`] ranks every affordable action/target pair of one unit;
//! [`DecisionEngine`] walks a side's units, spends their budgets on the best
//! pair one action at a time and ends the turn when nobody can act.

mod provider;
mod selector;

pub use provider::{AiPhase, AiStep, DecisionEngine};
pub use selector::{ActionSelector, ScoredChoice};
