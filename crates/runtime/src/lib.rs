//! Tick-driven runtime for tactical battles.
//!
//! The runtime owns a [`tactics_core::BattleState`] and drives it forward in
//! fixed time steps:
//! - routes action completions back to whoever requested them
//! - runs a [`providers::DecisionEngine`] for every AI-controlled side
//! - exposes the player request path ([`providers::PlayerController`])
//! - drains core events, logs them and republishes them on an [`EventBus`]
//!
//! The core stays free of I/O and logging; everything observable happens here.
pub mod error;
pub mod events;
pub mod oracle;
pub mod providers;
pub mod simulation;

pub use error::{Result, RuntimeError};
pub use events::{EventBus, Topic};
pub use oracle::ObstacleSight;
pub use providers::{ActionSelector, AiPhase, AiStep, DecisionEngine, PlayerController, ScoredChoice};
pub use simulation::{Simulation, SimulationBuilder};
