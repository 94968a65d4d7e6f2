//! Deterministic rules for turn-based grid tactics.
//!
//! `tactics-core` defines the battlefield (grid, pathfinding, occupancy), the
//! combatants and their action-point budgets, the action framework and the
//! turn controller. It performs no I/O and keeps no clocks: the runtime feeds
//! it elapsed time through [`engine::BattleEngine::tick`] and drains the
//! [`event::EventQueue`] it fills. All state mutation flows through
//! [`engine::BattleEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod grid;
pub mod pathfinding;
pub mod state;

pub use action::{
    ActionError, ActionKind, ActionProgress, ActionStatus, AiActionCandidate, GrenadeAction,
    MoveAction, ShootAction, ShootPhase, SpinAction, TacticalAction, UnitAction,
};
pub use config::GameConfig;
pub use engine::{ActionCompletion, BattleEngine, Controller, InFlightAction};
pub use env::{BattleEnv, BattleMap, OpenSight, SightOracle, TerrainKind, UnitSpawn};
pub use error::ErrorSeverity;
pub use event::{BattleEvent, EventQueue};
pub use grid::{GridCoordinate, GridIndex, GridLayout};
pub use pathfinding::{Path, Pathfinder};
pub use state::{
    ActionSet, BattleState, CombatUnit, Health, InitializationError, OccupancyGrid, Team,
    TurnState, UnitId, UnitRoster,
};
