//! Authoritative reducer for [`BattleState`].
//!
//! [`BattleEngine`] borrows the state mutably together with the injected
//! environment. Every mutation the rules allow flows through it: spawning
//! and damaging units, the action-point ledger, starting actions, advancing
//! the action in flight and advancing turns.
mod ledger;
mod lifecycle;
mod request;
mod tick;
mod turns;

pub use tick::ActionCompletion;

use crate::action::{ActionKind, ActionProgress};
use crate::env::BattleEnv;
use crate::event::BattleEvent;
use crate::grid::GridCoordinate;
use crate::state::{BattleState, CombatUnit, UnitId};

/// Who asked for an action; echoed back on completion so the driver can
/// route it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Controller {
    Player,
    Ai,
}

/// The single action allowed to run at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct InFlightAction {
    pub unit: UnitId,
    pub target: GridCoordinate,
    pub controller: Controller,
    pub progress: ActionProgress,
}

impl InFlightAction {
    pub fn kind(&self) -> ActionKind {
        self.progress.kind()
    }
}

pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
    env: BattleEnv<'a>,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState, env: BattleEnv<'a>) -> Self {
        Self { state, env }
    }

    pub fn state(&self) -> &BattleState {
        self.state
    }

    pub fn env(&self) -> &BattleEnv<'a> {
        &self.env
    }

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Option<&mut CombatUnit> {
        self.state.units.get_mut(id)
    }

    pub(crate) fn emit(&mut self, event: BattleEvent) {
        self.state.events.push(event);
    }
}
