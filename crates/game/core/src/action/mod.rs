//! Action framework: target legality, cost, execution and AI scoring.
//!
//! Every behavior implements [`TacticalAction`]. The closed [`UnitAction`]
//! enum is what units carry and what the engine dispatches on. Starting an
//! action yields an [`ActionProgress`], a small state machine the engine
//! advances once per tick until it reports [`ActionStatus::Complete`].
//!
//! # Module Structure
//!
//! - `kind`: [`ActionKind`] names
//! - `error`: request rejections
//! - `movement`, `spin`, `shoot`, `grenade`: one behavior each
mod error;
mod grenade;
mod kind;
mod movement;
mod shoot;
mod spin;

pub use error::ActionError;
pub use grenade::{GrenadeAction, GrenadeProgress};
pub use kind::ActionKind;
pub use movement::{MoveAction, MoveProgress};
pub use shoot::{ShootAction, ShootPhase, ShootProgress};
pub use spin::{SpinAction, SpinProgress};

use strum::IntoEnumIterator;

use crate::config::GameConfig;
use crate::engine::BattleEngine;
use crate::env::BattleEnv;
use crate::grid::GridCoordinate;
use crate::state::{ActionSet, BattleState, CombatUnit, UnitId};

/// Utility of one target for one action, as ranked by the decision engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiActionCandidate {
    pub target: GridCoordinate,
    pub score: i32,
}

/// Contract shared by every behavior.
///
/// Queries are pure functions of the state and environment. `begin` only
/// prepares the per-invocation state machine; the engine owns budget
/// deduction and installs the returned progress.
pub trait TacticalAction {
    fn kind(&self) -> ActionKind;

    /// Complete set of legal targets for `unit` right now.
    fn valid_targets(
        &self,
        unit: &CombatUnit,
        state: &BattleState,
        env: &BattleEnv<'_>,
    ) -> Vec<GridCoordinate>;

    fn is_valid_target(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
        env: &BattleEnv<'_>,
    ) -> bool {
        self.valid_targets(unit, state, env).contains(&target)
    }

    /// Action points consumed when taken.
    fn point_cost(&self, _unit: &CombatUnit) -> u32 {
        1
    }

    /// Fresh state machine for one invocation against `target`.
    fn begin(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
    ) -> Result<ActionProgress, ActionError>;

    fn score_candidate(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
        env: &BattleEnv<'_>,
    ) -> AiActionCandidate;
}

/// The actions a unit can carry.
#[derive(Clone, Debug, PartialEq)]
pub enum UnitAction {
    Move(MoveAction),
    Spin(SpinAction),
    Shoot(ShootAction),
    Grenade(GrenadeAction),
}

macro_rules! dispatch {
    ($self:expr, $action:ident => $body:expr) => {
        match $self {
            UnitAction::Move($action) => $body,
            UnitAction::Spin($action) => $body,
            UnitAction::Shoot($action) => $body,
            UnitAction::Grenade($action) => $body,
        }
    };
}

impl UnitAction {
    /// Action of `kind` tuned by `config`.
    pub fn standard(kind: ActionKind, config: &GameConfig) -> Self {
        match kind {
            ActionKind::Move => UnitAction::Move(MoveAction::new(config.movement)),
            ActionKind::Spin => UnitAction::Spin(SpinAction::new(config.spin)),
            ActionKind::Shoot => {
                UnitAction::Shoot(ShootAction::new(config.shoot, config.units.shoulder_height))
            }
            ActionKind::Grenade => UnitAction::Grenade(GrenadeAction::new(config.grenade)),
        }
    }

    /// One action of every kind, in [`ActionKind`] order.
    pub fn standard_set(config: &GameConfig) -> ActionSet {
        ActionKind::iter()
            .map(|kind| Self::standard(kind, config))
            .collect()
    }

    /// Actions for the listed kinds in the given order. Repeated kinds are
    /// kept once; an empty list yields the standard set.
    pub fn set_from_kinds(kinds: &[ActionKind], config: &GameConfig) -> ActionSet {
        if kinds.is_empty() {
            return Self::standard_set(config);
        }

        let mut set = ActionSet::new();
        for &kind in kinds {
            if set.iter().any(|action| action.kind() == kind) {
                continue;
            }
            set.push(Self::standard(kind, config));
        }
        set
    }
}

impl TacticalAction for UnitAction {
    fn kind(&self) -> ActionKind {
        dispatch!(self, action => action.kind())
    }

    fn valid_targets(
        &self,
        unit: &CombatUnit,
        state: &BattleState,
        env: &BattleEnv<'_>,
    ) -> Vec<GridCoordinate> {
        dispatch!(self, action => action.valid_targets(unit, state, env))
    }

    fn is_valid_target(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
        env: &BattleEnv<'_>,
    ) -> bool {
        dispatch!(self, action => action.is_valid_target(unit, target, state, env))
    }

    fn point_cost(&self, unit: &CombatUnit) -> u32 {
        dispatch!(self, action => action.point_cost(unit))
    }

    fn begin(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
    ) -> Result<ActionProgress, ActionError> {
        dispatch!(self, action => action.begin(unit, target, state))
    }

    fn score_candidate(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
        env: &BattleEnv<'_>,
    ) -> AiActionCandidate {
        dispatch!(self, action => action.score_candidate(unit, target, state, env))
    }
}

/// Whether an in-flight action needs more ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionStatus {
    Running,
    Complete,
}

/// Per-invocation state of an action in flight.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionProgress {
    Move(MoveProgress),
    Spin(SpinProgress),
    Shoot(ShootProgress),
    Grenade(GrenadeProgress),
}

impl ActionProgress {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionProgress::Move(_) => ActionKind::Move,
            ActionProgress::Spin(_) => ActionKind::Spin,
            ActionProgress::Shoot(_) => ActionKind::Shoot,
            ActionProgress::Grenade(_) => ActionKind::Grenade,
        }
    }

    /// Runs one tick of the state machine for `actor`.
    pub(crate) fn advance(
        &mut self,
        engine: &mut BattleEngine<'_>,
        actor: UnitId,
        dt: f32,
    ) -> ActionStatus {
        match self {
            ActionProgress::Move(progress) => progress.advance(engine, actor, dt),
            ActionProgress::Spin(progress) => progress.advance(engine, actor, dt),
            ActionProgress::Shoot(progress) => progress.advance(engine, actor, dt),
            ActionProgress::Grenade(progress) => progress.advance(engine, actor, dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_lists_dedupe_and_keep_order() {
        let config = GameConfig::default();
        let set = UnitAction::set_from_kinds(
            &[ActionKind::Shoot, ActionKind::Move, ActionKind::Shoot],
            &config,
        );

        let kinds: Vec<_> = set.iter().map(TacticalAction::kind).collect();
        assert_eq!(kinds, vec![ActionKind::Shoot, ActionKind::Move]);
    }

    #[test]
    fn empty_kind_list_means_standard_set() {
        let config = GameConfig::default();
        let set = UnitAction::set_from_kinds(&[], &config);

        assert_eq!(set, UnitAction::standard_set(&config));
        assert_eq!(set.len(), 4);
        assert_eq!(set[0].kind(), ActionKind::Move);
    }
}
