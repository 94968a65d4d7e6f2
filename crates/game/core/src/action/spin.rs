use super::{ActionError, ActionKind, ActionProgress, ActionStatus, AiActionCandidate, TacticalAction};
use crate::config::SpinConfig;
use crate::engine::BattleEngine;
use crate::env::BattleEnv;
use crate::grid::GridCoordinate;
use crate::state::{BattleState, CombatUnit, UnitId};

const FULL_TURN: f32 = 360.0;

/// Turns the unit through one full revolution without leaving its cell.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinAction {
    rules: SpinConfig,
}

impl SpinAction {
    pub fn new(rules: SpinConfig) -> Self {
        Self { rules }
    }
}

impl TacticalAction for SpinAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Spin
    }

    fn valid_targets(
        &self,
        unit: &CombatUnit,
        _state: &BattleState,
        _env: &BattleEnv<'_>,
    ) -> Vec<GridCoordinate> {
        vec![unit.coordinate()]
    }

    fn begin(
        &self,
        _unit: &CombatUnit,
        _target: GridCoordinate,
        _state: &BattleState,
    ) -> Result<ActionProgress, ActionError> {
        Ok(ActionProgress::Spin(SpinProgress {
            rotated: 0.0,
            degrees_per_second: self.rules.degrees_per_second,
        }))
    }

    fn score_candidate(
        &self,
        _unit: &CombatUnit,
        target: GridCoordinate,
        _state: &BattleState,
        _env: &BattleEnv<'_>,
    ) -> AiActionCandidate {
        AiActionCandidate { target, score: 0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpinProgress {
    rotated: f32,
    degrees_per_second: f32,
}

impl SpinProgress {
    pub fn rotated(&self) -> f32 {
        self.rotated
    }

    pub(crate) fn advance(
        &mut self,
        engine: &mut BattleEngine<'_>,
        actor: UnitId,
        dt: f32,
    ) -> ActionStatus {
        let remaining = FULL_TURN - self.rotated;
        let step = (self.degrees_per_second * dt).min(remaining);
        self.rotated = if step >= remaining {
            FULL_TURN
        } else {
            self.rotated + step
        };
        if let Some(unit) = engine.unit_mut(actor) {
            let facing = unit.facing();
            unit.set_facing(facing + step);
        }

        if self.rotated >= FULL_TURN {
            ActionStatus::Complete
        } else {
            ActionStatus::Running
        }
    }
}
