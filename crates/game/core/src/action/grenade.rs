use glam::Vec3;

use super::{ActionError, ActionKind, ActionProgress, ActionStatus, AiActionCandidate, TacticalAction};
use crate::config::GrenadeConfig;
use crate::engine::BattleEngine;
use crate::env::BattleEnv;
use crate::event::BattleEvent;
use crate::grid::GridCoordinate;
use crate::state::{BattleState, CombatUnit, UnitId};

/// Thrown explosive that damages everything near the impact point.
///
/// Any in-range cell is a legal target, occupied or not, seen or not.
#[derive(Clone, Debug, PartialEq)]
pub struct GrenadeAction {
    rules: GrenadeConfig,
}

impl GrenadeAction {
    pub fn new(rules: GrenadeConfig) -> Self {
        Self { rules }
    }
}

impl TacticalAction for GrenadeAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Grenade
    }

    fn valid_targets(
        &self,
        unit: &CombatUnit,
        state: &BattleState,
        _env: &BattleEnv<'_>,
    ) -> Vec<GridCoordinate> {
        GridCoordinate::diamond_offsets(self.rules.max_throw_distance)
            .map(|offset| unit.coordinate() + offset)
            .filter(|&cell| state.layout().in_bounds(cell))
            .collect()
    }

    fn is_valid_target(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
        _env: &BattleEnv<'_>,
    ) -> bool {
        state.layout().in_bounds(target)
            && unit.coordinate().manhattan_distance(target)
                <= self.rules.max_throw_distance.max(0) as u32
    }

    fn begin(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
    ) -> Result<ActionProgress, ActionError> {
        Ok(ActionProgress::Grenade(GrenadeProgress {
            projectile: unit.position(),
            impact: state.layout().to_world(target),
            impact_cell: target,
            rules: self.rules,
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

/// Projectile in flight towards its impact point.
#[derive(Clone, Debug, PartialEq)]
pub struct GrenadeProgress {
    projectile: Vec3,
    impact: Vec3,
    impact_cell: GridCoordinate,
    rules: GrenadeConfig,
}

impl GrenadeProgress {
    pub fn projectile(&self) -> Vec3 {
        self.projectile
    }

    pub(crate) fn advance(
        &mut self,
        engine: &mut BattleEngine<'_>,
        _actor: UnitId,
        dt: f32,
    ) -> ActionStatus {
        let offset = self.impact - self.projectile;
        let distance = offset.length();
        if distance > 0.0 {
            let step = (self.rules.speed * dt).min(distance);
            self.projectile += offset / distance * step;
        }

        if self.projectile.distance(self.impact) > self.rules.arrival_distance {
            return ActionStatus::Running;
        }

        self.explode(engine);
        ActionStatus::Complete
    }

    fn explode(&self, engine: &mut BattleEngine<'_>) {
        engine.emit(BattleEvent::GrenadeExploded {
            at: self.impact_cell,
        });

        let victims: Vec<UnitId> = engine
            .state()
            .units()
            .iter()
            .filter(|unit| unit.position().distance(self.impact) <= self.rules.damage_radius)
            .map(CombatUnit::id)
            .collect();
        for victim in victims {
            let _ = engine.damage(victim, self.rules.damage);
        }
    }
}
