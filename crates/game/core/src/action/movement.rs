use glam::Vec3;

use super::{
    ActionError, ActionKind, ActionProgress, ActionStatus, AiActionCandidate, TacticalAction,
    UnitAction,
};
use crate::config::MovementConfig;
use crate::engine::BattleEngine;
use crate::env::BattleEnv;
use crate::grid::GridCoordinate;
use crate::pathfinding::STRAIGHT_COST;
use crate::state::{BattleState, CombatUnit, UnitId};

/// Walks to a free, walkable cell whose path fits the movement allowance.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveAction {
    rules: MovementConfig,
}

impl MoveAction {
    pub fn new(rules: MovementConfig) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &MovementConfig {
        &self.rules
    }

    /// Largest path cost a single move may spend.
    pub fn max_path_cost(&self) -> u32 {
        self.rules.max_move_distance.max(0) as u32 * STRAIGHT_COST
    }

    fn accepts(&self, unit: &CombatUnit, target: GridCoordinate, state: &BattleState) -> bool {
        let origin = unit.coordinate();
        if target == origin || !state.layout().in_bounds(target) {
            return false;
        }
        if state.occupancy().has_any_unit(target) || !state.pathfinder().is_walkable(target) {
            return false;
        }

        state
            .pathfinder()
            .path_length(origin, target)
            .is_some_and(|cost| cost <= self.max_path_cost())
    }
}

impl TacticalAction for MoveAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Move
    }

    fn valid_targets(
        &self,
        unit: &CombatUnit,
        state: &BattleState,
        _env: &BattleEnv<'_>,
    ) -> Vec<GridCoordinate> {
        GridCoordinate::square_offsets(self.rules.max_move_distance)
            .map(|offset| unit.coordinate() + offset)
            .filter(|&target| self.accepts(unit, target, state))
            .collect()
    }

    fn is_valid_target(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
        _env: &BattleEnv<'_>,
    ) -> bool {
        let origin = unit.coordinate();
        let radius = self.rules.max_move_distance.max(0) as u32;
        state.layout().in_bounds(target)
            && origin.x.abs_diff(target.x) <= radius
            && origin.z.abs_diff(target.z) <= radius
            && self.accepts(unit, target, state)
    }

    fn begin(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
    ) -> Result<ActionProgress, ActionError> {
        let path = state
            .pathfinder()
            .find_path(unit.coordinate(), target)
            .ok_or(ActionError::InvalidTarget {
                kind: ActionKind::Move,
                target,
            })?;

        let layout = state.layout();
        let waypoints = path
            .waypoints
            .iter()
            .skip(1)
            .map(|&cell| layout.to_world(cell))
            .collect();

        Ok(ActionProgress::Move(MoveProgress {
            waypoints,
            next: 0,
            speed: self.rules.speed,
            stopping_distance: self.rules.stopping_distance,
        }))
    }

    /// Ten points per enemy the unit could shoot from `target`.
    fn score_candidate(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
        env: &BattleEnv<'_>,
    ) -> AiActionCandidate {
        let exposed = match unit.action(ActionKind::Shoot) {
            Some(UnitAction::Shoot(shoot)) => shoot.targets_from(unit, target, state, env).len(),
            _ => 0,
        };

        AiActionCandidate {
            target,
            score: exposed as i32 * 10,
        }
    }
}

/// World-space waypoints still ahead of a walking unit.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveProgress {
    waypoints: Vec<Vec3>,
    next: usize,
    speed: f32,
    stopping_distance: f32,
}

impl MoveProgress {
    pub fn remaining_waypoints(&self) -> &[Vec3] {
        &self.waypoints[self.next.min(self.waypoints.len())..]
    }

    pub(crate) fn advance(
        &mut self,
        engine: &mut BattleEngine<'_>,
        actor: UnitId,
        dt: f32,
    ) -> ActionStatus {
        let Some(unit) = engine.unit_mut(actor) else {
            return ActionStatus::Complete;
        };
        let Some(&waypoint) = self.waypoints.get(self.next) else {
            return ActionStatus::Complete;
        };

        let position = unit.position();
        let offset = waypoint - position;
        let distance = offset.length();
        if distance > self.stopping_distance {
            let step = (self.speed * dt).min(distance);
            unit.face_towards(waypoint);
            unit.set_position(position + offset / distance * step);
        }

        if unit.position().distance(waypoint) <= self.stopping_distance {
            self.next += 1;
            if self.next >= self.waypoints.len() {
                unit.set_position(waypoint);
                return ActionStatus::Complete;
            }
        }

        ActionStatus::Running
    }
}
