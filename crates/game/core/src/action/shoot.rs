use glam::Vec3;

use super::{ActionError, ActionKind, ActionProgress, ActionStatus, AiActionCandidate, TacticalAction};
use crate::config::ShootConfig;
use crate::engine::BattleEngine;
use crate::env::BattleEnv;
use crate::event::BattleEvent;
use crate::grid::GridCoordinate;
use crate::state::{BattleState, CombatUnit, UnitId};

/// Ranged attack against the canonical occupant of a visible enemy cell.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootAction {
    rules: ShootConfig,
    shoulder_height: f32,
}

impl ShootAction {
    pub fn new(rules: ShootConfig, shoulder_height: f32) -> Self {
        Self {
            rules,
            shoulder_height,
        }
    }

    pub fn rules(&self) -> &ShootConfig {
        &self.rules
    }

    /// Enemy cells `unit` could hit if it stood on `origin`.
    ///
    /// Sight lines run at shoulder height from the centre of `origin` to the
    /// enemy's current world position.
    pub fn targets_from(
        &self,
        unit: &CombatUnit,
        origin: GridCoordinate,
        state: &BattleState,
        env: &BattleEnv<'_>,
    ) -> Vec<GridCoordinate> {
        let eye = state.layout().to_world(origin) + Vec3::Y * self.shoulder_height;

        GridCoordinate::diamond_offsets(self.rules.max_range)
            .map(|offset| origin + offset)
            .filter(|&cell| state.layout().in_bounds(cell))
            .filter(|&cell| {
                let Some(enemy) = state
                    .occupancy()
                    .first_unit_at(cell)
                    .and_then(|occupant| state.unit(occupant))
                else {
                    return false;
                };
                if enemy.team() == unit.team() {
                    return false;
                }

                let aim = enemy.position() + Vec3::Y * self.shoulder_height;
                !env.sight().is_obstructed(eye, aim)
            })
            .collect()
    }
}

impl TacticalAction for ShootAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Shoot
    }

    fn valid_targets(
        &self,
        unit: &CombatUnit,
        state: &BattleState,
        env: &BattleEnv<'_>,
    ) -> Vec<GridCoordinate> {
        self.targets_from(unit, unit.coordinate(), state, env)
    }

    fn begin(
        &self,
        unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
    ) -> Result<ActionProgress, ActionError> {
        let invalid = ActionError::InvalidTarget {
            kind: ActionKind::Shoot,
            target,
        };
        let victim = state
            .occupancy()
            .first_unit_at(target)
            .and_then(|occupant| state.unit(occupant))
            .filter(|victim| victim.team() != unit.team())
            .ok_or(invalid)?;

        Ok(ActionProgress::Shoot(ShootProgress {
            target: victim.id(),
            aim_point: victim.position(),
            phase: ShootPhase::Aiming,
            timer: self.rules.aiming_secs,
            rules: self.rules,
        }))
    }

    /// Always at least 100, plus up to 100 more the more hurt the target is.
    fn score_candidate(
        &self,
        _unit: &CombatUnit,
        target: GridCoordinate,
        state: &BattleState,
        _env: &BattleEnv<'_>,
    ) -> AiActionCandidate {
        let normalized = state
            .occupancy()
            .first_unit_at(target)
            .and_then(|occupant| state.unit(occupant))
            .map_or(1.0, |victim| victim.health().normalized());

        AiActionCandidate {
            target,
            score: 100 + ((1.0 - normalized) * 100.0).round() as i32,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ShootPhase {
    /// Turning towards the target.
    Aiming,
    /// Entered once; the shot lands on entry.
    Shooting,
    Cooloff,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShootProgress {
    target: UnitId,
    aim_point: Vec3,
    phase: ShootPhase,
    timer: f32,
    rules: ShootConfig,
}

impl ShootProgress {
    pub fn target(&self) -> UnitId {
        self.target
    }

    pub fn phase(&self) -> ShootPhase {
        self.phase
    }

    pub(crate) fn advance(
        &mut self,
        engine: &mut BattleEngine<'_>,
        actor: UnitId,
        dt: f32,
    ) -> ActionStatus {
        self.timer -= dt;

        if self.phase == ShootPhase::Aiming {
            if let Some(victim) = engine.state().unit(self.target) {
                self.aim_point = victim.position();
            }
            let aim_point = self.aim_point;
            if let Some(unit) = engine.unit_mut(actor) {
                unit.face_towards(aim_point);
            }
        }

        if self.timer > 0.0 {
            return ActionStatus::Running;
        }

        match self.phase {
            ShootPhase::Aiming => {
                self.phase = ShootPhase::Shooting;
                self.timer = self.rules.shooting_secs;
                self.fire(engine, actor);
                ActionStatus::Running
            }
            ShootPhase::Shooting => {
                self.phase = ShootPhase::Cooloff;
                self.timer = self.rules.cooloff_secs;
                ActionStatus::Running
            }
            ShootPhase::Cooloff => ActionStatus::Complete,
        }
    }

    fn fire(&self, engine: &mut BattleEngine<'_>, actor: UnitId) {
        if !engine.state().units().contains(self.target) {
            return;
        }
        engine.emit(BattleEvent::ShotFired {
            attacker: actor,
            target: self.target,
        });
        let _ = engine.damage(self.target, self.rules.damage);
    }
}
