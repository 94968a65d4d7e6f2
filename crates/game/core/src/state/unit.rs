use std::fmt;

use arrayvec::ArrayVec;
use glam::Vec3;

use crate::action::{ActionKind, TacticalAction, UnitAction};
use crate::config::GameConfig;
use crate::grid::GridCoordinate;

/// Action instances a unit carries, one per behavior, in evaluation order.
pub type ActionSet = ArrayVec<UnitAction, { GameConfig::MAX_ACTIONS }>;

/// Stable identifier assigned at spawn; ids grow in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Team {
    /// Player-controlled side; takes the first turn.
    Controlled,
    Opposing,
}

impl Team {
    pub const fn opponent(self) -> Self {
        match self {
            Team::Controlled => Team::Opposing,
            Team::Opposing => Team::Controlled,
        }
    }
}

/// Hit points with a fixed maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub current: u32,
    pub maximum: u32,
}

impl Health {
    pub fn new(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Current health in `[0, 1]`.
    pub fn normalized(&self) -> f32 {
        if self.maximum == 0 {
            return 0.0;
        }
        self.current as f32 / self.maximum as f32
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Subtracts `amount`, clamping at zero. Returns the health actually lost.
    pub(crate) fn apply_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current);
        self.current -= lost;
        lost
    }
}

/// A combatant on the battlefield.
///
/// `coordinate` is the authoritative logical cell; `position` is the
/// continuous world position that actions animate. The engine re-derives the
/// coordinate from the position once per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatUnit {
    id: UnitId,
    team: Team,
    coordinate: GridCoordinate,
    position: Vec3,
    /// Yaw in degrees around the vertical axis.
    facing: f32,
    action_points: u32,
    health: Health,
    actions: ActionSet,
}

impl CombatUnit {
    pub(crate) fn new(
        id: UnitId,
        team: Team,
        coordinate: GridCoordinate,
        position: Vec3,
        action_points: u32,
        health: Health,
        actions: ActionSet,
    ) -> Self {
        Self {
            id,
            team,
            coordinate,
            position,
            facing: 0.0,
            action_points,
            health,
            actions,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn coordinate(&self) -> GridCoordinate {
        self.coordinate
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn action_points(&self) -> u32 {
        self.action_points
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn actions(&self) -> &[UnitAction] {
        &self.actions
    }

    pub fn action(&self, kind: ActionKind) -> Option<&UnitAction> {
        self.actions.iter().find(|action| action.kind() == kind)
    }

    /// Whether the remaining budget covers `action`'s cost.
    pub fn can_afford(&self, action: &UnitAction) -> bool {
        self.action_points >= action.point_cost(self)
    }

    pub(crate) fn set_coordinate(&mut self, coordinate: GridCoordinate) {
        self.coordinate = coordinate;
    }

    pub(crate) fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub(crate) fn set_facing(&mut self, degrees: f32) {
        self.facing = degrees.rem_euclid(360.0);
    }

    pub(crate) fn face_towards(&mut self, point: Vec3) {
        let direction = point - self.position;
        if direction.x != 0.0 || direction.z != 0.0 {
            self.set_facing(direction.x.atan2(direction.z).to_degrees());
        }
    }

    pub(crate) fn spend_points(&mut self, amount: u32) {
        debug_assert!(amount <= self.action_points);
        self.action_points -= amount;
    }

    pub(crate) fn refill_points(&mut self, maximum: u32) {
        self.action_points = maximum;
    }

    pub(crate) fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut health = Health::new(100);

        assert_eq!(health.apply_damage(40), 40);
        assert!((health.normalized() - 0.6).abs() < f32::EPSILON);
        assert_eq!(health.apply_damage(80), 60);
        assert_eq!(health.current, 0);
        assert!(health.is_depleted());
    }

    #[test]
    fn teams_alternate() {
        assert_eq!(Team::Controlled.opponent(), Team::Opposing);
        assert_eq!(Team::Opposing.opponent().opponent(), Team::Opposing);
    }
}
