use crate::action::{ActionKind, UnitAction};
use crate::event::BattleEvent;
use crate::grid::GridCoordinate;
use crate::state::{CombatUnit, Health, InitializationError, Team, UnitId};

use super::BattleEngine;

impl BattleEngine<'_> {
    /// Registers a unit on a free walkable cell with a full budget and full
    /// health. An empty `actions` list gives it the standard set.
    pub fn spawn_unit(
        &mut self,
        team: Team,
        coordinate: GridCoordinate,
        actions: &[ActionKind],
    ) -> Result<UnitId, InitializationError> {
        if !self.state.layout.in_bounds(coordinate) {
            return Err(InitializationError::SpawnOutOfBounds { coordinate });
        }
        if !self.state.pathfinder.is_walkable(coordinate) {
            return Err(InitializationError::SpawnOnUnwalkable { coordinate });
        }
        if self.state.occupancy.has_any_unit(coordinate) {
            return Err(InitializationError::SpawnOccupied { coordinate });
        }

        let config = &self.state.config;
        let id = self.state.units.allocate_id();
        let unit = CombatUnit::new(
            id,
            team,
            coordinate,
            self.state.layout.to_world(coordinate),
            config.units.max_action_points,
            Health::new(config.units.max_health),
            UnitAction::set_from_kinds(actions, config),
        );

        self.state.units.insert(unit);
        self.state.occupancy.add_unit(coordinate, id);
        self.emit(BattleEvent::UnitSpawned {
            unit: id,
            team,
            at: coordinate,
        });
        Ok(id)
    }

    /// Applies damage and returns the health left, or `None` for an unknown
    /// unit. A unit brought to zero dies: `UnitDied` fires once and the unit
    /// leaves both the occupancy grid and the roster.
    pub fn damage(&mut self, id: UnitId, amount: u32) -> Option<Health> {
        let unit = self.state.units.get_mut(id)?;
        let lost = unit.health_mut().apply_damage(amount);
        let health = unit.health();
        let (team, at) = (unit.team(), unit.coordinate());

        self.emit(BattleEvent::UnitDamaged {
            unit: id,
            amount: lost,
            health,
        });

        if health.is_depleted() {
            self.state.occupancy.remove_unit(at, id);
            let _ = self.state.units.remove(id);
            self.emit(BattleEvent::UnitDied { unit: id, team, at });
        }

        Some(health)
    }
}
