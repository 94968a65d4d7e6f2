//! Authoritative battle state.
//!
//! [`BattleState`] replaces ambient singletons: the grid, occupancy, roster,
//! turn counter and event queue are owned here and handed to the engine by
//! mutable reference. Everything outside the crate reads it through
//! accessors; mutation goes through [`crate::engine::BattleEngine`].
mod error;
mod occupancy;
mod roster;
mod turn;
mod unit;

pub use error::InitializationError;
pub use occupancy::{OccupancyCell, OccupancyGrid};
pub use roster::UnitRoster;
pub use turn::TurnState;
pub use unit::{ActionSet, CombatUnit, Health, Team, UnitId};

use crate::config::GameConfig;
use crate::engine::{BattleEngine, InFlightAction};
use crate::env::{BattleEnv, BattleMap, TerrainKind};
use crate::event::EventQueue;
use crate::grid::{GridCoordinate, GridIndex, GridLayout};
use crate::pathfinding::Pathfinder;

#[derive(Clone, Debug)]
pub struct BattleState {
    pub(crate) config: GameConfig,
    pub(crate) layout: GridLayout,
    pub(crate) terrain: GridIndex<TerrainKind>,
    pub(crate) pathfinder: Pathfinder,
    pub(crate) occupancy: OccupancyGrid,
    pub(crate) units: UnitRoster,
    pub(crate) turn: TurnState,
    pub(crate) events: EventQueue,
    pub(crate) in_flight: Option<InFlightAction>,
}

impl BattleState {
    /// Empty all-floor battlefield sized by `config.grid`.
    pub fn new(config: GameConfig) -> Result<Self, InitializationError> {
        let (width, height) = (config.grid.width, config.grid.height);
        if width == 0 || height == 0 {
            return Err(InitializationError::EmptyGrid { width, height });
        }

        Ok(Self {
            layout: GridLayout::new(width, height, config.grid.cell_size),
            terrain: GridIndex::new(width, height, |_| TerrainKind::Floor),
            pathfinder: Pathfinder::new(width, height),
            occupancy: OccupancyGrid::new(width, height),
            units: UnitRoster::default(),
            turn: TurnState::new(),
            events: EventQueue::default(),
            in_flight: None,
            config,
        })
    }

    /// Builds a battlefield from map data. The map's dimensions override
    /// `config.grid`; spawns are registered in map order.
    pub fn from_map(mut config: GameConfig, map: &BattleMap) -> Result<Self, InitializationError> {
        config.grid.width = map.width;
        config.grid.height = map.height;
        let mut state = Self::new(config)?;

        for &(coordinate, kind) in &map.terrain {
            state.set_terrain(coordinate, kind)?;
        }

        let mut engine = BattleEngine::new(&mut state, BattleEnv::open());
        for spawn in &map.spawns {
            let _ = engine.spawn_unit(spawn.team, spawn.coordinate, &spawn.actions)?;
        }

        Ok(state)
    }

    /// Registers static terrain and its walkability.
    pub fn set_terrain(
        &mut self,
        coordinate: GridCoordinate,
        kind: TerrainKind,
    ) -> Result<(), InitializationError> {
        if !self.layout.in_bounds(coordinate) {
            return Err(InitializationError::TerrainOutOfBounds { coordinate });
        }
        *self.terrain.get_mut(coordinate) = kind;
        self.pathfinder.set_walkable(coordinate, kind.is_walkable());
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn pathfinder(&self) -> &Pathfinder {
        &self.pathfinder
    }

    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    pub fn units(&self) -> &UnitRoster {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&CombatUnit> {
        self.units.get(id)
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Removes every pending event in emission order.
    pub fn drain_events(&mut self) -> Vec<crate::event::BattleEvent> {
        self.events.drain()
    }

    /// Terrain of an in-bounds cell.
    ///
    /// # Panics
    ///
    /// Panics if `coordinate` lies outside the battlefield.
    pub fn terrain_at(&self, coordinate: GridCoordinate) -> TerrainKind {
        *self.terrain.get(coordinate)
    }

    /// Every sight-blocking cell, row-major.
    pub fn sight_blockers(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.terrain
            .iter()
            .filter(|(_, kind)| kind.blocks_sight())
            .map(|(coordinate, _)| coordinate)
    }

    /// Whether an action is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<&InFlightAction> {
        self.in_flight.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::UnitSpawn;
    use crate::event::BattleEvent;

    fn c(x: i32, z: i32) -> GridCoordinate {
        GridCoordinate::new(x, z)
    }

    #[test]
    fn map_registers_terrain_and_spawns() {
        let map = BattleMap::open(6, 4)
            .with_terrain(c(2, 2), TerrainKind::Wall)
            .with_terrain(c(3, 1), TerrainKind::Water)
            .with_spawn(UnitSpawn::new(Team::Controlled, c(0, 0)))
            .with_spawn(UnitSpawn::new(Team::Opposing, c(5, 3)));

        let mut state = BattleState::from_map(GameConfig::default(), &map).unwrap();

        assert_eq!(state.layout().width, 6);
        assert!(!state.pathfinder().is_walkable(c(2, 2)));
        assert!(!state.pathfinder().is_walkable(c(3, 1)));
        assert_eq!(state.sight_blockers().collect::<Vec<_>>(), vec![c(2, 2)]);
        assert_eq!(state.units().len(), 2);
        assert_eq!(state.occupancy().first_unit_at(c(5, 3)), Some(UnitId(1)));

        let events = state.drain_events();
        assert!(matches!(
            events[0],
            BattleEvent::UnitSpawned { unit: UnitId(0), team: Team::Controlled, .. }
        ));
        assert!(state.events().is_empty());
    }

    #[test]
    fn spawn_on_wall_is_rejected() {
        let map = BattleMap::open(4, 4)
            .with_terrain(c(1, 1), TerrainKind::Wall)
            .with_spawn(UnitSpawn::new(Team::Opposing, c(1, 1)));

        let err = BattleState::from_map(GameConfig::default(), &map).unwrap_err();
        assert_eq!(err, InitializationError::SpawnOnUnwalkable { coordinate: c(1, 1) });
    }

    #[test]
    fn stacked_spawns_are_rejected() {
        let map = BattleMap::open(4, 4)
            .with_spawn(UnitSpawn::new(Team::Controlled, c(1, 1)))
            .with_spawn(UnitSpawn::new(Team::Opposing, c(1, 1)));

        let err = BattleState::from_map(GameConfig::default(), &map).unwrap_err();
        assert_eq!(err, InitializationError::SpawnOccupied { coordinate: c(1, 1) });
    }

    #[test]
    fn empty_and_out_of_bounds_maps_are_rejected() {
        let err = BattleState::from_map(GameConfig::default(), &BattleMap::open(0, 5)).unwrap_err();
        assert_eq!(err, InitializationError::EmptyGrid { width: 0, height: 5 });

        let map = BattleMap::open(3, 3).with_terrain(c(3, 0), TerrainKind::Wall);
        let err = BattleState::from_map(GameConfig::default(), &map).unwrap_err();
        assert_eq!(err, InitializationError::TerrainOutOfBounds { coordinate: c(3, 0) });

        let map = BattleMap::open(3, 3).with_spawn(UnitSpawn::new(Team::Controlled, c(-1, 0)));
        let err = BattleState::from_map(GameConfig::default(), &map).unwrap_err();
        assert_eq!(err, InitializationError::SpawnOutOfBounds { coordinate: c(-1, 0) });
    }
}
