use crate::action::ActionKind;
use crate::grid::GridCoordinate;
use crate::state::Team;

/// Canonical terrain classes for battlefield cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum TerrainKind {
    #[default]
    Floor,
    /// Blocks movement and line of sight.
    Wall,
    /// Blocks movement only.
    Water,
}

impl TerrainKind {
    pub fn is_walkable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }

    pub fn blocks_sight(self) -> bool {
        matches!(self, TerrainKind::Wall)
    }
}

/// Blueprint for a unit that exists when the battle starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSpawn {
    pub team: Team,
    pub coordinate: GridCoordinate,
    /// Actions in evaluation order. Empty means the standard set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Vec<ActionKind>,
}

impl UnitSpawn {
    pub fn new(team: Team, coordinate: GridCoordinate) -> Self {
        Self {
            team,
            coordinate,
            actions: Vec::new(),
        }
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = ActionKind>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }
}

/// Static battlefield description: dimensions, non-floor terrain and spawns.
///
/// Cells not listed in `terrain` are floor.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleMap {
    pub width: u32,
    pub height: u32,
    pub terrain: Vec<(GridCoordinate, TerrainKind)>,
    pub spawns: Vec<UnitSpawn>,
}

impl BattleMap {
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_terrain(mut self, coordinate: GridCoordinate, kind: TerrainKind) -> Self {
        self.terrain.push((coordinate, kind));
        self
    }

    pub fn with_spawn(mut self, spawn: UnitSpawn) -> Self {
        self.spawns.push(spawn);
        self
    }
}
