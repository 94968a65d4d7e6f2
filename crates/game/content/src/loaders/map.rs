//! Battle map loader.
//!
//! A map file lists its dimensions, every non-floor tile and the units
//! present at the start of the battle.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tactics_core::{ActionKind, BattleMap, GridCoordinate, Team, TerrainKind, UnitSpawn};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    #[serde(default)]
    tiles: Vec<(i32, i32, TerrainKind)>, // (x, z, terrain)
    #[serde(default)]
    units: Vec<SpawnRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SpawnRon {
    team: Team,
    at: (i32, i32),
    #[serde(default)]
    actions: Vec<ActionKind>,
}

/// Loader for battle maps from RON files.
pub struct MapLoader;

impl MapLoader {
    pub fn load(path: &Path) -> LoadResult<BattleMap> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses map RON. Bounds and spawn legality are checked later, when the
    /// map becomes a battle state.
    pub fn parse(content: &str) -> LoadResult<BattleMap> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let (width, height) = data.dimensions;
        let terrain = data
            .tiles
            .into_iter()
            .map(|(x, z, kind)| (GridCoordinate::new(x, z), kind))
            .collect();
        let spawns = data
            .units
            .into_iter()
            .map(|spawn| {
                UnitSpawn::new(spawn.team, GridCoordinate::new(spawn.at.0, spawn.at.1))
                    .with_actions(spawn.actions)
            })
            .collect();

        Ok(BattleMap {
            width,
            height,
            terrain,
            spawns,
        })
    }
}
