use crate::error::ErrorSeverity;
use crate::grid::GridCoordinate;

/// Errors raised while turning map data into a battle state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("battlefield must have at least one cell (got {width}x{height})")]
    EmptyGrid { width: u32, height: u32 },

    #[error("terrain at {coordinate} lies outside the battlefield")]
    TerrainOutOfBounds { coordinate: GridCoordinate },

    #[error("spawn at {coordinate} lies outside the battlefield")]
    SpawnOutOfBounds { coordinate: GridCoordinate },

    #[error("spawn at {coordinate} is not walkable")]
    SpawnOnUnwalkable { coordinate: GridCoordinate },

    #[error("spawn at {coordinate} is already occupied")]
    SpawnOccupied { coordinate: GridCoordinate },
}

impl InitializationError {
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}
