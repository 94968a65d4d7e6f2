//! Read-only collaborators the rules consult but do not own.
//!
//! Static battlefield data lives in [`BattleMap`]; scene queries the core
//! cannot answer on its own (line of sight) are injected through
//! [`SightOracle`] and bundled into a [`BattleEnv`].
mod map;
mod sight;

pub use map::{BattleMap, TerrainKind, UnitSpawn};
pub use sight::{OpenSight, SightOracle};

/// Aggregates the injected capabilities required by the action pipeline.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    sight: &'a dyn SightOracle,
}

impl<'a> BattleEnv<'a> {
    pub fn new(sight: &'a dyn SightOracle) -> Self {
        Self { sight }
    }

    /// Environment in which nothing blocks line of sight.
    pub fn open() -> BattleEnv<'static> {
        static OPEN: OpenSight = OpenSight;
        BattleEnv { sight: &OPEN }
    }

    pub fn sight(&self) -> &'a dyn SightOracle {
        self.sight
    }
}

impl std::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleEnv").finish_non_exhaustive()
    }
}
