//! Data-driven battle content.
//!
//! Loaders turn RON/TOML data files into core types:
//! - Game configuration (TOML)
//! - Battle maps: terrain and unit spawns (RON)
//!
//! Content feeds [`tactics_core::BattleState::from_map`] and never appears in
//! battle state by itself.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MapLoader};
