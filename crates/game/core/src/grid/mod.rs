//! Battlefield addressing: integer coordinates, the dense per-cell index, and
//! the world-space layout that converts between the two.

mod coord;
mod index;
mod layout;

pub use coord::GridCoordinate;
pub use index::GridIndex;
pub use layout::GridLayout;
