//! A* pathfinding over the battlefield grid.
//!
//! Costs are integers scaled by 10 so a diagonal step (14) approximates √2
//! without floating point. The engine owns a single [`Pathfinder`] whose node
//! index mirrors the battlefield dimensions; occupancy is tracked elsewhere so
//! search state and unit placement evolve independently.

mod node;
mod search;

pub use node::{SearchNode, UNREACHED};
pub use search::{DIAGONAL_COST, Path, Pathfinder, STRAIGHT_COST};
