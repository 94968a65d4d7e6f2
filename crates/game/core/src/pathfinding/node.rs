use crate::grid::GridCoordinate;

/// Sentinel for "no known route yet".
pub const UNREACHED: u32 = u32::MAX;

/// Per-cell A* bookkeeping.
///
/// Everything except `walkable` is scratch state that is reset at the start of
/// every search. `walkable` is static terrain and survives across searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub coordinate: GridCoordinate,
    /// Best known cost from the start cell, in tenths of a cell.
    pub g_cost: u32,
    /// Heuristic estimate to the goal.
    pub h_cost: u32,
    pub f_cost: u32,
    /// Back-link to the cell this node was reached from.
    pub predecessor: Option<GridCoordinate>,
    pub walkable: bool,
    pub(crate) opened: bool,
    pub(crate) closed: bool,
}

impl SearchNode {
    pub fn new(coordinate: GridCoordinate) -> Self {
        Self {
            coordinate,
            g_cost: UNREACHED,
            h_cost: 0,
            f_cost: UNREACHED,
            predecessor: None,
            walkable: true,
            opened: false,
            closed: false,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.g_cost = UNREACHED;
        self.h_cost = 0;
        self.recompute_f_cost();
        self.predecessor = None;
        self.opened = false;
        self.closed = false;
    }

    pub(crate) fn recompute_f_cost(&mut self) {
        self.f_cost = self.g_cost.saturating_add(self.h_cost);
    }
}
