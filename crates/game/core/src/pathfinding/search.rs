use std::cell::RefCell;

use arrayvec::ArrayVec;

use super::node::SearchNode;
use crate::grid::{GridCoordinate, GridIndex};

/// Cost of an orthogonal step (one cell, scaled by 10).
pub const STRAIGHT_COST: u32 = 10;
/// Cost of a diagonal step (√2 scaled by 10 and rounded).
pub const DIAGONAL_COST: u32 = 14;

/// Walkable route between two cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// Cells from start to goal, both inclusive.
    pub waypoints: Vec<GridCoordinate>,
    /// Accumulated step cost along `waypoints`.
    pub cost: u32,
}

impl Path {
    pub fn start(&self) -> GridCoordinate {
        self.waypoints[0]
    }

    pub fn goal(&self) -> GridCoordinate {
        self.waypoints[self.waypoints.len() - 1]
    }
}

/// A* search over an 8-connected grid.
///
/// The node index lives behind a `RefCell` because every search rewrites the
/// per-node scratch fields while callers only hold shared access to the
/// battle state. The simulation is single-threaded and searches never nest.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    nodes: RefCell<GridIndex<SearchNode>>,
}

impl Pathfinder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            nodes: RefCell::new(GridIndex::new(width, height, SearchNode::new)),
        }
    }

    /// Registers static terrain. Walkability persists across searches.
    pub fn set_walkable(&mut self, coord: GridCoordinate, walkable: bool) {
        self.nodes.get_mut().get_mut(coord).walkable = walkable;
    }

    pub fn is_walkable(&self, coord: GridCoordinate) -> bool {
        self.nodes.borrow().get(coord).walkable
    }

    /// Snapshot of a node as left by the most recent search.
    pub fn node(&self, coord: GridCoordinate) -> SearchNode {
        *self.nodes.borrow().get(coord)
    }

    /// Optimal diagonal-plus-straight step cost between two cells on an open grid.
    ///
    /// This is the search heuristic. It never overestimates, so it is also a
    /// cheap lower bound on the real path cost.
    pub fn calculate_distance(a: GridCoordinate, b: GridCoordinate) -> u32 {
        let dx = a.x.abs_diff(b.x);
        let dz = a.z.abs_diff(b.z);
        DIAGONAL_COST * dx.min(dz) + STRAIGHT_COST * dx.abs_diff(dz)
    }

    /// Shortest walkable path from `start` to `goal`, or `None` when the goal
    /// cannot be reached.
    ///
    /// Ties on `f_cost` go to the node that entered the open list first.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint lies outside the grid.
    pub fn find_path(&self, start: GridCoordinate, goal: GridCoordinate) -> Option<Path> {
        let mut nodes = self.nodes.borrow_mut();
        for node in nodes.iter_mut() {
            node.reset();
        }
        assert!(
            nodes.contains(goal),
            "goal {goal} outside {}x{} grid",
            nodes.width(),
            nodes.height()
        );

        let start_node = nodes.get_mut(start);
        start_node.g_cost = 0;
        start_node.h_cost = Self::calculate_distance(start, goal);
        start_node.recompute_f_cost();
        start_node.opened = true;

        let mut open = vec![start];
        let (width, height) = (nodes.width(), nodes.height());

        while !open.is_empty() {
            let current_slot = lowest_f_cost(&open, &nodes);
            let current = open[current_slot];
            if current == goal {
                return Some(trace_back(&nodes, goal));
            }

            let _ = open.remove(current_slot);
            let current_node = nodes.get_mut(current);
            current_node.opened = false;
            current_node.closed = true;
            let current_g = current_node.g_cost;

            for neighbor in neighbors(current, width, height) {
                let node = nodes.get_mut(neighbor);
                if node.closed {
                    continue;
                }
                if !node.walkable {
                    node.closed = true;
                    continue;
                }

                let tentative = current_g + Self::calculate_distance(current, neighbor);
                if tentative < node.g_cost {
                    node.predecessor = Some(current);
                    node.g_cost = tentative;
                    node.h_cost = Self::calculate_distance(neighbor, goal);
                    node.recompute_f_cost();

                    if !node.opened {
                        node.opened = true;
                        open.push(neighbor);
                    }
                }
            }
        }

        None
    }

    pub fn has_path(&self, start: GridCoordinate, goal: GridCoordinate) -> bool {
        self.find_path(start, goal).is_some()
    }

    /// Cost of the route `find_path` discovers, as opposed to the heuristic
    /// estimate from [`Pathfinder::calculate_distance`].
    pub fn path_length(&self, start: GridCoordinate, goal: GridCoordinate) -> Option<u32> {
        self.find_path(start, goal).map(|path| path.cost)
    }
}

fn lowest_f_cost(open: &[GridCoordinate], nodes: &GridIndex<SearchNode>) -> usize {
    let mut best = 0;
    for (slot, coord) in open.iter().enumerate().skip(1) {
        if nodes.get(*coord).f_cost < nodes.get(open[best]).f_cost {
            best = slot;
        }
    }
    best
}

fn trace_back(nodes: &GridIndex<SearchNode>, goal: GridCoordinate) -> Path {
    let cost = nodes.get(goal).g_cost;
    let mut waypoints = vec![goal];
    let mut cursor = goal;
    while let Some(previous) = nodes.get(cursor).predecessor {
        waypoints.push(previous);
        cursor = previous;
    }
    waypoints.reverse();

    Path { waypoints, cost }
}

/// In-bounds neighbours in a fixed order: west column, east column, then the
/// two vertical cells.
fn neighbors(cell: GridCoordinate, width: u32, height: u32) -> ArrayVec<GridCoordinate, 8> {
    let (width, height) = (width as i32, height as i32);
    let mut out = ArrayVec::new();

    for dx in [-1, 1] {
        let x = cell.x + dx;
        if x < 0 || x >= width {
            continue;
        }
        for dz in [0, -1, 1] {
            let z = cell.z + dz;
            if z >= 0 && z < height {
                out.push(GridCoordinate::new(x, z));
            }
        }
    }
    for dz in [-1, 1] {
        let z = cell.z + dz;
        if z >= 0 && z < height {
            out.push(GridCoordinate::new(cell.x, z));
        }
    }

    out
}
