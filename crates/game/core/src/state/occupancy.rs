use crate::event::{BattleEvent, EventQueue};
use crate::grid::{GridCoordinate, GridIndex};

use super::UnitId;

/// Units standing on one cell, in the order they entered it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OccupancyCell {
    units: Vec<UnitId>,
}

impl OccupancyCell {
    pub fn units(&self) -> &[UnitId] {
        &self.units
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Per-cell occupant lists, kept apart from the pathfinding index.
///
/// A unit normally appears in exactly one cell. While it walks a path it may
/// share a cell with another unit for a few ticks; that is expected.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    cells: GridIndex<OccupancyCell>,
}

impl OccupancyGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: GridIndex::new(width, height, |_| OccupancyCell::default()),
        }
    }

    pub fn add_unit(&mut self, coord: GridCoordinate, unit: UnitId) {
        let cell = self.cells.get_mut(coord);
        debug_assert!(
            !cell.units.contains(&unit),
            "unit {unit} added twice to {coord}"
        );
        cell.units.push(unit);
    }

    /// # Panics
    ///
    /// Panics if `unit` is not registered at `coord`; removing twice means a
    /// caller lost track of where the unit stands.
    pub fn remove_unit(&mut self, coord: GridCoordinate, unit: UnitId) {
        let cell = self.cells.get_mut(coord);
        let Some(slot) = cell.units.iter().position(|occupant| *occupant == unit) else {
            panic!("unit {unit} is not registered at {coord}");
        };
        let _ = cell.units.remove(slot);
    }

    pub fn units_at(&self, coord: GridCoordinate) -> &[UnitId] {
        self.cells.get(coord).units()
    }

    pub fn has_any_unit(&self, coord: GridCoordinate) -> bool {
        !self.cells.get(coord).is_empty()
    }

    /// Canonical occupant for single-target resolution: the earliest arrival.
    pub fn first_unit_at(&self, coord: GridCoordinate) -> Option<UnitId> {
        self.cells.get(coord).units.first().copied()
    }

    /// Moves `unit` between cells and records exactly one `UnitMoved` event.
    pub fn move_unit(
        &mut self,
        unit: UnitId,
        from: GridCoordinate,
        to: GridCoordinate,
        events: &mut EventQueue,
    ) {
        self.remove_unit(from, unit);
        self.add_unit(to, unit);
        events.push(BattleEvent::UnitMoved { unit, from, to });
    }

    /// Every occupied cell with its occupants, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (GridCoordinate, &[UnitId])> {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(coord, cell)| (coord, cell.units()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, z: i32) -> GridCoordinate {
        GridCoordinate::new(x, z)
    }

    #[test]
    fn first_unit_is_earliest_arrival() {
        let mut grid = OccupancyGrid::new(4, 4);
        grid.add_unit(c(1, 1), UnitId(7));
        grid.add_unit(c(1, 1), UnitId(3));

        assert_eq!(grid.units_at(c(1, 1)), &[UnitId(7), UnitId(3)]);
        assert_eq!(grid.first_unit_at(c(1, 1)), Some(UnitId(7)));

        grid.remove_unit(c(1, 1), UnitId(7));
        assert_eq!(grid.first_unit_at(c(1, 1)), Some(UnitId(3)));
    }

    #[test]
    fn move_unit_emits_single_event() {
        let mut grid = OccupancyGrid::new(4, 4);
        let mut events = EventQueue::default();
        grid.add_unit(c(0, 0), UnitId(1));

        grid.move_unit(UnitId(1), c(0, 0), c(3, 2), &mut events);

        assert!(!grid.has_any_unit(c(0, 0)));
        assert_eq!(grid.units_at(c(3, 2)), &[UnitId(1)]);
        assert_eq!(
            events.drain(),
            vec![BattleEvent::UnitMoved {
                unit: UnitId(1),
                from: c(0, 0),
                to: c(3, 2),
            }]
        );
    }

    #[test]
    fn empty_cells_report_no_units() {
        let grid = OccupancyGrid::new(2, 2);

        assert!(!grid.has_any_unit(c(1, 0)));
        assert_eq!(grid.first_unit_at(c(1, 0)), None);
        assert_eq!(grid.occupied().count(), 0);
    }

    #[test]
    #[should_panic(expected = "not registered")]
    fn double_removal_panics() {
        let mut grid = OccupancyGrid::new(2, 2);
        grid.add_unit(c(0, 0), UnitId(1));
        grid.remove_unit(c(0, 0), UnitId(1));
        grid.remove_unit(c(0, 0), UnitId(1));
    }
}
