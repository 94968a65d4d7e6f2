use super::GridCoordinate;

/// Dense `width × height` store with exactly one `T` per in-bounds coordinate.
///
/// The index never resizes after construction. Accessing a coordinate outside
/// the grid is a caller bug: check [`GridIndex::contains`] first.
#[derive(Clone, Debug, PartialEq)]
pub struct GridIndex<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T> GridIndex<T> {
    /// Builds the index by asking `factory` for the payload of every coordinate.
    pub fn new<F>(width: u32, height: u32, mut factory: F) -> Self
    where
        F: FnMut(GridCoordinate) -> T,
    {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for z in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(factory(GridCoordinate::new(x, z)));
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, coord: GridCoordinate) -> bool {
        coord.x >= 0 && coord.z >= 0 && coord.x < self.width as i32 && coord.z < self.height as i32
    }

    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid.
    pub fn get(&self, coord: GridCoordinate) -> &T {
        let offset = self.offset(coord);
        &self.cells[offset]
    }

    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid.
    pub fn get_mut(&mut self, coord: GridCoordinate) -> &mut T {
        let offset = self.offset(coord);
        &mut self.cells[offset]
    }

    /// Iterates every cell in row-major order together with its coordinate.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoordinate, &T)> {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(offset, cell)| {
            let coord = GridCoordinate::new((offset % width) as i32, (offset / width) as i32);
            (coord, cell)
        })
    }

    /// Mutable counterpart of [`GridIndex::iter`].
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    fn offset(&self, coord: GridCoordinate) -> usize {
        assert!(
            self.contains(coord),
            "grid coordinate {coord} outside {}x{} grid",
            self.width,
            self.height
        );
        coord.z as usize * self.width as usize + coord.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_sees_every_coordinate_once() {
        let index = GridIndex::new(3, 2, |coord| coord);

        for (coord, payload) in index.iter() {
            assert_eq!(coord, *payload);
        }
        assert_eq!(index.iter().count(), 6);
    }

    #[test]
    fn get_mut_writes_single_cell() {
        let mut index = GridIndex::new(4, 4, |_| 0u8);
        *index.get_mut(GridCoordinate::new(2, 3)) = 7;

        assert_eq!(*index.get(GridCoordinate::new(2, 3)), 7);
        assert_eq!(index.iter().filter(|(_, value)| **value == 7).count(), 1);
    }

    #[test]
    #[should_panic(expected = "outside 4x4 grid")]
    fn out_of_bounds_access_panics() {
        let index = GridIndex::new(4, 4, |_| ());
        index.get(GridCoordinate::new(4, 0));
    }
}
