use glam::Vec3;

use super::GridCoordinate;

/// Maps between grid coordinates and world-space positions.
///
/// Cell `(x, z)` is centred on world `(x * cell_size, 0, z * cell_size)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub width: u32,
    pub height: u32,
    pub cell_size: f32,
}

impl GridLayout {
    pub const fn new(width: u32, height: u32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn in_bounds(&self, coord: GridCoordinate) -> bool {
        coord.x >= 0 && coord.z >= 0 && coord.x < self.width as i32 && coord.z < self.height as i32
    }

    pub fn to_world(&self, coord: GridCoordinate) -> Vec3 {
        Vec3::new(
            coord.x as f32 * self.cell_size,
            0.0,
            coord.z as f32 * self.cell_size,
        )
    }

    /// Nearest cell to `position`; each axis is rounded independently.
    ///
    /// The result may lie outside the grid.
    pub fn to_coordinate(&self, position: Vec3) -> GridCoordinate {
        GridCoordinate::new(
            (position.x / self.cell_size).round() as i32,
            (position.z / self.cell_size).round() as i32,
        )
    }

    /// Every in-bounds coordinate, x-major.
    pub fn coordinates(&self) -> impl Iterator<Item = GridCoordinate> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..width).flat_map(move |x| (0..height).map(move |z| GridCoordinate::new(x, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_round_trip_holds_for_every_cell() {
        let layout = GridLayout::new(10, 10, 2.0);

        for coord in layout.coordinates() {
            assert_eq!(layout.to_coordinate(layout.to_world(coord)), coord);
        }
    }

    #[test]
    fn to_coordinate_rounds_to_nearest_cell() {
        let layout = GridLayout::new(10, 10, 2.0);

        assert_eq!(
            layout.to_coordinate(Vec3::new(2.9, 0.0, 1.1)),
            GridCoordinate::new(1, 1)
        );
        assert_eq!(
            layout.to_coordinate(Vec3::new(3.1, 5.0, 0.4)),
            GridCoordinate::new(2, 0)
        );
    }

    #[test]
    fn in_bounds_rejects_edges() {
        let layout = GridLayout::new(10, 8, 2.0);

        assert!(layout.in_bounds(GridCoordinate::new(9, 7)));
        assert!(!layout.in_bounds(GridCoordinate::new(10, 0)));
        assert!(!layout.in_bounds(GridCoordinate::new(0, 8)));
        assert!(!layout.in_bounds(GridCoordinate::new(-1, 3)));
    }
}
