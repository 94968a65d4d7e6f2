use std::fmt;
use std::ops::{Add, Sub};

/// Integer cell address on the battlefield grid.
///
/// Arithmetic is component-wise. A coordinate is only meaningful for a given
/// grid once [`super::GridLayout::in_bounds`] has accepted it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoordinate {
    pub x: i32,
    pub z: i32,
}

impl GridCoordinate {
    pub const ORIGIN: Self = Self { x: 0, z: 0 };

    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Manhattan length of the offset between two coordinates.
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.z.abs_diff(other.z)
    }

    /// Every offset inside the square `[-radius, radius]²`, x-major.
    ///
    /// Targeting code walks this box and prunes it to the shape it needs.
    pub fn square_offsets(radius: i32) -> impl Iterator<Item = GridCoordinate> {
        (-radius..=radius).flat_map(move |x| (-radius..=radius).map(move |z| Self::new(x, z)))
    }

    /// Offsets of the square box pruned to a diamond (`|x| + |z| <= radius`).
    pub fn diamond_offsets(radius: i32) -> impl Iterator<Item = GridCoordinate> {
        Self::square_offsets(radius).filter(move |offset| offset.x.abs() + offset.z.abs() <= radius)
    }
}

impl Add for GridCoordinate {
    type Output = GridCoordinate;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for GridCoordinate {
    type Output = GridCoordinate;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
