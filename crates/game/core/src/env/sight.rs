use glam::Vec3;

/// Line-of-sight query against the scene.
///
/// Positions are world-space points; callers raise them to eye height before
/// asking.
pub trait SightOracle {
    /// Whether anything blocks the straight segment from `from` to `to`.
    fn is_obstructed(&self, from: Vec3, to: Vec3) -> bool;
}

/// A scene without obstacles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenSight;

impl SightOracle for OpenSight {
    fn is_obstructed(&self, _from: Vec3, _to: Vec3) -> bool {
        false
    }
}
