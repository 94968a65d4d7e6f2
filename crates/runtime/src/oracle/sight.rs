use glam::Vec3;
use tactics_core::{BattleState, SightOracle};

/// Axis-aligned obstacle volume.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Obstacle {
    min: Vec3,
    max: Vec3,
}

/// Line-of-sight oracle backed by the battlefield's sight-blocking cells.
///
/// Every blocking cell becomes a box one cell wide and `obstacles.height`
/// tall, standing on the ground plane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObstacleSight {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSight {
    pub fn from_state(state: &BattleState) -> Self {
        let layout = state.layout();
        let half = layout.cell_size * 0.5;
        let height = state.config().obstacles.height;

        let obstacles = state
            .sight_blockers()
            .map(|cell| {
                let centre = layout.to_world(cell);
                Obstacle {
                    min: centre - Vec3::new(half, 0.0, half),
                    max: centre + Vec3::new(half, height, half),
                }
            })
            .collect();

        Self { obstacles }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl SightOracle for ObstacleSight {
    fn is_obstructed(&self, from: Vec3, to: Vec3) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| segment_hits_box(from, to, obstacle))
    }
}

/// Slab test of the segment `from -> to` against `obstacle`.
fn segment_hits_box(from: Vec3, to: Vec3, obstacle: &Obstacle) -> bool {
    let direction = to - from;
    let (mut enter, mut exit) = (0.0_f32, 1.0_f32);

    for axis in 0..3 {
        let (origin, delta) = (from[axis], direction[axis]);
        let (low, high) = (obstacle.min[axis], obstacle.max[axis]);

        if delta.abs() < f32::EPSILON {
            if origin < low || origin > high {
                return false;
            }
            continue;
        }

        let inverse = 1.0 / delta;
        let (mut near, mut far) = ((low - origin) * inverse, (high - origin) * inverse);
        if near > far {
            std::mem::swap(&mut near, &mut far);
        }
        enter = enter.max(near);
        exit = exit.min(far);
        if enter > exit {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use tactics_core::{BattleMap, GameConfig, GridCoordinate, TerrainKind};

    use super::*;

    fn sight_with_wall_at(x: i32, z: i32) -> ObstacleSight {
        let map = BattleMap::open(10, 10)
            .with_terrain(GridCoordinate::new(x, z), TerrainKind::Wall)
            .with_terrain(GridCoordinate::new(0, 9), TerrainKind::Water);
        let state = BattleState::from_map(GameConfig::default(), &map).unwrap();
        ObstacleSight::from_state(&state)
    }

    #[test]
    fn wall_between_shoulders_blocks() {
        let sight = sight_with_wall_at(2, 0);
        assert_eq!(sight.len(), 1);

        let from = Vec3::new(0.0, 1.7, 0.0);
        let to = Vec3::new(8.0, 1.7, 0.0);
        assert!(sight.is_obstructed(from, to));
        assert!(sight.is_obstructed(to, from));
    }

    #[test]
    fn line_beside_or_above_wall_is_clear() {
        let sight = sight_with_wall_at(2, 0);

        let beside = (Vec3::new(0.0, 1.7, 4.0), Vec3::new(8.0, 1.7, 4.0));
        assert!(!sight.is_obstructed(beside.0, beside.1));

        let above = (Vec3::new(0.0, 3.0, 0.0), Vec3::new(8.0, 3.0, 0.0));
        assert!(!sight.is_obstructed(above.0, above.1));
    }

    #[test]
    fn segment_stopping_short_is_clear() {
        let sight = sight_with_wall_at(4, 0);

        let from = Vec3::new(0.0, 1.7, 0.0);
        let to = Vec3::new(4.0, 1.7, 0.0);
        assert!(!sight.is_obstructed(from, to));
    }
}
