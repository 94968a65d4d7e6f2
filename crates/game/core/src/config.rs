/// Game configuration: tunable rules grouped by the subsystem that reads them.
///
/// Every section falls back to its defaults when omitted from a config file,
/// so a partial TOML document only overrides what it names.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub grid: GridConfig,
    pub units: UnitConfig,
    pub movement: MovementConfig,
    pub spin: SpinConfig,
    pub shoot: ShootConfig,
    pub grenade: GrenadeConfig,
    pub ai: AiConfig,
    pub obstacles: ObstacleConfig,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Upper bound on distinct actions a single unit can carry.
    pub const MAX_ACTIONS: usize = 8;
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
    /// Side length of one cell in world units.
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            cell_size: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitConfig {
    /// Budget every unit receives at the start of its side's turn.
    pub max_action_points: u32,
    pub max_health: u32,
    /// Height above a unit's feet used as the origin and end of sight lines.
    pub shoulder_height: f32,
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            max_action_points: 2,
            max_health: 100,
            shoulder_height: 1.7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementConfig {
    /// Search radius in cells; the path cost limit is this value times 10.
    pub max_move_distance: i32,
    /// World units per second.
    pub speed: f32,
    /// A waypoint counts as reached within this distance.
    pub stopping_distance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_move_distance: 4,
            speed: 4.0,
            stopping_distance: 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpinConfig {
    pub degrees_per_second: f32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            degrees_per_second: 360.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShootConfig {
    /// Diamond radius in cells.
    pub max_range: i32,
    pub damage: u32,
    pub aiming_secs: f32,
    pub shooting_secs: f32,
    pub cooloff_secs: f32,
}

impl Default for ShootConfig {
    fn default() -> Self {
        Self {
            max_range: 7,
            damage: 40,
            aiming_secs: 1.0,
            shooting_secs: 0.1,
            cooloff_secs: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrenadeConfig {
    /// Diamond radius in cells.
    pub max_throw_distance: i32,
    /// Projectile speed in world units per second.
    pub speed: f32,
    /// The projectile detonates once it is closer than this to the impact point.
    pub arrival_distance: f32,
    /// World-space blast radius around the impact point.
    pub damage_radius: f32,
    pub damage: u32,
}

impl Default for GrenadeConfig {
    fn default() -> Self {
        Self {
            max_throw_distance: 7,
            speed: 15.0,
            arrival_distance: 0.2,
            damage_radius: 4.0,
            damage: 30,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    /// Pause after the turn passes to an AI side before its first action.
    pub turn_start_delay_secs: f32,
    /// Pause after each completed AI action.
    pub action_delay_secs: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            turn_start_delay_secs: 2.0,
            action_delay_secs: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObstacleConfig {
    /// Vertical extent of sight-blocking terrain.
    pub height: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self { height: 2.5 }
    }
}
