//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Headless skirmish settings.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub config_path: PathBuf,
    pub map_path: PathBuf,
    /// The skirmish stops after this many turns even without a winner.
    pub max_turns: u32,
    /// Simulation steps per simulated second.
    pub tick_hz: u32,
    /// Let a decision engine play the controlled side too.
    pub autoplay: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
        Self {
            config_path: data.join("game.toml"),
            map_path: data.join("skirmish.ron"),
            max_turns: 40,
            tick_hz: 30,
            autoplay: true,
        }
    }
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TACTICS_CONFIG` - Game config TOML (default: bundled `data/game.toml`)
    /// - `TACTICS_MAP` - Battle map RON (default: bundled `data/skirmish.ron`)
    /// - `TACTICS_MAX_TURNS` - Turn limit (default: 40)
    /// - `TACTICS_TICK_HZ` - Ticks per simulated second (default: 30)
    /// - `TACTICS_AUTOPLAY` - AI plays the controlled side (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("TACTICS_CONFIG") {
            config.config_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("TACTICS_MAP") {
            config.map_path = PathBuf::from(path);
        }
        if let Some(turns) = read_env::<u32>("TACTICS_MAX_TURNS") {
            config.max_turns = turns.max(1);
        }
        if let Some(hz) = read_env::<u32>("TACTICS_TICK_HZ") {
            config.tick_hz = hz.clamp(1, 1000);
        }
        if let Some(autoplay) = read_env::<bool>("TACTICS_AUTOPLAY") {
            config.autoplay = autoplay;
        }

        config
    }

    pub fn tick_secs(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
