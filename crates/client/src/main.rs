//! Headless tactics client.
//!
//! Loads the game config and a battle map, then runs a skirmish to the end
//! with decision engines driving the sides and the event feed logged.
//!
//! # Examples
//!
//! ```bash
//! # Bundled skirmish, both sides played by the AI
//! cargo run -p tactics-client
//!
//! # Custom map; the controlled side passes every turn
//! TACTICS_MAP=maps/alley.ron TACTICS_AUTOPLAY=false cargo run -p tactics-client
//! ```

mod config;
mod logging;

use anyhow::Result;
use tactics_content::{ConfigLoader, MapLoader};
use tactics_runtime::{Simulation, Topic};
use tokio::sync::broadcast::error::RecvError;

use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    logging::setup_logging();

    tracing::info!("Starting tactics client");
    tracing::info!("Config: {}", config.config_path.display());
    tracing::info!("Map: {}", config.map_path.display());
    tracing::info!("Autoplay: {}", config.autoplay);

    let game_config = ConfigLoader::load(&config.config_path)?;
    let map = MapLoader::load(&config.map_path)?;
    let mut sim = Simulation::builder()
        .config(game_config)
        .map(map)
        .autoplay(config.autoplay)
        .build()?;

    let consumers: Vec<_> = sim
        .bus()
        .subscribe_multiple(&Topic::ALL)
        .into_iter()
        .map(|(topic, mut rx)| {
            tokio::spawn(async move {
                let mut received = 0usize;
                loop {
                    match rx.recv().await {
                        Ok(_) => received += 1,
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!("{:?} consumer lagged by {} events", topic, skipped);
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
                (topic, received)
            })
        })
        .collect();

    let dt = config.tick_secs();
    let mut ticks = 0u64;
    while !sim.is_over() && sim.state().turn().turn_number <= config.max_turns {
        let _ = sim.tick(dt);
        ticks += 1;

        let turn = sim.state().turn();
        if !config.autoplay && turn.is_controlled_turn() && !sim.state().is_busy() {
            tracing::info!("Controlled side passes turn {}", turn.turn_number);
            sim.end_turn()?;
        }
        tokio::task::yield_now().await;
    }

    match sim.winner() {
        Some(team) => tracing::info!("The {} side wins after {} turns", team, sim.state().turn().turn_number),
        None => tracing::info!("No winner after {} turns", config.max_turns),
    }
    tracing::info!("Simulated {:.1}s in {} ticks", ticks as f32 * dt, ticks);

    drop(sim);
    for consumer in consumers {
        let (topic, received) = consumer.await?;
        tracing::debug!("{:?} consumer received {} events", topic, received);
    }

    tracing::info!("Client shutdown complete");
    Ok(())
}
