//! Expedition binary for the Delve action engine.
//!
//! Wires the action engine to a real configuration file and a seeded random
//! generator, then sends a party down a chain of freshly discovered rooms.
//! Every action the engine offers is exercised along the way.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `delve-config.yaml` (defaults if absent)
//! 3. Set up camp and recruit the party
//! 4. Run the expedition
//! 5. Log the summary

mod error;
mod expedition;

use std::path::Path;

use delve_actions::DelveConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::expedition::Expedition;

/// Configuration file looked up in the working directory.
const CONFIG_PATH: &str = "delve-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the world cannot be
/// built.
fn main() -> Result<(), EngineError> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("delve-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        seed = config.session.seed,
        party_size = config.session.party_size,
        depth = config.session.depth,
        unlock_factor = config.actions.unlock_factor,
        "Configuration loaded"
    );

    // 3. Set up camp.
    let mut expedition = Expedition::new(config)?;

    // 4. Run.
    let summary = expedition.run()?;

    // 5. Report.
    info!(
        places_discovered = summary.places_discovered,
        doors_opened = summary.doors_opened,
        rooms_entered = summary.rooms_entered,
        boxes_opened = summary.boxes_opened,
        boxes_resisted = summary.boxes_resisted,
        items_looted = summary.items_looted,
        items_refused = summary.items_refused,
        hits = summary.hits,
        blocks = summary.blocks,
        "Expedition complete"
    );

    Ok(())
}

/// Load configuration from `delve-config.yaml`, falling back to defaults.
///
/// Environment overrides apply in both cases.
fn load_config() -> Result<DelveConfig, EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok(DelveConfig::from_file(config_path)?)
    } else {
        info!("Config file not found, using defaults");
        let mut config = DelveConfig::default();
        config.apply_env_overrides();
        Ok(config)
    }
}
