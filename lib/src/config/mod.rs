// lib/src/config/mod.rs

//! Tracker configuration: a small TOML file with defaults for every key.
//!
//! ```toml
//! deletion_policy = "restrict"
//! unknown_placeholder = "(deleted)"
//!
//! [restock]
//! min = 5
//! max = 15
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};
use models::errors::{TrackingError, TrackingResult};

pub mod config_defaults;
pub mod config_structs;

pub use config_defaults::*;
pub use config_structs::{DeletionPolicy, RestockConfig, TrackerConfig};

/// Parses and validates a configuration document.
pub fn parse_tracker_config(content: &str) -> TrackingResult<TrackerConfig> {
    let config: TrackerConfig = toml::from_str(content)
        .map_err(|e| TrackingError::ConfigurationError(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Loads the configuration from `path`, or the defaults when no path is given.
pub fn load_tracker_config(path: Option<&Path>) -> TrackingResult<TrackerConfig> {
    let Some(path) = path else {
        debug!("No config file given, using defaults");
        return Ok(TrackerConfig::default());
    };

    let content = fs::read_to_string(path)?;
    let config = parse_tracker_config(&content).map_err(|e| match e {
        TrackingError::ConfigurationError(msg) => {
            TrackingError::ConfigurationError(format!("{} ({})", msg, path.display()))
        }
        other => other,
    })?;
    info!("Loaded tracker config from {}: {:?}", path.display(), config);
    Ok(config)
}
