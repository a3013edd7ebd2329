//! Run configuration resource.
//!
//! Manages runner settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [sim]
//! tick_rate = 60
//! max_ticks = 0
//!
//! [input]
//! inputs = jump,action,pause
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_MAX_TICKS: u64 = 0; // 0 = run until the stage finishes
const DEFAULT_INPUTS: &[&str] = &["jump", "action", "pause"];
const DEFAULT_CONFIG_PATH: &str = "./stagekit.ini";

/// Run configuration resource.
///
/// Stores the fixed-step tick rate, the tick budget, and the logical inputs
/// to register with the [`InputLatch`](crate::resources::inputlatch::InputLatch)
/// at startup.
#[derive(Resource, Debug, Clone)]
pub struct RunConfig {
    /// Fixed simulation steps per second.
    pub tick_rate: u32,
    /// Stop after this many ticks; 0 runs until the stage finishes.
    pub max_ticks: u64,
    /// Logical input names registered with the latch at startup.
    pub inputs: Vec<String>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RunConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            max_ticks: DEFAULT_MAX_TICKS,
            inputs: DEFAULT_INPUTS.iter().map(|s| s.to_string()).collect(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Seconds covered by one fixed step.
    pub fn tick_delta(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [sim] section
        if let Some(rate) = config.getuint("sim", "tick_rate").ok().flatten() {
            if rate > 0 {
                self.tick_rate = rate as u32;
            }
        }
        if let Some(ticks) = config.getuint("sim", "max_ticks").ok().flatten() {
            self.max_ticks = ticks;
        }

        // [input] section
        if let Some(inputs) = config.get("input", "inputs") {
            self.inputs = inputs
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        info!(
            "Loaded config: tick_rate={}, max_ticks={}, inputs={:?}",
            self.tick_rate, self.max_ticks, self.inputs
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [sim] section
        config.set("sim", "tick_rate", Some(self.tick_rate.to_string()));
        config.set("sim", "max_ticks", Some(self.max_ticks.to_string()));

        // [input] section
        config.set("input", "inputs", Some(self.inputs.join(",")));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
