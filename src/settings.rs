//! User preferences
//!
//! Loaded from `settings.json` in the working directory; a missing or
//! malformed file falls back to defaults with a logged warning.

use serde::{Deserialize, Serialize};

/// Presentation and session preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Show the FPS counter
    pub show_fps: bool,
    /// Show the developer overlay (player position, velocity, ground flag)
    pub debug_overlay: bool,

    // === Session ===
    /// Pin the run seed for reproducible layouts
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: false,
            debug_overlay: false,
            seed: None,
        }
    }
}

impl Settings {
    const FILE: &'static str = "settings.json";

    /// Load settings, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded {}", Self::FILE);
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {}", Self::FILE, err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the current settings back out
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::FILE, json) {
                    log::warn!("could not write {}: {}", Self::FILE, err);
                }
            }
            Err(err) => log::warn!("could not serialize settings: {}", err),
        }
    }
}
