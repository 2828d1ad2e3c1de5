//! Data-driven game balance
//!
//! Gameplay constants that are balance knobs rather than level geometry.
//! An optional `tuning.json` in the working directory overrides any subset
//! of the defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Jump impulse (negative = up)
    pub jump_strength: f32,
    /// Player horizontal speed per tick
    pub move_speed: f32,
    /// Mob patrol speed per tick
    pub mob_speed: f32,
    /// Starting lives
    pub start_life: u32,
    /// Upward impulse granted by a collectible
    pub collect_impulse: f32,
    /// Lives granted by a collectible
    pub collect_life_bonus: u32,
    /// Additive move-speed gain per speed power-up
    pub speed_bonus: f32,
    /// Multiplicative jump gain per jump power-up
    pub jump_multiplier: f32,
    /// Invincibility duration in ticks (10 s at 30 Hz)
    pub invincibility_ticks: u64,
    /// Score awarded per power-up
    pub powerup_score: u32,
    /// Elevated platforms per level
    pub platform_count: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_strength: -5.0,
            move_speed: 2.0,
            mob_speed: 1.0,
            start_life: 3,
            collect_impulse: -10.0,
            collect_life_bonus: 1,
            speed_bonus: 0.5,
            jump_multiplier: 1.2,
            invincibility_ticks: 300,
            powerup_score: 100,
            platform_count: 10,
        }
    }
}

impl Tuning {
    const FILE: &'static str = "tuning.json";

    /// Load tuning values, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded {}", Self::FILE);
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {}", Self::FILE, err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
