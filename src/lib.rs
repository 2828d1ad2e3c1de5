//! Blockhop - a tiny single-screen platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: macroquad drawing layer (camera, palette, HUD)
//! - `settings`: User preferences
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical viewport width in pixels (the window is an integer upscale)
    pub const VIEW_WIDTH: f32 = 160.0;
    /// Logical viewport height in pixels
    pub const VIEW_HEIGHT: f32 = 120.0;
    /// Window upscale factor
    pub const WINDOW_SCALE: i32 = 4;

    /// Fixed simulation rate; velocities are expressed per tick
    pub const TICK_RATE: u32 = 30;
    /// Wall-clock duration of one tick
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks per display frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Top of the ground slab
    pub const GROUND_Y: f32 = 100.0;
    /// Ground slab thickness
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// Elevated platform width
    pub const PLATFORM_WIDTH: f32 = 20.0;
    /// Elevated platform height
    pub const PLATFORM_HEIGHT: f32 = 10.0;

    /// Player sprite size (a square)
    pub const PLAYER_SIZE: f32 = 8.0;
    /// Mob sprite size
    pub const MOB_SIZE: f32 = 8.0;
    /// Power-up/collectible sprite size
    pub const PICKUP_SIZE: f32 = 8.0;

    /// Player spawn point
    pub const PLAYER_SPAWN_X: f32 = 20.0;
    pub const PLAYER_SPAWN_Y: f32 = 80.0;

    /// Falling past this y is fatal from any phase
    pub const FALL_LIMIT_Y: f32 = VIEW_HEIGHT * 2.0;

    /// Downward probe distance for the on-ground check
    pub const GROUND_PROBE: f32 = 1.0;
}
