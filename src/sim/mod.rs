//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed 30 Hz tick only; velocities are expressed per tick
//! - Seeded RNG only (level generation)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use state::{Block, Collectible, GamePhase, GameState, Mob, Player, PowerUp, PowerUpKind};
pub use tick::{TickInput, generate_level, reset_game, tick};
