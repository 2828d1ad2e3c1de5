//! macroquad rendering layer
//!
//! Thin immediate-mode wrapper over the sim: a player-following camera,
//! palette lookup, and per-phase screens. Nothing here mutates game state.

pub mod palette;
pub mod scene;

pub use scene::draw;
