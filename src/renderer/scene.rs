//! Scene drawing
//!
//! World geometry goes through a player-following `Camera2D` in logical
//! 160x120 coordinates; text goes through the default camera in window
//! coordinates so the world camera's y-flip cannot mirror glyphs.

use macroquad::prelude::*;

use super::palette;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Aabb, GamePhase, GameState};

/// HUD/menu font size in logical viewport pixels
const FONT_SIZE: f32 = 8.0;

/// Draw one frame of the current state
pub fn draw(state: &GameState, settings: &Settings) {
    clear_background(palette::color(palette::BLACK));

    if state.phase == GamePhase::Playing {
        draw_world(state);
    }

    set_default_camera();
    let scale = screen_width() / VIEW_WIDTH;
    match state.phase {
        GamePhase::Title => {
            label("BLOCKHOP", 54.0, 52.0, palette::RED, scale);
            label("Press Enter to start", 32.0, 64.0, palette::WHITE, scale);
        }
        GamePhase::Playing => draw_hud(state, settings, scale),
        GamePhase::GameOver => {
            label("GAME OVER", 54.0, 52.0, palette::RED, scale);
            label("Press Enter to restart", 30.0, 64.0, palette::WHITE, scale);
        }
    }

    if settings.show_fps {
        label(
            &format!("{} fps", get_fps()),
            VIEW_WIDTH - 32.0,
            10.0,
            palette::GRAY,
            scale,
        );
    }
}

/// World pass: camera centered on the player, y growing downward
fn draw_world(state: &GameState) {
    let center = state.player.aabb.center();
    set_camera(&Camera2D {
        target: vec2(center.x, center.y),
        // Negative y zoom keeps world y pointing down on screen
        zoom: vec2(2.0 / VIEW_WIDTH, -2.0 / VIEW_HEIGHT),
        ..Default::default()
    });

    // Flat draw order: player, blocks, mobs, power-ups, collectibles
    fill_rect(&state.player.aabb, palette::LIME);
    for block in &state.blocks {
        fill_rect(&block.aabb, block.color);
        frame_rect(&block.aabb, block.frame_color);
    }
    for mob in &state.mobs {
        fill_rect(&mob.aabb, palette::RED);
    }
    for powerup in &state.powerups {
        fill_rect(&powerup.aabb, palette::YELLOW);
    }
    for collectible in &state.collectibles {
        fill_rect(&collectible.aabb, palette::PINK);
    }
}

fn draw_hud(state: &GameState, settings: &Settings, scale: f32) {
    label(&format!("Score: {}", state.score), 5.0, 10.0, palette::WHITE, scale);
    label(
        &format!("Life: {}", state.player.life),
        5.0,
        20.0,
        palette::RED,
        scale,
    );
    label(
        &format!("Level: {}", state.level),
        5.0,
        30.0,
        palette::GREEN,
        scale,
    );

    if settings.debug_overlay {
        let player = &state.player;
        label(
            &format!("pos: {:.1} {:.1}", player.aabb.pos.x, player.aabb.pos.y),
            5.0,
            50.0,
            palette::DARK_BLUE,
            scale,
        );
        label(
            &format!("vel: {:.1} {:.1}", player.vel.x, player.vel.y),
            5.0,
            60.0,
            palette::DARK_BLUE,
            scale,
        );
        label(
            &format!("on_ground: {}", player.on_ground),
            5.0,
            70.0,
            palette::DARK_BLUE,
            scale,
        );
    }
}

fn fill_rect(aabb: &Aabb, index: u8) {
    draw_rectangle(
        aabb.pos.x,
        aabb.pos.y,
        aabb.size.x,
        aabb.size.y,
        palette::color(index),
    );
}

fn frame_rect(aabb: &Aabb, index: u8) {
    draw_rectangle_lines(
        aabb.pos.x,
        aabb.pos.y,
        aabb.size.x,
        aabb.size.y,
        1.0,
        palette::color(index),
    );
}

/// Draw text at logical viewport coordinates scaled to the window
fn label(text: &str, x: f32, y: f32, index: u8, scale: f32) {
    draw_text(text, x * scale, y * scale, FONT_SIZE * scale, palette::color(index));
}
