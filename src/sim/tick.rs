//! Fixed timestep game tick
//!
//! One `tick` call advances the whole game by a single 30 Hz step: the
//! phase machine, player physics, mob patrols and pickup cleanup.

use rand::Rng;

use super::state::{Block, Collectible, GamePhase, GameState, Mob, Player, PowerUp, PowerUpKind};
use crate::consts::*;

/// Input flags for a single tick. `left`/`right` are held states; `jump`
/// and `confirm` are edge-triggered and must be cleared by the caller once
/// a tick has consumed them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump key press edge
    pub jump: bool,
    /// Menu confirm press edge
    pub confirm: bool,
}

/// Advance the game by one fixed step
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Falling out of the world is fatal from any phase; this runs before
    // the phase dispatch
    if state.player.aabb.pos.y > FALL_LIMIT_Y {
        if state.phase != GamePhase::GameOver {
            log::info!(
                "fell out of the world at y={:.0}, score {}",
                state.player.aabb.pos.y,
                state.score
            );
        }
        state.phase = GamePhase::GameOver;
    }

    match state.phase {
        GamePhase::Title => {
            if input.confirm {
                log::info!("run started (seed {})", state.seed);
                state.phase = GamePhase::Playing;
            }
        }
        GamePhase::Playing => {
            update_playing(state, input);
            if state.player.life == 0 {
                log::info!("out of lives, score {}", state.score);
                state.phase = GamePhase::GameOver;
            }
        }
        GamePhase::GameOver => {
            if input.confirm {
                reset_game(state);
            }
        }
    }
}

/// One gameplay step: player physics, mob patrols, contact cleanup
fn update_playing(state: &mut GameState, input: &TickInput) {
    let GameState {
        player,
        blocks,
        mobs,
        powerups,
        collectibles,
        score,
        tuning,
        time_ticks,
        ..
    } = state;

    player.update(input, blocks);

    for mob in mobs.iter_mut() {
        mob.update(blocks);
    }
    // Touched mobs vanish; the life penalty is deliberately absent
    mobs.retain(|mob| !player.aabb.intersects(&mob.aabb));

    let now = *time_ticks;
    powerups.retain(|powerup| {
        if player.aabb.intersects(&powerup.aabb) {
            powerup.apply(player, now, tuning);
            *score += tuning.powerup_score;
            false
        } else {
            true
        }
    });

    collectibles.retain(|collectible| {
        if player.aabb.intersects(&collectible.aabb) {
            collectible.collect(player, tuning);
            false
        } else {
            true
        }
    });
}

/// Populate the level: a full-width ground slab, then elevated platforms
/// each carrying one mob and either a power-up or a collectible just above.
pub fn generate_level(state: &mut GameState) {
    // palette 3 = green terrain, 7 = white frame
    state
        .blocks
        .push(Block::new(0.0, GROUND_Y, VIEW_WIDTH, GROUND_HEIGHT, 3, 7));

    for _ in 0..state.tuning.platform_count {
        let x = state.rng.random_range(50..=300) as f32;
        let y = state.rng.random_range(60..=90) as f32;
        state
            .blocks
            .push(Block::new(x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT, 3, 7));
        state
            .mobs
            .push(Mob::new(x + PLATFORM_WIDTH, y - 10.0, state.tuning.mob_speed));
        if state.rng.random_bool(0.5) {
            let kind = match state.rng.random_range(0..3) {
                0 => PowerUpKind::Speed,
                1 => PowerUpKind::Jump,
                _ => PowerUpKind::Invincibility,
            };
            state.powerups.push(PowerUp::new(x + 10.0, y - 20.0, kind));
        } else {
            state.collectibles.push(Collectible::new(x + 10.0, y - 20.0));
        }
    }

    log::info!(
        "generated level: {} blocks, {} mobs, {} powerups, {} collectibles",
        state.blocks.len(),
        state.mobs.len(),
        state.powerups.len(),
        state.collectibles.len()
    );
}

/// Reinitialize counters, player and collections, returning to the title
/// screen. The RNG is kept, so the next run gets a fresh layout.
pub fn reset_game(state: &mut GameState) {
    state.score = 0;
    state.level = 1;
    state.player = Player::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, &state.tuning);
    state.blocks.clear();
    state.mobs.clear();
    state.powerups.clear();
    state.collectibles.clear();
    generate_level(state);
    state.phase = GamePhase::Title;
    log::info!("game reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn fresh_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default());
        generate_level(&mut state);
        state
    }

    #[test]
    fn test_title_confirm_starts_play() {
        let mut state = fresh_state(12345);
        assert_eq!(state.phase, GamePhase::Title);

        // No confirm: stays on the title screen
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Title);

        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_gravity_accumulates_in_free_fall() {
        // No level: nothing below the player
        let mut state = GameState::new(1, Tuning::default());
        state.phase = GamePhase::Playing;
        let gravity = state.tuning.gravity;

        let mut prev_vy = 0.0;
        for i in 1..=5 {
            tick(&mut state, &TickInput::default());
            let vy = state.player.vel.y;
            assert!((vy - gravity * i as f32).abs() < 1e-5);
            assert!(vy > prev_vy);
            prev_vy = vy;
        }
    }

    #[test]
    fn test_fall_out_forces_game_over_from_any_phase() {
        for phase in [GamePhase::Title, GamePhase::Playing, GamePhase::GameOver] {
            let mut state = fresh_state(7);
            state.phase = phase;
            state.player.aabb.pos.y = FALL_LIMIT_Y + 1.0;
            tick(&mut state, &TickInput::default());
            assert_eq!(state.phase, GamePhase::GameOver, "from {phase:?}");
        }
    }

    #[test]
    fn test_mob_contact_removes_mob_without_damage() {
        let mut state = GameState::new(2, Tuning::default());
        state.phase = GamePhase::Playing;
        state.blocks.push(Block::new(0.0, 88.0, 160.0, 20.0, 3, 7));
        state.mobs.push(Mob::new(20.0, 80.0, 1.0));

        tick(&mut state, &TickInput::default());
        assert!(state.mobs.is_empty());
        assert_eq!(state.player.life, 3);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_powerup_pickup_scores_and_consumes() {
        let mut state = GameState::new(3, Tuning::default());
        state.phase = GamePhase::Playing;
        state.blocks.push(Block::new(0.0, 88.0, 160.0, 20.0, 3, 7));
        state
            .powerups
            .push(PowerUp::new(20.0, 80.0, PowerUpKind::Speed));

        tick(&mut state, &TickInput::default());
        assert!(state.powerups.is_empty());
        assert_eq!(state.score, state.tuning.powerup_score);
        let expected = state.tuning.move_speed + state.tuning.speed_bonus;
        assert!((state.player.move_speed - expected).abs() < 1e-6);
    }

    #[test]
    fn test_collectible_grants_life_and_removes() {
        let mut state = GameState::new(4, Tuning::default());
        state.phase = GamePhase::Playing;
        state.blocks.push(Block::new(0.0, 88.0, 160.0, 20.0, 3, 7));
        state.collectibles.push(Collectible::new(20.0, 80.0));

        tick(&mut state, &TickInput::default());
        assert!(state.collectibles.is_empty());
        assert_eq!(state.player.life, state.tuning.start_life + 1);
        assert_eq!(state.player.vel.y, state.tuning.collect_impulse);
    }

    #[test]
    fn test_generation_layout() {
        let state = fresh_state(99);
        let platforms = state.tuning.platform_count as usize;

        // Ground slab first, then the platforms
        assert_eq!(state.blocks.len(), 1 + platforms);
        let ground = &state.blocks[0];
        assert_eq!(ground.aabb.pos.x, 0.0);
        assert_eq!(ground.aabb.pos.y, GROUND_Y);
        assert_eq!(ground.aabb.size.x, VIEW_WIDTH);

        for platform in &state.blocks[1..] {
            let pos = platform.aabb.pos;
            assert!((50.0..=300.0).contains(&pos.x));
            assert!((60.0..=90.0).contains(&pos.y));
            assert_eq!(platform.aabb.size.x, PLATFORM_WIDTH);
            assert_eq!(platform.aabb.size.y, PLATFORM_HEIGHT);
        }

        // One mob per platform, one pickup of either kind per platform
        assert_eq!(state.mobs.len(), platforms);
        assert_eq!(state.powerups.len() + state.collectibles.len(), platforms);
    }

    #[test]
    fn test_determinism() {
        let mut a = fresh_state(424242);
        let mut b = fresh_state(424242);

        let run = TickInput {
            right: true,
            confirm: true,
            ..Default::default()
        };
        for _ in 0..120 {
            tick(&mut a, &run);
            tick(&mut b, &run);
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.player.aabb.pos, b.player.aabb.pos);
        assert_eq!(a.mobs.len(), b.mobs.len());
        for (ma, mb) in a.mobs.iter().zip(&b.mobs) {
            assert_eq!(ma.aabb.pos, mb.aabb.pos);
        }
    }

    #[test]
    fn test_reset_returns_to_title() {
        let mut state = fresh_state(5);
        state.phase = GamePhase::GameOver;
        state.score = 700;
        state.player.move_speed += 2.0;

        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm);

        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.player.move_speed, state.tuning.move_speed);
        assert_eq!(
            state.blocks.len(),
            1 + state.tuning.platform_count as usize
        );
    }
}
