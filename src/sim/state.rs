//! Game state and entity types
//!
//! Everything gameplay owns lives here, aggregated under a single
//! `GameState` constructed once per process and reset in place.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::aabb::Aabb;
use super::collision;
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting on the title screen
    Title,
    /// Active gameplay
    Playing,
    /// Run ended; confirm restarts
    GameOver,
}

/// Static terrain. Never mutated after generation.
#[derive(Debug, Clone)]
pub struct Block {
    pub aabb: Aabb,
    /// Fill palette index
    pub color: u8,
    /// Frame palette index
    pub frame_color: u8,
}

impl Block {
    pub fn new(x: f32, y: f32, w: f32, h: f32, color: u8, frame_color: u8) -> Self {
        Self {
            aabb: Aabb::new(x, y, w, h),
            color,
            frame_color,
        }
    }
}

/// The player
#[derive(Debug, Clone)]
pub struct Player {
    pub aabb: Aabb,
    pub vel: Vec2,
    /// Remaining lives; 0 ends the run
    pub life: u32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Jump impulse (negative = up); jump power-ups strengthen it
    pub jump_strength: f32,
    /// Horizontal speed per tick; speed power-ups raise it
    pub move_speed: f32,
    pub on_ground: bool,
    /// Tick until which the player would be invincible. Written by the
    /// invincibility power-up; the mob damage path that would read it is
    /// inert, so contact currently costs nothing either way.
    pub invincible_until: u64,
}

impl Player {
    pub fn new(x: f32, y: f32, tuning: &Tuning) -> Self {
        Self {
            aabb: Aabb::new(x, y, PLAYER_SIZE, PLAYER_SIZE),
            vel: Vec2::ZERO,
            life: tuning.start_life,
            gravity: tuning.gravity,
            jump_strength: tuning.jump_strength,
            move_speed: tuning.move_speed,
            on_ground: false,
            invincible_until: 0,
        }
    }

    /// Advance one tick: input, gravity, per-axis block resolution, then
    /// the ground probe. Left input wins when both directions are held.
    pub fn update(&mut self, input: &TickInput, blocks: &[Block]) {
        self.vel.x = 0.0;
        if input.left {
            self.vel.x = -self.move_speed;
        } else if input.right {
            self.vel.x = self.move_speed;
        }
        if input.jump && self.on_ground {
            self.vel.y = self.jump_strength;
        }

        self.vel.y += self.gravity;
        let next = self.aabb.pos + self.vel;

        let (pos, vel) = collision::resolve_blocks(&self.aabb, self.vel, next, blocks);
        self.aabb.pos = pos;
        self.vel = vel;

        self.on_ground = collision::on_ground(&self.aabb, blocks);
    }
}

/// A patrolling mob: walks horizontally, turns around at blocks, ignores
/// gravity entirely.
#[derive(Debug, Clone)]
pub struct Mob {
    pub aabb: Aabb,
    /// Signed horizontal speed per tick
    pub vx: f32,
}

impl Mob {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            aabb: Aabb::new(x, y, MOB_SIZE, MOB_SIZE),
            vx: speed,
        }
    }

    /// Step the patrol; a blocked step reverses direction and forfeits the
    /// move this tick.
    pub fn update(&mut self, blocks: &[Block]) {
        let next_x = self.aabb.pos.x + self.vx;
        if collision::blocked_horizontally(&self.aabb, next_x, blocks) {
            self.vx = -self.vx;
        } else {
            self.aabb.pos.x = next_x;
        }
    }
}

/// Power-up effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Speed,
    Jump,
    Invincibility,
}

/// A one-shot pickup that mutates player parameters
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub aabb: Aabb,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind) -> Self {
        Self {
            aabb: Aabb::new(x, y, PICKUP_SIZE, PICKUP_SIZE),
            kind,
        }
    }

    /// Apply the effect. Speed stacks additively and unbounded, jump
    /// multiplicatively; invincibility arms a timer nothing consumes.
    pub fn apply(&self, player: &mut Player, now: u64, tuning: &Tuning) {
        match self.kind {
            PowerUpKind::Speed => player.move_speed += tuning.speed_bonus,
            PowerUpKind::Jump => player.jump_strength *= tuning.jump_multiplier,
            PowerUpKind::Invincibility => {
                player.invincible_until = now + tuning.invincibility_ticks;
            }
        }
    }
}

/// A collectible: a forced jump plus one life
#[derive(Debug, Clone)]
pub struct Collectible {
    pub aabb: Aabb,
}

impl Collectible {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            aabb: Aabb::new(x, y, PICKUP_SIZE, PICKUP_SIZE),
        }
    }

    pub fn collect(&self, player: &mut Player, tuning: &Tuning) {
        player.vel.y = tuning.collect_impulse;
        player.life += tuning.collect_life_bonus;
    }
}

/// Complete game state, owned by the frame loop and mutated only there
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Level-generation RNG; survives resets so each run in a session gets
    /// a fresh layout while staying reproducible from the seed
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Displayed level counter (generation is single-level)
    pub level: u32,
    /// Simulation tick counter; advances in every phase
    pub time_ticks: u64,
    pub tuning: Tuning,
    pub player: Player,
    pub blocks: Vec<Block>,
    pub mobs: Vec<Mob>,
    pub powerups: Vec<PowerUp>,
    pub collectibles: Vec<Collectible>,
}

impl GameState {
    /// Create a state with empty collections; call
    /// [`generate_level`](super::tick::generate_level) to populate them.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            score: 0,
            level: 1,
            time_ticks: 0,
            player: Player::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, &tuning),
            tuning,
            blocks: Vec::new(),
            mobs: Vec::new(),
            powerups: Vec::new(),
            collectibles: Vec::new(),
        }
    }
}
