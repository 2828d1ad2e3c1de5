//! Blockhop entry point
//!
//! Owns the window, polls keys into a `TickInput`, and drives the
//! fixed-timestep simulation with an accumulator.

use macroquad::prelude::*;

use blockhop::consts::*;
use blockhop::renderer;
use blockhop::sim::{GameState, TickInput, generate_level, tick};
use blockhop::{Settings, Tuning};

fn window_conf() -> Conf {
    Conf {
        window_title: "Blockhop".to_owned(),
        window_width: VIEW_WIDTH as i32 * WINDOW_SCALE,
        window_height: VIEW_HEIGHT as i32 * WINDOW_SCALE,
        window_resizable: false,
        ..Default::default()
    }
}

/// Latch key states into the tick input. Edge flags stay set until a tick
/// consumes them, so a press during a frame with no tick is not lost.
fn poll_input(input: &mut TickInput) {
    input.left = is_key_down(KeyCode::Left);
    input.right = is_key_down(KeyCode::Right);
    if is_key_pressed(KeyCode::Space) {
        input.jump = true;
    }
    if is_key_pressed(KeyCode::Enter) {
        input.confirm = true;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let settings = Settings::load();
    let tuning = Tuning::load();
    let seed = settings
        .seed
        .unwrap_or_else(|| macroquad::miniquad::date::now() as u64);
    log::info!("starting with seed {}", seed);

    let mut state = GameState::new(seed, tuning);
    generate_level(&mut state);

    let mut input = TickInput::default();
    let mut accumulator = 0.0_f32;

    loop {
        poll_input(&mut input);

        // Fixed-step simulation; cap the debt so a long hitch can't spiral
        accumulator += get_frame_time().min(0.25);
        let mut substeps = 0;
        while accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input);
            accumulator -= TICK_DT;
            substeps += 1;

            // One-shot edges are consumed by the tick that saw them
            input.jump = false;
            input.confirm = false;
        }
        if substeps == MAX_SUBSTEPS {
            accumulator = 0.0;
        }

        renderer::draw(&state, &settings);
        next_frame().await;
    }
}
