//! Survivor Arena headless demo driver
//!
//! Runs one full simulated run at a fixed 60 Hz step with a small autopilot
//! standing in for the player and the dialogs, logging HUD telemetry along
//! the way. Useful for smoke-testing balance changes without a renderer.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use survivor_arena::difficulty::Difficulty;
use survivor_arena::sim::{GameState, RunEvent, TickInput, nearest_enemy, tick};

const DEMO_DT: f32 = 1.0 / 60.0;
/// Enemies closer than this take steering priority over pickups.
const DANGER_RANGE: f32 = 140.0;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0x5EED);
    let mut state = GameState::new(seed);
    log::info!("demo run starting (seed {seed})");
    state.select_difficulty(Difficulty::Normal.profile());

    let mut steps: u64 = 0;
    loop {
        let input = pilot_input(&state);
        tick(&mut state, &input, DEMO_DT);

        for event in state.drain_events() {
            match event {
                RunEvent::LevelUp { level, options } => {
                    let pick = options[0];
                    log::info!(
                        "level {level}: offered [{}], taking {}",
                        options.map(|o| o.name).join(" / "),
                        pick.name
                    );
                    state.choose_upgrade(pick.id);
                }
                RunEvent::Victory => log::info!("VICTORY"),
                RunEvent::Defeat => log::info!("DEFEAT"),
                _ => {}
            }
        }

        steps += 1;
        if steps % (60 * 15) == 0 {
            let hud = state.hud();
            log::info!(
                "t={:>5.1}s hp {}/{} lvl {} kills {} enemies {}",
                state.run_time,
                hud.health,
                hud.max_health,
                hud.level,
                hud.kill_count,
                state.enemies.len()
            );
        }

        if state.phase.is_terminal() {
            break;
        }
    }

    let hud = state.hud();
    log::info!(
        "run over in {:?} after {:.1}s: level {}, {} kills",
        state.phase,
        state.run_time,
        hud.level,
        hud.kill_count
    );
}

/// Minimal survival steering: back away from the nearest close enemy,
/// otherwise drift toward the nearest pickup.
fn pilot_input(state: &GameState) -> TickInput {
    let player = state.player.pos;

    let steer = match nearest_enemy(&state.enemies, player) {
        Some(i) if state.enemies[i].pos.distance(player) < DANGER_RANGE => {
            player - state.enemies[i].pos
        }
        _ => state
            .pickups
            .iter()
            .min_by(|a, b| {
                a.pos
                    .distance_squared(player)
                    .total_cmp(&b.pos.distance_squared(player))
            })
            .map(|pickup| pickup.pos - player)
            .unwrap_or(Vec2::ZERO),
    };

    TickInput {
        move_x: quantize(steer.x),
        move_y: quantize(steer.y),
        restart: false,
    }
}

fn quantize(v: f32) -> i8 {
    if v > 1.0 {
        1
    } else if v < -1.0 {
        -1
    } else {
        0
    }
}
