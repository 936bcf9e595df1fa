//! Spawn director
//!
//! Accumulates tick time and releases a batch of enemies whenever the
//! accumulator reaches the current interval. Interval, batch size, and
//! enemy health all scale with elapsed run time; the interval is floored
//! so very long runs cannot produce a runaway spawn rate.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

use super::state::{Enemy, GameState};

pub(crate) fn update(state: &mut GameState, dt: f32) {
    state.spawn_timer += dt;
    let t = state.run_time;
    let interval = spawn_interval(state, t);
    if state.spawn_timer < interval {
        return;
    }
    state.spawn_timer = 0.0;

    let batch = batch_size(&mut state.rng, t);
    let hp = enemy_health(state, t);
    for _ in 0..batch {
        let pos = edge_spawn_position(&mut state.rng);
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            pos,
            radius: ENEMY_RADIUS,
            hp,
        });
    }
}

/// Current interval between batches, in seconds.
pub(crate) fn spawn_interval(state: &GameState, t: f32) -> f32 {
    (state.tuning.spawn_interval_base - state.tuning.spawn_interval_decay * t)
        .max(state.tuning.spawn_interval_floor)
        * state.profile.spawn_interval_mult
}

/// Batch size is banded by elapsed run time (inclusive random ranges).
fn batch_size(rng: &mut Pcg32, t: f32) -> u32 {
    if t < 60.0 {
        1
    } else if t < 180.0 {
        rng.random_range(1..=2)
    } else {
        rng.random_range(2..=3)
    }
}

/// Health for an enemy spawned at elapsed time `t`.
pub(crate) fn enemy_health(state: &GameState, t: f32) -> f32 {
    ((state.tuning.enemy_base_health + (t / 60.0).floor()) * state.profile.enemy_health_mult)
        .ceil()
}

/// A point one enemy-radius outside a uniformly chosen arena edge, at a
/// uniform coordinate along that edge.
fn edge_spawn_position(rng: &mut Pcg32) -> Vec2 {
    match rng.random_range(0..4) {
        0 => Vec2::new(rng.random_range(0.0..ARENA_WIDTH), -ENEMY_RADIUS),
        1 => Vec2::new(ARENA_WIDTH + ENEMY_RADIUS, rng.random_range(0.0..ARENA_HEIGHT)),
        2 => Vec2::new(rng.random_range(0.0..ARENA_WIDTH), ARENA_HEIGHT + ENEMY_RADIUS),
        _ => Vec2::new(-ENEMY_RADIUS, rng.random_range(0.0..ARENA_HEIGHT)),
    }
}
