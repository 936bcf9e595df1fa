//! Movement and steering
//!
//! Player motion follows the normalized input vector and is clamped to the
//! arena. Enemies are pure pursuit: each tick they re-aim at the player's
//! current position and step toward it at the time-scaled pursuit speed.
//! Projectiles integrate their velocity and despawn on their expiry
//! timestamp.

use crate::{clamp_to_arena, input_direction};

use super::state::GameState;
use super::tick::TickInput;

pub(crate) fn update(state: &mut GameState, input: &TickInput, dt: f32) {
    let dir = input_direction(input.move_x, input.move_y);
    let player = &mut state.player;
    player.pos = clamp_to_arena(player.pos + dir * player.speed * dt, player.radius);

    let target = state.player.pos;
    let pursuit_speed = (state.tuning.enemy_base_speed
        + state.tuning.enemy_speed_ramp * state.run_time)
        * state.profile.enemy_speed_mult;
    for enemy in &mut state.enemies {
        let to_player = target - enemy.pos;
        let dist = to_player.length();
        if dist > f32::EPSILON {
            enemy.pos += to_player / dist * (pursuit_speed * dt).min(dist);
        }
    }

    let now = state.run_time;
    for proj in &mut state.projectiles {
        proj.pos += proj.vel * dt;
    }
    state.projectiles.retain(|proj| now < proj.expires_at);
}
