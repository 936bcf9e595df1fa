//! Autonomous weapon system
//!
//! Each weapon fires independently once the run clock passes its cooldown.
//! Targeted weapons aim at the nearest live enemy; with no enemy on the
//! field they hold fire and their cooldown is not consumed.

use glam::Vec2;

use crate::consts::PROJECTILE_RADIUS;

use super::state::{Enemy, GameState, Projectile, WeaponKind};

pub(crate) fn update(state: &mut GameState) {
    let now = state.run_time;
    for wi in 0..state.weapons.len() {
        let weapon = state.weapons[wi];
        if !weapon.ready(now) {
            continue;
        }
        let fired = match weapon.kind {
            WeaponKind::Bullet => match bearing_to_nearest(&state.enemies, state.player.pos) {
                Some(bearing) => {
                    fire_spread(state, weapon.damage(), bearing);
                    true
                }
                None => false,
            },
            WeaponKind::Laser => match bearing_to_nearest(&state.enemies, state.player.pos) {
                Some(bearing) => {
                    fire_laser(state, bearing);
                    true
                }
                None => false,
            },
            WeaponKind::Orbit => {
                fire_ring(state, weapon.damage());
                true
            }
        };
        if fired {
            state.weapons[wi].last_fired_at = now;
        }
    }
}

/// Index of the nearest live enemy, by Euclidean distance.
pub fn nearest_enemy(enemies: &[Enemy], from: Vec2) -> Option<usize> {
    let mut min_dist = f32::MAX;
    let mut nearest = None;
    for (i, enemy) in enemies.iter().enumerate() {
        let dist = enemy.pos.distance_squared(from);
        if dist < min_dist {
            min_dist = dist;
            nearest = Some(i);
        }
    }
    nearest
}

fn bearing_to_nearest(enemies: &[Enemy], from: Vec2) -> Option<f32> {
    nearest_enemy(enemies, from).map(|i| {
        let d = enemies[i].pos - from;
        d.y.atan2(d.x)
    })
}

/// Three projectiles fanned around the target bearing.
fn fire_spread(state: &mut GameState, damage: i32, bearing: f32) {
    let spread = state.tuning.bullet_spread;
    let speed = state.tuning.bullet_speed * state.stats.projectile_speed;
    let expires_at = state.run_time + state.tuning.bullet_lifetime;
    for offset in [-spread, 0.0, spread] {
        spawn_projectile(state, bearing + offset, speed, damage, false, expires_at);
    }
}

/// A single fast, short-lived penetrating shot along the bearing.
fn fire_laser(state: &mut GameState, bearing: f32) {
    let speed = state.tuning.laser_speed * state.stats.projectile_speed;
    let damage = state.tuning.laser_damage;
    let expires_at = state.run_time + state.tuning.laser_lifetime;
    spawn_projectile(state, bearing, speed, damage, true, expires_at);
}

/// A ring of projectiles at evenly spaced headings around the player.
fn fire_ring(state: &mut GameState, damage: i32) {
    let count = state.tuning.orbit_count.max(1);
    let speed = state.tuning.orbit_speed * state.stats.projectile_speed;
    let expires_at = state.run_time + state.tuning.bullet_lifetime;
    for k in 0..count {
        let bearing = std::f32::consts::TAU * k as f32 / count as f32;
        spawn_projectile(state, bearing, speed, damage, false, expires_at);
    }
}

fn spawn_projectile(
    state: &mut GameState,
    bearing: f32,
    speed: f32,
    damage: i32,
    penetrating: bool,
    expires_at: f32,
) {
    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        pos: state.player.pos,
        vel: Vec2::new(bearing.cos(), bearing.sin()) * speed,
        radius: PROJECTILE_RADIUS * state.stats.area_mult,
        damage,
        penetrating,
        expires_at,
        hit_ids: Vec::new(),
    });
}
