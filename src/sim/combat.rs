//! Combat resolution
//!
//! Collision order within a tick: projectile hits, then enemy contact with
//! the player, then pickup collection. Loot from this tick's kills is
//! appended only after the collection scan, so it can be picked up no
//! earlier than the next tick.

use glam::Vec2;
use rand::Rng;

use super::run::{RunEvent, RunPhase};
use super::state::{GameState, Pickup, PickupKind};

pub(crate) fn resolve(state: &mut GameState, dt: f32) {
    let deaths = projectile_hits(state);
    contact_damage(state);
    if state.phase != RunPhase::Defeat {
        magnet_pull(state, dt);
        collect_pickups(state);
    }
    drop_loot(state, deaths);
}

#[inline]
fn overlaps(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let r = a_radius + b_radius;
    a_pos.distance_squared(b_pos) <= r * r
}

/// Apply projectile damage; returns the positions of enemies killed.
fn projectile_hits(state: &mut GameState) -> Vec<Vec2> {
    let mut deaths = Vec::new();
    let mut pi = 0;
    while pi < state.projectiles.len() {
        let mut spent = false;
        let mut ei = 0;
        while ei < state.enemies.len() {
            let proj = &state.projectiles[pi];
            let enemy = &state.enemies[ei];
            let already_hit = proj.penetrating && proj.hit_ids.contains(&enemy.id);
            if already_hit || !overlaps(proj.pos, proj.radius, enemy.pos, enemy.radius) {
                ei += 1;
                continue;
            }

            let damage = proj.damage;
            if proj.penetrating {
                let id = enemy.id;
                state.projectiles[pi].hit_ids.push(id);
            }
            state.enemies[ei].hp -= damage as f32;
            if state.enemies[ei].hp <= 0.0 {
                let enemy = state.enemies.remove(ei);
                state.kill_count += 1;
                state.events.push(RunEvent::EnemyKilled { pos: enemy.pos });
                deaths.push(enemy.pos);
            } else {
                ei += 1;
            }

            if !state.projectiles[pi].penetrating {
                state.projectiles.remove(pi);
                spent = true;
                break;
            }
        }
        if !spent {
            pi += 1;
        }
    }
    deaths
}

/// Enemy contact: ramming costs the enemy its life and the player one hit,
/// opening the invincibility window. Contact while invincible is ignored.
fn contact_damage(state: &mut GameState) {
    let now = state.run_time;
    let tuning = &state.tuning;
    let player = &mut state.player;
    let events = &mut state.events;
    state.enemies.retain(|enemy| {
        if !overlaps(player.pos, player.radius, enemy.pos, enemy.radius) {
            return true;
        }
        if player.is_invincible(now) {
            return true;
        }
        player.apply_health(-tuning.contact_damage);
        player.invincible_until = Some(now + tuning.contact_invincibility);
        false
    });
    if player.health == 0 {
        state.phase = RunPhase::Defeat;
        events.push(RunEvent::Defeat);
        log::info!("defeat after {:.1}s, {} kills", now, state.kill_count);
    }
}

/// Pull pickups within magnet range toward the player at a fixed speed.
fn magnet_pull(state: &mut GameState, dt: f32) {
    let range = state.stats.magnet_range;
    if range <= 0.0 {
        return;
    }
    let target = state.player.pos;
    let step = state.tuning.magnet_pull_speed * dt;
    for pickup in &mut state.pickups {
        let to_player = target - pickup.pos;
        let dist = to_player.length();
        if dist > f32::EPSILON && dist <= range {
            pickup.pos += to_player / dist * step.min(dist);
        }
    }
}

/// Collect overlapping pickups: experience accumulates, health heals
/// (clamped to max).
fn collect_pickups(state: &mut GameState) {
    let player = &mut state.player;
    let events = &mut state.events;
    state.pickups.retain(|pickup| {
        if !overlaps(
            player.pos,
            player.radius,
            pickup.pos,
            crate::consts::PICKUP_RADIUS,
        ) {
            return true;
        }
        match pickup.kind {
            PickupKind::Exp => player.experience += pickup.value as f32,
            PickupKind::Health => player.apply_health(pickup.value),
        }
        events.push(RunEvent::PickupCollected { kind: pickup.kind });
        false
    });
}

/// Every kill drops an experience orb; some also drop a health orb.
fn drop_loot(state: &mut GameState, deaths: Vec<Vec2>) {
    for pos in deaths {
        let id = state.next_entity_id();
        state.pickups.push(Pickup {
            id,
            kind: PickupKind::Exp,
            pos,
            value: state.tuning.exp_orb_value,
        });
        if state.rng.random_bool(state.tuning.health_orb_chance) {
            let id = state.next_entity_id();
            state.pickups.push(Pickup {
                id,
                kind: PickupKind::Health,
                pos,
                value: state.tuning.health_orb_value,
            });
        }
    }
}
