//! End-to-end run scenarios driven through the public API.

use glam::Vec2;
use survivor_arena::consts::*;
use survivor_arena::difficulty::{Difficulty, DifficultyProfile};
use survivor_arena::sim::{
    Enemy, GameState, PickupKind, Projectile, RunEvent, RunPhase, TickInput, tick,
};

/// A profile that never spawns and whose enemies never move, so tests place
/// every enemy themselves.
fn quiet_profile(player_health: i32) -> DifficultyProfile {
    DifficultyProfile {
        player_speed: 200.0,
        player_health,
        enemy_speed_mult: 0.0,
        spawn_interval_mult: 1e9,
        enemy_health_mult: 1.0,
    }
}

fn quiet_state(player_health: i32) -> GameState {
    let mut state = GameState::new(404);
    state.select_difficulty(quiet_profile(player_health));
    state.weapons.clear();
    state.drain_events();
    state
}

fn push_enemy(state: &mut GameState, pos: Vec2, hp: f32) {
    let id = state.next_entity_id();
    state.enemies.push(Enemy {
        id,
        pos,
        radius: ENEMY_RADIUS,
        hp,
    });
}

fn push_bullet(state: &mut GameState, pos: Vec2, damage: i32) {
    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        pos,
        vel: Vec2::ZERO,
        radius: PROJECTILE_RADIUS,
        damage,
        penetrating: false,
        expires_at: f32::MAX,
        hit_ids: Vec::new(),
    });
}

/// 100 unblocked hits, each spaced past the invincibility window, defeat the
/// 100-health player on exactly the 100th.
#[test]
fn hundred_spaced_hits_defeat_a_hundred_health_player() {
    let mut state = quiet_state(100);

    for hit in 1..=100 {
        let player_pos = state.player.pos;
        push_enemy(&mut state, player_pos, 1000.0);
        tick(&mut state, &TickInput::default(), 0.05);
        assert!(state.enemies.is_empty(), "hit {hit} did not land");
        assert_eq!(state.player.health, 100 - hit);
        if hit < 100 {
            assert_eq!(state.phase, RunPhase::Running);
            // Let the invincibility window lapse before the next hit.
            tick(&mut state, &TickInput::default(), 1.01);
        }
    }
    assert_eq!(state.phase, RunPhase::Defeat);
}

/// Fresh run at interval multiplier 1: the first batch lands after exactly
/// 800 ms of accumulated tick time, and it is a single enemy.
#[test]
fn first_spawn_batch_after_800ms() {
    let mut state = GameState::new(404);
    state.select_difficulty(DifficultyProfile {
        spawn_interval_mult: 1.0,
        ..quiet_profile(4)
    });

    for _ in 0..7 {
        tick(&mut state, &TickInput::default(), 0.1);
        assert!(state.enemies.is_empty());
    }
    tick(&mut state, &TickInput::default(), 0.1);
    assert_eq!(state.enemies.len(), 1);
}

/// Two 1-damage bullets kill a 2-health enemy: one removal, one exp orb at
/// its position, exactly one kill-count increment.
#[test]
fn two_bullets_finish_a_two_health_enemy() {
    let mut state = quiet_state(4);
    let spot = Vec2::new(520.0, 300.0);
    push_enemy(&mut state, spot, 2.0);
    push_bullet(&mut state, spot, 1);
    push_bullet(&mut state, spot, 1);

    tick(&mut state, &TickInput::default(), 0.016);

    assert!(state.enemies.is_empty());
    assert_eq!(state.kill_count, 1);
    let exp_orbs: Vec<_> = state
        .pickups
        .iter()
        .filter(|p| p.kind == PickupKind::Exp)
        .collect();
    assert_eq!(exp_orbs.len(), 1);
    assert_eq!(exp_orbs[0].pos, spot);
    let kills = state
        .drain_events()
        .iter()
        .filter(|e| matches!(e, RunEvent::EnemyKilled { .. }))
        .count();
    assert_eq!(kills, 1);
}

/// Collecting a 5-value orb at 9/10 experience levels up once, leaving 4
/// experience and a 15 threshold, and pauses for a three-way choice.
#[test]
fn pickup_overflow_levels_up_once() {
    let mut state = quiet_state(4);
    state.player.experience = 9.0;
    state.player.experience_to_next = 10.0;
    let id = state.next_entity_id();
    state.pickups.push(survivor_arena::sim::Pickup {
        id,
        kind: PickupKind::Exp,
        pos: state.player.pos,
        value: 5,
    });

    tick(&mut state, &TickInput::default(), 0.016);

    assert_eq!(state.player.level, 2);
    assert_eq!(state.player.experience, 4.0);
    assert_eq!(state.player.experience_to_next, 15.0);
    assert_eq!(state.phase, RunPhase::LevelUp);

    let events = state.drain_events();
    let offered = events.iter().find_map(|e| match e {
        RunEvent::LevelUp { level, options } => Some((*level, *options)),
        _ => None,
    });
    let (level, options) = offered.expect("level-up event not emitted");
    assert_eq!(level, 2);
    assert_ne!(options[0].id, options[1].id);
    assert_ne!(options[1].id, options[2].id);
    assert_ne!(options[0].id, options[2].id);

    // A selection outside the offered set is ignored; the pause holds.
    let stray = survivor_arena::sim::CATALOGUE
        .iter()
        .find(|o| !options.iter().any(|offered| offered.id == o.id))
        .expect("catalogue larger than one offer");
    state.choose_upgrade(stray.id);
    assert_eq!(state.phase, RunPhase::LevelUp);

    state.choose_upgrade(options[1].id);
    assert_eq!(state.phase, RunPhase::Running);
    assert!(state.pending_upgrades.is_none());
}

/// At exactly 300 s the run is a victory, even at 1 health with an enemy on
/// top of the player.
#[test]
fn victory_at_the_time_boundary_beats_everything() {
    let mut state = quiet_state(4);
    state.player.health = 1;
    let player_pos = state.player.pos;
    push_enemy(&mut state, player_pos, 1000.0);

    tick(&mut state, &TickInput::default(), 300.0);

    assert_eq!(state.phase, RunPhase::Victory);
    assert_eq!(state.player.health, 1);
    assert!(
        state
            .drain_events()
            .iter()
            .any(|e| matches!(e, RunEvent::Victory))
    );
}

/// Restart from a terminal phase rebuilds the run but keeps the profile.
#[test]
fn restart_preserves_the_chosen_profile() {
    let mut state = quiet_state(1);
    let player_pos = state.player.pos;
    push_enemy(&mut state, player_pos, 1000.0);
    tick(&mut state, &TickInput::default(), 0.05);
    assert_eq!(state.phase, RunPhase::Defeat);

    // Restart is a designated input, accepted only in a terminal phase.
    let restart = TickInput {
        restart: true,
        ..TickInput::default()
    };
    tick(&mut state, &restart, 0.016);

    assert_eq!(state.phase, RunPhase::Running);
    assert_eq!(state.run_time, 0.0);
    assert_eq!(state.kill_count, 0);
    assert!(state.enemies.is_empty());
    assert!(state.pickups.is_empty());
    assert_eq!(state.player.max_health, 1);
    assert_eq!(state.profile, quiet_profile(1));
    assert!(
        state
            .drain_events()
            .iter()
            .any(|e| matches!(e, RunEvent::Restarted))
    );
}

/// The standard presets drive a full run loop end to end without violating
/// phase rules (smoke test over the real catalogue).
#[test]
fn normal_preset_run_smoke() {
    let mut state = GameState::new(1234);
    state.select_difficulty(Difficulty::Normal.profile());

    let input = TickInput {
        move_x: 1,
        move_y: 0,
        restart: false,
    };
    for _ in 0..(20 * 60) {
        tick(&mut state, &input, 1.0 / 60.0);
        if state.phase == RunPhase::LevelUp {
            let options = state.pending_upgrades.expect("pause without options");
            state.choose_upgrade(options[0].id);
        }
        assert!(state.player.health >= 0);
        assert!(state.player.health <= state.player.max_health);
        assert!(state.enemies.iter().all(|e| e.hp > 0.0));
        if state.phase.is_terminal() {
            break;
        }
    }
}
