//! Per-tick orchestration
//!
//! One tick advances the whole simulation by the host-supplied delta. The
//! system order is fixed: spawn -> movement -> firing -> collision ->
//! progression. Loot dropped by a kill therefore becomes collectable no
//! earlier than the following tick.

use super::run::{RunEvent, RunPhase};
use super::state::GameState;
use super::{combat, movement, progression, spawner, weapons};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Raw horizontal direction: -1, 0, or 1 (pre-normalization).
    pub move_x: i8,
    /// Raw vertical direction: -1, 0, or 1 (pre-normalization).
    pub move_y: i8,
    /// Restart request; honored only in a terminal phase.
    pub restart: bool,
}

/// Advance the simulation by `dt` seconds of tick time.
///
/// No-op outside the Running phase: the level-up pause and the difficulty
/// wait simply stop the clock, and terminal phases only listen for the
/// restart trigger.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        RunPhase::Victory | RunPhase::Defeat => {
            if input.restart {
                state.request_restart();
            }
            return;
        }
        RunPhase::AwaitingDifficulty | RunPhase::LevelUp => return,
        RunPhase::Running => {}
    }
    if !(dt > 0.0) {
        return;
    }

    state.run_time += dt;

    // Surviving the full run wins, regardless of anything else this tick.
    if state.run_time >= state.tuning.run_duration {
        state.phase = RunPhase::Victory;
        state.events.push(RunEvent::Victory);
        log::info!("victory: survived {}s with {} kills", state.tuning.run_duration, state.kill_count);
        return;
    }

    spawner::update(state, dt);
    movement::update(state, input, dt);
    weapons::update(state);
    combat::resolve(state, dt);
    if state.phase == RunPhase::Defeat {
        return;
    }
    progression::update(state);
}
