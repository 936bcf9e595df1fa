//! Run lifecycle: phase machine and host-facing messages
//!
//! External collaborators (difficulty dialog, level-up dialog, renderer)
//! talk to the simulation only through typed inbound calls and the drained
//! outbound event queue - there is no shared mutable state across that
//! boundary.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::progression;
use super::state::{GameState, PickupKind};
use super::upgrades::{UpgradeId, UpgradeOption};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Waiting for the difficulty dialog; the simulation does not tick.
    AwaitingDifficulty,
    /// Active gameplay.
    Running,
    /// Logically paused awaiting one upgrade selection.
    LevelUp,
    /// The run timer expired with the player alive.
    Victory,
    /// Player health reached zero.
    Defeat,
}

impl RunPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunPhase::Victory | RunPhase::Defeat)
    }
}

/// Outbound events, drained by the host once per frame.
#[derive(Debug, Clone)]
pub enum RunEvent {
    RunStarted,
    /// Entering the level-up pause; the host must answer with
    /// [`GameState::choose_upgrade`].
    LevelUp {
        level: u32,
        options: [UpgradeOption; 3],
    },
    EnemyKilled { pos: Vec2 },
    PickupCollected { kind: PickupKind },
    Victory,
    Defeat,
    Restarted,
}

impl GameState {
    /// Install the difficulty profile and start the run.
    ///
    /// Accepted exactly once, before the first Running tick; later calls are
    /// ignored so the profile stays immutable for the run's lifetime.
    pub fn select_difficulty(&mut self, profile: crate::difficulty::DifficultyProfile) {
        if self.phase != RunPhase::AwaitingDifficulty {
            log::warn!("difficulty already selected, ignoring");
            return;
        }
        self.profile = profile;
        self.reset_for_run();
        self.phase = RunPhase::Running;
        self.events.push(RunEvent::RunStarted);
        log::info!(
            "run started: {} hp, speed {}",
            profile.player_health,
            profile.player_speed
        );
    }

    /// Answer the pending level-up choice.
    ///
    /// Selections that do not name one of the three most recently offered
    /// options are ignored and the pause continues.
    pub fn choose_upgrade(&mut self, id: UpgradeId) {
        if self.phase != RunPhase::LevelUp {
            log::warn!("upgrade selection {id:?} outside a level-up pause, ignoring");
            return;
        }
        let Some(options) = self.pending_upgrades else {
            return;
        };
        if !options.iter().any(|option| option.id == id) {
            log::warn!("upgrade selection {id:?} not among the offered options, ignoring");
            return;
        }
        progression::apply_upgrade(self, id);
        self.pending_upgrades = None;
        self.phase = RunPhase::Running;
        log::info!("upgrade applied: {id:?}");
    }

    /// Restart after Victory or Defeat, preserving the chosen profile.
    ///
    /// Ignored in any non-terminal phase.
    pub(crate) fn request_restart(&mut self) {
        if !self.phase.is_terminal() {
            return;
        }
        self.run_index += 1;
        self.rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.run_index as u64));
        self.reset_for_run();
        self.phase = RunPhase::Running;
        self.events.push(RunEvent::Restarted);
        log::info!("run restarted (attempt {})", self.run_index + 1);
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<RunEvent> {
        std::mem::take(&mut self.events)
    }
}
