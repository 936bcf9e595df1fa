//! Run difficulty profiles
//!
//! A profile is chosen once by the external difficulty-select dialog and is
//! immutable for the lifetime of the run. The core performs no validation of
//! the fields; hosts are expected to pick from the [`Difficulty`] catalogue.

use serde::{Deserialize, Serialize};

/// Difficulty presets offered by the selection dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "med" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Parameter set for this preset
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                player_speed: 230.0,
                player_health: 5,
                enemy_speed_mult: 0.8,
                spawn_interval_mult: 1.3,
                enemy_health_mult: 0.8,
            },
            Difficulty::Normal => DifficultyProfile {
                player_speed: 200.0,
                player_health: 4,
                enemy_speed_mult: 1.0,
                spawn_interval_mult: 1.0,
                enemy_health_mult: 1.0,
            },
            Difficulty::Hard => DifficultyProfile {
                player_speed: 185.0,
                player_health: 3,
                enemy_speed_mult: 1.2,
                spawn_interval_mult: 0.75,
                enemy_health_mult: 1.4,
            },
        }
    }
}

/// Immutable per-run parameter set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Player movement speed (pixels/sec)
    pub player_speed: f32,
    /// Player starting (and maximum) health
    pub player_health: i32,
    /// Multiplier on the time-scaled enemy pursuit speed
    pub enemy_speed_mult: f32,
    /// Multiplier on the spawn-director interval (lower = more enemies)
    pub spawn_interval_mult: f32,
    /// Multiplier on spawned enemy health
    pub enemy_health_mult: f32,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Difficulty::Normal.profile()
    }
}
