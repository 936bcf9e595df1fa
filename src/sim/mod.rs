//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-driven only (one step per rendered frame, dt supplied by the host)
//! - Seeded RNG only
//! - Fixed system order within a tick:
//!   spawn -> movement -> firing -> collision -> progression
//! - No rendering or platform dependencies

pub mod combat;
pub mod movement;
pub mod progression;
pub mod run;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod upgrades;
pub mod weapons;

pub use run::{RunEvent, RunPhase};
pub use state::{
    ActorKind, ActorView, Enemy, GameState, HudSnapshot, Pickup, PickupKind, Player, PlayerStats,
    Projectile, Weapon, WeaponKind,
};
pub use tick::{TickInput, tick};
pub use upgrades::{CATALOGUE, UpgradeId, UpgradeKind, UpgradeOption};
pub use weapons::nearest_enemy;
