//! Survivor Arena - a top-down survival-arena simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, combat, progression)
//! - `difficulty`: Run difficulty profiles selected before a run starts
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input polling, and dialog UI are external collaborators: they
//! feed a [`sim::TickInput`] per frame and read back [`sim::HudSnapshot`] and
//! [`sim::ActorView`] plain data, plus drained [`sim::RunEvent`]s.

pub mod difficulty;
pub mod sim;
pub mod tuning;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels, origin top-left)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Entity radii
    pub const PLAYER_RADIUS: f32 = 12.0;
    pub const ENEMY_RADIUS: f32 = 14.0;
    pub const PROJECTILE_RADIUS: f32 = 4.0;
    pub const PICKUP_RADIUS: f32 = 7.0;
}

/// Turn a raw `{-1, 0, 1}` directional pair into a unit (or zero) vector.
///
/// Diagonal input is normalized so it is not faster than axis-aligned input.
#[inline]
pub fn input_direction(x: i8, y: i8) -> Vec2 {
    Vec2::new(x as f32, y as f32).normalize_or_zero()
}

/// Clamp a circle of the given radius fully inside the arena bounds.
#[inline]
pub fn clamp_to_arena(pos: Vec2, radius: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, consts::ARENA_WIDTH - radius),
        pos.y.clamp(radius, consts::ARENA_HEIGHT - radius),
    )
}
