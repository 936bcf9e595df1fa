//! Game state and core simulation types
//!
//! Plain data only: every entity is a simulation record keyed by a stable id.
//! Rendering handles are derived views ([`ActorView`]), never the entities
//! themselves.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::run::{RunEvent, RunPhase};
use super::upgrades::UpgradeOption;
use crate::consts::*;
use crate::difficulty::DifficultyProfile;
use crate::tuning::Tuning;

/// The player-controlled survivor
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub health: i32,
    pub max_health: i32,
    /// Movement speed (pixels/sec), upgradable mid-run.
    pub speed: f32,
    pub level: u32,
    pub experience: f32,
    pub experience_to_next: f32,
    /// Run-clock timestamp until which contact deals no damage.
    pub invincible_until: Option<f32>,
}

impl Player {
    pub fn new(profile: &DifficultyProfile, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
            radius: PLAYER_RADIUS,
            health: profile.player_health,
            max_health: profile.player_health,
            speed: profile.player_speed,
            level: 1,
            experience: 0.0,
            experience_to_next: tuning.exp_to_first_level,
            invincible_until: None,
        }
    }

    /// Apply a health delta, clamped to `[0, max_health]`.
    pub fn apply_health(&mut self, delta: i32) {
        self.health = (self.health + delta).clamp(0, self.max_health);
    }

    pub fn is_invincible(&self, now: f32) -> bool {
        self.invincible_until.is_some_and(|until| now < until)
    }
}

/// A pursuing enemy. Pure pursuit, recomputed every tick - no stored path.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub hp: f32,
}

/// Weapon variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    /// Three-way spread toward the nearest enemy
    Bullet,
    /// Single penetrating beam shot toward the nearest enemy
    Laser,
    /// Ring burst at evenly spaced headings, no target needed
    Orbit,
}

/// An autonomous weapon. Fires whenever the run clock passes its cooldown.
#[derive(Debug, Clone, Copy)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub level: u32,
    pub cooldown: f32,
    /// Run-clock timestamp of the last successful shot.
    pub last_fired_at: f32,
}

impl Weapon {
    fn new(kind: WeaponKind, cooldown: f32, now: f32) -> Self {
        Self {
            kind,
            level: 1,
            cooldown,
            // Loaded on creation: eligible to fire on the next tick.
            last_fired_at: now - cooldown,
        }
    }

    pub fn bullet(tuning: &Tuning, now: f32) -> Self {
        Self::new(WeaponKind::Bullet, tuning.bullet_cooldown, now)
    }

    pub fn laser(tuning: &Tuning, now: f32) -> Self {
        Self::new(WeaponKind::Laser, tuning.laser_cooldown, now)
    }

    pub fn orbit(tuning: &Tuning, now: f32) -> Self {
        Self::new(WeaponKind::Orbit, tuning.orbit_cooldown, now)
    }

    pub fn ready(&self, now: f32) -> bool {
        now - self.last_fired_at >= self.cooldown
    }

    /// Level-scaled projectile damage.
    pub fn damage(&self) -> i32 {
        1 + (self.level / 2) as i32
    }
}

/// An in-flight projectile
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub damage: i32,
    /// Penetrating projectiles pass through enemies instead of despawning.
    pub penetrating: bool,
    /// Run-clock timestamp after which the projectile despawns unspent.
    pub expires_at: f32,
    /// Enemy ids already damaged (penetrating shots hit each enemy once).
    pub hit_ids: Vec<u32>,
}

/// Pickup variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    Exp,
    Health,
}

/// A collectible orb dropped on enemy death
#[derive(Debug, Clone)]
pub struct Pickup {
    pub id: u32,
    pub kind: PickupKind,
    pub pos: Vec2,
    pub value: i32,
}

/// Upgrade-mutable knobs that are not per-weapon
#[derive(Debug, Clone, Copy)]
pub struct PlayerStats {
    /// Multiplier on projectile speed.
    pub projectile_speed: f32,
    /// Multiplier on projectile radius.
    pub area_mult: f32,
    /// Pickup attraction radius; 0 means the magnet is not unlocked.
    pub magnet_range: f32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            projectile_speed: 1.0,
            area_mult: 1.0,
            magnet_range: 0.0,
        }
    }
}

/// Tag used by the rendering collaborator to pick a drawing routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    Player,
    Enemy,
    Projectile,
    ExpOrb,
    HealthOrb,
}

/// Plain-data drawing handle for one live entity, keyed by stable id
#[derive(Debug, Clone, Copy)]
pub struct ActorView {
    pub id: u32,
    pub kind: ActorKind,
    pub pos: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

const PLAYER_COLOR: [f32; 4] = [0.30, 0.85, 1.00, 1.0];
const ENEMY_COLOR: [f32; 4] = [0.95, 0.35, 0.35, 1.0];
const BULLET_COLOR: [f32; 4] = [1.00, 0.92, 0.45, 1.0];
const LASER_COLOR: [f32; 4] = [0.65, 0.40, 1.00, 1.0];
const EXP_ORB_COLOR: [f32; 4] = [0.45, 0.95, 0.55, 1.0];
const HEALTH_ORB_COLOR: [f32; 4] = [1.00, 0.55, 0.75, 1.0];

/// Per-tick HUD readout
#[derive(Debug, Clone, Copy)]
pub struct HudSnapshot {
    pub health: i32,
    pub max_health: i32,
    pub level: u32,
    pub kill_count: u32,
    pub time_remaining: f32,
    /// Progress toward the next level in `[0, 1)`.
    pub experience_ratio: f32,
    pub phase: RunPhase,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Bumped on restart so reruns get a fresh RNG stream.
    pub run_index: u32,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Set exactly once, before the first Running tick; immutable after.
    pub profile: DifficultyProfile,
    pub phase: RunPhase,
    /// Run clock (seconds of accumulated tick time).
    pub run_time: f32,
    /// Spawn-director accumulator.
    pub spawn_timer: f32,
    pub kill_count: u32,
    pub player: Player,
    pub stats: PlayerStats,
    pub weapons: Vec<Weapon>,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub pickups: Vec<Pickup>,
    /// Options offered by the pending level-up choice, if any.
    pub pending_upgrades: Option<[UpgradeOption; 3]>,
    pub(crate) events: Vec<RunEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh state awaiting difficulty selection.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let profile = DifficultyProfile::default();
        let player = Player::new(&profile, &tuning);
        let mut state = Self {
            seed,
            run_index: 0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            profile,
            phase: RunPhase::AwaitingDifficulty,
            run_time: 0.0,
            spawn_timer: 0.0,
            kill_count: 0,
            player,
            stats: PlayerStats::default(),
            weapons: Vec::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            pickups: Vec::new(),
            pending_upgrades: None,
            events: Vec::new(),
            next_id: 1,
        };
        state.reset_for_run();
        state
    }

    /// Allocate a new entity id (the player is implicitly id 0).
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Rebuild all pools, timers, and the player from the current profile.
    pub(crate) fn reset_for_run(&mut self) {
        self.player = Player::new(&self.profile, &self.tuning);
        self.stats = PlayerStats::default();
        self.weapons = vec![
            Weapon::bullet(&self.tuning, 0.0),
            Weapon::bullet(&self.tuning, 0.0),
            Weapon::bullet(&self.tuning, 0.0),
        ];
        self.enemies.clear();
        self.projectiles.clear();
        self.pickups.clear();
        self.pending_upgrades = None;
        self.run_time = 0.0;
        self.spawn_timer = 0.0;
        self.kill_count = 0;
    }

    /// HUD telemetry, read once per frame by the rendering collaborator.
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            health: self.player.health,
            max_health: self.player.max_health,
            level: self.player.level,
            kill_count: self.kill_count,
            time_remaining: (self.tuning.run_duration - self.run_time).max(0.0),
            experience_ratio: (self.player.experience / self.player.experience_to_next)
                .clamp(0.0, 1.0),
            phase: self.phase,
        }
    }

    /// Drawing handles for every live entity, player first.
    pub fn actors(&self) -> Vec<ActorView> {
        let mut out = Vec::with_capacity(
            1 + self.enemies.len() + self.projectiles.len() + self.pickups.len(),
        );
        out.push(ActorView {
            id: 0,
            kind: ActorKind::Player,
            pos: self.player.pos,
            radius: self.player.radius,
            color: PLAYER_COLOR,
        });
        for enemy in &self.enemies {
            out.push(ActorView {
                id: enemy.id,
                kind: ActorKind::Enemy,
                pos: enemy.pos,
                radius: enemy.radius,
                color: ENEMY_COLOR,
            });
        }
        for proj in &self.projectiles {
            out.push(ActorView {
                id: proj.id,
                kind: ActorKind::Projectile,
                pos: proj.pos,
                radius: proj.radius,
                color: if proj.penetrating { LASER_COLOR } else { BULLET_COLOR },
            });
        }
        for pickup in &self.pickups {
            let (kind, color) = match pickup.kind {
                PickupKind::Exp => (ActorKind::ExpOrb, EXP_ORB_COLOR),
                PickupKind::Health => (ActorKind::HealthOrb, HEALTH_ORB_COLOR),
            };
            out.push(ActorView {
                id: pickup.id,
                kind,
                pos: pickup.pos,
                radius: PICKUP_RADIUS,
                color,
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_clamped_on_both_ends() {
        let mut player = Player::new(&DifficultyProfile::default(), &Tuning::default());
        player.apply_health(-9999);
        assert_eq!(player.health, 0);
        player.apply_health(9999);
        assert_eq!(player.health, player.max_health);
    }

    #[test]
    fn test_invincibility_window_expires() {
        let mut player = Player::new(&DifficultyProfile::default(), &Tuning::default());
        assert!(!player.is_invincible(5.0));
        player.invincible_until = Some(6.0);
        assert!(player.is_invincible(5.5));
        assert!(!player.is_invincible(6.0));
    }

    #[test]
    fn test_weapon_damage_scales_with_level() {
        let mut weapon = Weapon::bullet(&Tuning::default(), 0.0);
        assert_eq!(weapon.damage(), 1);
        weapon.level = 2;
        assert_eq!(weapon.damage(), 2);
        weapon.level = 3;
        assert_eq!(weapon.damage(), 2);
        weapon.level = 4;
        assert_eq!(weapon.damage(), 3);
    }

    #[test]
    fn test_new_weapon_starts_loaded() {
        let weapon = Weapon::bullet(&Tuning::default(), 42.0);
        assert!(weapon.ready(42.0));
    }

    #[test]
    fn test_entity_ids_are_monotonic() {
        let mut state = GameState::new(1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_actors_lists_every_entity() {
        let mut state = GameState::new(1);
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            pos: Vec2::new(10.0, 10.0),
            radius: ENEMY_RADIUS,
            hp: 2.0,
        });
        let id = state.next_entity_id();
        state.pickups.push(Pickup {
            id,
            kind: PickupKind::Health,
            pos: Vec2::new(20.0, 20.0),
            value: 1,
        });

        let actors = state.actors();
        assert_eq!(actors.len(), 3);
        assert_eq!(actors[0].kind, ActorKind::Player);
        assert!(actors.iter().any(|a| a.kind == ActorKind::Enemy));
        assert!(actors.iter().any(|a| a.kind == ActorKind::HealthOrb));
    }

    #[test]
    fn test_hud_experience_ratio() {
        let mut state = GameState::new(1);
        state.player.experience = 5.0;
        state.player.experience_to_next = 10.0;
        assert!((state.hud().experience_ratio - 0.5).abs() < 1e-6);
    }
}
