//! Data-driven game balance
//!
//! Every empirically tuned "feel" number lives here rather than being baked
//! into the systems that use it. `Tuning::default()` is the shipped balance;
//! hosts may load overrides from JSON (missing fields keep their defaults).

use serde::{Deserialize, Serialize};

/// Gameplay tuning for a run. All durations are seconds, speeds pixels/sec.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Run length; surviving this long is a win.
    pub run_duration: f32,
    /// Post-hit invincibility window.
    pub contact_invincibility: f32,
    /// Damage per enemy contact.
    pub contact_damage: i32,

    // === Spawn director ===
    /// Spawn interval at t=0, before difficulty scaling.
    pub spawn_interval_base: f32,
    /// Interval shrink per elapsed second.
    pub spawn_interval_decay: f32,
    /// Interval never drops below this, regardless of elapsed time.
    pub spawn_interval_floor: f32,
    /// Enemy health at t=0, before the per-minute ramp and multiplier.
    pub enemy_base_health: f32,
    /// Enemy pursuit speed at t=0.
    pub enemy_base_speed: f32,
    /// Pursuit speed gain per elapsed second.
    pub enemy_speed_ramp: f32,

    // === Weapons ===
    pub bullet_cooldown: f32,
    pub bullet_speed: f32,
    pub bullet_lifetime: f32,
    /// Angular offset between spread projectiles (radians).
    pub bullet_spread: f32,
    pub laser_cooldown: f32,
    pub laser_speed: f32,
    pub laser_lifetime: f32,
    pub laser_damage: i32,
    pub orbit_cooldown: f32,
    /// Projectiles per ring burst.
    pub orbit_count: u32,
    pub orbit_speed: f32,

    // === Pickups & progression ===
    pub exp_orb_value: i32,
    pub health_orb_value: i32,
    /// Probability an enemy death also drops a health orb.
    pub health_orb_chance: f64,
    pub exp_to_first_level: f32,
    /// Experience threshold multiplier per level.
    pub exp_growth: f32,
    pub magnet_base_range: f32,
    pub magnet_range_step: f32,
    pub magnet_pull_speed: f32,

    // === Upgrade effects ===
    pub speed_upgrade_mult: f32,
    pub cooldown_upgrade_mult: f32,
    pub projectile_speed_upgrade_mult: f32,
    pub area_upgrade_mult: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            run_duration: 300.0,
            contact_invincibility: 1.0,
            contact_damage: 1,

            spawn_interval_base: 0.8,
            spawn_interval_decay: 0.006,
            spawn_interval_floor: 0.3,
            enemy_base_health: 2.0,
            enemy_base_speed: 50.0,
            enemy_speed_ramp: 0.8,

            bullet_cooldown: 0.6,
            bullet_speed: 360.0,
            bullet_lifetime: 1.25,
            bullet_spread: 0.2,
            laser_cooldown: 1.6,
            laser_speed: 520.0,
            laser_lifetime: 0.35,
            laser_damage: 3,
            orbit_cooldown: 2.2,
            orbit_count: 6,
            orbit_speed: 280.0,

            exp_orb_value: 3,
            health_orb_value: 1,
            health_orb_chance: 0.15,
            exp_to_first_level: 10.0,
            exp_growth: 1.5,
            magnet_base_range: 110.0,
            magnet_range_step: 60.0,
            magnet_pull_speed: 260.0,

            speed_upgrade_mult: 1.15,
            cooldown_upgrade_mult: 0.9,
            projectile_speed_upgrade_mult: 1.15,
            area_upgrade_mult: 1.2,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning override from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_balance() {
        let t = Tuning::default();
        assert_eq!(t.run_duration, 300.0);
        assert_eq!(t.contact_invincibility, 1.0);
        assert_eq!(t.spawn_interval_base, 0.8);
        assert_eq!(t.spawn_interval_floor, 0.3);
        assert_eq!(t.exp_growth, 1.5);
        assert_eq!(t.health_orb_chance, 0.15);
        assert_eq!(t.speed_upgrade_mult, 1.15);
        assert_eq!(t.bullet_spread, 0.2);
    }

    #[test]
    fn test_partial_json_override() {
        let t = Tuning::from_json_str(r#"{"run_duration": 120.0, "laser_damage": 5}"#).unwrap();
        assert_eq!(t.run_duration, 120.0);
        assert_eq!(t.laser_damage, 5);
        // untouched fields keep their defaults
        assert_eq!(t.bullet_cooldown, Tuning::default().bullet_cooldown);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Tuning::from_json_str("{not json").is_err());
    }
}
