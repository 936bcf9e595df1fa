//! Experience and level-up progression
//!
//! One level-up per threshold crossing: the threshold amount is subtracted
//! (overflow is preserved, never dropped) and the run pauses for a choice.
//! Overflow large enough for another level triggers the next pause on the
//! first tick after the run resumes.

use super::run::{RunEvent, RunPhase};
use super::state::{GameState, Weapon};
use super::upgrades::{self, UpgradeId};

pub(crate) fn update(state: &mut GameState) {
    if state.player.experience < state.player.experience_to_next {
        return;
    }
    let player = &mut state.player;
    player.experience -= player.experience_to_next;
    player.experience_to_next *= state.tuning.exp_growth;
    player.level += 1;

    let options = upgrades::sample_options(&mut state.rng);
    state.pending_upgrades = Some(options);
    state.phase = RunPhase::LevelUp;
    state.events.push(RunEvent::LevelUp {
        level: state.player.level,
        options,
    });
    log::info!("level {} reached, awaiting upgrade choice", state.player.level);
}

/// Apply one selected upgrade atomically.
pub(crate) fn apply_upgrade(state: &mut GameState, id: UpgradeId) {
    let tuning = state.tuning.clone();
    let now = state.run_time;
    match id {
        UpgradeId::Speed => state.player.speed *= tuning.speed_upgrade_mult,
        UpgradeId::Vitality => {
            state.player.max_health += 1;
            state.player.apply_health(1);
        }
        UpgradeId::Damage => {
            for weapon in &mut state.weapons {
                weapon.level += 1;
            }
        }
        UpgradeId::Cooldown => {
            for weapon in &mut state.weapons {
                weapon.cooldown *= tuning.cooldown_upgrade_mult;
            }
        }
        UpgradeId::ProjectileSpeed => {
            state.stats.projectile_speed *= tuning.projectile_speed_upgrade_mult;
        }
        UpgradeId::Area => state.stats.area_mult *= tuning.area_upgrade_mult,
        UpgradeId::Magnet => {
            // Repeat picks extend the reach; never re-initialize it.
            state.stats.magnet_range = if state.stats.magnet_range > 0.0 {
                state.stats.magnet_range + tuning.magnet_range_step
            } else {
                tuning.magnet_base_range
            };
        }
        UpgradeId::TwinBarrels => {
            state.weapons.push(Weapon::bullet(&tuning, now));
            state.weapons.push(Weapon::bullet(&tuning, now));
        }
        UpgradeId::LaserWeapon => state.weapons.push(Weapon::laser(&tuning, now)),
        UpgradeId::OrbitWeapon => state.weapons.push(Weapon::orbit(&tuning, now)),
    }
}
