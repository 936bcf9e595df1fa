//! Level-up upgrade catalogue
//!
//! A fixed catalogue; three distinct options are sampled uniformly at each
//! level-up and offered to the external choice dialog.

use rand_pcg::Pcg32;

/// Stable identifier for an upgrade, used by the inbound selection message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeId {
    Speed,
    Vitality,
    Damage,
    Cooldown,
    ProjectileSpeed,
    Area,
    Magnet,
    TwinBarrels,
    LaserWeapon,
    OrbitWeapon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeKind {
    Stat,
    Weapon,
    Special,
}

/// One entry of the catalogue, as presented to the choice dialog.
#[derive(Debug, Clone, Copy)]
pub struct UpgradeOption {
    pub id: UpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    /// Icon token resolved by the dialog's asset table.
    pub icon: &'static str,
    pub kind: UpgradeKind,
}

pub const CATALOGUE: [UpgradeOption; 10] = [
    UpgradeOption {
        id: UpgradeId::Speed,
        name: "Swift Boots",
        description: "Move 15% faster",
        icon: "boot",
        kind: UpgradeKind::Stat,
    },
    UpgradeOption {
        id: UpgradeId::Vitality,
        name: "Vitality",
        description: "+1 max health and heal 1",
        icon: "heart",
        kind: UpgradeKind::Stat,
    },
    UpgradeOption {
        id: UpgradeId::Damage,
        name: "Sharpened Rounds",
        description: "All weapons gain a level",
        icon: "sword",
        kind: UpgradeKind::Stat,
    },
    UpgradeOption {
        id: UpgradeId::Cooldown,
        name: "Rapid Fire",
        description: "Weapon cooldowns reduced 10%",
        icon: "clock",
        kind: UpgradeKind::Stat,
    },
    UpgradeOption {
        id: UpgradeId::ProjectileSpeed,
        name: "Velocity",
        description: "Projectiles fly 15% faster",
        icon: "arrow",
        kind: UpgradeKind::Stat,
    },
    UpgradeOption {
        id: UpgradeId::Area,
        name: "Big Shots",
        description: "Projectiles are 20% larger",
        icon: "burst",
        kind: UpgradeKind::Stat,
    },
    UpgradeOption {
        id: UpgradeId::Magnet,
        name: "Pickup Magnet",
        description: "Draw in nearby orbs; stacks extend the reach",
        icon: "magnet",
        kind: UpgradeKind::Special,
    },
    UpgradeOption {
        id: UpgradeId::TwinBarrels,
        name: "Twin Barrels",
        description: "Add two more bullet weapons",
        icon: "twin",
        kind: UpgradeKind::Weapon,
    },
    UpgradeOption {
        id: UpgradeId::LaserWeapon,
        name: "Piercing Beam",
        description: "Add a penetrating laser",
        icon: "beam",
        kind: UpgradeKind::Weapon,
    },
    UpgradeOption {
        id: UpgradeId::OrbitWeapon,
        name: "Ring Nova",
        description: "Add a weapon that bursts in all directions",
        icon: "ring",
        kind: UpgradeKind::Weapon,
    },
];

/// Sample three distinct catalogue entries, uniformly without replacement.
pub fn sample_options(rng: &mut Pcg32) -> [UpgradeOption; 3] {
    let picks = rand::seq::index::sample(rng, CATALOGUE.len(), 3);
    [
        CATALOGUE[picks.index(0)],
        CATALOGUE[picks.index(1)],
        CATALOGUE[picks.index(2)],
    ]
}
