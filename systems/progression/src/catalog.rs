use std::fmt;

use swarm_survival_core::{PlayerStats, Rarity, UpgradeId};

/// Static description of a level-up upgrade.
#[derive(Clone, Copy)]
pub struct Upgrade {
    /// Stable identifier.
    pub id: UpgradeId,
    /// Display name.
    pub name: &'static str,
    /// One-line effect summary.
    pub description: &'static str,
    /// Rarity tier used when drawing offers.
    pub rarity: Rarity,
    /// Whether picking the upgrade immediately collects every orb on the
    /// field.
    pub instant: bool,
    /// Whether the upgrade can be taken at most once per run.
    pub unique: bool,
    apply: fn(&mut PlayerStats, &mut dyn FnMut(f32)),
}

impl Upgrade {
    /// Applies the stat changes. `heal` restores player HP for upgrades that
    /// grant it.
    pub fn apply(&self, stats: &mut PlayerStats, mut heal: impl FnMut(f32)) {
        (self.apply)(stats, &mut heal);
    }
}

impl fmt::Debug for Upgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upgrade")
            .field("id", &self.id)
            .field("rarity", &self.rarity)
            .field("instant", &self.instant)
            .field("unique", &self.unique)
            .finish_non_exhaustive()
    }
}

/// Looks up an upgrade by identifier.
#[must_use]
pub fn upgrade(id: UpgradeId) -> &'static Upgrade {
    // CATALOG is declared in `UpgradeId` order.
    &CATALOG[id as usize]
}

/// Every upgrade, in identifier order.
#[must_use]
pub fn catalog() -> &'static [Upgrade] {
    &CATALOG
}

const fn entry(
    id: UpgradeId,
    name: &'static str,
    description: &'static str,
    rarity: Rarity,
    apply: fn(&mut PlayerStats, &mut dyn FnMut(f32)),
) -> Upgrade {
    Upgrade {
        id,
        name,
        description,
        rarity,
        instant: false,
        unique: false,
        apply,
    }
}

static CATALOG: [Upgrade; 23] = [
    entry(
        UpgradeId::SwiftFeet,
        "Swift Feet",
        "+20% movement speed",
        Rarity::Common,
        |stats, _| stats.scale_speed(1.2),
    ),
    entry(
        UpgradeId::SharpEdge,
        "Sharp Edge",
        "+1 damage per projectile",
        Rarity::Common,
        |stats, _| stats.add_damage(1.0),
    ),
    entry(
        UpgradeId::RapidFire,
        "Rapid Fire",
        "-15% time between attacks",
        Rarity::Common,
        |stats, _| stats.scale_attack_interval(0.85),
    ),
    entry(
        UpgradeId::Vitality,
        "Vitality",
        "+3 max HP, restore 3 HP",
        Rarity::Common,
        |stats, heal| {
            stats.add_max_hp(3.0);
            heal(3.0);
        },
    ),
    entry(
        UpgradeId::IronHide,
        "Iron Hide",
        "+1 armor",
        Rarity::Common,
        |stats, _| stats.add_armor(1.0),
    ),
    entry(
        UpgradeId::Regeneration,
        "Regeneration",
        "Recover 1 HP every 4 seconds",
        Rarity::Common,
        |stats, _| stats.add_regen(0.25),
    ),
    entry(
        UpgradeId::Magnetism,
        "Magnetism",
        "+40% orb pickup range",
        Rarity::Common,
        |stats, _| stats.scale_attract_range(1.4),
    ),
    entry(
        UpgradeId::Multishot,
        "Multishot",
        "+1 projectile per attack",
        Rarity::Rare,
        |stats, _| stats.add_projectiles(1),
    ),
    entry(
        UpgradeId::SwiftShot,
        "Swift Shot",
        "+30% projectile speed",
        Rarity::Rare,
        |stats, _| stats.scale_projectile_speed(1.3),
    ),
    entry(
        UpgradeId::Blitz,
        "Blitz",
        "+15% move speed, -10% attack interval",
        Rarity::Rare,
        |stats, _| {
            stats.scale_speed(1.15);
            stats.scale_attack_interval(0.9);
        },
    ),
    entry(
        UpgradeId::ThickSkin,
        "Thick Skin",
        "+2 armor, -10% move speed",
        Rarity::Rare,
        |stats, _| {
            stats.add_armor(2.0);
            stats.scale_speed(0.9);
        },
    ),
    entry(
        UpgradeId::Adrenaline,
        "Adrenaline",
        "-25% attack interval, -2 max HP",
        Rarity::Rare,
        |stats, _| {
            stats.scale_attack_interval(0.75);
            stats.add_max_hp(-2.0);
        },
    ),
    entry(
        UpgradeId::HeavyRounds,
        "Heavy Rounds",
        "+2 damage, -20% projectile speed",
        Rarity::Rare,
        |stats, _| {
            stats.add_damage(2.0);
            stats.scale_projectile_speed(0.8);
        },
    ),
    entry(
        UpgradeId::SecondWind,
        "Second Wind",
        "+0.5 HP/s regeneration, -1 armor",
        Rarity::Rare,
        |stats, _| {
            stats.add_regen(0.5);
            stats.add_armor(-1.0);
        },
    ),
    entry(
        UpgradeId::PiercingRounds,
        "Piercing Rounds",
        "Projectiles pass through one more enemy",
        Rarity::Rare,
        |stats, _| stats.add_piercing(1),
    ),
    entry(
        UpgradeId::Overcharge,
        "Overcharge",
        "+3 damage, +20% attack interval",
        Rarity::Epic,
        |stats, _| {
            stats.add_damage(3.0);
            stats.scale_attack_interval(1.2);
        },
    ),
    entry(
        UpgradeId::GlassCannon,
        "Glass Cannon",
        "+4 damage, -4 max HP",
        Rarity::Epic,
        |stats, _| {
            stats.add_damage(4.0);
            stats.add_max_hp(-4.0);
        },
    ),
    Upgrade {
        instant: true,
        ..entry(
            UpgradeId::Magnetar,
            "Magnetar",
            "Double pickup range, -15% move speed, collect every orb",
            Rarity::Epic,
            |stats, _| {
                stats.scale_attract_range(2.0);
                stats.scale_speed(0.85);
            },
        )
    },
    entry(
        UpgradeId::Barrage,
        "Barrage",
        "+2 projectiles, -30% projectile speed",
        Rarity::Epic,
        |stats, _| {
            stats.add_projectiles(2);
            stats.scale_projectile_speed(0.7);
        },
    ),
    entry(
        UpgradeId::Fortress,
        "Fortress",
        "+3 armor, +5 max HP, -25% move speed",
        Rarity::Epic,
        |stats, _| {
            stats.add_armor(3.0);
            stats.add_max_hp(5.0);
            stats.scale_speed(0.75);
        },
    ),
    Upgrade {
        unique: true,
        ..entry(
            UpgradeId::SeekerRounds,
            "Seeker Rounds",
            "Projectiles home onto the nearest enemy",
            Rarity::Epic,
            |stats, _| stats.enable_homing(),
        )
    },
    entry(
        UpgradeId::OrbitalShield,
        "Orbital Shield",
        "+3 orbs circling you",
        Rarity::Legendary,
        |stats, _| stats.add_orbitals(3),
    ),
    Upgrade {
        unique: true,
        ..entry(
            UpgradeId::NovaCore,
            "Nova Core",
            "Damage everything nearby every 5 seconds",
            Rarity::Legendary,
            |stats, _| stats.enable_nova(),
        )
    },
];
