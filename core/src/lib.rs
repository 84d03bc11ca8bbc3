#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Swarm Survival engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative simulation, and the pure systems it drives. Adapters submit
//! [`Command`] values describing player intent, the simulation executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! that presentation collaborators (HUD, banners, particles, screen shake)
//! consume. Systems never call back into adapters directly.

use std::time::Duration;

pub use glam::Vec2;
use serde::{Deserialize, Serialize};

mod stats;
mod tuning;

pub use stats::{PlayerStats, RunStats, MIN_ARMOR, MIN_ATTACK_INTERVAL_MS, MIN_MAX_HP};
pub use tuning::{
    millis, pick_excluding, ArenaTuning, DifficultyTuning, EliteTuning, EncirclementTuning,
    EnemyTuning, EventTuning, GlobalEventDefinition, LevelingTuning, OrbTuning, PlayerTuning,
    ProjectileTuning, RarityWeights, RushTuning, ShapeProfile, Tuning, TuningError, WaveTuning,
    WeaponTuning,
};

/// Commands that express all permissible mutations of a run.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation by one frame.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
        /// Input sampled by the adapter for this frame.
        input: FrameInput,
    },
    /// Picks one of the upgrades from the pending offer.
    ChooseUpgrade {
        /// Zero-based position of the upgrade within the offer.
        slot: usize,
    },
    /// Drains every entity and reinitialises all stateful components.
    Reset,
}

/// Input snapshot gathered by adapters before advancing the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameInput {
    /// Desired movement direction. Need not be normalised; zero means idle.
    pub movement: Vec2,
    /// World-space rectangle currently visible to the player, if the adapter
    /// tracks one. The simulation centres a default viewport on the player
    /// otherwise.
    pub viewport: Option<Rect>,
}

/// Axis-aligned rectangle expressed in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Upper-left corner.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from its upper-left corner and size.
    #[must_use]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle of the provided size centred on `center`.
    #[must_use]
    pub fn centered_on(center: Vec2, size: Vec2) -> Self {
        Self {
            origin: center - size * 0.5,
            size,
        }
    }

    /// Returns a rectangle grown by `margin` on every side.
    #[must_use]
    pub fn expanded(self, margin: f32) -> Self {
        Self {
            origin: self.origin - Vec2::splat(margin),
            size: self.size + Vec2::splat(margin * 2.0),
        }
    }

    /// Smallest x coordinate covered by the rectangle.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Largest x coordinate covered by the rectangle.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    /// Smallest y coordinate covered by the rectangle.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Largest y coordinate covered by the rectangle.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }
}

/// Events broadcast by the simulation after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// An enemy died and was returned to its pool.
    EnemyDied {
        /// Position at the moment of death.
        position: Vec2,
        /// Experience paid out by the kill.
        xp: u32,
        /// Whether the enemy was a boss.
        is_boss: bool,
        /// Colour of the enemy, used for death particles.
        color: Color,
    },
    /// A boss entered the arena.
    BossSpawned {
        /// Spawn position on the perimeter.
        position: Vec2,
    },
    /// The player took contact damage.
    PlayerHit {
        /// Damage applied after armor.
        damage: f32,
    },
    /// The player's HP reached zero; the run is over.
    PlayerDied,
    /// Enemies dealt damage by player weapons during the tick.
    DamageDealt {
        /// Total damage dealt in the tick.
        amount: u32,
    },
    /// A nova burst detonated around the player.
    NovaFired {
        /// Centre of the burst.
        position: Vec2,
    },
    /// A scripted wave burst spawned.
    WaveStarted {
        /// Pattern that fired.
        kind: WaveKind,
        /// Banner text for the wave.
        name: String,
    },
    /// A timed global modifier became active.
    GlobalEventStarted {
        /// Event that activated.
        kind: GlobalEventKind,
        /// Banner text for the event.
        name: String,
        /// Banner colour.
        color: Color,
        /// How long the event stays active.
        duration: Duration,
    },
    /// The active global modifier expired and its multipliers were reverted.
    GlobalEventEnded {
        /// Event that ended.
        kind: GlobalEventKind,
    },
    /// The player collected experience.
    XpGained {
        /// Experience credited.
        amount: u32,
    },
    /// The player crossed one or more level thresholds during the tick.
    LeveledUp {
        /// Level reached.
        level: u32,
        /// Number of thresholds crossed in the tick.
        levels_gained: u32,
    },
    /// A set of upgrades awaits a [`Command::ChooseUpgrade`].
    UpgradeOffered {
        /// Level that earned the offer.
        level: u32,
        /// Upgrades offered, in slot order.
        choices: Vec<UpgradeId>,
    },
    /// An upgrade was applied to the player's stats.
    UpgradeApplied {
        /// Upgrade that was applied.
        upgrade: UpgradeId,
    },
    /// An upgrade choice could not be honoured.
    UpgradeChoiceRejected {
        /// Slot requested by the adapter.
        slot: usize,
        /// Specific reason the choice failed.
        reason: ChoiceError,
    },
    /// The run was reset and every component reinitialised.
    RunReset,
}

/// Reasons an upgrade choice may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChoiceError {
    /// No offer is pending.
    NoPendingOffer,
    /// The requested slot is outside the pending offer.
    SlotOutOfRange,
    /// The run is over.
    RunOver,
}

/// RGB colour attached to entities and banners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Creates a new colour from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a colour from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(value: u32) -> Self {
        Self {
            red: ((value >> 16) & 0xff) as u8,
            green: ((value >> 8) & 0xff) as u8,
            blue: (value & 0xff) as u8,
        }
    }

    /// Packs the colour into a `0xRRGGBB` value.
    #[must_use]
    pub const fn hex(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// Red component of the colour.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the colour.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the colour.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_hex(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

/// Visual and statistical variant of a regular enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyShape {
    /// Baseline enemy.
    Circle,
    /// Fast, fragile enemy.
    Triangle,
    /// Slow, durable enemy that hits harder.
    Square,
    /// Slightly tougher enemy worth more experience.
    Hexagon,
}

/// Catalog of timed global modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalEventKind {
    /// Spawn-rate surge.
    Swarm,
    /// Player damage surge.
    Berserker,
    /// Enemy slow.
    Frost,
    /// Enemy HP and experience surge.
    BloodMoon,
}

/// Scripted wave patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveKind {
    /// Ring of enemies around the player.
    Encirclement,
    /// Line of fast enemies charging from one side.
    Rush,
    /// Small pack of durable, high-value enemies.
    Elite,
}

/// Rarity tier that controls how often an upgrade is offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    /// Offered most often.
    Common,
    /// Offered regularly.
    Rare,
    /// Offered occasionally.
    Epic,
    /// Offered seldom.
    Legendary,
}

impl Rarity {
    /// Every rarity in ascending order.
    pub const ALL: [Rarity; 4] = [Self::Common, Self::Rare, Self::Epic, Self::Legendary];
}

/// Identifier of an upgrade in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeId {
    /// Movement speed.
    SwiftFeet,
    /// Flat projectile damage.
    SharpEdge,
    /// Shorter attack interval.
    RapidFire,
    /// Max HP and a heal.
    Vitality,
    /// Armor.
    IronHide,
    /// HP regeneration.
    Regeneration,
    /// Orb attraction range.
    Magnetism,
    /// Extra projectile per attack.
    Multishot,
    /// Projectile speed.
    SwiftShot,
    /// Movement speed and attack interval.
    Blitz,
    /// Armor for movement speed.
    ThickSkin,
    /// Attack interval for max HP.
    Adrenaline,
    /// Damage for projectile speed.
    HeavyRounds,
    /// Regeneration for armor.
    SecondWind,
    /// Projectiles pierce one more enemy.
    PiercingRounds,
    /// Damage for attack interval.
    Overcharge,
    /// Damage for max HP.
    GlassCannon,
    /// Attraction range for movement speed; collects every orb on pick.
    Magnetar,
    /// Extra projectiles for projectile speed.
    Barrage,
    /// Armor and max HP for movement speed.
    Fortress,
    /// Projectiles home onto the nearest enemy.
    SeekerRounds,
    /// Orbiting shield orbs.
    OrbitalShield,
    /// Periodic damage burst around the player.
    NovaCore,
}

/// Standing global multipliers threaded through difficulty and combat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Modifiers {
    /// Divides the trickle spawn interval.
    pub spawn_rate: f32,
    /// Scales player projectile and nova damage.
    pub damage: f32,
    /// Scales enemy movement speed at spawn time.
    pub enemy_speed: f32,
    /// Scales enemy HP at spawn time.
    pub enemy_hp: f32,
    /// Scales experience paid out on death.
    pub xp: f32,
}

impl Modifiers {
    /// Multipliers that leave every value unchanged.
    pub const NEUTRAL: Modifiers = Modifiers {
        spawn_rate: 1.0,
        damage: 1.0,
        enemy_speed: 1.0,
        enemy_hp: 1.0,
        xp: 1.0,
    };

    /// Moves the multipliers named by `effect` to the effect's values.
    pub fn apply(&mut self, effect: &ModifierEffect) {
        let targets = [
            (&mut self.spawn_rate, effect.spawn_rate),
            (&mut self.damage, effect.damage),
            (&mut self.enemy_speed, effect.enemy_speed),
            (&mut self.enemy_hp, effect.enemy_hp),
            (&mut self.xp, effect.xp),
        ];
        for (slot, value) in targets {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    /// Restores the multipliers named by `effect` to 1.
    pub fn revert(&mut self, effect: &ModifierEffect) {
        let targets = [
            (&mut self.spawn_rate, effect.spawn_rate),
            (&mut self.damage, effect.damage),
            (&mut self.enemy_speed, effect.enemy_speed),
            (&mut self.enemy_hp, effect.enemy_hp),
            (&mut self.xp, effect.xp),
        ];
        for (slot, value) in targets {
            if value.is_some() {
                *slot = 1.0;
            }
        }
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Multipliers a global event moves away from 1 while active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierEffect {
    /// Spawn-rate multiplier, if affected.
    pub spawn_rate: Option<f32>,
    /// Damage multiplier, if affected.
    pub damage: Option<f32>,
    /// Enemy speed multiplier, if affected.
    pub enemy_speed: Option<f32>,
    /// Enemy HP multiplier, if affected.
    pub enemy_hp: Option<f32>,
    /// Experience multiplier, if affected.
    pub xp: Option<f32>,
}
