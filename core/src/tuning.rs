//! Named constants that drive a run, expressed as data.
//!
//! Every struct implements [`Default`] with the shipped values and accepts
//! partial overrides through serde, so a tuning file only names what it
//! changes.

use std::time::Duration;

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

use crate::{Color, EnemyShape, GlobalEventKind, ModifierEffect, Rarity, WaveKind};

/// Converts a millisecond quantity from tuning data into a [`Duration`].
#[must_use]
pub fn millis(ms: f32) -> Duration {
    let nanos = (f64::from(ms.max(0.0)) * 1_000_000.0).round();
    if nanos >= u64::MAX as f64 {
        return Duration::MAX;
    }
    Duration::from_nanos(nanos as u64)
}

/// Draws a uniform index into a catalog of `len` entries, never `last` when
/// another entry exists.
///
/// Returns `None` for an empty catalog. A single-entry catalog repeats.
pub fn pick_excluding<R: Rng + ?Sized>(len: usize, last: Option<usize>, rng: &mut R) -> Option<usize> {
    match (len, last) {
        (0, _) => None,
        (len, Some(last)) if len > 1 && last < len => {
            let draw = rng.gen_range(0..len - 1);
            Some(if draw >= last { draw + 1 } else { draw })
        }
        (len, _) => Some(rng.gen_range(0..len)),
    }
}

/// Errors reported when tuning data cannot drive a run.
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    /// The spatial grid cell is not larger than the reach tested against it.
    #[error("spatial cell size {cell_size} must exceed the largest collision reach {reach}")]
    CellTooSmall {
        /// Configured cell size.
        cell_size: f32,
        /// Largest distance a grid query must cover.
        reach: f32,
    },
    /// A value that must be strictly positive was not.
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    /// A catalog that must contain entries was empty.
    #[error("{0} must not be empty")]
    EmptyCatalog(&'static str),
}

/// Aggregate of every tuning section.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World bounds, viewport and spatial grid.
    pub arena: ArenaTuning,
    /// Starting player loadout.
    pub player: PlayerTuning,
    /// Enemy archetypes.
    pub enemy: EnemyTuning,
    /// Projectile behaviour.
    pub projectile: ProjectileTuning,
    /// Homing, orbital and nova weapons.
    pub weapons: WeaponTuning,
    /// Experience orbs.
    pub orbs: OrbTuning,
    /// Level thresholds and upgrade offers.
    pub leveling: LevelingTuning,
    /// Difficulty curve.
    pub difficulty: DifficultyTuning,
    /// Timed global events.
    pub events: EventTuning,
    /// Scripted waves.
    pub waves: WaveTuning,
}

impl Tuning {
    /// Checks that the tuning can drive a run without violating collision or
    /// scheduling invariants.
    pub fn validate(&self) -> Result<(), TuningError> {
        let positives = [
            (self.arena.cell_size, "arena.cell_size"),
            (self.arena.reference_frame_ms, "arena.reference_frame_ms"),
            (self.arena.world_width, "arena.world_width"),
            (self.arena.world_height, "arena.world_height"),
            (
                self.difficulty.spawn_interval_floor_ms,
                "difficulty.spawn_interval_floor_ms",
            ),
            (self.difficulty.time_divisor, "difficulty.time_divisor"),
            (self.difficulty.orb_tier_divisor, "difficulty.orb_tier_divisor"),
            (self.leveling.xp_per_level as f32, "leveling.xp_per_level"),
            (
                self.leveling.initial_xp_to_next as f32,
                "leveling.initial_xp_to_next",
            ),
            (self.leveling.rarity_weights.total(), "leveling.rarity_weights"),
            (self.weapons.nova_interval_ms, "weapons.nova_interval_ms"),
        ];
        for (value, name) in positives {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NonPositive(name));
            }
        }

        if self.enemy.shapes.is_empty() {
            return Err(TuningError::EmptyCatalog("enemy.shapes"));
        }
        if self.events.catalog.is_empty() {
            return Err(TuningError::EmptyCatalog("events.catalog"));
        }
        if self.waves.patterns.is_empty() {
            return Err(TuningError::EmptyCatalog("waves.patterns"));
        }

        let reach = self.max_collision_reach();
        if self.arena.cell_size <= reach {
            return Err(TuningError::CellTooSmall {
                cell_size: self.arena.cell_size,
                reach,
            });
        }

        Ok(())
    }

    /// Largest distance at which an entity tested against the spatial grid
    /// can collide with an enemy.
    #[must_use]
    pub fn max_collision_reach(&self) -> f32 {
        let largest_enemy = self.enemy.normal_radius.max(self.enemy.boss_radius)
            + self.enemy.collision_radius_offset;
        self.projectile
            .collision_distance
            .max(self.weapons.orbital_orb_radius + largest_enemy)
    }
}

/// World bounds, default viewport and spatial grid.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    /// Width of the playable world.
    pub world_width: f32,
    /// Height of the playable world.
    pub world_height: f32,
    /// Width of the viewport assumed when the adapter supplies none.
    pub viewport_width: f32,
    /// Height of the viewport assumed when the adapter supplies none.
    pub viewport_height: f32,
    /// Distance beyond the viewport at which ambient enemies appear.
    pub spawn_margin: f32,
    /// Edge length of a spatial grid cell.
    pub cell_size: f32,
    /// Length of the reference frame that per-frame speeds are expressed in.
    pub reference_frame_ms: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            world_width: 3000.0,
            world_height: 3000.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            spawn_margin: 100.0,
            cell_size: 64.0,
            reference_frame_ms: 16.666,
        }
    }
}

/// Starting player loadout.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Body radius, used for world clamping.
    pub radius: f32,
    /// Units moved per reference frame.
    pub speed: f32,
    /// Starting and maximum HP.
    pub max_hp: f32,
    /// Base projectile damage.
    pub damage: f32,
    /// Milliseconds between auto-attacks.
    pub attack_interval_ms: f32,
    /// Projectiles per attack.
    pub projectile_count: u32,
    /// Projectile units per reference frame.
    pub projectile_speed: f32,
    /// Flat damage reduction.
    pub armor: f32,
    /// HP regenerated per second.
    pub regen_rate: f32,
    /// Orb attraction distance.
    pub attract_range: f32,
    /// Window after a hit in which further contact is ignored.
    pub invulnerability_ms: f32,
    /// Smallest damage a contact hit can deal after armor.
    pub min_damage_taken: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            radius: 20.0,
            speed: 4.0,
            max_hp: 10.0,
            damage: 1.0,
            attack_interval_ms: 600.0,
            projectile_count: 1,
            projectile_speed: 6.0,
            armor: 0.0,
            regen_rate: 0.0,
            attract_range: 120.0,
            invulnerability_ms: 500.0,
            min_damage_taken: 1.0,
        }
    }
}

/// Statistical profile of an ambient enemy shape.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ShapeProfile {
    /// Shape the profile describes.
    pub shape: EnemyShape,
    /// Body colour.
    pub color: Color,
    /// HP multiplier.
    pub hp_mult: f32,
    /// Speed multiplier.
    pub speed_mult: f32,
    /// Contact damage multiplier.
    pub damage_mult: f32,
    /// Experience multiplier.
    pub xp_mult: f32,
}

impl ShapeProfile {
    /// Profile that leaves the difficulty-derived values untouched.
    #[must_use]
    pub const fn baseline(shape: EnemyShape, color: Color) -> Self {
        Self {
            shape,
            color,
            hp_mult: 1.0,
            speed_mult: 1.0,
            damage_mult: 1.0,
            xp_mult: 1.0,
        }
    }
}

/// Enemy archetypes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Body radius of regular enemies.
    pub normal_radius: f32,
    /// Body radius of bosses.
    pub boss_radius: f32,
    /// Added to the body radius to obtain the collision radius.
    pub collision_radius_offset: f32,
    /// Contact damage of regular enemies before shape scaling.
    pub normal_contact_damage: f32,
    /// Contact damage of bosses.
    pub boss_contact_damage: f32,
    /// How long an enemy flashes after surviving a hit.
    pub hit_flash_ms: f32,
    /// Colour of enemies spawned by waves.
    pub normal_color: Color,
    /// Colour of bosses.
    pub boss_color: Color,
    /// Profiles ambient enemies draw from uniformly.
    pub shapes: Vec<ShapeProfile>,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            normal_radius: 16.0,
            boss_radius: 32.0,
            collision_radius_offset: 12.0,
            normal_contact_damage: 1.0,
            boss_contact_damage: 2.0,
            hit_flash_ms: 80.0,
            normal_color: Color::from_hex(0xef4444),
            boss_color: Color::from_hex(0xf97316),
            shapes: vec![
                ShapeProfile::baseline(EnemyShape::Circle, Color::from_hex(0xef4444)),
                ShapeProfile {
                    shape: EnemyShape::Triangle,
                    color: Color::from_hex(0x22d3ee),
                    hp_mult: 0.7,
                    speed_mult: 1.4,
                    damage_mult: 1.0,
                    xp_mult: 0.8,
                },
                ShapeProfile {
                    shape: EnemyShape::Square,
                    color: Color::from_hex(0xf97316),
                    hp_mult: 1.6,
                    speed_mult: 0.7,
                    damage_mult: 1.5,
                    xp_mult: 1.3,
                },
                ShapeProfile {
                    shape: EnemyShape::Hexagon,
                    color: Color::from_hex(0xa78bfa),
                    hp_mult: 1.2,
                    speed_mult: 1.0,
                    damage_mult: 1.0,
                    xp_mult: 1.5,
                },
            ],
        }
    }
}

/// Projectile behaviour.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    /// Body radius.
    pub radius: f32,
    /// Milliseconds a projectile lives before despawning.
    pub lifetime_ms: f32,
    /// Centre distance below which a projectile hits an enemy.
    pub collision_distance: f32,
    /// Radians between fanned projectiles.
    pub spread_angle: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            radius: 8.0,
            lifetime_ms: 2000.0,
            collision_distance: 20.0,
            spread_angle: 0.2,
        }
    }
}

/// Homing, orbital and nova weapons.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    /// Fraction of the direction error corrected per tick.
    pub homing_turn_rate: f32,
    /// Speed of homing projectiles.
    pub homing_speed: f32,
    /// Distance of orbital orbs from the player.
    pub orbital_radius: f32,
    /// Body radius of an orbital orb.
    pub orbital_orb_radius: f32,
    /// Angular speed in radians per second.
    pub orbital_rotation_speed: f32,
    /// Damage per orbital touch.
    pub orbital_damage: u32,
    /// Milliseconds before the same orb may hit the same enemy again.
    pub orbital_hit_cooldown_ms: f32,
    /// Radius of the nova burst.
    pub nova_radius: f32,
    /// Base damage of the nova burst.
    pub nova_damage: f32,
    /// Milliseconds between nova bursts.
    pub nova_interval_ms: f32,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            homing_turn_rate: 0.08,
            homing_speed: 3.5,
            orbital_radius: 80.0,
            orbital_orb_radius: 10.0,
            orbital_rotation_speed: 1.8,
            orbital_damage: 4,
            orbital_hit_cooldown_ms: 800.0,
            nova_radius: 180.0,
            nova_damage: 6.0,
            nova_interval_ms: 5000.0,
        }
    }
}

/// Experience orbs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrbTuning {
    /// Distance at which an orb is collected.
    pub collect_range: f32,
    /// Added to player speed when computing the attraction speed.
    pub attract_speed_offset: f32,
    /// Multiplies the offset player speed when computing the attraction speed.
    pub attract_speed_multiplier: f32,
    /// Maximum jitter applied to each orb around the death point.
    pub scatter: f32,
}

impl Default for OrbTuning {
    fn default() -> Self {
        Self {
            collect_range: 18.0,
            attract_speed_offset: 2.0,
            attract_speed_multiplier: 1.5,
            scatter: 6.0,
        }
    }
}

/// Relative frequency of each rarity when drawing upgrade offers.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RarityWeights {
    /// Weight of common upgrades.
    pub common: f32,
    /// Weight of rare upgrades.
    pub rare: f32,
    /// Weight of epic upgrades.
    pub epic: f32,
    /// Weight of legendary upgrades.
    pub legendary: f32,
}

impl RarityWeights {
    /// Weight assigned to the provided rarity.
    #[must_use]
    pub const fn weight(&self, rarity: Rarity) -> f32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
        }
    }

    /// Sum of every weight.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.common + self.rare + self.epic + self.legendary
    }
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self {
            common: 50.0,
            rare: 30.0,
            epic: 15.0,
            legendary: 5.0,
        }
    }
}

/// Level thresholds and upgrade offers.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LevelingTuning {
    /// Experience needed to leave level 1.
    pub initial_xp_to_next: u32,
    /// Threshold for level `n` is `n` times this value.
    pub xp_per_level: u32,
    /// Upgrades presented per offer.
    pub offer_size: usize,
    /// Rarity weights used for offers.
    pub rarity_weights: RarityWeights,
}

impl Default for LevelingTuning {
    fn default() -> Self {
        Self {
            initial_xp_to_next: 100,
            xp_per_level: 100,
            offer_size: 3,
            rarity_weights: RarityWeights::default(),
        }
    }
}

/// Difficulty curve constants.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DifficultyTuning {
    /// Seconds of play per tier.
    pub time_divisor: f32,
    /// Tiers contributed by each level above the first.
    pub level_weight: f32,
    /// Trickle spawn interval at tier 0, in milliseconds.
    pub spawn_interval_base_ms: f32,
    /// Milliseconds removed from the interval per tier.
    pub spawn_interval_reduction_ms: f32,
    /// Shortest interval before the spawn-rate multiplier, in milliseconds.
    pub spawn_interval_floor_ms: f32,
    /// Enemy HP at tier 0.
    pub enemy_hp_base: f32,
    /// Enemy HP added per tier, floored.
    pub enemy_hp_per_tier: f32,
    /// Enemy speed at tier 0.
    pub enemy_speed_base: f32,
    /// Enemy speed added per tier.
    pub enemy_speed_per_tier: f32,
    /// Enemy speed ceiling before the speed multiplier.
    pub enemy_speed_cap: f32,
    /// Enemy experience at tier 0.
    pub enemy_xp_base: f32,
    /// Relative experience growth per tier.
    pub enemy_xp_tier_scale: f32,
    /// Boss HP before any boss has spawned.
    pub boss_hp_base: f32,
    /// Boss HP added per boss already spawned.
    pub boss_hp_per_count: f32,
    /// Relative boss HP growth per tier.
    pub boss_hp_tier_scale: f32,
    /// Boss experience as a multiple of enemy experience.
    pub boss_xp_multiplier: u32,
    /// Seconds before the first boss.
    pub boss_first_spawn_secs: f32,
    /// Seconds between subsequent bosses.
    pub boss_spawn_interval_secs: f32,
    /// Tiers per additional orb.
    pub orb_tier_divisor: f32,
    /// Boss orb count as a multiple of the regular orb count.
    pub boss_orb_multiplier: u32,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            time_divisor: 20.0,
            level_weight: 0.5,
            spawn_interval_base_ms: 1000.0,
            spawn_interval_reduction_ms: 60.0,
            spawn_interval_floor_ms: 150.0,
            enemy_hp_base: 3.0,
            enemy_hp_per_tier: 0.8,
            enemy_speed_base: 1.5,
            enemy_speed_per_tier: 0.12,
            enemy_speed_cap: 4.0,
            enemy_xp_base: 20.0,
            enemy_xp_tier_scale: 0.15,
            boss_hp_base: 25.0,
            boss_hp_per_count: 10.0,
            boss_hp_tier_scale: 0.1,
            boss_xp_multiplier: 8,
            boss_first_spawn_secs: 120.0,
            boss_spawn_interval_secs: 90.0,
            orb_tier_divisor: 4.0,
            boss_orb_multiplier: 3,
        }
    }
}

/// Definition of a timed global modifier.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GlobalEventDefinition {
    /// Identifier of the event.
    pub kind: GlobalEventKind,
    /// Banner text.
    pub name: String,
    /// Banner colour.
    pub color: Color,
    /// Milliseconds the event stays active.
    pub duration_ms: f32,
    /// Multipliers moved while active.
    pub effect: ModifierEffect,
}

/// Timed global events.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventTuning {
    /// Fixed part of the idle cooldown, in milliseconds.
    pub cooldown_base_ms: f32,
    /// Random part of the idle cooldown, in milliseconds.
    pub cooldown_variance_ms: f32,
    /// Events the engine selects from.
    pub catalog: Vec<GlobalEventDefinition>,
}

impl Default for EventTuning {
    fn default() -> Self {
        Self {
            cooldown_base_ms: 60_000.0,
            cooldown_variance_ms: 30_000.0,
            catalog: vec![
                GlobalEventDefinition {
                    kind: GlobalEventKind::Swarm,
                    name: "Swarm!".to_owned(),
                    color: Color::from_hex(0xf97316),
                    duration_ms: 15_000.0,
                    effect: ModifierEffect {
                        spawn_rate: Some(2.0),
                        ..ModifierEffect::default()
                    },
                },
                GlobalEventDefinition {
                    kind: GlobalEventKind::Berserker,
                    name: "Berserker!".to_owned(),
                    color: Color::from_hex(0xef4444),
                    duration_ms: 10_000.0,
                    effect: ModifierEffect {
                        damage: Some(2.0),
                        ..ModifierEffect::default()
                    },
                },
                GlobalEventDefinition {
                    kind: GlobalEventKind::Frost,
                    name: "Frost".to_owned(),
                    color: Color::from_hex(0x38bdf8),
                    duration_ms: 12_000.0,
                    effect: ModifierEffect {
                        enemy_speed: Some(0.5),
                        ..ModifierEffect::default()
                    },
                },
                GlobalEventDefinition {
                    kind: GlobalEventKind::BloodMoon,
                    name: "Blood Moon".to_owned(),
                    color: Color::from_hex(0xdc2626),
                    duration_ms: 20_000.0,
                    effect: ModifierEffect {
                        enemy_hp: Some(2.0),
                        xp: Some(2.0),
                        ..ModifierEffect::default()
                    },
                },
            ],
        }
    }
}

/// Ring of enemies around the player.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EncirclementTuning {
    /// Banner text.
    pub name: String,
    /// Banner colour.
    pub color: Color,
    /// Fewest enemies spawned.
    pub count_base: u32,
    /// Extra enemies drawn uniformly from `0..=count_range`.
    pub count_range: u32,
    /// Fixed part of the ring radius.
    pub radius: f32,
    /// Random part of the ring radius, drawn per enemy.
    pub radius_variance: f32,
    /// Milliseconds trickle spawning stays paused.
    pub suppress_ms: f32,
}

impl Default for EncirclementTuning {
    fn default() -> Self {
        Self {
            name: "Encirclement!".to_owned(),
            color: Color::from_hex(0xfbbf24),
            count_base: 8,
            count_range: 4,
            radius: 280.0,
            radius_variance: 40.0,
            suppress_ms: 4000.0,
        }
    }
}

/// Line of fast enemies charging from one side.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RushTuning {
    /// Banner text.
    pub name: String,
    /// Banner colour.
    pub color: Color,
    /// Fewest enemies spawned.
    pub count_base: u32,
    /// Extra enemies drawn uniformly from `0..=count_range`.
    pub count_range: u32,
    /// Distance of the line from the player.
    pub distance: f32,
    /// Spacing between enemies along the line.
    pub spacing: f32,
    /// Speed multiplier applied to the line.
    pub speed_mult: f32,
    /// Milliseconds trickle spawning stays paused.
    pub suppress_ms: f32,
}

impl Default for RushTuning {
    fn default() -> Self {
        Self {
            name: "Rush!".to_owned(),
            color: Color::from_hex(0xf97316),
            count_base: 10,
            count_range: 5,
            distance: 350.0,
            spacing: 40.0,
            speed_mult: 1.3,
            suppress_ms: 3000.0,
        }
    }
}

/// Small pack of durable, high-value enemies.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EliteTuning {
    /// Banner text.
    pub name: String,
    /// Banner colour.
    pub color: Color,
    /// Fewest enemies spawned.
    pub count_base: u32,
    /// Extra enemies drawn uniformly from `0..=count_range`.
    pub count_range: u32,
    /// Fixed part of the spawn radius.
    pub radius: f32,
    /// Random part of the spawn radius, drawn per enemy.
    pub radius_variance: f32,
    /// HP multiplier.
    pub hp_mult: f32,
    /// Speed multiplier.
    pub speed_mult: f32,
    /// Experience multiplier.
    pub xp_mult: f32,
    /// Milliseconds trickle spawning stays paused.
    pub suppress_ms: f32,
}

impl Default for EliteTuning {
    fn default() -> Self {
        Self {
            name: "Elite Squad!".to_owned(),
            color: Color::from_hex(0xa78bfa),
            count_base: 3,
            count_range: 2,
            radius: 250.0,
            radius_variance: 100.0,
            hp_mult: 3.0,
            speed_mult: 0.8,
            xp_mult: 2.0,
            suppress_ms: 5000.0,
        }
    }
}

/// Scripted waves.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WaveTuning {
    /// Fixed part of the delay before the first wave, in milliseconds.
    pub first_delay_base_ms: f32,
    /// Random part of the delay before the first wave, in milliseconds.
    pub first_delay_variance_ms: f32,
    /// Fixed part of the cooldown between waves, in milliseconds.
    pub cooldown_base_ms: f32,
    /// Random part of the cooldown between waves, in milliseconds.
    pub cooldown_variance_ms: f32,
    /// Patterns the engine selects from, in selection order.
    pub patterns: Vec<WaveKind>,
    /// Encirclement parameters.
    pub encirclement: EncirclementTuning,
    /// Rush parameters.
    pub rush: RushTuning,
    /// Elite squad parameters.
    pub elite: EliteTuning,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            first_delay_base_ms: 120_000.0,
            first_delay_variance_ms: 30_000.0,
            cooldown_base_ms: 90_000.0,
            cooldown_variance_ms: 30_000.0,
            patterns: vec![WaveKind::Encirclement, WaveKind::Rush, WaveKind::Elite],
            encirclement: EncirclementTuning::default(),
            rush: RushTuning::default(),
            elite: EliteTuning::default(),
        }
    }
}
