use std::time::Duration;

use serde::Serialize;

use crate::{millis, PlayerTuning, UpgradeId};

/// Lowest max HP a run may reach through upgrades.
pub const MIN_MAX_HP: f32 = 1.0;
/// Lowest armor a run may reach through upgrades.
pub const MIN_ARMOR: f32 = 0.0;
/// Shortest attack interval, in milliseconds, a run may reach through upgrades.
pub const MIN_ATTACK_INTERVAL_MS: f32 = 150.0;

/// Mutable player statistics owned by the run.
///
/// Every mutator clamps at the point of mutation so that no sequence of
/// upgrades can push a stat below its floor.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerStats {
    speed: f32,
    max_hp: f32,
    damage: f32,
    attack_interval_ms: f32,
    projectile_count: u32,
    projectile_speed: f32,
    armor: f32,
    regen_rate: f32,
    attract_range: f32,
    piercing_count: u32,
    homing_enabled: bool,
    orbital_count: u32,
    nova_enabled: bool,
}

impl PlayerStats {
    /// Creates the starting stats described by the provided tuning.
    #[must_use]
    pub fn from_tuning(tuning: &PlayerTuning) -> Self {
        Self {
            speed: tuning.speed,
            max_hp: tuning.max_hp.max(MIN_MAX_HP),
            damage: tuning.damage,
            attack_interval_ms: tuning.attack_interval_ms.max(MIN_ATTACK_INTERVAL_MS),
            projectile_count: tuning.projectile_count,
            projectile_speed: tuning.projectile_speed,
            armor: tuning.armor.max(MIN_ARMOR),
            regen_rate: tuning.regen_rate,
            attract_range: tuning.attract_range,
            piercing_count: 0,
            homing_enabled: false,
            orbital_count: 0,
            nova_enabled: false,
        }
    }

    /// Movement speed in units per reference frame.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Maximum HP.
    #[must_use]
    pub const fn max_hp(&self) -> f32 {
        self.max_hp
    }

    /// Base projectile damage.
    #[must_use]
    pub const fn damage(&self) -> f32 {
        self.damage
    }

    /// Interval between auto-attacks.
    #[must_use]
    pub fn attack_interval(&self) -> Duration {
        millis(self.attack_interval_ms)
    }

    /// Interval between auto-attacks, in milliseconds.
    #[must_use]
    pub const fn attack_interval_ms(&self) -> f32 {
        self.attack_interval_ms
    }

    /// Projectiles fired per attack.
    #[must_use]
    pub const fn projectile_count(&self) -> u32 {
        self.projectile_count
    }

    /// Projectile speed in units per reference frame.
    #[must_use]
    pub const fn projectile_speed(&self) -> f32 {
        self.projectile_speed
    }

    /// Flat damage reduction applied to contact hits.
    #[must_use]
    pub const fn armor(&self) -> f32 {
        self.armor
    }

    /// HP regenerated per second.
    #[must_use]
    pub const fn regen_rate(&self) -> f32 {
        self.regen_rate
    }

    /// Distance at which experience orbs start drifting toward the player.
    #[must_use]
    pub const fn attract_range(&self) -> f32 {
        self.attract_range
    }

    /// Additional enemies each projectile may pass through.
    #[must_use]
    pub const fn piercing_count(&self) -> u32 {
        self.piercing_count
    }

    /// Whether newly fired projectiles home onto the nearest enemy.
    #[must_use]
    pub const fn homing_enabled(&self) -> bool {
        self.homing_enabled
    }

    /// Number of orbiting shield orbs.
    #[must_use]
    pub const fn orbital_count(&self) -> u32 {
        self.orbital_count
    }

    /// Whether the periodic nova burst is active.
    #[must_use]
    pub const fn nova_enabled(&self) -> bool {
        self.nova_enabled
    }

    /// Multiplies movement speed.
    pub fn scale_speed(&mut self, factor: f32) {
        self.speed = (self.speed * factor).max(0.0);
    }

    /// Adds to max HP, clamping at [`MIN_MAX_HP`].
    pub fn add_max_hp(&mut self, amount: f32) {
        self.max_hp = (self.max_hp + amount).max(MIN_MAX_HP);
    }

    /// Adds flat projectile damage.
    pub fn add_damage(&mut self, amount: f32) {
        self.damage = (self.damage + amount).max(0.0);
    }

    /// Multiplies projectile damage.
    pub fn scale_damage(&mut self, factor: f32) {
        self.damage = (self.damage * factor).max(0.0);
    }

    /// Multiplies the attack interval, clamping at [`MIN_ATTACK_INTERVAL_MS`].
    pub fn scale_attack_interval(&mut self, factor: f32) {
        self.attack_interval_ms = (self.attack_interval_ms * factor).max(MIN_ATTACK_INTERVAL_MS);
    }

    /// Adds projectiles per attack.
    pub fn add_projectiles(&mut self, count: u32) {
        self.projectile_count = self.projectile_count.saturating_add(count);
    }

    /// Multiplies projectile speed.
    pub fn scale_projectile_speed(&mut self, factor: f32) {
        self.projectile_speed = (self.projectile_speed * factor).max(0.0);
    }

    /// Adds to armor, clamping at [`MIN_ARMOR`].
    pub fn add_armor(&mut self, amount: f32) {
        self.armor = (self.armor + amount).max(MIN_ARMOR);
    }

    /// Adds HP regenerated per second.
    pub fn add_regen(&mut self, amount: f32) {
        self.regen_rate = (self.regen_rate + amount).max(0.0);
    }

    /// Multiplies the orb attraction range.
    pub fn scale_attract_range(&mut self, factor: f32) {
        self.attract_range = (self.attract_range * factor).max(0.0);
    }

    /// Adds piercing charges to newly fired projectiles.
    pub fn add_piercing(&mut self, count: u32) {
        self.piercing_count = self.piercing_count.saturating_add(count);
    }

    /// Turns on homing for newly fired projectiles.
    pub fn enable_homing(&mut self) {
        self.homing_enabled = true;
    }

    /// Adds orbiting shield orbs.
    pub fn add_orbitals(&mut self, count: u32) {
        self.orbital_count = self.orbital_count.saturating_add(count);
    }

    /// Turns on the periodic nova burst.
    pub fn enable_nova(&mut self) {
        self.nova_enabled = true;
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::from_tuning(&PlayerTuning::default())
    }
}

/// Telemetry accumulated over a run. Never read back by the simulation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RunStats {
    /// Enemies killed, bosses included.
    pub kills: u32,
    /// Bosses killed.
    pub bosses_killed: u32,
    /// Damage dealt by player weapons.
    pub damage_dealt: u64,
    /// Damage taken from contact hits.
    pub damage_taken: f32,
    /// Experience collected from orbs.
    pub xp_collected: u64,
    /// Upgrades taken, in order.
    pub upgrades: Vec<UpgradeId>,
    /// Simulated time elapsed, in seconds.
    pub elapsed_secs: f32,
    /// Highest level reached.
    pub highest_level: u32,
    /// Scripted waves started.
    pub waves: u32,
    /// Global events started.
    pub global_events: u32,
}
