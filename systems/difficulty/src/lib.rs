#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Time and level driven difficulty curve.
//!
//! The engine only stores elapsed time and the number of bosses spawned so
//! far. Every scaling value is derived on access from the current tier, so
//! consumers always observe a consistent [`DifficultySnapshot`].

use std::time::Duration;

use swarm_survival_core::{millis, DifficultyTuning, Event, Modifiers};

/// Scaling values derived from the current tier and global modifiers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultySnapshot {
    /// Tier the values were derived from.
    pub tier: f32,
    /// Interval between trickle spawns.
    pub spawn_interval: Duration,
    /// HP of regular enemies.
    pub enemy_hp: i32,
    /// Speed of regular enemies.
    pub enemy_speed: f32,
    /// Experience paid by regular enemies.
    pub enemy_xp: u32,
    /// HP of the next boss.
    pub boss_hp: i32,
    /// Experience paid by bosses.
    pub boss_xp: u32,
    /// Orbs dropped by regular enemies.
    pub enemy_orb_count: u32,
    /// Orbs dropped by bosses.
    pub boss_orb_count: u32,
}

/// Difficulty engine advanced by `TimeAdvanced` events.
#[derive(Clone, Debug)]
pub struct Difficulty {
    tuning: DifficultyTuning,
    elapsed: Duration,
    boss_count: u32,
}

impl Difficulty {
    /// Creates an engine at tier zero.
    #[must_use]
    pub fn new(tuning: DifficultyTuning) -> Self {
        Self {
            tuning,
            elapsed: Duration::ZERO,
            boss_count: 0,
        }
    }

    /// Accumulates the time carried by `TimeAdvanced` events.
    pub fn handle(&mut self, events: &[Event]) {
        for event in events {
            if let Event::TimeAdvanced { dt } = event {
                self.elapsed = self.elapsed.saturating_add(*dt);
            }
        }
    }

    /// Simulated time since the run started.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Bosses spawned so far.
    #[must_use]
    pub const fn boss_count(&self) -> u32 {
        self.boss_count
    }

    /// Continuous difficulty tier for the provided player level.
    #[must_use]
    pub fn tier(&self, level: u32) -> f32 {
        self.elapsed.as_secs_f32() / self.tuning.time_divisor
            + level.saturating_sub(1) as f32 * self.tuning.level_weight
    }

    /// Derives every scaling value for the provided level and modifiers.
    #[must_use]
    pub fn snapshot(&self, level: u32, modifiers: &Modifiers) -> DifficultySnapshot {
        let tuning = &self.tuning;
        let tier = self.tier(level);

        let interval_ms = (tuning.spawn_interval_base_ms
            - tier * tuning.spawn_interval_reduction_ms)
            .max(tuning.spawn_interval_floor_ms);
        let spawn_interval = millis(interval_ms / modifiers.spawn_rate.max(f32::MIN_POSITIVE));

        let base_hp = tuning.enemy_hp_base + (tier * tuning.enemy_hp_per_tier).floor();
        let enemy_hp = (base_hp * modifiers.enemy_hp).round() as i32;

        let enemy_speed = (tuning.enemy_speed_base + tier * tuning.enemy_speed_per_tier)
            .min(tuning.enemy_speed_cap)
            * modifiers.enemy_speed;

        let enemy_xp =
            (tuning.enemy_xp_base * (1.0 + tier * tuning.enemy_xp_tier_scale)).floor() as u32;

        let boss_hp = ((tuning.boss_hp_base + self.boss_count as f32 * tuning.boss_hp_per_count)
            * (1.0 + tier * tuning.boss_hp_tier_scale))
            .round() as i32;

        let enemy_orb_count = 1 + (tier / tuning.orb_tier_divisor).floor() as u32;

        DifficultySnapshot {
            tier,
            spawn_interval,
            enemy_hp,
            enemy_speed,
            enemy_xp,
            boss_hp,
            boss_xp: enemy_xp.saturating_mul(tuning.boss_xp_multiplier),
            enemy_orb_count,
            boss_orb_count: enemy_orb_count.saturating_mul(tuning.boss_orb_multiplier),
        }
    }

    /// Returns true exactly once each time elapsed time crosses the next boss
    /// threshold, counting the boss.
    pub fn check_boss_spawn(&mut self) -> bool {
        let threshold = self.tuning.boss_first_spawn_secs
            + self.boss_count as f32 * self.tuning.boss_spawn_interval_secs;
        if self.elapsed.as_secs_f32() >= threshold {
            self.boss_count += 1;
            return true;
        }
        false
    }

    /// Returns to tier zero with no bosses spawned.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.boss_count = 0;
    }
}
