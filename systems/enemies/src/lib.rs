#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Enemy behaviour: chasing the player, contact damage and reaping.

use std::time::Duration;

use swarm_survival_core::{ArenaTuning, Event, PlayerStats, PlayerTuning};
use swarm_survival_world::{Enemy, Player, Pool};

/// Configuration parameters required to construct the enemy system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    reference_frame_ms: f32,
    invulnerability_ms: f32,
    min_damage_taken: f32,
}

impl Config {
    /// Creates a configuration from the relevant tuning sections.
    #[must_use]
    pub fn new(arena: &ArenaTuning, player: &PlayerTuning) -> Self {
        Self {
            reference_frame_ms: arena.reference_frame_ms,
            invulnerability_ms: player.invulnerability_ms,
            min_damage_taken: player.min_damage_taken,
        }
    }
}

/// Stateless system driving every active enemy.
#[derive(Debug)]
pub struct Enemies {
    config: Config,
}

impl Enemies {
    /// Creates the enemy system.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Moves every enemy toward the player and applies contact damage.
    ///
    /// Emits [`Event::PlayerHit`] for each hit that lands and
    /// [`Event::PlayerDied`] on the hit that drops the player to zero HP.
    pub fn handle(
        &self,
        events: &[Event],
        player: &mut Player,
        stats: &PlayerStats,
        enemies: &mut Pool<Enemy>,
        out: &mut Vec<Event>,
    ) {
        let dt = elapsed(events);
        if dt.is_zero() {
            return;
        }
        let dt_ms = dt.as_secs_f32() * 1000.0;
        let frames = dt_ms / self.config.reference_frame_ms;
        let target = player.position();

        enemies.for_each_mut(|_, enemy| {
            enemy.advance(target, frames, dt_ms);
            if enemy.position().distance(player.position()) >= enemy.collision_radius() {
                return;
            }
            let Some(damage) = player.take_hit(
                enemy.contact_damage(),
                stats.armor(),
                self.config.min_damage_taken,
                self.config.invulnerability_ms,
            ) else {
                return;
            };
            out.push(Event::PlayerHit { damage });
            if !player.is_alive() {
                out.push(Event::PlayerDied);
            }
        });
    }

    /// Releases every dead enemy, emitting [`Event::EnemyDied`] for each in
    /// active-list order.
    pub fn reap(&self, enemies: &mut Pool<Enemy>, out: &mut Vec<Event>) {
        enemies.reap(|_, enemy| {
            out.push(Event::EnemyDied {
                position: enemy.position(),
                xp: enemy.xp(),
                is_boss: enemy.is_boss(),
                color: enemy.color(),
            });
        });
    }
}

fn elapsed(events: &[Event]) -> Duration {
    events
        .iter()
        .filter_map(|event| match event {
            Event::TimeAdvanced { dt } => Some(*dt),
            _ => None,
        })
        .fold(Duration::ZERO, Duration::saturating_add)
}
