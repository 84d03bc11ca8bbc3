#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Run telemetry folded from the simulation's event stream.

mod metrics;

pub use metrics::{summarize, RunSummary};

use std::time::Duration;

use swarm_survival_core::{Event, RunStats};

/// Pure analytics system that accumulates [`RunStats`] from events.
#[derive(Debug)]
pub struct Analytics {
    stats: RunStats,
    elapsed: Duration,
}

impl Analytics {
    /// Creates an analytics system for a fresh run at level 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: RunStats {
                highest_level: 1,
                ..RunStats::default()
            },
            elapsed: Duration::ZERO,
        }
    }

    /// Statistics accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Folds one tick's events into the run statistics. [`Event::RunReset`]
    /// starts over.
    pub fn handle(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::TimeAdvanced { dt } => {
                    self.elapsed = self.elapsed.saturating_add(*dt);
                    self.stats.elapsed_secs = self.elapsed.as_secs_f32();
                }
                Event::EnemyDied { is_boss, .. } => {
                    self.stats.kills += 1;
                    if *is_boss {
                        self.stats.bosses_killed += 1;
                    }
                }
                Event::DamageDealt { amount } => {
                    self.stats.damage_dealt += u64::from(*amount);
                }
                Event::PlayerHit { damage } => self.stats.damage_taken += damage,
                Event::XpGained { amount } => {
                    self.stats.xp_collected += u64::from(*amount);
                }
                Event::LeveledUp { level, .. } => {
                    self.stats.highest_level = self.stats.highest_level.max(*level);
                }
                Event::UpgradeApplied { upgrade } => self.stats.upgrades.push(*upgrade),
                Event::WaveStarted { .. } => self.stats.waves += 1,
                Event::GlobalEventStarted { .. } => self.stats.global_events += 1,
                Event::RunReset => *self = Self::new(),
                _ => {}
            }
        }
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use swarm_survival_core::{Event, UpgradeId};

    use super::Analytics;

    #[test]
    fn reset_event_starts_over() {
        let mut analytics = Analytics::new();
        analytics.handle(&[
            Event::TimeAdvanced {
                dt: Duration::from_secs(3),
            },
            Event::UpgradeApplied {
                upgrade: UpgradeId::Blitz,
            },
            Event::RunReset,
        ]);

        assert_eq!(analytics.stats().elapsed_secs, 0.0);
        assert!(analytics.stats().upgrades.is_empty());
        assert_eq!(analytics.stats().highest_level, 1);
    }
}
