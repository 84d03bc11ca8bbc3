use serde::Serialize;
use swarm_survival_core::RunStats;

/// Rates derived from [`RunStats`] for end-of-run reporting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    /// Raw accumulated statistics.
    #[serde(flatten)]
    pub stats: RunStats,
    /// Kills per simulated minute.
    pub kills_per_minute: f32,
    /// Damage dealt per simulated second.
    pub damage_per_second: f32,
    /// Share of damage dealt to damage taken. Absent when no damage was taken.
    pub damage_ratio: Option<f32>,
}

/// Derives the end-of-run rates. Rates are zero for runs that never advanced.
#[must_use]
pub fn summarize(stats: &RunStats) -> RunSummary {
    let secs = stats.elapsed_secs;
    let (kills_per_minute, damage_per_second) = if secs > 0.0 {
        (
            stats.kills as f32 * 60.0 / secs,
            stats.damage_dealt as f32 / secs,
        )
    } else {
        (0.0, 0.0)
    };
    let damage_ratio =
        (stats.damage_taken > 0.0).then(|| stats.damage_dealt as f32 / stats.damage_taken);

    RunSummary {
        stats: stats.clone(),
        kills_per_minute,
        damage_per_second,
        damage_ratio,
    }
}
