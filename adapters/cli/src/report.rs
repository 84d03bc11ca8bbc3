use std::fmt;

use serde::Serialize;
use swarm_survival_system_analytics::RunSummary;

/// End-of-run report printed by the binary.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct Report {
    /// Seed the run was started with.
    pub(crate) seed: u64,
    /// Whether the player died before the time limit.
    pub(crate) died: bool,
    /// Level at the end of the run.
    pub(crate) level: u32,
    /// Telemetry and derived rates.
    #[serde(flatten)]
    pub(crate) summary: RunSummary,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.summary.stats;
        let outcome = if self.died { "died" } else { "survived" };
        writeln!(
            f,
            "seed {}: {outcome} after {:.1}s at level {}",
            self.seed, stats.elapsed_secs, self.level
        )?;
        writeln!(
            f,
            "kills      {} ({} bosses, {:.1}/min)",
            stats.kills, stats.bosses_killed, self.summary.kills_per_minute
        )?;
        writeln!(
            f,
            "damage     {} dealt ({:.1}/s), {:.0} taken",
            stats.damage_dealt, self.summary.damage_per_second, stats.damage_taken
        )?;
        writeln!(f, "xp         {}", stats.xp_collected)?;
        writeln!(
            f,
            "waves      {}, global events {}",
            stats.waves, stats.global_events
        )?;
        if stats.upgrades.is_empty() {
            writeln!(f, "upgrades   none")
        } else {
            let names: Vec<String> = stats
                .upgrades
                .iter()
                .map(|upgrade| format!("{upgrade:?}"))
                .collect();
            writeln!(f, "upgrades   {}", names.join(", "))
        }
    }
}
