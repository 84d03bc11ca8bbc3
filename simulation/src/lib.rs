#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative Swarm Survival run.
//!
//! [`Simulation`] owns the world, the player's stats and every system, and
//! advances them in a fixed order each time [`apply`] receives a
//! [`Command::Tick`]. All randomness flows through per-concern ChaCha streams
//! derived from the run seed, so two simulations fed the same seed and
//! commands emit identical event streams.

mod streams;

use std::time::Duration;

use swarm_survival_core::{
    ChoiceError, Command, Event, FrameInput, PlayerStats, Tuning, TuningError,
};
use swarm_survival_system_analytics::Analytics;
use swarm_survival_system_combat::{self as combat, Combat};
use swarm_survival_system_difficulty::Difficulty;
use swarm_survival_system_enemies::{self as enemies, Enemies};
use swarm_survival_system_events::EventEngine;
use swarm_survival_system_progression::{self as progression, Progression};
use swarm_survival_system_spawning::{self as spawning, Spawning};
use swarm_survival_system_waves::WaveEngine;
use swarm_survival_world::World;

use streams::Streams;

/// A single run of the arena together with every system driving it.
#[derive(Debug)]
pub struct Simulation {
    tuning: Tuning,
    seed: u64,
    resets: u64,
    over: bool,
    streams: Streams,
    world: World,
    stats: PlayerStats,
    difficulty: Difficulty,
    events: EventEngine,
    waves: WaveEngine,
    spawning: Spawning,
    enemies: Enemies,
    combat: Combat,
    progression: Progression,
    analytics: Analytics,
}

impl Simulation {
    /// Validates the tuning and starts a fresh run seeded with `seed`.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;

        let mut streams = Streams::derive(seed, 0);
        let events = EventEngine::new(tuning.events.clone(), &mut streams.events);
        let waves = WaveEngine::new(tuning.waves.clone(), &mut streams.waves);

        Ok(Self {
            world: World::new(&tuning),
            stats: PlayerStats::from_tuning(&tuning.player),
            difficulty: Difficulty::new(tuning.difficulty.clone()),
            events,
            waves,
            spawning: Spawning::new(spawning::Config::new(&tuning.arena, tuning.enemy.clone())),
            enemies: Enemies::new(enemies::Config::new(&tuning.arena, &tuning.player)),
            combat: Combat::new(combat::Config::new(&tuning)),
            progression: Progression::new(progression::Config::new(
                &tuning.arena,
                tuning.leveling.clone(),
                tuning.orbs.clone(),
            )),
            analytics: Analytics::new(),
            streams,
            seed,
            resets: 0,
            over: false,
            tuning,
        })
    }
}

/// Applies the provided command to the run, appending every resulting event
/// to `out_events`.
pub fn apply(simulation: &mut Simulation, command: Command, out_events: &mut Vec<Event>) {
    let start = out_events.len();
    match command {
        Command::Tick { dt, input } => tick(simulation, dt, input, out_events),
        Command::ChooseUpgrade { slot } => choose_upgrade(simulation, slot, out_events),
        Command::Reset => reset(simulation, out_events),
    }
    let emitted = &out_events[start..];
    simulation.analytics.handle(emitted);
    log_milestones(emitted);
}

fn tick(sim: &mut Simulation, dt: Duration, input: FrameInput, out: &mut Vec<Event>) {
    if sim.over || dt.is_zero() {
        return;
    }
    let clock = [Event::TimeAdvanced { dt }];
    out.extend_from_slice(&clock);

    sim.difficulty.handle(&clock);
    sim.events.handle(&clock, &mut sim.streams.events, out);
    let modifiers = sim.events.modifiers();

    let dt_ms = dt.as_secs_f32() * 1000.0;
    let frames = dt_ms / sim.tuning.arena.reference_frame_ms;
    let mut parts = sim.world.parts_mut();

    parts
        .player
        .advance(input.movement, sim.stats.speed(), frames, parts.size);
    parts
        .player
        .regenerate(sim.stats.regen_rate(), dt.as_secs_f32(), sim.stats.max_hp());
    parts.player.decay_invulnerability(dt_ms);

    let player = parts.player.position();
    let snapshot = sim.difficulty.snapshot(sim.progression.level(), &modifiers);

    {
        let spawner = &sim.spawning;
        let pool = &mut *parts.enemies;
        sim.waves.handle(
            &clock,
            player,
            &snapshot,
            &mut sim.streams.waves,
            |wave| {
                let _ = pool.acquire(spawner.regular_enemy(
                    wave.position,
                    wave.hp,
                    wave.speed,
                    wave.xp,
                ));
            },
            out,
        );
    }

    let viewport = sim.spawning.viewport(input.viewport, player);
    let _ = sim.spawning.handle(
        &clock,
        sim.waves.is_suppressing(),
        &snapshot,
        viewport,
        &mut sim.streams.spawning,
        parts.enemies,
    );
    if sim.difficulty.check_boss_spawn() {
        let _ = sim.spawning.spawn_boss(
            &snapshot,
            viewport,
            &mut sim.streams.spawning,
            parts.enemies,
            out,
        );
    }

    sim.enemies
        .handle(&clock, parts.player, &sim.stats, parts.enemies, out);
    sim.combat
        .handle(&clock, &mut parts, &sim.stats, &modifiers, out);

    let reaped = out.len();
    sim.enemies.reap(parts.enemies, out);
    sim.progression.drop_orbs(
        &out[reaped..],
        &snapshot,
        &modifiers,
        &mut sim.streams.progression,
        parts.orbs,
    );

    sim.progression.collect_orbs(
        &clock,
        parts.player.position(),
        &sim.stats,
        parts.orbs,
        out,
    );
    sim.progression.offer_next(&mut sim.streams.progression, out);

    if !parts.player.is_alive() {
        sim.over = true;
    }
}

fn choose_upgrade(sim: &mut Simulation, slot: usize, out: &mut Vec<Event>) {
    if sim.over {
        out.push(Event::UpgradeChoiceRejected {
            slot,
            reason: ChoiceError::RunOver,
        });
        return;
    }

    let upgrade = match sim.progression.choose(slot) {
        Ok(upgrade) => upgrade,
        Err(reason) => {
            out.push(Event::UpgradeChoiceRejected { slot, reason });
            return;
        }
    };

    let mut healed = 0.0;
    upgrade.apply(&mut sim.stats, |amount| healed += amount);

    let parts = sim.world.parts_mut();
    let max_hp = sim.stats.max_hp();
    parts.player.heal(healed, max_hp);
    parts.player.cap_hp(max_hp);
    out.push(Event::UpgradeApplied {
        upgrade: upgrade.id,
    });

    if upgrade.instant {
        sim.progression.collect_all(parts.orbs, out);
    }
    sim.progression.offer_next(&mut sim.streams.progression, out);
}

fn reset(sim: &mut Simulation, out: &mut Vec<Event>) {
    sim.resets = sim.resets.saturating_add(1);
    sim.streams = Streams::derive(sim.seed, sim.resets);

    sim.world.reset(&sim.tuning);
    sim.stats = PlayerStats::from_tuning(&sim.tuning.player);
    sim.difficulty.reset();
    sim.events.reset(&mut sim.streams.events);
    sim.waves.reset(&mut sim.streams.waves);
    sim.spawning.reset();
    sim.combat.reset();
    sim.progression.reset();
    sim.over = false;

    out.push(Event::RunReset);
}

fn log_milestones(events: &[Event]) {
    for event in events {
        match event {
            Event::WaveStarted { kind, name } => {
                tracing::info!(?kind, %name, "wave started");
            }
            Event::GlobalEventStarted { kind, duration, .. } => {
                tracing::info!(?kind, ?duration, "global event started");
            }
            Event::GlobalEventEnded { kind } => tracing::debug!(?kind, "global event ended"),
            Event::BossSpawned { position } => {
                tracing::info!(x = position.x, y = position.y, "boss spawned");
            }
            Event::LeveledUp {
                level,
                levels_gained,
            } => tracing::info!(level = *level, levels_gained = *levels_gained, "leveled up"),
            Event::UpgradeOffered { level, choices } => {
                tracing::debug!(level = *level, ?choices, "upgrade offered");
            }
            Event::UpgradeApplied { upgrade } => tracing::info!(?upgrade, "upgrade applied"),
            Event::UpgradeChoiceRejected { slot, reason } => {
                tracing::debug!(slot = *slot, ?reason, "upgrade choice rejected");
            }
            Event::PlayerDied => tracing::info!("player died"),
            Event::RunReset => tracing::info!("run reset"),
            _ => {}
        }
    }
}

/// Query functions that provide read-only access to the run.
pub mod query {
    use std::time::Duration;

    use swarm_survival_core::{Modifiers, PlayerStats, RunStats, UpgradeId};
    use swarm_survival_system_difficulty::DifficultySnapshot;
    use swarm_survival_system_events::ActiveEvent;
    use swarm_survival_world::World;

    use super::Simulation;

    /// Provides read-only access to the entity state.
    #[must_use]
    pub fn world(simulation: &Simulation) -> &World {
        &simulation.world
    }

    /// Current player statistics.
    #[must_use]
    pub fn stats(simulation: &Simulation) -> &PlayerStats {
        &simulation.stats
    }

    /// Scaling values in effect for the current level and modifiers.
    #[must_use]
    pub fn difficulty(simulation: &Simulation) -> DifficultySnapshot {
        simulation
            .difficulty
            .snapshot(simulation.progression.level(), &modifiers(simulation))
    }

    /// Standing global multipliers.
    #[must_use]
    pub fn modifiers(simulation: &Simulation) -> Modifiers {
        simulation.events.modifiers()
    }

    /// Currently active global event, if any.
    #[must_use]
    pub fn active_event(simulation: &Simulation) -> Option<ActiveEvent<'_>> {
        simulation.events.active()
    }

    /// Reports whether a scripted wave is suppressing trickle spawns.
    #[must_use]
    pub fn wave_suppressing(simulation: &Simulation) -> bool {
        simulation.waves.is_suppressing()
    }

    /// Current player level.
    #[must_use]
    pub fn level(simulation: &Simulation) -> u32 {
        simulation.progression.level()
    }

    /// Experience toward the next level and the threshold to reach it.
    #[must_use]
    pub fn xp(simulation: &Simulation) -> (u32, u32) {
        (
            simulation.progression.xp(),
            simulation.progression.xp_to_next(),
        )
    }

    /// Upgrades awaiting a choice, in slot order.
    #[must_use]
    pub fn pending_offer(simulation: &Simulation) -> Option<&[UpgradeId]> {
        simulation.progression.pending_offer()
    }

    /// Upgrades taken this run, in pick order.
    #[must_use]
    pub fn upgrades_taken(simulation: &Simulation) -> &[UpgradeId] {
        simulation.progression.taken()
    }

    /// Telemetry accumulated this run.
    #[must_use]
    pub fn run_stats(simulation: &Simulation) -> &RunStats {
        simulation.analytics.stats()
    }

    /// Reports whether the player has died.
    #[must_use]
    pub fn is_over(simulation: &Simulation) -> bool {
        simulation.over
    }

    /// Simulated time since the run started.
    #[must_use]
    pub fn elapsed(simulation: &Simulation) -> Duration {
        simulation.difficulty.elapsed()
    }

    /// Seed the run was created with.
    #[must_use]
    pub fn seed(simulation: &Simulation) -> u64 {
        simulation.seed
    }

    /// Number of resets performed since construction.
    #[must_use]
    pub fn resets(simulation: &Simulation) -> u64 {
        simulation.resets
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use swarm_survival_core::{ChoiceError, Command, Event, FrameInput, Tuning};

    use super::{apply, query, Simulation};

    fn frame() -> Command {
        Command::Tick {
            dt: Duration::from_micros(16_666),
            input: FrameInput::default(),
        }
    }

    #[test]
    fn tick_announces_elapsed_time_first() {
        let mut simulation = Simulation::new(Tuning::default(), 1).expect("default tuning");
        let mut events = Vec::new();
        apply(&mut simulation, frame(), &mut events);

        assert_eq!(
            events.first(),
            Some(&Event::TimeAdvanced {
                dt: Duration::from_micros(16_666)
            })
        );
        assert_eq!(query::elapsed(&simulation), Duration::from_micros(16_666));
    }

    #[test]
    fn zero_length_tick_is_ignored() {
        let mut simulation = Simulation::new(Tuning::default(), 1).expect("default tuning");
        let mut events = Vec::new();
        apply(
            &mut simulation,
            Command::Tick {
                dt: Duration::ZERO,
                input: FrameInput::default(),
            },
            &mut events,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn choosing_before_any_offer_is_rejected() {
        let mut simulation = Simulation::new(Tuning::default(), 1).expect("default tuning");
        let mut events = Vec::new();
        apply(&mut simulation, Command::ChooseUpgrade { slot: 0 }, &mut events);
        assert_eq!(
            events,
            vec![Event::UpgradeChoiceRejected {
                slot: 0,
                reason: ChoiceError::NoPendingOffer,
            }]
        );
    }
}
