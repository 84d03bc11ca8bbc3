use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    time::Duration,
};

use swarm_survival_core::{Command, Event, FrameInput, Tuning, UpgradeId, Vec2, WaveKind};
use swarm_survival_simulation::{apply, query, Simulation};

const FRAME: Duration = Duration::from_micros(16_666);

#[test]
fn deterministic_replay_matches_between_runs() {
    let first = replay(0x5eed, 90);
    let second = replay(0x5eed, 90);

    assert_eq!(first, second, "replay diverged between runs");
    assert_eq!(first.fingerprint(), second.fingerprint());
    assert!(
        first.events.iter().any(|record| matches!(record, EventRecord::EnemyDied { .. })),
        "ninety seconds of play should kill at least one enemy"
    );
}

#[test]
fn different_seeds_diverge() {
    let first = replay(1, 60);
    let second = replay(2, 60);
    assert_ne!(first.fingerprint(), second.fingerprint());
}

#[test]
fn replay_after_reset_is_reproducible() {
    let mut left = Simulation::new(Tuning::default(), 99).expect("default tuning is valid");
    let mut right = Simulation::new(Tuning::default(), 99).expect("default tuning is valid");
    let mut scratch = Vec::new();

    for frame in 0..600 {
        apply(&mut left, tick(steer(frame)), &mut scratch);
    }
    for frame in 0..1_200 {
        apply(&mut right, tick(-steer(frame)), &mut scratch);
    }

    apply(&mut left, Command::Reset, &mut scratch);
    apply(&mut right, Command::Reset, &mut scratch);
    assert_eq!(query::run_stats(&left), query::run_stats(&right));
    assert_eq!(swarm_survival_world::query::player(query::world(&left)).position(), Vec2::splat(1500.0));

    let left_events = drive(&mut left, 45);
    let right_events = drive(&mut right, 45);
    assert_eq!(left_events, right_events, "post-reset runs diverged");
}

fn replay(seed: u64, seconds: u32) -> ReplayOutcome {
    let mut simulation = Simulation::new(Tuning::default(), seed).expect("default tuning is valid");
    ReplayOutcome {
        events: drive(&mut simulation, seconds),
        level: query::level(&simulation),
        upgrades: query::upgrades_taken(&simulation).to_vec(),
    }
}

fn drive(simulation: &mut Simulation, seconds: u32) -> Vec<EventRecord> {
    let mut records = Vec::new();
    let frames = seconds * 60;
    for frame in 0..frames {
        let mut events = Vec::new();
        apply(simulation, tick(steer(frame)), &mut events);
        if query::pending_offer(simulation).is_some() {
            apply(simulation, Command::ChooseUpgrade { slot: 0 }, &mut events);
        }
        records.extend(events.iter().map(EventRecord::from));
        if query::is_over(simulation) {
            break;
        }
    }
    records
}

fn tick(movement: Vec2) -> Command {
    Command::Tick {
        dt: FRAME,
        input: FrameInput {
            movement,
            viewport: None,
        },
    }
}

/// Walks a slow square so the player keeps crossing fresh spawn edges.
fn steer(frame: u32) -> Vec2 {
    match (frame / 180) % 4 {
        0 => Vec2::X,
        1 => Vec2::Y,
        2 => Vec2::NEG_X,
        _ => Vec2::NEG_Y,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ReplayOutcome {
    events: Vec<EventRecord>,
    level: u32,
    upgrades: Vec<UpgradeId>,
}

impl ReplayOutcome {
    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum EventRecord {
    TimeAdvanced { micros: u128 },
    EnemyDied { x: u32, y: u32, xp: u32, is_boss: bool },
    BossSpawned { x: u32, y: u32 },
    PlayerHit { damage: u32 },
    PlayerDied,
    DamageDealt { amount: u32 },
    NovaFired,
    WaveStarted { kind: WaveKind },
    GlobalEventStarted { name: String },
    GlobalEventEnded,
    XpGained { amount: u32 },
    LeveledUp { level: u32, levels_gained: u32 },
    UpgradeOffered { level: u32, choices: Vec<UpgradeId> },
    UpgradeApplied { upgrade: UpgradeId },
    UpgradeChoiceRejected { slot: usize },
    RunReset,
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        match event {
            Event::TimeAdvanced { dt } => Self::TimeAdvanced {
                micros: dt.as_micros(),
            },
            Event::EnemyDied {
                position,
                xp,
                is_boss,
                ..
            } => Self::EnemyDied {
                x: position.x.to_bits(),
                y: position.y.to_bits(),
                xp: *xp,
                is_boss: *is_boss,
            },
            Event::BossSpawned { position } => Self::BossSpawned {
                x: position.x.to_bits(),
                y: position.y.to_bits(),
            },
            Event::PlayerHit { damage } => Self::PlayerHit {
                damage: damage.to_bits(),
            },
            Event::PlayerDied => Self::PlayerDied,
            Event::DamageDealt { amount } => Self::DamageDealt { amount: *amount },
            Event::NovaFired { .. } => Self::NovaFired,
            Event::WaveStarted { kind, .. } => Self::WaveStarted { kind: *kind },
            Event::GlobalEventStarted { name, .. } => Self::GlobalEventStarted { name: name.clone() },
            Event::GlobalEventEnded { .. } => Self::GlobalEventEnded,
            Event::XpGained { amount } => Self::XpGained { amount: *amount },
            Event::LeveledUp {
                level,
                levels_gained,
            } => Self::LeveledUp {
                level: *level,
                levels_gained: *levels_gained,
            },
            Event::UpgradeOffered { level, choices } => Self::UpgradeOffered {
                level: *level,
                choices: choices.clone(),
            },
            Event::UpgradeApplied { upgrade } => Self::UpgradeApplied { upgrade: *upgrade },
            Event::UpgradeChoiceRejected { slot, .. } => Self::UpgradeChoiceRejected { slot: *slot },
            Event::RunReset => Self::RunReset,
        }
    }
}
