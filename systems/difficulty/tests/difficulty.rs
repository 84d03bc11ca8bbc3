use std::time::Duration;

use swarm_survival_core::{DifficultyTuning, Event, Modifiers};
use swarm_survival_system_difficulty::Difficulty;

fn tick(difficulty: &mut Difficulty, dt: Duration) {
    difficulty.handle(&[Event::TimeAdvanced { dt }]);
}

#[test]
fn scaling_is_monotonic_and_speed_is_capped() {
    let mut difficulty = Difficulty::new(DifficultyTuning::default());
    let mut previous = difficulty.snapshot(1, &Modifiers::NEUTRAL);

    for _ in 0..1200 {
        tick(&mut difficulty, Duration::from_secs(1));
        for level in [1, 4, 12] {
            let snapshot = difficulty.snapshot(level, &Modifiers::NEUTRAL);
            assert!(snapshot.enemy_speed <= 4.0, "speed cap exceeded");
            assert!(snapshot.spawn_interval >= Duration::from_millis(150));
        }

        let snapshot = difficulty.snapshot(1, &Modifiers::NEUTRAL);
        assert!(snapshot.enemy_hp >= previous.enemy_hp);
        assert!(snapshot.enemy_speed >= previous.enemy_speed);
        assert!(snapshot.enemy_xp >= previous.enemy_xp);
        assert!(snapshot.spawn_interval <= previous.spawn_interval);
        previous = snapshot;
    }

    assert_eq!(previous.enemy_speed, 4.0);
    assert_eq!(previous.spawn_interval, Duration::from_millis(150));
}

#[test]
fn boss_gate_fires_once_per_threshold() {
    let mut difficulty = Difficulty::new(DifficultyTuning::default());
    let frame = Duration::from_millis(100);
    let mut fired_at = Vec::new();

    for step in 1..=3000u64 {
        tick(&mut difficulty, frame);
        if difficulty.check_boss_spawn() {
            fired_at.push(step * 100);
        }
    }

    assert_eq!(fired_at, vec![120_000, 210_000, 300_000]);
    assert_eq!(difficulty.boss_count(), 3);
}

#[test]
fn boss_gate_stays_closed_before_first_threshold() {
    let mut difficulty = Difficulty::new(DifficultyTuning::default());
    tick(&mut difficulty, Duration::from_millis(119_999));
    assert!(!difficulty.check_boss_spawn());

    tick(&mut difficulty, Duration::from_millis(1));
    assert!(difficulty.check_boss_spawn());
    assert!(!difficulty.check_boss_spawn(), "gate fires exactly once");
}

#[test]
fn boss_hp_grows_with_bosses_spawned() {
    let mut difficulty = Difficulty::new(DifficultyTuning::default());
    tick(&mut difficulty, Duration::from_secs(120));
    let before = difficulty.snapshot(1, &Modifiers::NEUTRAL).boss_hp;
    assert!(difficulty.check_boss_spawn());
    let after = difficulty.snapshot(1, &Modifiers::NEUTRAL).boss_hp;

    // tier 6: (25 + 0) * 1.6 and (25 + 10) * 1.6
    assert_eq!(before, 40);
    assert_eq!(after, 56);
}

#[test]
fn modifiers_scale_hp_and_speed() {
    let difficulty = Difficulty::new(DifficultyTuning::default());
    let blood_moon = Modifiers {
        enemy_hp: 2.0,
        ..Modifiers::NEUTRAL
    };
    let frost = Modifiers {
        enemy_speed: 0.5,
        ..Modifiers::NEUTRAL
    };

    assert_eq!(difficulty.snapshot(1, &blood_moon).enemy_hp, 6);
    assert_eq!(difficulty.snapshot(1, &frost).enemy_speed, 0.75);
}
