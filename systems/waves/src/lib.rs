#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Scripted burst spawns layered on top of the trickle spawner.
//!
//! A wave fires once its cooldown expires, spawns its whole pattern through
//! the provided callback in a single tick, then suppresses trickle spawning
//! for a pattern-specific window. The cooldown is frozen while suppressing.

use std::{f32::consts::TAU, time::Duration};

use rand::Rng;
use swarm_survival_core::{pick_excluding, Event, Vec2, WaveKind, WaveTuning};
use swarm_survival_system_difficulty::DifficultySnapshot;

/// Enemy requested by a wave pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSpawn {
    /// Spawn position.
    pub position: Vec2,
    /// Starting HP.
    pub hp: i32,
    /// Units moved per reference frame.
    pub speed: f32,
    /// Experience paid out on death.
    pub xp: u32,
}

/// Wave engine advanced by `TimeAdvanced` events.
#[derive(Clone, Debug)]
pub struct WaveEngine {
    tuning: WaveTuning,
    cooldown_ms: f32,
    suppress_ms: f32,
    last: Option<usize>,
}

impl WaveEngine {
    /// Creates an engine waiting for the randomised first delay.
    pub fn new<R: Rng + ?Sized>(tuning: WaveTuning, rng: &mut R) -> Self {
        let cooldown_ms =
            tuning.first_delay_base_ms + rng.gen::<f32>() * tuning.first_delay_variance_ms;
        Self {
            tuning,
            cooldown_ms,
            suppress_ms: 0.0,
            last: None,
        }
    }

    /// Reports whether trickle spawning is currently paused by a wave.
    #[must_use]
    pub fn is_suppressing(&self) -> bool {
        self.suppress_ms > 0.0
    }

    /// Time left before the next wave, ignoring any suppression window.
    #[must_use]
    pub fn time_to_next_wave(&self) -> Duration {
        swarm_survival_core::millis(self.cooldown_ms)
    }

    /// Advances suppression or the cooldown. When the cooldown expires a
    /// pattern is selected, every enemy it describes is passed to `spawn` and
    /// [`Event::WaveStarted`] is emitted.
    pub fn handle<R, F>(
        &mut self,
        events: &[Event],
        player: Vec2,
        difficulty: &DifficultySnapshot,
        rng: &mut R,
        mut spawn: F,
        out: &mut Vec<Event>,
    ) where
        R: Rng + ?Sized,
        F: FnMut(WaveSpawn),
    {
        let dt_ms = elapsed_ms(events);
        if dt_ms <= 0.0 {
            return;
        }

        if self.suppress_ms > 0.0 {
            self.suppress_ms = (self.suppress_ms - dt_ms).max(0.0);
            return;
        }

        self.cooldown_ms -= dt_ms;
        if self.cooldown_ms > 0.0 {
            return;
        }

        let Some(index) = pick_excluding(self.tuning.patterns.len(), self.last, rng) else {
            self.cooldown_ms = self.roll_cooldown(rng);
            return;
        };
        self.last = Some(index);

        let kind = self.tuning.patterns[index];
        let (name, suppress_ms) = self.trigger(kind, player, difficulty, rng, &mut spawn);
        self.suppress_ms = suppress_ms;
        self.cooldown_ms = self.roll_cooldown(rng);
        out.push(Event::WaveStarted { kind, name });
    }

    /// Restores the first-wave delay and clears suppression.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cooldown_ms =
            self.tuning.first_delay_base_ms + rng.gen::<f32>() * self.tuning.first_delay_variance_ms;
        self.suppress_ms = 0.0;
        self.last = None;
    }

    fn roll_cooldown<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.tuning.cooldown_base_ms + rng.gen::<f32>() * self.tuning.cooldown_variance_ms
    }

    fn trigger<R, F>(
        &self,
        kind: WaveKind,
        player: Vec2,
        difficulty: &DifficultySnapshot,
        rng: &mut R,
        spawn: &mut F,
    ) -> (String, f32)
    where
        R: Rng + ?Sized,
        F: FnMut(WaveSpawn),
    {
        match kind {
            WaveKind::Encirclement => {
                let pattern = &self.tuning.encirclement;
                let count = pattern.count_base + rng.gen_range(0..=pattern.count_range);
                for i in 0..count {
                    let angle = TAU * i as f32 / count as f32;
                    let radius = pattern.radius + rng.gen::<f32>() * pattern.radius_variance;
                    spawn(WaveSpawn {
                        position: player + Vec2::new(angle.cos(), angle.sin()) * radius,
                        hp: difficulty.enemy_hp,
                        speed: difficulty.enemy_speed,
                        xp: difficulty.enemy_xp,
                    });
                }
                (pattern.name.clone(), pattern.suppress_ms)
            }
            WaveKind::Rush => {
                let pattern = &self.tuning.rush;
                let side = rng.gen_range(0..4);
                let count = pattern.count_base + rng.gen_range(0..=pattern.count_range);
                for i in 0..count {
                    let offset = (i as f32 - count as f32 / 2.0) * pattern.spacing;
                    let position = match side {
                        0 => Vec2::new(player.x + offset, player.y - pattern.distance),
                        1 => Vec2::new(player.x + offset, player.y + pattern.distance),
                        2 => Vec2::new(player.x - pattern.distance, player.y + offset),
                        _ => Vec2::new(player.x + pattern.distance, player.y + offset),
                    };
                    spawn(WaveSpawn {
                        position,
                        hp: difficulty.enemy_hp,
                        speed: difficulty.enemy_speed * pattern.speed_mult,
                        xp: difficulty.enemy_xp,
                    });
                }
                (pattern.name.clone(), pattern.suppress_ms)
            }
            WaveKind::Elite => {
                let pattern = &self.tuning.elite;
                let count = pattern.count_base + rng.gen_range(0..=pattern.count_range);
                for _ in 0..count {
                    let angle = rng.gen::<f32>() * TAU;
                    let radius = pattern.radius + rng.gen::<f32>() * pattern.radius_variance;
                    spawn(WaveSpawn {
                        position: player + Vec2::new(angle.cos(), angle.sin()) * radius,
                        hp: (difficulty.enemy_hp as f32 * pattern.hp_mult).round() as i32,
                        speed: difficulty.enemy_speed * pattern.speed_mult,
                        xp: (difficulty.enemy_xp as f32 * pattern.xp_mult).round() as u32,
                    });
                }
                (pattern.name.clone(), pattern.suppress_ms)
            }
        }
    }
}

fn elapsed_ms(events: &[Event]) -> f32 {
    let mut total = Duration::ZERO;
    for event in events {
        if let Event::TimeAdvanced { dt } = event {
            total = total.saturating_add(*dt);
        }
    }
    total.as_secs_f32() * 1000.0
}
