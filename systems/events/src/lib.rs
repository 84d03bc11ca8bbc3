#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Timed global modifiers that periodically reshape a run.
//!
//! The engine alternates between an idle cooldown and a single active event.
//! While an event is active its [`ModifierEffect`] is applied to the standing
//! [`Modifiers`]; when it expires the touched multipliers return to 1.

use std::time::Duration;

use rand::Rng;
use swarm_survival_core::{
    millis, pick_excluding, Event, EventTuning, GlobalEventDefinition, ModifierEffect,
    Modifiers,
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle { cooldown_ms: f32 },
    Active { index: usize, elapsed_ms: f32 },
}

/// Read-only view of the currently active global event.
#[derive(Clone, Copy, Debug)]
pub struct ActiveEvent<'a> {
    definition: &'a GlobalEventDefinition,
    elapsed_ms: f32,
}

impl<'a> ActiveEvent<'a> {
    /// Definition of the active event.
    #[must_use]
    pub fn definition(&self) -> &'a GlobalEventDefinition {
        self.definition
    }

    /// Time left before the event expires.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        millis(self.definition.duration_ms - self.elapsed_ms)
    }
}

/// Event engine advanced by `TimeAdvanced` events.
#[derive(Clone, Debug)]
pub struct EventEngine {
    tuning: EventTuning,
    phase: Phase,
    last: Option<usize>,
    modifiers: Modifiers,
}

impl EventEngine {
    /// Creates an idle engine with a randomised first cooldown.
    pub fn new<R: Rng + ?Sized>(tuning: EventTuning, rng: &mut R) -> Self {
        let cooldown_ms = roll_cooldown(&tuning, rng);
        Self {
            tuning,
            phase: Phase::Idle { cooldown_ms },
            last: None,
            modifiers: Modifiers::NEUTRAL,
        }
    }

    /// Standing multipliers, including the active event's effect.
    #[must_use]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Currently active event, if any.
    #[must_use]
    pub fn active(&self) -> Option<ActiveEvent<'_>> {
        match self.phase {
            Phase::Active { index, elapsed_ms } => {
                self.tuning
                    .catalog
                    .get(index)
                    .map(|definition| ActiveEvent {
                        definition,
                        elapsed_ms,
                    })
            }
            Phase::Idle { .. } => None,
        }
    }

    /// Advances the cooldown or the active event by the time carried in
    /// `events`, emitting start and end notifications.
    pub fn handle<R: Rng + ?Sized>(&mut self, events: &[Event], rng: &mut R, out: &mut Vec<Event>) {
        let dt_ms = elapsed_ms(events);
        if dt_ms <= 0.0 {
            return;
        }

        match self.phase {
            Phase::Active { index, elapsed_ms } => {
                let elapsed_ms = elapsed_ms + dt_ms;
                let Some(definition) = self.tuning.catalog.get(index) else {
                    self.phase = Phase::Idle {
                        cooldown_ms: roll_cooldown(&self.tuning, rng),
                    };
                    return;
                };
                if elapsed_ms >= definition.duration_ms {
                    self.modifiers.revert(&definition.effect);
                    out.push(Event::GlobalEventEnded {
                        kind: definition.kind,
                    });
                    self.phase = Phase::Idle {
                        cooldown_ms: roll_cooldown(&self.tuning, rng),
                    };
                } else {
                    self.phase = Phase::Active { index, elapsed_ms };
                }
            }
            Phase::Idle { cooldown_ms } => {
                let cooldown_ms = cooldown_ms - dt_ms;
                if cooldown_ms <= 0.0 {
                    self.trigger(rng, out);
                } else {
                    self.phase = Phase::Idle { cooldown_ms };
                }
            }
        }
    }

    /// Reverts any active event and re-randomises the cooldown.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(effect) = self.active_effect() {
            self.modifiers.revert(&effect);
        }
        self.phase = Phase::Idle {
            cooldown_ms: roll_cooldown(&self.tuning, rng),
        };
        self.last = None;
    }

    fn active_effect(&self) -> Option<ModifierEffect> {
        self.active().map(|active| active.definition.effect)
    }

    fn trigger<R: Rng + ?Sized>(&mut self, rng: &mut R, out: &mut Vec<Event>) {
        let Some(index) = pick_excluding(self.tuning.catalog.len(), self.last, rng) else {
            self.phase = Phase::Idle {
                cooldown_ms: roll_cooldown(&self.tuning, rng),
            };
            return;
        };
        self.last = Some(index);

        let definition = &self.tuning.catalog[index];
        self.modifiers.apply(&definition.effect);
        out.push(Event::GlobalEventStarted {
            kind: definition.kind,
            name: definition.name.clone(),
            color: definition.color,
            duration: millis(definition.duration_ms),
        });
        self.phase = Phase::Active {
            index,
            elapsed_ms: 0.0,
        };
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

fn roll_cooldown<R: Rng + ?Sized>(tuning: &EventTuning, rng: &mut R) -> f32 {
    tuning.cooldown_base_ms + rng.gen::<f32>() * tuning.cooldown_variance_ms
}
