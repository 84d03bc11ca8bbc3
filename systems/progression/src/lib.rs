#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Experience orbs, level thresholds and upgrade offers.

mod catalog;

pub use catalog::{catalog, upgrade, Upgrade};

use std::{collections::VecDeque, time::Duration};

use rand::Rng;
use swarm_survival_core::{
    ArenaTuning, ChoiceError, Event, LevelingTuning, Modifiers, OrbTuning, PlayerStats, Rarity,
    RarityWeights, UpgradeId, Vec2,
};
use swarm_survival_system_difficulty::DifficultySnapshot;
use swarm_survival_world::XpOrb;

/// Configuration parameters required to construct the progression system.
#[derive(Clone, Debug)]
pub struct Config {
    reference_frame_ms: f32,
    leveling: LevelingTuning,
    orbs: OrbTuning,
}

impl Config {
    /// Creates a configuration from the relevant tuning sections.
    #[must_use]
    pub fn new(arena: &ArenaTuning, leveling: LevelingTuning, orbs: OrbTuning) -> Self {
        Self {
            reference_frame_ms: arena.reference_frame_ms,
            leveling,
            orbs,
        }
    }
}

/// Level, experience and upgrade bookkeeping for a run.
#[derive(Debug)]
pub struct Progression {
    config: Config,
    level: u32,
    xp: u32,
    xp_to_next: u32,
    taken: Vec<UpgradeId>,
    pending: Option<Vec<UpgradeId>>,
    queued: VecDeque<u32>,
}

impl Progression {
    /// Starts at level 1 with no experience.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let xp_to_next = config.leveling.initial_xp_to_next;
        Self {
            config,
            level: 1,
            xp: 0,
            xp_to_next,
            taken: Vec::new(),
            pending: None,
            queued: VecDeque::new(),
        }
    }

    /// Current level.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Experience accumulated toward the next level.
    #[must_use]
    pub const fn xp(&self) -> u32 {
        self.xp
    }

    /// Experience required to leave the current level.
    #[must_use]
    pub const fn xp_to_next(&self) -> u32 {
        self.xp_to_next
    }

    /// Upgrades taken so far, in pick order.
    #[must_use]
    pub fn taken(&self) -> &[UpgradeId] {
        &self.taken
    }

    /// Offer awaiting a choice, if any.
    #[must_use]
    pub fn pending_offer(&self) -> Option<&[UpgradeId]> {
        self.pending.as_deref()
    }

    /// Number of earned offers waiting behind the pending one.
    #[must_use]
    pub fn queued_offers(&self) -> usize {
        self.queued.len()
    }

    /// Adds experience and crosses as many thresholds as it covers. Returns
    /// the number of levels gained.
    pub fn gain(&mut self, xp: u32) -> u32 {
        self.xp = self.xp.saturating_add(xp);
        let mut gained = 0;
        while self.xp >= self.xp_to_next {
            self.xp -= self.xp_to_next;
            self.level += 1;
            self.xp_to_next = self
                .level
                .saturating_mul(self.config.leveling.xp_per_level)
                .max(1);
            self.queued.push_back(self.level);
            gained += 1;
        }
        gained
    }

    /// Drops orbs for every [`Event::EnemyDied`], splitting the experience
    /// between the orb count of the difficulty snapshot.
    pub fn drop_orbs<R: Rng + ?Sized>(
        &self,
        events: &[Event],
        difficulty: &DifficultySnapshot,
        modifiers: &Modifiers,
        rng: &mut R,
        orbs: &mut Vec<XpOrb>,
    ) {
        let scatter = self.config.orbs.scatter;
        for event in events {
            let Event::EnemyDied {
                position,
                xp,
                is_boss,
                ..
            } = event
            else {
                continue;
            };
            let count = if *is_boss {
                difficulty.boss_orb_count
            } else {
                difficulty.enemy_orb_count
            }
            .max(1);
            let total = (*xp as f32 * modifiers.xp).round() as u32;
            let per_orb = (total / count).max(1);
            for _ in 0..count {
                let jitter = Vec2::new(
                    rng.gen_range(-scatter..=scatter),
                    rng.gen_range(-scatter..=scatter),
                );
                orbs.push(XpOrb::new(*position + jitter, per_orb));
            }
        }
    }

    /// Attracts and collects orbs around the player, then credits the
    /// collected experience.
    pub fn collect_orbs(
        &mut self,
        events: &[Event],
        player: Vec2,
        stats: &PlayerStats,
        orbs: &mut Vec<XpOrb>,
        out: &mut Vec<Event>,
    ) {
        let dt = elapsed(events);
        if dt.is_zero() {
            return;
        }
        let frames = dt.as_secs_f32() * 1000.0 / self.config.reference_frame_ms;
        let tuning = &self.config.orbs;
        let attract_speed =
            (stats.speed() + tuning.attract_speed_offset) * tuning.attract_speed_multiplier;

        let mut collected = 0_u32;
        for orb in orbs.iter_mut() {
            if let Some(xp) = orb.update(
                player,
                stats.attract_range(),
                attract_speed,
                tuning.collect_range,
                frames,
            ) {
                collected = collected.saturating_add(xp);
            }
        }
        orbs.retain(XpOrb::is_alive);
        self.credit(collected, out);
    }

    /// Credits every remaining orb without moving it.
    pub fn collect_all(&mut self, orbs: &mut Vec<XpOrb>, out: &mut Vec<Event>) {
        let collected = orbs
            .iter_mut()
            .filter_map(XpOrb::collect)
            .fold(0_u32, u32::saturating_add);
        orbs.clear();
        self.credit(collected, out);
    }

    /// Presents the next earned offer when none is pending.
    pub fn offer_next<R: Rng + ?Sized>(&mut self, rng: &mut R, out: &mut Vec<Event>) {
        if self.pending.is_some() {
            return;
        }
        let Some(level) = self.queued.pop_front() else {
            return;
        };
        let choices = draw_offer(
            &self.config.leveling.rarity_weights,
            self.config.leveling.offer_size,
            &self.taken,
            rng,
        );
        if choices.is_empty() {
            return;
        }
        self.pending = Some(choices.clone());
        out.push(Event::UpgradeOffered { level, choices });
    }

    /// Resolves the pending offer with the upgrade in `slot`.
    ///
    /// An out-of-range slot leaves the offer pending.
    pub fn choose(&mut self, slot: usize) -> Result<&'static Upgrade, ChoiceError> {
        let choices = self.pending.as_ref().ok_or(ChoiceError::NoPendingOffer)?;
        let id = *choices.get(slot).ok_or(ChoiceError::SlotOutOfRange)?;
        self.pending = None;
        self.taken.push(id);
        Ok(upgrade(id))
    }

    /// Returns to level 1 with no experience, offers or upgrades.
    pub fn reset(&mut self) {
        self.level = 1;
        self.xp = 0;
        self.xp_to_next = self.config.leveling.initial_xp_to_next;
        self.taken.clear();
        self.pending = None;
        self.queued.clear();
    }

    fn credit(&mut self, amount: u32, out: &mut Vec<Event>) {
        if amount == 0 {
            return;
        }
        out.push(Event::XpGained { amount });
        let levels_gained = self.gain(amount);
        if levels_gained > 0 {
            out.push(Event::LeveledUp {
                level: self.level,
                levels_gained,
            });
        }
    }
}

/// Draws up to `size` distinct upgrades.
///
/// Each draw first picks a rarity by weight among the rarities that still
/// have eligible upgrades, then an upgrade uniformly within it. Unique
/// upgrades present in `taken` are never offered.
pub fn draw_offer<R: Rng + ?Sized>(
    weights: &RarityWeights,
    size: usize,
    taken: &[UpgradeId],
    rng: &mut R,
) -> Vec<UpgradeId> {
    let mut pool: Vec<&Upgrade> = catalog()
        .iter()
        .filter(|entry| !(entry.unique && taken.contains(&entry.id)))
        .collect();
    let mut choices = Vec::with_capacity(size);

    while choices.len() < size && !pool.is_empty() {
        let available: Vec<Rarity> = Rarity::ALL
            .into_iter()
            .filter(|rarity| weights.weight(*rarity) > 0.0)
            .filter(|rarity| pool.iter().any(|entry| entry.rarity == *rarity))
            .collect();
        let total: f32 = available.iter().map(|rarity| weights.weight(*rarity)).sum();
        if total <= 0.0 {
            break;
        }

        let mut roll = rng.gen::<f32>() * total;
        let mut rarity = available[available.len() - 1];
        for candidate in &available {
            let weight = weights.weight(*candidate);
            if roll < weight {
                rarity = *candidate;
                break;
            }
            roll -= weight;
        }

        let members: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.rarity == rarity)
            .map(|(index, _)| index)
            .collect();
        let index = members[rng.gen_range(0..members.len())];
        choices.push(pool.swap_remove(index).id);
    }
    choices
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
