use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use swarm_survival_core::{
    ArenaTuning, ChoiceError, Color, DifficultyTuning, Event, LevelingTuning, Modifiers,
    OrbTuning, PlayerStats, Rarity, RarityWeights, UpgradeId, Vec2,
};
use swarm_survival_system_difficulty::{Difficulty, DifficultySnapshot};
use swarm_survival_system_progression::{catalog, draw_offer, upgrade, Config, Progression};
use swarm_survival_world::XpOrb;

const PLAYER: Vec2 = Vec2::new(1500.0, 1500.0);

fn progression() -> Progression {
    Progression::new(Config::new(
        &ArenaTuning::default(),
        LevelingTuning::default(),
        OrbTuning::default(),
    ))
}

fn snapshot() -> DifficultySnapshot {
    Difficulty::new(DifficultyTuning::default()).snapshot(1, &Modifiers::NEUTRAL)
}

fn died(position: Vec2, xp: u32, is_boss: bool) -> Event {
    Event::EnemyDied {
        position,
        xp,
        is_boss,
        color: Color::from_hex(0xef4444),
    }
}

fn frame() -> [Event; 1] {
    [Event::TimeAdvanced {
        dt: Duration::from_micros(16_666),
    }]
}

#[test]
fn first_offer_rarities_follow_their_weights() {
    let weights = RarityWeights::default();
    let mut rng = ChaCha8Rng::seed_from_u64(0xfeed);
    let draws = 20_000;
    let mut counts = [0_u32; 4];

    for _ in 0..draws {
        let offer = draw_offer(&weights, 1, &[], &mut rng);
        let rarity = upgrade(offer[0]).rarity;
        let slot = Rarity::ALL
            .iter()
            .position(|candidate| *candidate == rarity)
            .expect("rarity is listed");
        counts[slot] += 1;
    }

    for (rarity, count) in Rarity::ALL.iter().zip(counts) {
        let expected = weights.weight(*rarity) / weights.total();
        let observed = count as f32 / draws as f32;
        assert!(
            (observed - expected).abs() < 0.02,
            "{rarity:?}: expected {expected}, observed {observed}"
        );
    }
}

#[test]
fn offers_are_distinct_and_skip_taken_uniques() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let taken = [UpgradeId::SeekerRounds, UpgradeId::NovaCore, UpgradeId::Multishot];

    for _ in 0..2_000 {
        let offer = draw_offer(&RarityWeights::default(), 3, &taken, &mut rng);
        assert_eq!(offer.len(), 3);
        assert_ne!(offer[0], offer[1]);
        assert_ne!(offer[0], offer[2]);
        assert_ne!(offer[1], offer[2]);
        assert!(!offer.contains(&UpgradeId::SeekerRounds));
        assert!(!offer.contains(&UpgradeId::NovaCore));
    }
}

#[test]
fn offer_never_exceeds_the_catalog() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let offer = draw_offer(&RarityWeights::default(), 100, &[], &mut rng);
    assert_eq!(offer.len(), catalog().len());
}

#[test]
fn sharp_edge_and_rapid_fire_stack() {
    let mut stats = PlayerStats::default();
    upgrade(UpgradeId::SharpEdge).apply(&mut stats, |_| {});
    upgrade(UpgradeId::RapidFire).apply(&mut stats, |_| {});

    assert_eq!(stats.damage(), 2.0);
    assert!((stats.attack_interval_ms() - 510.0).abs() < 1e-3);
}

#[test]
fn attack_interval_never_drops_below_floor() {
    let mut stats = PlayerStats::default();
    for _ in 0..40 {
        upgrade(UpgradeId::Adrenaline).apply(&mut stats, |_| {});
    }
    assert_eq!(stats.attack_interval_ms(), 150.0);
    assert_eq!(stats.max_hp(), 1.0);
}

#[test]
fn deaths_drop_split_orbs_near_the_body() {
    let progression = progression();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut orbs = Vec::new();
    let body = Vec2::new(400.0, 400.0);

    progression.drop_orbs(
        &[died(body, 20, false), died(body, 160, true)],
        &snapshot(),
        &Modifiers::NEUTRAL,
        &mut rng,
        &mut orbs,
    );

    let payloads: Vec<u32> = orbs.iter().map(XpOrb::xp).collect();
    assert_eq!(payloads, vec![20, 53, 53, 53]);
    for orb in &orbs {
        let offset = orb.position() - body;
        assert!(offset.x.abs() <= 6.0 && offset.y.abs() <= 6.0);
    }
}

#[test]
fn xp_multiplier_scales_orb_payout() {
    let progression = progression();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut orbs = Vec::new();
    let modifiers = Modifiers {
        xp: 2.0,
        ..Modifiers::NEUTRAL
    };

    progression.drop_orbs(
        &[died(Vec2::ZERO, 20, false)],
        &snapshot(),
        &modifiers,
        &mut rng,
        &mut orbs,
    );

    assert_eq!(orbs.iter().map(XpOrb::xp).collect::<Vec<_>>(), vec![40]);
}

#[test]
fn nearby_orbs_are_attracted_and_collected() {
    let mut progression = progression();
    let mut orbs = vec![
        XpOrb::new(PLAYER + Vec2::new(10.0, 0.0), 15),
        XpOrb::new(PLAYER + Vec2::new(100.0, 0.0), 30),
        XpOrb::new(PLAYER + Vec2::new(500.0, 0.0), 45),
    ];
    let mut out = Vec::new();

    progression.collect_orbs(&frame(), PLAYER, &PlayerStats::default(), &mut orbs, &mut out);

    assert_eq!(out, vec![Event::XpGained { amount: 15 }]);
    assert_eq!(orbs.len(), 2);
    assert!((orbs[0].position().x - (PLAYER.x + 91.0)).abs() < 1e-2);
    assert_eq!(orbs[1].position(), PLAYER + Vec2::new(500.0, 0.0));
    assert_eq!(progression.xp(), 15);
}

#[test]
fn level_ups_queue_offers_one_at_a_time() {
    let mut progression = progression();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut orbs = vec![XpOrb::new(Vec2::new(10.0, 10.0), 600)];
    let mut out = Vec::new();

    progression.collect_all(&mut orbs, &mut out);
    assert!(orbs.is_empty());
    assert_eq!(
        out,
        vec![
            Event::XpGained { amount: 600 },
            Event::LeveledUp {
                level: 4,
                levels_gained: 3,
            },
        ]
    );

    out.clear();
    progression.offer_next(&mut rng, &mut out);
    progression.offer_next(&mut rng, &mut out);
    assert_eq!(out.len(), 1);
    let Event::UpgradeOffered { level, choices } = &out[0] else {
        panic!("expected an offer, got {:?}", out[0]);
    };
    assert_eq!(*level, 2);
    assert_eq!(choices.len(), 3);
    assert_eq!(progression.queued_offers(), 2);

    assert_eq!(progression.choose(3).err(), Some(ChoiceError::SlotOutOfRange));
    assert!(progression.pending_offer().is_some());

    let picked = progression.choose(1).expect("slot 1 is offered");
    assert_eq!(picked.id, choices[1]);
    assert_eq!(progression.taken(), &[choices[1]]);

    out.clear();
    progression.offer_next(&mut rng, &mut out);
    assert!(matches!(out[0], Event::UpgradeOffered { level: 3, .. }));
}

#[test]
fn choosing_without_an_offer_is_rejected() {
    let mut progression = progression();
    assert_eq!(progression.choose(0).err(), Some(ChoiceError::NoPendingOffer));
}

#[test]
fn reset_forgets_everything() {
    let mut progression = progression();
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut out = Vec::new();
    let _ = progression.gain(250);
    progression.offer_next(&mut rng, &mut out);
    let _ = progression.choose(0);

    progression.reset();
    assert_eq!(progression.level(), 1);
    assert_eq!(progression.xp(), 0);
    assert_eq!(progression.xp_to_next(), 100);
    assert!(progression.taken().is_empty());
    assert!(progression.pending_offer().is_none());
    assert_eq!(progression.queued_offers(), 0);
}
