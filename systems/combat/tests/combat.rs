use std::time::Duration;

use swarm_survival_core::{
    Color, EnemyShape, Event, Modifiers, PlayerStats, PlayerTuning, Tuning, Vec2, WeaponTuning,
};
use swarm_survival_system_combat::{Combat, Config};
use swarm_survival_world::{query, EnemyHandle, EnemySpawn, ProjectileLaunch, World};

const CENTRE: Vec2 = Vec2::new(1500.0, 1500.0);
const FRAME: Duration = Duration::from_micros(16_666);

struct Harness {
    world: World,
    combat: Combat,
    stats: PlayerStats,
    modifiers: Modifiers,
}

impl Harness {
    fn new(tuning: &Tuning) -> Self {
        Self {
            world: World::new(tuning),
            combat: Combat::new(Config::new(tuning)),
            stats: PlayerStats::from_tuning(&tuning.player),
            modifiers: Modifiers::NEUTRAL,
        }
    }

    fn spawn(&mut self, offset: Vec2, hp: i32) -> EnemyHandle {
        self.world.parts_mut().enemies.acquire(EnemySpawn {
            position: CENTRE + offset,
            hp,
            speed: 1.5,
            xp: 20,
            is_boss: false,
            shape: EnemyShape::Circle,
            color: Color::from_hex(0xef4444),
            radius: 16.0,
            collision_radius: 28.0,
            contact_damage: 1.0,
        })
    }

    fn tick(&mut self, dt: Duration) -> Vec<Event> {
        let mut out = Vec::new();
        let mut parts = self.world.parts_mut();
        self.combat.handle(
            &[Event::TimeAdvanced { dt }],
            &mut parts,
            &self.stats,
            &self.modifiers,
            &mut out,
        );
        out
    }

    fn launch_homing(&mut self, position: Vec2, damage: i32) {
        let _ = self.world.parts_mut().projectiles.acquire(ProjectileLaunch {
            position,
            direction: Vec2::X,
            speed: 3.5,
            damage,
            lifetime_ms: 2000.0,
            piercing: 0,
            homing: true,
        });
    }

    fn hp(&mut self, handle: EnemyHandle) -> Option<i32> {
        self.world.parts_mut().enemies.get(handle).map(|enemy| enemy.hp())
    }
}

fn damage_dealt(events: &[Event]) -> u32 {
    events
        .iter()
        .map(|event| match event {
            Event::DamageDealt { amount } => *amount,
            _ => 0,
        })
        .sum()
}

fn slow_attack() -> Tuning {
    Tuning {
        player: PlayerTuning {
            attack_interval_ms: 1.0e9,
            ..PlayerTuning::default()
        },
        ..Tuning::default()
    }
}

#[test]
fn auto_attack_aims_at_the_nearest_enemy() {
    let mut harness = Harness::new(&Tuning::default());
    let _ = harness.spawn(Vec2::new(0.0, 400.0), 3);
    let _ = harness.spawn(Vec2::new(200.0, 0.0), 3);

    assert!(harness.tick(Duration::from_millis(700)).is_empty());

    let projectiles = query::projectile_view(&harness.world);
    assert_eq!(projectiles.len(), 1);
    assert_eq!(projectiles[0].position, CENTRE);
    assert!(projectiles[0].direction.abs_diff_eq(Vec2::X, 1e-6));
    assert!(!projectiles[0].homing);
    assert_eq!(harness.combat.time_since_attack(), Duration::ZERO);
}

#[test]
fn attack_waits_silently_without_targets() {
    let mut harness = Harness::new(&Tuning::default());

    assert!(harness.tick(Duration::from_millis(700)).is_empty());
    assert_eq!(query::projectile_count(&harness.world), 0);
    assert_eq!(harness.combat.time_since_attack(), Duration::ZERO);

    let _ = harness.spawn(Vec2::new(-150.0, 0.0), 3);
    let _ = harness.tick(FRAME);
    assert_eq!(query::projectile_count(&harness.world), 0);

    let _ = harness.tick(Duration::from_millis(583));
    assert_eq!(query::projectile_count(&harness.world), 0);
    let _ = harness.tick(FRAME);
    assert_eq!(query::projectile_count(&harness.world), 1);
}

#[test]
fn attack_timer_restarts_when_the_target_overlaps_the_player() {
    let mut harness = Harness::new(&Tuning::default());
    let _ = harness.spawn(Vec2::ZERO, 3);

    let _ = harness.tick(Duration::from_millis(700));
    assert_eq!(query::projectile_count(&harness.world), 0);
    assert_eq!(harness.combat.time_since_attack(), Duration::ZERO);
}

#[test]
fn projectile_hit_damages_and_releases() {
    let mut harness = Harness::new(&Tuning::default());
    let target = harness.spawn(Vec2::new(100.0, 0.0), 3);
    let _ = harness.tick(Duration::from_millis(700));

    let mut dealt = 0;
    for _ in 0..20 {
        dealt += damage_dealt(&harness.tick(FRAME));
    }

    assert_eq!(dealt, 1);
    assert_eq!(harness.hp(target), Some(2));
    assert_eq!(query::projectile_count(&harness.world), 0);
    assert!(query::enemy_view(&harness.world)
        .iter()
        .all(|enemy| enemy.flashing));
}

#[test]
fn damage_multiplier_scales_projectile_damage() {
    let mut harness = Harness::new(&Tuning::default());
    harness.modifiers.damage = 2.0;
    let target = harness.spawn(Vec2::new(100.0, 0.0), 5);
    let _ = harness.tick(Duration::from_millis(700));

    let mut dealt = 0;
    for _ in 0..20 {
        dealt += damage_dealt(&harness.tick(FRAME));
    }

    assert_eq!(dealt, 2);
    assert_eq!(harness.hp(target), Some(3));
}

#[test]
fn piercing_projectile_passes_through_one_enemy() {
    let mut harness = Harness::new(&Tuning::default());
    harness.stats.add_piercing(1);
    let first = harness.spawn(Vec2::new(60.0, 0.0), 3);
    let second = harness.spawn(Vec2::new(100.0, 0.0), 3);
    let third = harness.spawn(Vec2::new(140.0, 0.0), 3);
    let _ = harness.tick(Duration::from_millis(700));

    for _ in 0..25 {
        let _ = harness.tick(FRAME);
    }

    assert_eq!(harness.hp(first), Some(2));
    assert_eq!(harness.hp(second), Some(2));
    assert_eq!(harness.hp(third), Some(3));
    assert_eq!(query::projectile_count(&harness.world), 0);
}

#[test]
fn multishot_fans_around_the_aim() {
    let mut harness = Harness::new(&Tuning::default());
    harness.stats.add_projectiles(2);
    let _ = harness.spawn(Vec2::new(200.0, 0.0), 3);
    let _ = harness.tick(Duration::from_millis(700));

    let directions: Vec<Vec2> = query::projectile_view(&harness.world)
        .iter()
        .map(|projectile| projectile.direction)
        .collect();
    let expected = [-0.2_f32, 0.0, 0.2].map(|angle| Vec2::new(angle.cos(), angle.sin()));
    assert_eq!(directions.len(), 3);
    for (direction, expected) in directions.iter().zip(expected) {
        assert!(direction.abs_diff_eq(expected, 1e-5), "{direction:?}");
    }
}

#[test]
fn homing_projectiles_are_flagged() {
    let mut harness = Harness::new(&Tuning::default());
    harness.stats.enable_homing();
    let _ = harness.spawn(Vec2::new(0.0, -300.0), 3);
    let _ = harness.tick(Duration::from_millis(700));

    let projectiles = query::projectile_view(&harness.world);
    assert_eq!(projectiles.len(), 1);
    assert!(projectiles[0].homing);
    assert!(projectiles[0].direction.abs_diff_eq(Vec2::NEG_Y, 1e-6));
}

#[test]
fn homing_projectiles_share_the_nearest_target() {
    let tuning = slow_attack();
    let turn_rate = tuning.weapons.homing_turn_rate;
    let mut harness = Harness::new(&tuning);
    harness.stats.enable_homing();
    let near = Vec2::new(200.0, 150.0);
    let _ = harness.spawn(near, 3);
    let _ = harness.spawn(Vec2::new(-400.0, 0.0), 3);
    let launches = [Vec2::new(0.0, 50.0), Vec2::new(-330.0, 0.0)];
    for offset in launches {
        harness.launch_homing(CENTRE + offset, 5);
    }

    let _ = harness.tick(FRAME);

    let projectiles = query::projectile_view(&harness.world);
    assert_eq!(projectiles.len(), 2);
    for (projectile, offset) in projectiles.iter().zip(launches) {
        let to_target = (near - offset).normalize();
        let expected = (Vec2::X + (to_target - Vec2::X) * turn_rate).normalize();
        assert!(
            projectile.direction.abs_diff_eq(expected, 1e-5),
            "{:?} != {expected:?}",
            projectile.direction
        );
        assert!(projectile.direction.y > 0.0);
    }
}

#[test]
fn homing_stops_once_the_target_dies() {
    let mut harness = Harness::new(&slow_attack());
    harness.stats.enable_homing();
    let near = Vec2::new(120.0, 90.0);
    let target = harness.spawn(near, 1);
    let _ = harness.spawn(Vec2::new(0.0, 400.0), 3);
    harness.launch_homing(CENTRE + near, 5);
    harness.launch_homing(CENTRE + Vec2::new(-300.0, 0.0), 5);

    assert_eq!(damage_dealt(&harness.tick(FRAME)), 5);
    assert!(harness.hp(target).is_some_and(|hp| hp <= 0));

    let projectiles = query::projectile_view(&harness.world);
    assert_eq!(projectiles.len(), 1);
    assert_eq!(projectiles[0].direction, Vec2::X);
}

#[test]
fn orbital_respects_per_enemy_cooldown() {
    let tuning = Tuning {
        weapons: WeaponTuning {
            orbital_rotation_speed: 0.0,
            ..WeaponTuning::default()
        },
        ..slow_attack()
    };
    let mut harness = Harness::new(&tuning);
    harness.stats.add_orbitals(1);
    let target = harness.spawn(Vec2::new(90.0, 0.0), 20);

    let dt = Duration::from_millis(16);
    assert_eq!(damage_dealt(&harness.tick(dt)), 4);
    let mut dealt = 0;
    for _ in 0..49 {
        dealt += damage_dealt(&harness.tick(dt));
    }
    assert_eq!(dealt, 0);
    assert_eq!(damage_dealt(&harness.tick(dt)), 4);
    assert_eq!(harness.hp(target), Some(12));
    assert_eq!(query::orbital_view(&harness.world), vec![CENTRE + Vec2::new(80.0, 0.0)]);
}

#[test]
fn nova_bursts_on_its_interval() {
    let mut harness = Harness::new(&slow_attack());
    harness.stats.enable_nova();
    let near = harness.spawn(Vec2::new(100.0, 0.0), 10);
    let far = harness.spawn(Vec2::new(300.0, 0.0), 10);

    assert!(harness.tick(Duration::from_millis(4900)).is_empty());
    let events = harness.tick(Duration::from_millis(100));

    assert_eq!(
        events,
        vec![
            Event::NovaFired { position: CENTRE },
            Event::DamageDealt { amount: 6 },
        ]
    );
    assert_eq!(harness.hp(near), Some(4));
    assert_eq!(harness.hp(far), Some(10));
}
