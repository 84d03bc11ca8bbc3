#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Player weapons: projectiles, the auto-attack, orbital shield and nova.
//!
//! The system runs once per tick after enemies have moved. It rebuilds the
//! enemy spatial grid first so every collision test only inspects the 3×3
//! neighbourhood of the attacker, then resolves weapons in a fixed order:
//! projectiles in flight, the auto-attack volley, orbital orbs and the nova
//! burst. Enemies killed here are left in the pool for the reap pass.

use std::{f32::consts::TAU, time::Duration};

use swarm_survival_core::{
    Event, Modifiers, PlayerStats, ProjectileTuning, Tuning, Vec2, WeaponTuning,
};
use swarm_survival_world::{
    Enemy, EnemyHandle, OrbitalOrb, Pool, Pooled, ProjectileLaunch, WorldParts,
};

/// Configuration parameters required to construct the combat system.
#[derive(Clone, Debug)]
pub struct Config {
    reference_frame_ms: f32,
    hit_flash_ms: f32,
    projectile: ProjectileTuning,
    weapons: WeaponTuning,
}

impl Config {
    /// Extracts the combat-relevant sections of the tuning.
    #[must_use]
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            reference_frame_ms: tuning.arena.reference_frame_ms,
            hit_flash_ms: tuning.enemy.hit_flash_ms,
            projectile: tuning.projectile.clone(),
            weapons: tuning.weapons.clone(),
        }
    }
}

/// Weapon system owning the attack and nova timers.
#[derive(Debug)]
pub struct Combat {
    config: Config,
    attack_timer_ms: f32,
    nova_timer_ms: f32,
    candidates: Vec<EnemyHandle>,
}

impl Combat {
    /// Creates a combat system with both timers at zero.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            attack_timer_ms: 0.0,
            nova_timer_ms: 0.0,
            candidates: Vec::new(),
        }
    }

    /// Time accumulated toward the next auto-attack.
    #[must_use]
    pub fn time_since_attack(&self) -> Duration {
        swarm_survival_core::millis(self.attack_timer_ms)
    }

    /// Resolves every weapon for the elapsed time carried by `events`.
    ///
    /// Emits [`Event::NovaFired`] when the nova bursts and a single
    /// [`Event::DamageDealt`] totalling the damage applied this tick.
    pub fn handle(
        &mut self,
        events: &[Event],
        world: &mut WorldParts<'_>,
        stats: &PlayerStats,
        modifiers: &Modifiers,
        out: &mut Vec<Event>,
    ) {
        let dt_ms = elapsed_ms(events);
        if dt_ms <= 0.0 {
            return;
        }
        let frames = dt_ms / self.config.reference_frame_ms;

        world.grid.clear();
        for (handle, enemy) in world.enemies.iter() {
            if enemy.is_alive() {
                world.grid.insert(handle, enemy.position());
            }
        }

        let mut dealt = 0_u32;
        dealt = dealt.saturating_add(self.resolve_projectiles(world, stats, frames, dt_ms));
        self.auto_attack(world, stats, modifiers, dt_ms);
        dealt = dealt.saturating_add(self.resolve_orbitals(world, stats, dt_ms));
        dealt = dealt.saturating_add(self.resolve_nova(world, stats, modifiers, dt_ms, out));

        if dealt > 0 {
            out.push(Event::DamageDealt { amount: dealt });
        }
    }

    /// Restores both timers.
    pub fn reset(&mut self) {
        self.attack_timer_ms = 0.0;
        self.nova_timer_ms = 0.0;
        self.candidates.clear();
    }

    fn resolve_projectiles(
        &mut self,
        world: &mut WorldParts<'_>,
        stats: &PlayerStats,
        frames: f32,
        dt_ms: f32,
    ) -> u32 {
        if world.projectiles.is_empty() {
            return 0;
        }

        let homing_target = if stats.homing_enabled() {
            nearest_living(world.enemies, world.player.position()).map(|(handle, _)| handle)
        } else {
            None
        };

        let turn_rate = self.config.weapons.homing_turn_rate;
        let reach = self.config.projectile.collision_distance;
        let flash_ms = self.config.hit_flash_ms;
        let candidates = &mut self.candidates;
        let enemies = &mut *world.enemies;
        let grid = &*world.grid;
        let mut dealt = 0_u32;

        world.projectiles.for_each_mut(|_, projectile| {
            if projectile.is_homing() {
                // The target may fall to an earlier projectile this tick.
                let target = homing_target
                    .and_then(|handle| enemies.get(handle))
                    .filter(|enemy| enemy.is_alive())
                    .map(Enemy::position);
                if let Some(target) = target {
                    projectile.steer(target, turn_rate);
                }
            }
            projectile.advance(frames, dt_ms);
            if !projectile.is_alive() {
                return;
            }

            grid.query(projectile.position(), candidates);
            for handle in candidates.iter() {
                let Some(enemy) = enemies.get_mut(*handle) else {
                    continue;
                };
                if !enemy.is_alive() {
                    continue;
                }
                if let Some(damage) = projectile.try_hit(*handle, enemy.position(), reach) {
                    let _ = enemy.take_damage(damage, flash_ms);
                    dealt = dealt.saturating_add(damage.max(0) as u32);
                }
                if !projectile.is_alive() {
                    break;
                }
            }
        });

        world.projectiles.reap(|_, _| {});
        dealt
    }

    fn auto_attack(
        &mut self,
        world: &mut WorldParts<'_>,
        stats: &PlayerStats,
        modifiers: &Modifiers,
        dt_ms: f32,
    ) {
        self.attack_timer_ms += dt_ms;
        if self.attack_timer_ms < stats.attack_interval_ms() {
            return;
        }
        self.attack_timer_ms = 0.0;

        let origin = world.player.position();
        let Some((_, target)) = nearest_living(world.enemies, origin) else {
            return;
        };
        let aim = target - origin;
        let length = aim.length();
        if length == 0.0 {
            return;
        }
        let aim = aim / length;

        let count = stats.projectile_count().max(1);
        let spread = if count > 1 {
            self.config.projectile.spread_angle
        } else {
            0.0
        };
        let homing = stats.homing_enabled();
        let speed = if homing {
            self.config.weapons.homing_speed
        } else {
            stats.projectile_speed()
        };
        let damage = (stats.damage() * modifiers.damage).round() as i32;

        for i in 0..count {
            let offset = (i as f32 - (count - 1) as f32 / 2.0) * spread;
            let _ = world.projectiles.acquire(ProjectileLaunch {
                position: origin,
                direction: rotate(aim, offset),
                speed,
                damage,
                lifetime_ms: self.config.projectile.lifetime_ms,
                piercing: stats.piercing_count(),
                homing,
            });
        }
    }

    fn resolve_orbitals(
        &mut self,
        world: &mut WorldParts<'_>,
        stats: &PlayerStats,
        dt_ms: f32,
    ) -> u32 {
        sync_orbitals(world.orbitals, stats.orbital_count() as usize);
        if world.orbitals.is_empty() {
            return 0;
        }

        let weapons = &self.config.weapons;
        let center = world.player.position();
        let dt_secs = dt_ms / 1000.0;
        let mut dealt = 0_u32;

        for orb in world.orbitals.iter_mut() {
            orb.orbit(
                center,
                weapons.orbital_radius,
                weapons.orbital_rotation_speed,
                dt_secs,
            );
            let enemies = &*world.enemies;
            orb.tick_cooldowns(dt_ms, |handle| {
                enemies.get(handle).map_or(false, Enemy::is_alive)
            });

            world.grid.query(orb.position(), &mut self.candidates);
            for handle in &self.candidates {
                let Some(enemy) = world.enemies.get_mut(*handle) else {
                    continue;
                };
                if !enemy.is_alive() || !orb.ready_for(*handle) {
                    continue;
                }
                let reach = weapons.orbital_orb_radius + enemy.collision_radius();
                if orb.position().distance(enemy.position()) >= reach {
                    continue;
                }
                let damage = weapons.orbital_damage as i32;
                let _ = enemy.take_damage(damage, self.config.hit_flash_ms);
                orb.mark_hit(*handle, weapons.orbital_hit_cooldown_ms);
                dealt = dealt.saturating_add(weapons.orbital_damage);
            }
        }
        dealt
    }

    fn resolve_nova(
        &mut self,
        world: &mut WorldParts<'_>,
        stats: &PlayerStats,
        modifiers: &Modifiers,
        dt_ms: f32,
        out: &mut Vec<Event>,
    ) -> u32 {
        if !stats.nova_enabled() {
            return 0;
        }
        self.nova_timer_ms += dt_ms;
        if self.nova_timer_ms < self.config.weapons.nova_interval_ms {
            return 0;
        }
        self.nova_timer_ms = 0.0;

        let position = world.player.position();
        let radius = self.config.weapons.nova_radius;
        let damage = (self.config.weapons.nova_damage * modifiers.damage).round() as i32;
        let flash_ms = self.config.hit_flash_ms;
        let mut dealt = 0_u32;

        world.enemies.for_each_mut(|_, enemy| {
            if enemy.is_alive() && enemy.position().distance(position) < radius {
                let _ = enemy.take_damage(damage, flash_ms);
                dealt = dealt.saturating_add(damage.max(0) as u32);
            }
        });
        out.push(Event::NovaFired { position });
        dealt
    }
}

/// Grows the orb list, placing new orbs at `index / count` of a turn, or
/// shrinks it from the back.
fn sync_orbitals(orbitals: &mut Vec<OrbitalOrb>, count: usize) {
    if orbitals.len() > count {
        orbitals.truncate(count);
        return;
    }
    for index in orbitals.len()..count {
        orbitals.push(OrbitalOrb::new(TAU * index as f32 / count as f32));
    }
}

/// Nearest living enemy to `from`. Ties keep the earlier active entry.
fn nearest_living(enemies: &Pool<Enemy>, from: Vec2) -> Option<(EnemyHandle, Vec2)> {
    let mut best: Option<(EnemyHandle, Vec2, f32)> = None;
    for (handle, enemy) in enemies.iter() {
        if !enemy.is_alive() {
            continue;
        }
        let distance = enemy.position().distance_squared(from);
        if best.map_or(true, |(_, _, current)| distance < current) {
            best = Some((handle, enemy.position(), distance));
        }
    }
    best.map(|(handle, position, _)| (handle, position))
}

fn rotate(direction: Vec2, angle: f32) -> Vec2 {
    if angle == 0.0 {
        return direction;
    }
    let (sin, cos) = angle.sin_cos();
    Vec2::new(
        direction.x * cos - direction.y * sin,
        direction.x * sin + direction.y * cos,
    )
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
