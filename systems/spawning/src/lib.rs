#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Spawning system responsible for placing enemies on the arena perimeter.

use std::time::Duration;

use rand::Rng;
use swarm_survival_core::{ArenaTuning, EnemyShape, EnemyTuning, Event, Rect, Vec2};
use swarm_survival_system_difficulty::DifficultySnapshot;
use swarm_survival_world::{Enemy, EnemyHandle, EnemySpawn, Pool};

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Debug)]
pub struct Config {
    viewport_size: Vec2,
    spawn_margin: f32,
    enemy: EnemyTuning,
}

impl Config {
    /// Creates a new configuration from the arena and enemy tuning.
    #[must_use]
    pub fn new(arena: &ArenaTuning, enemy: EnemyTuning) -> Self {
        Self {
            viewport_size: Vec2::new(arena.viewport_width, arena.viewport_height),
            spawn_margin: arena.spawn_margin,
            enemy,
        }
    }
}

/// Trickle spawner that emits at most one ambient enemy per tick.
#[derive(Debug)]
pub struct Spawning {
    config: Config,
    accumulator: Duration,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            accumulator: Duration::ZERO,
        }
    }

    /// Time accumulated toward the next trickle spawn.
    #[must_use]
    pub const fn accumulated(&self) -> Duration {
        self.accumulator
    }

    /// Resolves the viewport spawns are placed around: the adapter's
    /// rectangle when supplied, otherwise one of the configured size centred
    /// on the player.
    #[must_use]
    pub fn viewport(&self, supplied: Option<Rect>, player: Vec2) -> Rect {
        supplied.unwrap_or_else(|| Rect::centered_on(player, self.config.viewport_size))
    }

    /// Accumulates tick time and spawns one ambient enemy once the
    /// difficulty's spawn interval is reached. Time does not accumulate while
    /// `suppressed` is set.
    pub fn handle<R: Rng + ?Sized>(
        &mut self,
        events: &[Event],
        suppressed: bool,
        difficulty: &DifficultySnapshot,
        viewport: Rect,
        rng: &mut R,
        enemies: &mut Pool<Enemy>,
    ) -> Option<EnemyHandle> {
        if suppressed {
            return None;
        }

        for event in events {
            if let Event::TimeAdvanced { dt } = event {
                self.accumulator = self.accumulator.saturating_add(*dt);
            }
        }

        if self.accumulator < difficulty.spawn_interval {
            return None;
        }
        self.accumulator = Duration::ZERO;

        let position = self.perimeter_position(viewport, rng);
        let spawn = self.ambient_enemy(position, difficulty, rng);
        Some(enemies.acquire(spawn))
    }

    /// Spawns a boss on the perimeter and emits [`Event::BossSpawned`].
    pub fn spawn_boss<R: Rng + ?Sized>(
        &self,
        difficulty: &DifficultySnapshot,
        viewport: Rect,
        rng: &mut R,
        enemies: &mut Pool<Enemy>,
        out: &mut Vec<Event>,
    ) -> EnemyHandle {
        let tuning = &self.config.enemy;
        let position = self.perimeter_position(viewport, rng);
        let handle = enemies.acquire(EnemySpawn {
            position,
            hp: difficulty.boss_hp.max(1),
            speed: difficulty.enemy_speed,
            xp: difficulty.boss_xp,
            is_boss: true,
            shape: EnemyShape::Circle,
            color: tuning.boss_color,
            radius: tuning.boss_radius,
            collision_radius: tuning.boss_radius + tuning.collision_radius_offset,
            contact_damage: tuning.boss_contact_damage,
        });
        out.push(Event::BossSpawned { position });
        handle
    }

    /// Describes a regular circle enemy with explicit stats, as placed by
    /// wave patterns.
    #[must_use]
    pub fn regular_enemy(&self, position: Vec2, hp: i32, speed: f32, xp: u32) -> EnemySpawn {
        let tuning = &self.config.enemy;
        EnemySpawn {
            position,
            hp: hp.max(1),
            speed,
            xp,
            is_boss: false,
            shape: EnemyShape::Circle,
            color: tuning.normal_color,
            radius: tuning.normal_radius,
            collision_radius: tuning.normal_radius + tuning.collision_radius_offset,
            contact_damage: tuning.normal_contact_damage,
        }
    }

    /// Forgets accumulated time.
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }

    fn ambient_enemy<R: Rng + ?Sized>(
        &self,
        position: Vec2,
        difficulty: &DifficultySnapshot,
        rng: &mut R,
    ) -> EnemySpawn {
        let tuning = &self.config.enemy;
        let base = self.regular_enemy(
            position,
            difficulty.enemy_hp,
            difficulty.enemy_speed,
            difficulty.enemy_xp,
        );
        if tuning.shapes.is_empty() {
            return base;
        }
        let profile = tuning.shapes[rng.gen_range(0..tuning.shapes.len())];
        EnemySpawn {
            hp: ((difficulty.enemy_hp as f32 * profile.hp_mult).round() as i32).max(1),
            speed: difficulty.enemy_speed * profile.speed_mult,
            xp: (difficulty.enemy_xp as f32 * profile.xp_mult).round() as u32,
            shape: profile.shape,
            color: profile.color,
            contact_damage: tuning.normal_contact_damage * profile.damage_mult,
            ..base
        }
    }

    fn perimeter_position<R: Rng + ?Sized>(&self, viewport: Rect, rng: &mut R) -> Vec2 {
        let margin = self.config.spawn_margin;
        match rng.gen_range(0..4) {
            0 => Vec2::new(uniform(rng, viewport.left(), viewport.right()), viewport.top() - margin),
            1 => Vec2::new(
                uniform(rng, viewport.left(), viewport.right()),
                viewport.bottom() + margin,
            ),
            2 => Vec2::new(viewport.left() - margin, uniform(rng, viewport.top(), viewport.bottom())),
            _ => Vec2::new(
                viewport.right() + margin,
                uniform(rng, viewport.top(), viewport.bottom()),
            ),
        }
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    low + rng.gen::<f32>() * (high - low)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use swarm_survival_core::{ArenaTuning, EnemyTuning, Rect, Vec2};

    use super::{Config, Spawning};

    #[test]
    fn perimeter_positions_sit_outside_the_viewport() {
        let spawning = Spawning::new(Config::new(&ArenaTuning::default(), EnemyTuning::default()));
        let viewport = Rect::new(Vec2::ZERO, Vec2::new(1280.0, 720.0));
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        for _ in 0..500 {
            let position = spawning.perimeter_position(viewport, &mut rng);
            let on_horizontal = (position.y == -100.0 || position.y == 820.0)
                && (0.0..=1280.0).contains(&position.x);
            let on_vertical = (position.x == -100.0 || position.x == 1380.0)
                && (0.0..=720.0).contains(&position.y);
            assert!(on_horizontal || on_vertical, "{position:?} off the perimeter");
        }
    }

    #[test]
    fn default_viewport_is_centred_on_player() {
        let spawning = Spawning::new(Config::new(&ArenaTuning::default(), EnemyTuning::default()));
        let viewport = spawning.viewport(None, Vec2::new(1500.0, 1500.0));
        assert_eq!(viewport.left(), 860.0);
        assert_eq!(viewport.top(), 1140.0);
    }
}
