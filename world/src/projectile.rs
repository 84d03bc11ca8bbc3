use glam::Vec2;

use crate::{pool::Pooled, EnemyHandle};

/// Parameters used to activate a pooled [`Projectile`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileLaunch {
    /// Launch position.
    pub position: Vec2,
    /// Unit direction of travel.
    pub direction: Vec2,
    /// Units travelled per reference frame.
    pub speed: f32,
    /// Damage per hit.
    pub damage: i32,
    /// Milliseconds before despawning.
    pub lifetime_ms: f32,
    /// Additional enemies the projectile may pass through.
    pub piercing: u32,
    /// Whether the projectile steers toward the homing target.
    pub homing: bool,
}

/// Player projectile.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    position: Vec2,
    direction: Vec2,
    speed: f32,
    damage: i32,
    remaining_ms: f32,
    piercing: u32,
    homing: bool,
    hit: Vec<EnemyHandle>,
    alive: bool,
}

impl Pooled for Projectile {
    type Params = ProjectileLaunch;

    fn spawn(launch: ProjectileLaunch) -> Self {
        Self {
            position: launch.position,
            direction: launch.direction,
            speed: launch.speed,
            damage: launch.damage,
            remaining_ms: launch.lifetime_ms,
            piercing: launch.piercing,
            homing: launch.homing,
            hit: Vec::new(),
            alive: true,
        }
    }

    fn reset(&mut self, launch: ProjectileLaunch) {
        self.position = launch.position;
        self.direction = launch.direction;
        self.speed = launch.speed;
        self.damage = launch.damage;
        self.remaining_ms = launch.lifetime_ms;
        self.piercing = launch.piercing;
        self.homing = launch.homing;
        self.hit.clear();
        self.alive = true;
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Projectile {
    /// Current world position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Unit direction of travel.
    #[must_use]
    pub const fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Damage per hit.
    #[must_use]
    pub const fn damage(&self) -> i32 {
        self.damage
    }

    /// Remaining piercing charges.
    #[must_use]
    pub const fn piercing(&self) -> u32 {
        self.piercing
    }

    /// Whether the projectile homes.
    #[must_use]
    pub const fn is_homing(&self) -> bool {
        self.homing
    }

    /// Turns the direction toward `target` by `turn_rate` and re-normalises.
    pub fn steer(&mut self, target: Vec2, turn_rate: f32) {
        let offset = target - self.position;
        let distance = offset.length();
        if distance == 0.0 {
            return;
        }
        let desired = offset / distance;
        let turned = self.direction + (desired - self.direction) * turn_rate;
        let length = turned.length();
        if length > 0.0 {
            self.direction = turned / length;
        }
    }

    /// Moves the projectile and spends lifetime. Expired projectiles die.
    pub fn advance(&mut self, frames: f32, dt_ms: f32) {
        if !self.alive {
            return;
        }
        self.position += self.direction * self.speed * frames;
        self.remaining_ms -= dt_ms;
        if self.remaining_ms <= 0.0 {
            self.alive = false;
        }
    }

    /// Tests a hit against an enemy centred at `enemy_position`.
    ///
    /// A hit either spends a piercing charge, recording the enemy so it is
    /// not hit again, or deactivates the projectile. Returns the damage to
    /// apply.
    pub fn try_hit(&mut self, enemy: EnemyHandle, enemy_position: Vec2, reach: f32) -> Option<i32> {
        if !self.alive || self.hit.contains(&enemy) {
            return None;
        }
        if self.position.distance(enemy_position) >= reach {
            return None;
        }
        if self.piercing > 0 {
            self.piercing -= 1;
            self.hit.push(enemy);
        } else {
            self.alive = false;
        }
        Some(self.damage)
    }
}
