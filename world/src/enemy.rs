use glam::Vec2;
use swarm_survival_core::{Color, EnemyShape};

use crate::pool::Pooled;

/// Parameters used to activate a pooled [`Enemy`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemySpawn {
    /// Spawn position.
    pub position: Vec2,
    /// Starting HP.
    pub hp: i32,
    /// Units moved per reference frame.
    pub speed: f32,
    /// Experience paid out on death.
    pub xp: u32,
    /// Whether the enemy is a boss.
    pub is_boss: bool,
    /// Visual variant.
    pub shape: EnemyShape,
    /// Body colour.
    pub color: Color,
    /// Body radius.
    pub radius: f32,
    /// Distance from the centre at which contact registers.
    pub collision_radius: f32,
    /// Damage dealt to the player on contact, before armor.
    pub contact_damage: f32,
}

/// Hostile entity chasing the player.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    position: Vec2,
    hp: i32,
    speed: f32,
    xp: u32,
    is_boss: bool,
    shape: EnemyShape,
    color: Color,
    radius: f32,
    collision_radius: f32,
    contact_damage: f32,
    hit_flash_ms: f32,
    alive: bool,
}

impl Pooled for Enemy {
    type Params = EnemySpawn;

    fn spawn(params: EnemySpawn) -> Self {
        Self {
            position: params.position,
            hp: params.hp,
            speed: params.speed,
            xp: params.xp,
            is_boss: params.is_boss,
            shape: params.shape,
            color: params.color,
            radius: params.radius,
            collision_radius: params.collision_radius,
            contact_damage: params.contact_damage,
            hit_flash_ms: 0.0,
            alive: params.hp > 0,
        }
    }

    fn reset(&mut self, params: EnemySpawn) {
        *self = Self::spawn(params);
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Enemy {
    /// Current world position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Remaining HP.
    #[must_use]
    pub const fn hp(&self) -> i32 {
        self.hp
    }

    /// Units moved per reference frame.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Experience paid out on death.
    #[must_use]
    pub const fn xp(&self) -> u32 {
        self.xp
    }

    /// Whether the enemy is a boss.
    #[must_use]
    pub const fn is_boss(&self) -> bool {
        self.is_boss
    }

    /// Visual variant.
    #[must_use]
    pub const fn shape(&self) -> EnemyShape {
        self.shape
    }

    /// Body colour.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Body radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Distance from the centre at which contact registers.
    #[must_use]
    pub const fn collision_radius(&self) -> f32 {
        self.collision_radius
    }

    /// Damage dealt to the player on contact.
    #[must_use]
    pub const fn contact_damage(&self) -> f32 {
        self.contact_damage
    }

    /// Reports whether the enemy is flashing after a hit.
    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.hit_flash_ms > 0.0
    }

    /// Walks toward `target` and decays the hit flash. A zero-length
    /// direction skips the move.
    pub fn advance(&mut self, target: Vec2, frames: f32, dt_ms: f32) {
        if !self.alive {
            return;
        }
        self.hit_flash_ms = (self.hit_flash_ms - dt_ms).max(0.0);

        let offset = target - self.position;
        let length = offset.length();
        if length == 0.0 {
            return;
        }
        self.position += offset / length * self.speed * frames;
    }

    /// Applies damage and reports whether the hit was lethal. Surviving hits
    /// start the hit flash.
    pub fn take_damage(&mut self, amount: i32, flash_ms: f32) -> bool {
        if !self.alive {
            return false;
        }
        self.hp -= amount;
        if self.hp <= 0 {
            self.alive = false;
            return true;
        }
        self.hit_flash_ms = flash_ms;
        false
    }
}
