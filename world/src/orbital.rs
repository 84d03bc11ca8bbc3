use std::collections::HashMap;

use glam::Vec2;

use crate::EnemyHandle;

/// Shield orb circling the player.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalOrb {
    angle: f32,
    position: Vec2,
    cooldowns: HashMap<EnemyHandle, f32>,
}

impl OrbitalOrb {
    /// Creates an orb at the provided angle. Its position is resolved by the
    /// first call to [`OrbitalOrb::orbit`].
    #[must_use]
    pub fn new(angle: f32) -> Self {
        Self {
            angle,
            position: Vec2::ZERO,
            cooldowns: HashMap::new(),
        }
    }

    /// Current angle around the player, in radians.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    /// Current world position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotates around `center` and updates the position.
    pub fn orbit(&mut self, center: Vec2, radius: f32, angular_speed: f32, dt_secs: f32) {
        self.angle += angular_speed * dt_secs;
        self.position = center + Vec2::new(self.angle.cos(), self.angle.sin()) * radius;
    }

    /// Counts every per-enemy cooldown down, purging expired entries and
    /// entries whose enemy is no longer live.
    pub fn tick_cooldowns(&mut self, dt_ms: f32, is_live: impl Fn(EnemyHandle) -> bool) {
        self.cooldowns.retain(|enemy, remaining| {
            *remaining -= dt_ms;
            *remaining > 0.0 && is_live(*enemy)
        });
    }

    /// Reports whether the orb may hit `enemy` again.
    #[must_use]
    pub fn ready_for(&self, enemy: EnemyHandle) -> bool {
        !self.cooldowns.contains_key(&enemy)
    }

    /// Starts the cooldown for `enemy`.
    pub fn mark_hit(&mut self, enemy: EnemyHandle, cooldown_ms: f32) {
        let _ = self.cooldowns.insert(enemy, cooldown_ms);
    }

    /// Number of enemies currently on cooldown.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.cooldowns.len()
    }
}
