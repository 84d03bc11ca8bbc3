use glam::Vec2;

/// Player avatar. Stats are owned by the run, not by the avatar.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    position: Vec2,
    hp: f32,
    radius: f32,
    invulnerable_ms: f32,
}

impl Player {
    /// Creates a player at full HP.
    #[must_use]
    pub fn new(position: Vec2, max_hp: f32, radius: f32) -> Self {
        Self {
            position,
            hp: max_hp,
            radius,
            invulnerable_ms: 0.0,
        }
    }

    /// Current world position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current HP.
    #[must_use]
    pub const fn hp(&self) -> f32 {
        self.hp
    }

    /// Body radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Reports whether HP remains.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Reports whether contact hits are currently ignored.
    #[must_use]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ms > 0.0
    }

    /// Moves along the normalised `intent` and clamps to the world bounds.
    /// A zero intent leaves the player in place.
    pub fn advance(&mut self, intent: Vec2, speed: f32, frames: f32, world_size: Vec2) {
        let length = intent.length();
        if length > 0.0 {
            self.position += intent / length * speed * frames;
        }
        let min = Vec2::splat(self.radius);
        let max = (world_size - Vec2::splat(self.radius)).max(min);
        self.position = self.position.clamp(min, max);
    }

    /// Restores `rate` HP per second, capped at `max_hp`.
    pub fn regenerate(&mut self, rate: f32, dt_secs: f32, max_hp: f32) {
        if rate > 0.0 && self.is_alive() {
            self.heal(rate * dt_secs, max_hp);
        }
    }

    /// Counts the invulnerability window down.
    pub fn decay_invulnerability(&mut self, dt_ms: f32) {
        self.invulnerable_ms = (self.invulnerable_ms - dt_ms).max(0.0);
    }

    /// Applies a contact hit reduced by `armor`, never below `min_damage`.
    ///
    /// Returns the damage taken, or `None` when the hit was ignored because
    /// the player is invulnerable or already dead.
    pub fn take_hit(
        &mut self,
        raw: f32,
        armor: f32,
        min_damage: f32,
        invulnerability_ms: f32,
    ) -> Option<f32> {
        if self.is_invulnerable() || !self.is_alive() {
            return None;
        }
        let damage = (raw - armor).max(min_damage);
        self.hp -= damage;
        self.invulnerable_ms = invulnerability_ms;
        Some(damage)
    }

    /// Restores HP, capped at `max_hp`.
    pub fn heal(&mut self, amount: f32, max_hp: f32) {
        self.hp = (self.hp + amount).min(max_hp);
    }

    /// Lowers HP to `max_hp` after a max-HP penalty.
    pub fn cap_hp(&mut self, max_hp: f32) {
        self.hp = self.hp.min(max_hp);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::Player;

    #[test]
    fn diagonal_movement_is_normalised() {
        let mut player = Player::new(Vec2::splat(500.0), 10.0, 20.0);
        player.advance(Vec2::new(1.0, 1.0), 4.0, 1.0, Vec2::splat(3000.0));
        let moved = player.position() - Vec2::splat(500.0);
        assert!((moved.length() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn position_clamps_to_world_minus_radius() {
        let mut player = Player::new(Vec2::new(25.0, 2990.0), 10.0, 20.0);
        player.advance(Vec2::new(-1.0, 1.0), 40.0, 1.0, Vec2::splat(3000.0));
        assert_eq!(player.position(), Vec2::new(20.0, 2980.0));
    }

    #[test]
    fn armor_never_reduces_below_minimum() {
        let mut player = Player::new(Vec2::ZERO, 10.0, 20.0);
        assert_eq!(player.take_hit(1.0, 5.0, 1.0, 500.0), Some(1.0));
        assert_eq!(player.hp(), 9.0);
    }

    #[test]
    fn invulnerability_window_blocks_repeat_hits() {
        let mut player = Player::new(Vec2::ZERO, 10.0, 20.0);
        assert!(player.take_hit(2.0, 0.0, 1.0, 500.0).is_some());
        assert!(player.take_hit(2.0, 0.0, 1.0, 500.0).is_none());

        player.decay_invulnerability(499.0);
        assert!(player.take_hit(2.0, 0.0, 1.0, 500.0).is_none());
        player.decay_invulnerability(1.0);
        assert_eq!(player.take_hit(2.0, 0.0, 1.0, 500.0), Some(2.0));
        assert_eq!(player.hp(), 6.0);
    }

    #[test]
    fn regeneration_caps_at_max_hp() {
        let mut player = Player::new(Vec2::ZERO, 10.0, 20.0);
        let _ = player.take_hit(1.0, 0.0, 1.0, 0.0);
        player.regenerate(0.5, 4.0, 10.0);
        assert_eq!(player.hp(), 10.0);
    }
}
