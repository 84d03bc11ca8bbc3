use glam::Vec2;

/// Experience pickup dropped by dead enemies.
#[derive(Clone, Debug, PartialEq)]
pub struct XpOrb {
    position: Vec2,
    xp: u32,
    alive: bool,
}

impl XpOrb {
    /// Creates a live orb carrying `xp`.
    #[must_use]
    pub const fn new(position: Vec2, xp: u32) -> Self {
        Self {
            position,
            xp,
            alive: true,
        }
    }

    /// Current world position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Experience carried.
    #[must_use]
    pub const fn xp(&self) -> u32 {
        self.xp
    }

    /// Reports whether the orb is still waiting to be collected.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Drifts toward the player when inside `attract_range` and collects when
    /// inside `collect_range`. Returns the experience collected, if any.
    pub fn update(
        &mut self,
        player: Vec2,
        attract_range: f32,
        attract_speed: f32,
        collect_range: f32,
        frames: f32,
    ) -> Option<u32> {
        if !self.alive {
            return None;
        }
        let offset = player - self.position;
        let distance = offset.length();
        if distance <= collect_range {
            return self.collect();
        }
        if distance < attract_range {
            self.position += offset / distance * attract_speed * frames;
        }
        None
    }

    /// Collects the orb wherever it is.
    pub fn collect(&mut self) -> Option<u32> {
        if !self.alive {
            return None;
        }
        self.alive = false;
        Some(self.xp)
    }
}
