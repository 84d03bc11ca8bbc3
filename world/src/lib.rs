#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative entity state for Swarm Survival.
//!
//! The world owns the player avatar, the pooled enemies and projectiles, the
//! experience orbs, the orbital shield and the spatial grid. Systems borrow
//! the pieces they need through [`World::parts_mut`]; adapters observe the
//! state through the [`query`] module.

use glam::Vec2;
use swarm_survival_core::Tuning;

mod enemy;
mod orb;
mod orbital;
mod player;
mod pool;
mod projectile;
mod spatial;

pub use enemy::{Enemy, EnemySpawn};
pub use orb::XpOrb;
pub use orbital::OrbitalOrb;
pub use player::Player;
pub use pool::{Handle, Pool, Pooled};
pub use projectile::{Projectile, ProjectileLaunch};
pub use spatial::SpatialGrid;

/// Generational reference to a pooled enemy.
pub type EnemyHandle = Handle<Enemy>;

/// Generational reference to a pooled projectile.
pub type ProjectileHandle = Handle<Projectile>;

/// Represents the authoritative Swarm Survival world state.
#[derive(Debug)]
pub struct World {
    size: Vec2,
    player: Player,
    enemies: Pool<Enemy>,
    projectiles: Pool<Projectile>,
    orbs: Vec<XpOrb>,
    orbitals: Vec<OrbitalOrb>,
    grid: SpatialGrid<EnemyHandle>,
}

/// Simultaneous mutable access to the disjoint parts of the [`World`].
#[derive(Debug)]
pub struct WorldParts<'a> {
    /// Size of the playable area.
    pub size: Vec2,
    /// Player avatar.
    pub player: &'a mut Player,
    /// Enemy pool.
    pub enemies: &'a mut Pool<Enemy>,
    /// Projectile pool.
    pub projectiles: &'a mut Pool<Projectile>,
    /// Experience orbs.
    pub orbs: &'a mut Vec<XpOrb>,
    /// Orbital shield orbs.
    pub orbitals: &'a mut Vec<OrbitalOrb>,
    /// Enemy spatial grid.
    pub grid: &'a mut SpatialGrid<EnemyHandle>,
}

impl World {
    /// Creates a world with the player centred in the arena.
    #[must_use]
    pub fn new(tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.arena.world_width, tuning.arena.world_height);
        Self {
            size,
            player: spawn_player(size, tuning),
            enemies: Pool::new(),
            projectiles: Pool::new(),
            orbs: Vec::new(),
            orbitals: Vec::new(),
            grid: SpatialGrid::new(tuning.arena.cell_size),
        }
    }

    /// Releases every pooled entity, drops free instances and respawns the
    /// player.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.enemies.release_all();
        self.projectiles.release_all();
        self.enemies.destroy_all();
        self.projectiles.destroy_all();
        self.orbs.clear();
        self.orbitals.clear();
        self.grid.clear();
        self.size = Vec2::new(tuning.arena.world_width, tuning.arena.world_height);
        self.player = spawn_player(self.size, tuning);
    }

    /// Borrows every part of the world mutably at once.
    pub fn parts_mut(&mut self) -> WorldParts<'_> {
        WorldParts {
            size: self.size,
            player: &mut self.player,
            enemies: &mut self.enemies,
            projectiles: &mut self.projectiles,
            orbs: &mut self.orbs,
            orbitals: &mut self.orbitals,
            grid: &mut self.grid,
        }
    }
}

fn spawn_player(size: Vec2, tuning: &Tuning) -> Player {
    Player::new(size * 0.5, tuning.player.max_hp, tuning.player.radius)
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use glam::Vec2;
    use swarm_survival_core::{Color, EnemyShape};

    use super::{EnemyHandle, Player, World};

    /// Size of the playable area.
    #[must_use]
    pub fn world_size(world: &World) -> Vec2 {
        world.size
    }

    /// Provides read-only access to the player avatar.
    #[must_use]
    pub fn player(world: &World) -> &Player {
        &world.player
    }

    /// Number of active enemies.
    #[must_use]
    pub fn enemy_count(world: &World) -> usize {
        world.enemies.len()
    }

    /// Number of active projectiles.
    #[must_use]
    pub fn projectile_count(world: &World) -> usize {
        world.projectiles.len()
    }

    /// Number of uncollected experience orbs.
    #[must_use]
    pub fn orb_count(world: &World) -> usize {
        world.orbs.len()
    }

    /// Captures a read-only view of the active enemies in pool order.
    #[must_use]
    pub fn enemy_view(world: &World) -> EnemyView {
        let snapshots = world
            .enemies
            .iter()
            .map(|(handle, enemy)| EnemySnapshot {
                handle,
                position: enemy.position(),
                hp: enemy.hp(),
                radius: enemy.radius(),
                is_boss: enemy.is_boss(),
                shape: enemy.shape(),
                color: enemy.color(),
                flashing: enemy.is_flashing(),
            })
            .collect();
        EnemyView { snapshots }
    }

    /// Captures positions and directions of active projectiles.
    #[must_use]
    pub fn projectile_view(world: &World) -> Vec<ProjectileSnapshot> {
        world
            .projectiles
            .iter()
            .map(|(_, projectile)| ProjectileSnapshot {
                position: projectile.position(),
                direction: projectile.direction(),
                homing: projectile.is_homing(),
            })
            .collect()
    }

    /// Captures positions and payloads of uncollected orbs.
    #[must_use]
    pub fn orb_view(world: &World) -> Vec<(Vec2, u32)> {
        world
            .orbs
            .iter()
            .filter(|orb| orb.is_alive())
            .map(|orb| (orb.position(), orb.xp()))
            .collect()
    }

    /// Captures positions of the orbital shield orbs.
    #[must_use]
    pub fn orbital_view(world: &World) -> Vec<Vec2> {
        world.orbitals.iter().map(|orb| orb.position()).collect()
    }

    /// Read-only snapshot describing all active enemies.
    #[derive(Clone, Debug)]
    pub struct EnemyView {
        snapshots: Vec<EnemySnapshot>,
    }

    impl EnemyView {
        /// Iterator over the captured enemy snapshots in pool order.
        pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
            self.snapshots.iter()
        }

        /// Snapshot of the enemy closest to `from`, ties resolving to the
        /// earlier entry.
        #[must_use]
        pub fn nearest_to(&self, from: Vec2) -> Option<&EnemySnapshot> {
            let mut best: Option<(&EnemySnapshot, f32)> = None;
            for snapshot in &self.snapshots {
                let distance = snapshot.position.distance_squared(from);
                if best.map_or(true, |(_, current)| distance < current) {
                    best = Some((snapshot, distance));
                }
            }
            best.map(|(snapshot, _)| snapshot)
        }

        /// Consumes the view, returning the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<EnemySnapshot> {
            self.snapshots
        }
    }

    /// Immutable representation of a single enemy's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct EnemySnapshot {
        /// Handle of the enemy.
        pub handle: EnemyHandle,
        /// Current position.
        pub position: Vec2,
        /// Remaining HP.
        pub hp: i32,
        /// Body radius.
        pub radius: f32,
        /// Whether the enemy is a boss.
        pub is_boss: bool,
        /// Visual variant.
        pub shape: EnemyShape,
        /// Body colour.
        pub color: Color,
        /// Whether the enemy is flashing after a hit.
        pub flashing: bool,
    }

    /// Immutable representation of a single projectile.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct ProjectileSnapshot {
        /// Current position.
        pub position: Vec2,
        /// Unit direction of travel.
        pub direction: Vec2,
        /// Whether the projectile homes.
        pub homing: bool,
    }
}
