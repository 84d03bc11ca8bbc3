use swarm_survival_core::Vec2;
use swarm_survival_world::{query, World};

/// Distance at which the autopilot starts running from an enemy.
const DANGER_RADIUS: f32 = 260.0;
/// Distance from the arena centre the autopilot tolerates while idle.
const HOME_RADIUS: f32 = 200.0;

/// Steering policy standing in for a human player.
///
/// Flees the nearest enemy when it comes within [`DANGER_RADIUS`], otherwise
/// drifts back toward the middle of the arena so it is never pinned against a
/// wall.
pub(crate) fn steer(world: &World) -> Vec2 {
    let player = query::player(world).position();
    let view = query::enemy_view(world);

    if let Some(threat) = view.nearest_to(player) {
        let away = player - threat.position;
        if away.length() < DANGER_RADIUS {
            return away.normalize_or_zero();
        }
    }

    let home = query::world_size(world) * 0.5 - player;
    if home.length() > HOME_RADIUS {
        home.normalize_or_zero()
    } else {
        Vec2::ZERO
    }
}
