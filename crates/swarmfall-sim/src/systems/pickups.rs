//! Gem magnetism.

use glam::Vec2;
use hecs::World;

use swarmfall_core::components::Magnetism;
use swarmfall_core::constants::{GEM_ACCELERATION, GEM_MAGNET_RADIUS, GEM_MAX_SPEED};
use swarmfall_core::types::Position;

/// Gems sit still until the actor comes within the magnet radius (or a
/// magnet pickup vacuums them), then accelerate toward the actor up to a
/// capped speed. A gem that falls back out of range stops and loses its speed.
pub fn run(world: &mut World, player_pos: Vec2) {
    let radius_sq = GEM_MAGNET_RADIUS * GEM_MAGNET_RADIUS;
    for (_entity, (magnet, pos)) in world.query_mut::<(&mut Magnetism, &mut Position)>() {
        let diff = player_pos - pos.0;
        let dist_sq = diff.length_squared();
        if magnet.vacuumed || dist_sq < radius_sq {
            if dist_sq > 0.0 {
                magnet.speed = (magnet.speed + GEM_ACCELERATION).min(GEM_MAX_SPEED);
                pos.0 += diff.normalize() * magnet.speed;
            }
        } else {
            magnet.speed = 0.0;
        }
    }
}
