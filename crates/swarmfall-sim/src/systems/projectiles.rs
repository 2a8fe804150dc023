//! Projectile and hazard motion plus lifetime expiry.

use glam::Vec2;
use hecs::{Entity, World};

use swarmfall_core::components::{Appearance, HostileShot, Motion, Projectile};
use swarmfall_core::types::{Position, Velocity};

use crate::targeting;

/// Step 3 of the entity update for weapon projectiles and hostile shots.
///
/// Expired projectiles release their damage reservation on the way out.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    player_pos: Vec2,
    facing: Vec2,
    now_ms: u64,
) {
    for (_entity, (_proj, motion, pos, vel, appearance)) in world.query_mut::<(
        &Projectile,
        &Motion,
        &mut Position,
        &mut Velocity,
        &mut Appearance,
    )>() {
        match *motion {
            Motion::Linear => pos.0 += vel.0,
            Motion::Ballistic { gravity } => {
                vel.0.y += gravity;
                pos.0 += vel.0;
            }
            Motion::FollowPlayer { reach } => {
                pos.0 = player_pos + facing * reach;
                if reach > 0.0 {
                    appearance.flip_x = facing.x < 0.0;
                }
            }
        }
    }

    despawn_buffer.clear();
    for (entity, proj) in world.query_mut::<&Projectile>() {
        if let Some(lifetime) = proj.lifetime_ms {
            if now_ms.saturating_sub(proj.spawned_ms) > lifetime {
                despawn_buffer.push(entity);
            }
        }
    }
    for entity in despawn_buffer.drain(..) {
        targeting::despawn_projectile(world, entity);
    }

    for (entity, (shot, pos, vel)) in world.query_mut::<(&HostileShot, &mut Position, &Velocity)>() {
        pos.0 += vel.0;
        if now_ms.saturating_sub(shot.spawned_ms) > shot.lifetime_ms {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
