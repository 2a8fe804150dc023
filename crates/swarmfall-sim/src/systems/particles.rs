//! Cosmetic particle drift and expiry.

use hecs::{Entity, World};

use swarmfall_core::components::Particle;
use swarmfall_core::types::{Position, Velocity};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, tick: u64) {
    despawn_buffer.clear();
    for (entity, (particle, pos, vel)) in
        world.query_mut::<(&Particle, &mut Position, &Velocity)>()
    {
        pos.0 += vel.0;
        if tick >= particle.expires_tick {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
