//! Adversary steering and ranged attacks.
//!
//! Steering reads every adversary's start-of-tick position through a spatial
//! grid, so the result does not depend on iteration order.

use glam::Vec2;
use hecs::{Entity, World};

use swarmfall_ai::combat;
use swarmfall_ai::steering::{self, SteeringContext};
use swarmfall_core::components::{Appearance, Collider, Enemy, RangedAttack};
use swarmfall_core::constants::{SEPARATION_RADIUS, SPATIAL_CELL_SIZE};
use swarmfall_core::types::{Position, Velocity};

use crate::spatial::{GridEntry, SpatialGrid};
use crate::world_setup;

/// Step 2 of the entity update: steer and move every adversary, then let
/// ranged archetypes take their shots.
pub fn run(world: &mut World, player_pos: Vec2, now_ms: u64) {
    let grid = SpatialGrid::build(
        SPATIAL_CELL_SIZE,
        world
            .query::<(&Enemy, &Position, &Collider)>()
            .iter()
            .map(|(entity, (_enemy, pos, col))| GridEntry {
                entity,
                position: pos.0,
                half_extents: col.half_extents,
            }),
    );

    let steering: Vec<(Entity, Vec2)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| {
            let neighbors = if enemy.separates {
                grid.positions_within(pos.0, SEPARATION_RADIUS)
            } else {
                Vec::new()
            };
            let velocity = steering::steer(&SteeringContext {
                position: pos.0,
                target: player_pos,
                speed: enemy.speed,
                separates: enemy.separates,
                neighbors: &neighbors,
            });
            (entity, velocity)
        })
        .collect();

    for (entity, velocity) in steering {
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            vel.0 = velocity;
        }
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.0 += velocity;
        }
        if let Ok(mut appearance) = world.get::<&mut Appearance>(entity) {
            if velocity.x != 0.0 {
                appearance.flip_x = velocity.x < 0.0;
            }
        }
    }

    let mut shots = Vec::new();
    for (_entity, (attack, pos)) in world.query_mut::<(&mut RangedAttack, &Position)>() {
        if let Some(velocity) = combat::try_ranged_attack(attack, pos.0, player_pos, now_ms) {
            shots.push((pos.0, velocity, attack.damage));
        }
    }
    for (position, velocity, damage) in shots {
        world_setup::spawn_hostile_shot(world, position, velocity, damage, now_ms);
    }
}
