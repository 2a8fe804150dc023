//! Entity spawn factories for the simulation world.
//!
//! Creates the actor, adversaries, projectiles, pickups and particles with
//! the component bundles the systems expect.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarmfall_core::catalog::EnemyStats;
use swarmfall_core::components::*;
use swarmfall_core::constants::*;
use swarmfall_core::enums::*;
use swarmfall_core::types::{Position, Velocity};

use crate::targeting::TargetLock;

const PLAYER_COLOR: [u8; 3] = [0, 255, 255];
const HOSTILE_SHOT_COLOR: [u8; 3] = [255, 60, 200];
const HIT_COLOR: [u8; 3] = [255, 255, 255];

/// Discard every entity and reseed the actor at the origin.
///
/// Both steps happen before the caller builds its next snapshot, so a reset
/// is never observed half done.
pub fn reset_world(world: &mut World) -> Entity {
    world.clear();
    spawn_player(world)
}

/// Spawn the actor at the origin with base stats.
pub fn spawn_player(world: &mut World) -> Entity {
    let player = Player {
        speed: PLAYER_BASE_SPEED,
        xp: 0,
        next_level_xp: XP_FIRST_THRESHOLD,
        level: 1,
        last_hit_ms: None,
        facing: Vec2::X,
        move_intent: Vec2::ZERO,
        invincible: false,
    };

    world.spawn((
        player,
        Position::new(0.0, 0.0),
        Velocity::default(),
        Health {
            current: PLAYER_BASE_MAX_HP,
            max: PLAYER_BASE_MAX_HP,
        },
        Collider {
            half_extents: Vec2::splat(PLAYER_SIZE / 2.0),
        },
        Appearance {
            kind: EntityKind::Player,
            color: PLAYER_COLOR,
            flip_x: false,
        },
    ))
}

/// Spawn one adversary of the given archetype.
pub fn spawn_enemy(world: &mut World, stats: &EnemyStats, position: Vec2) -> Entity {
    let enemy = Enemy {
        archetype: stats.id.clone(),
        contact_damage: stats.damage,
        speed: stats.speed,
        xp_value: stats.xp_value,
        pending_damage: 0.0,
        is_boss: stats.is_boss,
        separates: !stats.stacks,
    };
    let kind = if stats.is_boss {
        EntityKind::Boss
    } else {
        EntityKind::Enemy
    };

    let entity = world.spawn((
        enemy,
        Position(position),
        Velocity::default(),
        Health {
            current: stats.hp,
            max: stats.hp,
        },
        Collider {
            half_extents: Vec2::splat(stats.size / 2.0),
        },
        Appearance {
            kind,
            color: stats.color,
            flip_x: false,
        },
    ));

    if let Some(ranged) = stats.ranged {
        let _ = world.insert_one(
            entity,
            RangedAttack {
                range: ranged.range,
                cooldown_ms: ranged.cooldown_ms,
                damage: ranged.damage,
                projectile_speed: ranged.projectile_speed,
                last_attack_ms: None,
            },
        );
    }

    entity
}

/// Everything needed to put a weapon projectile or hitbox into the world.
pub struct ProjectileSpawn {
    pub projectile: Projectile,
    pub motion: Motion,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub appearance: Appearance,
    pub lock: Option<TargetLock>,
    pub ticker: Option<DamageTicker>,
}

pub fn spawn_projectile(world: &mut World, spawn: ProjectileSpawn) -> Entity {
    let entity = world.spawn((
        spawn.projectile,
        spawn.motion,
        Position(spawn.position),
        Velocity(spawn.velocity),
        Collider {
            half_extents: spawn.size / 2.0,
        },
        spawn.appearance,
    ));
    if let Some(lock) = spawn.lock {
        let _ = world.insert_one(entity, lock);
    }
    if let Some(ticker) = spawn.ticker {
        let _ = world.insert_one(entity, ticker);
    }
    entity
}

/// Spawn a shot fired by a ranged adversary.
pub fn spawn_hostile_shot(
    world: &mut World,
    position: Vec2,
    velocity: Vec2,
    damage: f32,
    now_ms: u64,
) -> Entity {
    world.spawn((
        HostileShot {
            damage,
            spawned_ms: now_ms,
            lifetime_ms: HOSTILE_SHOT_LIFETIME_MS,
        },
        Position(position),
        Velocity(velocity),
        Collider {
            half_extents: Vec2::splat(HOSTILE_SHOT_SIZE / 2.0),
        },
        Appearance {
            kind: EntityKind::HostileShot,
            color: HOSTILE_SHOT_COLOR,
            flip_x: false,
        },
    ))
}

/// Spawn a collectible. Gems also get a magnetism state.
pub fn spawn_pickup(world: &mut World, kind: PickupKind, position: Vec2) -> Entity {
    let (entity_kind, size, color) = match kind {
        PickupKind::Gem { .. } => (EntityKind::Gem, GEM_SIZE, [0, 255, 255]),
        PickupKind::Heart { .. } => (EntityKind::Heart, ITEM_SIZE, [255, 0, 0]),
        PickupKind::Magnet => (EntityKind::Magnet, ITEM_SIZE, [148, 0, 211]),
        PickupKind::Chest => (EntityKind::Chest, CHEST_SIZE, [255, 215, 0]),
    };

    let entity = world.spawn((
        Pickup { kind },
        Position(position),
        Velocity::default(),
        Collider {
            half_extents: Vec2::splat(size / 2.0),
        },
        Appearance {
            kind: entity_kind,
            color,
            flip_x: false,
        },
    ));
    if matches!(kind, PickupKind::Gem { .. }) {
        let _ = world.insert_one(entity, Magnetism::default());
    }
    entity
}

/// Spray of particles in the adversary's colour on death.
pub fn spawn_explosion(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Vec2,
    color: [u8; 3],
    tick: u64,
) {
    spawn_particles(
        world,
        rng,
        position,
        color,
        EXPLOSION_PARTICLES,
        EXPLOSION_PARTICLE_SPEED,
        tick + EXPLOSION_PARTICLE_TICKS,
    );
}

/// Small white spray on a non-lethal hit.
pub fn spawn_hit(world: &mut World, rng: &mut ChaCha8Rng, position: Vec2, tick: u64) {
    spawn_particles(
        world,
        rng,
        position,
        HIT_COLOR,
        HIT_PARTICLES,
        HIT_PARTICLE_SPEED,
        tick + HIT_PARTICLE_TICKS,
    );
}

fn spawn_particles(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Vec2,
    color: [u8; 3],
    count: usize,
    base_speed: f32,
    expires_tick: u64,
) {
    for _ in 0..count {
        let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed: f32 = rng.gen_range(base_speed * 0.5..base_speed * 1.5);
        world.spawn((
            Particle { expires_tick },
            Position(position),
            Velocity(Vec2::from_angle(angle) * speed),
            Collider {
                half_extents: Vec2::splat(PARTICLE_SIZE / 2.0),
            },
            Appearance {
                kind: EntityKind::Particle,
                color,
                flip_x: false,
            },
        ));
    }
}
