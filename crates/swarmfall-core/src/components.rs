//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, PickupKind};

/// Hit points of anything that can be damaged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

/// Axis-aligned collision box centred on the entity's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub half_extents: Vec2,
}

/// How presentation should draw an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub kind: EntityKind,
    pub color: [u8; 3],
    /// Mirror the sprite horizontally (melee arcs swung to the left).
    pub flip_x: bool,
}

/// The single tracked actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Pixels per tick.
    pub speed: f32,
    pub xp: u32,
    pub next_level_xp: u32,
    pub level: u32,
    /// Session time of the last hit that actually dealt damage.
    pub last_hit_ms: Option<u64>,
    /// Last non-zero movement direction (unit length).
    pub facing: Vec2,
    /// Normalized movement intent supplied by the host.
    pub move_intent: Vec2,
    /// Debug toggle: ignore all incoming damage.
    pub invincible: bool,
}

/// Adversary state. Hit points live in `Health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub archetype: String,
    pub contact_damage: f32,
    /// Pixels per tick.
    pub speed: f32,
    pub xp_value: u32,
    /// Damage already committed by in-flight projectiles locked on this adversary.
    pub pending_damage: f32,
    pub is_boss: bool,
    /// False for stacking archetypes that ignore their neighbours.
    pub separates: bool,
}

/// Ranged attack state for adversaries that shoot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RangedAttack {
    pub range: f32,
    pub cooldown_ms: u64,
    pub damage: f32,
    pub projectile_speed: f32,
    pub last_attack_ms: Option<u64>,
}

/// A damage-dealing projectile or hitbox owned by the actor's weapons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub weapon_id: String,
    pub damage: f32,
    /// Adversaries this projectile may still damage before it is removed.
    pub penetration: u32,
    pub spawned_ms: u64,
    /// None for persistent hazards that live as long as their weapon.
    pub lifetime_ms: Option<u64>,
}

/// How a projectile moves each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// position += velocity.
    Linear,
    /// velocity.y += gravity, then position += velocity.
    Ballistic { gravity: f32 },
    /// Recentred on the actor every tick, offset along its facing.
    FollowPlayer { reach: f32 },
}

/// Recurring damage schedule for area hazards.
/// Overlaps only deal damage on ticks where the schedule is due.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DamageTicker {
    pub interval_ms: u64,
    pub next_tick_ms: u64,
}

/// A hazard fired by a ranged adversary. Only collides with the actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HostileShot {
    pub damage: f32,
    pub spawned_ms: u64,
    pub lifetime_ms: u64,
}

/// A collectible lying in the world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
}

/// Magnet behaviour of experience gems.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Magnetism {
    /// Current pull speed (pixels per tick).
    pub speed: f32,
    /// Set by a magnet pickup; the gem homes in regardless of distance.
    pub vacuumed: bool,
}

/// Purely cosmetic feedback particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub expires_tick: u64,
}
