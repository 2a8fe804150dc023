//! Weapon Controller: cooldown-driven firing of the actor's weapons.
//!
//! Each weapon instance carries its own copy of the archetype stats taken at
//! acquisition, so upgrades to owned weapons never reach the catalog or
//! weapons acquired later. Global modifiers live on the controller and apply
//! to every instance at fire time.

use glam::Vec2;
use hecs::{Entity, World};
use log::{info, warn};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use swarmfall_core::catalog::{Catalog, WeaponKind, WeaponStats};
use swarmfall_core::components::*;
use swarmfall_core::constants::*;
use swarmfall_core::enums::{EntityKind, ModifierStat};
use swarmfall_core::types::Position;

use crate::session::SessionStats;
use crate::targeting;
use crate::world_setup::{self, ProjectileSpawn};

/// Global weapon modifiers adjusted by `Modifier` upgrades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Extra projectiles per shot (homing and lobbed families).
    pub amount: u32,
    pub area: f32,
    pub speed: f32,
    pub duration: f32,
    /// Lower fires faster. Floored at `MIN_COOLDOWN_SCALE` when applied.
    pub cooldown: f32,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            amount: 0,
            area: 1.0,
            speed: 1.0,
            duration: 1.0,
            cooldown: 1.0,
        }
    }
}

impl Modifiers {
    pub fn apply(&mut self, stat: ModifierStat, amount: f32) {
        match stat {
            ModifierStat::Amount => {
                self.amount = (self.amount as f32 + amount).max(0.0).round() as u32;
            }
            ModifierStat::Area => self.area += amount,
            ModifierStat::Speed => self.speed += amount,
            ModifierStat::Duration => self.duration += amount,
            ModifierStat::Cooldown => self.cooldown += amount,
        }
    }

    pub fn cooldown_scale(&self) -> f32 {
        self.cooldown.max(MIN_COOLDOWN_SCALE)
    }

    fn lifetime_ms(&self, base_ms: u64) -> u64 {
        (base_ms as f32 * self.duration.max(0.0)) as u64
    }
}

/// One owned weapon.
#[derive(Debug, Clone)]
pub struct WeaponInstance {
    pub weapon_id: String,
    pub level: u32,
    /// Value copy of the archetype, mutated by weapon-stat upgrades.
    pub stats: WeaponStats,
    pub last_fired_ms: Option<u64>,
    /// The live hazard of a persistent weapon.
    pub hazard: Option<Entity>,
}

#[derive(Debug, Clone, Default)]
pub struct WeaponController {
    pub instances: Vec<WeaponInstance>,
    pub modifiers: Modifiers,
}

impl WeaponController {
    /// Acquire a fresh instance copied from the catalog. Unknown ids are
    /// logged and skipped.
    pub fn acquire(&mut self, catalog: &Catalog, weapon_id: &str) -> bool {
        let Some(stats) = catalog.weapon(weapon_id) else {
            warn!("unknown weapon `{weapon_id}`, not acquired");
            return false;
        };
        info!("acquired weapon {}", stats.name);
        self.instances.push(WeaponInstance {
            weapon_id: weapon_id.to_string(),
            level: 1,
            stats: stats.clone(),
            last_fired_ms: None,
            hazard: None,
        });
        true
    }

    pub fn owns(&self, weapon_id: &str) -> bool {
        self.instances.iter().any(|w| w.weapon_id == weapon_id)
    }

    /// Drop every instance and reset modifiers.
    pub fn reset(&mut self) {
        self.instances.clear();
        self.modifiers = Modifiers::default();
    }
}

/// Where the weapons fire from this tick.
pub struct FireOrigin {
    pub position: Vec2,
    /// Last non-zero movement direction.
    pub facing: Vec2,
    pub now_ms: u64,
}

/// Weapon Controller step: keep persistent hazards alive and fire every
/// instance whose cooldown has elapsed. A new instance fires immediately.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    controller: &mut WeaponController,
    stats: &mut SessionStats,
    origin: &FireOrigin,
) {
    let WeaponController {
        instances,
        modifiers,
    } = controller;

    for instance in instances.iter_mut() {
        if instance.stats.is_persistent() {
            maintain_hazard(world, instance, modifiers, origin);
            continue;
        }

        let cooldown = (instance.stats.cooldown_ms as f32 * modifiers.cooldown_scale()) as u64;
        let ready = instance
            .last_fired_ms
            .map_or(true, |last| origin.now_ms.saturating_sub(last) >= cooldown);
        if !ready {
            continue;
        }
        instance.last_fired_ms = Some(origin.now_ms);
        stats.shots_fired += fire(world, rng, &instance.stats, modifiers, origin);
    }
}

/// Nearest adversary not already lethally committed by projectiles in
/// flight, falling back to the nearest adversary of all.
pub fn select_target(world: &World, from: Vec2) -> Option<(Entity, Vec2)> {
    let mut uncommitted: Option<(f32, Entity, Vec2)> = None;
    let mut any: Option<(f32, Entity, Vec2)> = None;

    for (entity, (enemy, health, pos)) in world.query::<(&Enemy, &Health, &Position)>().iter() {
        let dist_sq = pos.0.distance_squared(from);
        let candidate = (dist_sq, entity, pos.0);
        if any.map_or(true, |(best, _, _)| dist_sq < best) {
            any = Some(candidate);
        }
        if health.current > enemy.pending_damage
            && uncommitted.map_or(true, |(best, _, _)| dist_sq < best)
        {
            uncommitted = Some(candidate);
        }
    }

    uncommitted.or(any).map(|(_, entity, pos)| (entity, pos))
}

/// Fire one weapon. Returns the number of projectiles emitted.
fn fire(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    stats: &WeaponStats,
    modifiers: &Modifiers,
    origin: &FireOrigin,
) -> u32 {
    let projectile = |penetration: u32, lifetime_ms: u64| Projectile {
        weapon_id: stats.id.clone(),
        damage: stats.damage,
        penetration,
        spawned_ms: origin.now_ms,
        lifetime_ms: Some(lifetime_ms),
    };
    let appearance = |kind: EntityKind, flip_x: bool| Appearance {
        kind,
        color: stats.color,
        flip_x,
    };
    let lifetime = modifiers.lifetime_ms(stats.duration_ms);

    match stats.kind {
        WeaponKind::Homing {
            speed,
            size,
            penetration,
        } => {
            let count = 1 + modifiers.amount;
            for _ in 0..count {
                // Re-run selection per projectile so reservations spread the volley.
                let (direction, lock) = match select_target(world, origin.position) {
                    Some((target, target_pos)) => (
                        fire_direction(target_pos - origin.position),
                        targeting::reserve(world, target, stats.damage),
                    ),
                    None => (fire_direction(Vec2::ZERO), None),
                };
                world_setup::spawn_projectile(
                    world,
                    ProjectileSpawn {
                        projectile: projectile(penetration.max(1), lifetime),
                        motion: Motion::Linear,
                        position: origin.position,
                        velocity: direction * speed * modifiers.speed,
                        size: Vec2::splat(size * modifiers.area),
                        appearance: appearance(EntityKind::Projectile, direction.x < 0.0),
                        lock,
                        ticker: None,
                    },
                );
            }
            count
        }
        WeaponKind::Melee {
            width,
            height,
            reach,
        } => {
            world_setup::spawn_projectile(
                world,
                ProjectileSpawn {
                    projectile: projectile(UNLIMITED_PENETRATION, lifetime),
                    motion: Motion::FollowPlayer { reach },
                    position: origin.position + origin.facing * reach,
                    velocity: Vec2::ZERO,
                    size: Vec2::new(width, height) * modifiers.area,
                    appearance: appearance(EntityKind::MeleeArc, origin.facing.x < 0.0),
                    lock: None,
                    ticker: None,
                },
            );
            1
        }
        WeaponKind::Lobbed {
            speed,
            gravity,
            spread,
            size,
        } => {
            let count = 1 + modifiers.amount;
            for _ in 0..count {
                let vx = rng.gen_range(-spread.abs()..=spread.abs());
                let velocity = Vec2::new(vx, -speed * modifiers.speed);
                world_setup::spawn_projectile(
                    world,
                    ProjectileSpawn {
                        projectile: projectile(UNLIMITED_PENETRATION, lifetime),
                        motion: Motion::Ballistic { gravity },
                        position: origin.position,
                        velocity,
                        size: Vec2::splat(size * modifiers.area),
                        appearance: appearance(EntityKind::LobbedHazard, vx < 0.0),
                        lock: None,
                        ticker: None,
                    },
                );
            }
            count
        }
        // Persistent weapons never reach the cooldown path.
        WeaponKind::Aura { .. } => 0,
    }
}

/// Create the persistent hazard on first sight, then keep its damage and
/// size in step with the instance stats and the area modifier.
fn maintain_hazard(
    world: &mut World,
    instance: &mut WeaponInstance,
    modifiers: &Modifiers,
    origin: &FireOrigin,
) {
    let WeaponKind::Aura {
        radius,
        tick_interval_ms,
    } = instance.stats.kind
    else {
        return;
    };
    let size = Vec2::splat(radius * 2.0 * modifiers.area);

    if let Some(hazard) = instance.hazard {
        if let Ok((proj, collider)) = world.query_one_mut::<(&mut Projectile, &mut Collider)>(hazard)
        {
            proj.damage = instance.stats.damage;
            collider.half_extents = size / 2.0;
            return;
        }
    }

    let entity = world_setup::spawn_projectile(
        world,
        ProjectileSpawn {
            projectile: Projectile {
                weapon_id: instance.weapon_id.clone(),
                damage: instance.stats.damage,
                penetration: UNLIMITED_PENETRATION,
                spawned_ms: origin.now_ms,
                lifetime_ms: None,
            },
            motion: Motion::FollowPlayer { reach: 0.0 },
            position: origin.position,
            velocity: Vec2::ZERO,
            size,
            appearance: Appearance {
                kind: EntityKind::Aura,
                color: instance.stats.color,
                flip_x: false,
            },
            lock: None,
            ticker: Some(DamageTicker {
                interval_ms: tick_interval_ms,
                next_tick_ms: origin.now_ms,
            }),
        },
    );
    instance.hazard = Some(entity);
}

fn fire_direction(v: Vec2) -> Vec2 {
    let dir = v.normalize_or_zero();
    if dir == Vec2::ZERO {
        Vec2::new(DEFAULT_FIRE_DIRECTION.0, DEFAULT_FIRE_DIRECTION.1)
    } else {
        dir
    }
}
