//! Collision resolution: the single place where damage, loot and
//! progression are decided each tick.
//!
//! Order within a tick:
//! 1. Projectile × adversary (damage, kills, loot, hit feedback, penetration
//!    spent on non-lethal hits)
//! 2. Actor × magnet / heart pickups
//! 3. Actor × adversary contact and actor × hostile shots
//! 4. Actor × experience gems
//! 5. Actor × reward chests

use std::collections::HashSet;

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarmfall_ai::combat;
use swarmfall_core::components::*;
use swarmfall_core::constants::*;
use swarmfall_core::enums::PickupKind;
use swarmfall_core::events::SimEvent;
use swarmfall_core::state::TickOutcome;
use swarmfall_core::types::{boxes_overlap, Position};

use crate::session::SessionStats;
use crate::spatial::{GridEntry, SpatialGrid};
use crate::systems::player;
use crate::targeting;
use crate::world_setup;

/// Resolve every collision for this tick and report the three outcomes.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    stats: &mut SessionStats,
    events: &mut Vec<SimEvent>,
    now_ms: u64,
    tick: u64,
) -> TickOutcome {
    resolve_projectile_hits(world, rng, stats, events, now_ms, tick);

    let Some(actor) = actor_box(world) else {
        return TickOutcome::default();
    };

    resolve_items(world, &actor);
    // Both sources are always resolved; either may be the fatal one.
    let contact_died = resolve_contact_damage(world, &actor, events, now_ms);
    let shot_died = resolve_hostile_shots(world, &actor, events, now_ms);

    TickOutcome {
        player_died: contact_died || shot_died,
        leveled_up: resolve_gems(world, &actor, events),
        chest_collected: resolve_chests(world, &actor, events),
    }
}

/// Loot granted for one death.
///
/// Bosses always drop a chest and nothing else. Otherwise at most one rare
/// drop is granted, the first roll to succeed in chest, magnet, heart order,
/// and a gem worth the adversary's experience drops unless a chest did.
pub fn roll_loot(rng: &mut ChaCha8Rng, is_boss: bool, xp_value: u32) -> Vec<PickupKind> {
    if is_boss {
        return vec![PickupKind::Chest];
    }

    let mut drops = Vec::with_capacity(2);
    if rng.gen::<f64>() < CHEST_DROP_CHANCE {
        drops.push(PickupKind::Chest);
    } else if rng.gen::<f64>() < MAGNET_DROP_CHANCE {
        drops.push(PickupKind::Magnet);
    } else if rng.gen::<f64>() < HEART_DROP_CHANCE {
        drops.push(PickupKind::Heart { heal: HEART_HEAL });
    }

    if !drops.contains(&PickupKind::Chest) {
        drops.push(PickupKind::Gem { value: xp_value });
    }
    drops
}

struct ActorBox {
    entity: Entity,
    position: Vec2,
    half_extents: Vec2,
}

impl ActorBox {
    fn touches(&self, position: Vec2, half_extents: Vec2) -> bool {
        boxes_overlap(self.position, self.half_extents, position, half_extents)
    }
}

fn actor_box(world: &World) -> Option<ActorBox> {
    world
        .query::<(&Player, &Position, &Collider)>()
        .iter()
        .next()
        .map(|(entity, (_player, pos, col))| ActorBox {
            entity,
            position: pos.0,
            half_extents: col.half_extents,
        })
}

fn resolve_projectile_hits(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    stats: &mut SessionStats,
    events: &mut Vec<SimEvent>,
    now_ms: u64,
    tick: u64,
) {
    // Area hazards only participate on ticks where their schedule is due.
    let mut due_tickers = Vec::new();
    let mut active = Vec::new();
    for (entity, (_proj, pos, col, ticker)) in world
        .query::<(&Projectile, &Position, &Collider, Option<&DamageTicker>)>()
        .iter()
    {
        if let Some(ticker) = ticker {
            if now_ms < ticker.next_tick_ms {
                continue;
            }
            due_tickers.push(entity);
        }
        active.push(GridEntry {
            entity,
            position: pos.0,
            half_extents: col.half_extents,
        });
    }
    if active.is_empty() {
        return;
    }
    let grid = SpatialGrid::build(SPATIAL_CELL_SIZE, active);

    let adversaries: Vec<GridEntry> = world
        .query::<(&Enemy, &Position, &Collider)>()
        .iter()
        .map(|(entity, (_enemy, pos, col))| GridEntry {
            entity,
            position: pos.0,
            half_extents: col.half_extents,
        })
        .collect();

    let mut spent: HashSet<Entity> = HashSet::new();

    for adversary in adversaries {
        let mut hits: Vec<GridEntry> = grid
            .candidates(adversary.position, adversary.half_extents)
            .into_iter()
            .filter(|p| {
                boxes_overlap(
                    adversary.position,
                    adversary.half_extents,
                    p.position,
                    p.half_extents,
                )
            })
            .collect();
        hits.sort_by_key(|p| p.entity);

        for hit in hits {
            if spent.contains(&hit.entity) {
                continue;
            }
            let Ok(damage) = world.get::<&Projectile>(hit.entity).map(|p| p.damage) else {
                continue;
            };
            stats.damage_dealt += f64::from(damage);

            let killed = match world.get::<&mut Health>(adversary.entity) {
                Ok(mut health) => combat::take_damage(&mut health, damage),
                Err(_) => break,
            };
            if killed {
                // The killing blow leaves the projectile's penetration intact.
                kill_adversary(world, rng, stats, events, adversary.entity, tick);
                break;
            }
            world_setup::spawn_hit(world, rng, hit.position, tick);
            consume_penetration(world, hit.entity, &mut spent);
        }
    }

    for entity in spent {
        targeting::despawn_projectile(world, entity);
    }
    for entity in due_tickers {
        if let Ok(mut ticker) = world.get::<&mut DamageTicker>(entity) {
            ticker.next_tick_ms = now_ms + ticker.interval_ms;
        }
    }
}

/// Persistent hazards are never used up. Everything else loses one
/// penetration per adversary it damages without killing, and is marked
/// spent at zero.
fn consume_penetration(world: &mut World, projectile: Entity, spent: &mut HashSet<Entity>) {
    let Ok(mut proj) = world.get::<&mut Projectile>(projectile) else {
        return;
    };
    if proj.lifetime_ms.is_none() {
        return;
    }
    proj.penetration = proj.penetration.saturating_sub(1);
    if proj.penetration == 0 {
        spent.insert(projectile);
    }
}

/// Death handling for one adversary. Runs once: the entity is gone afterwards.
fn kill_adversary(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    stats: &mut SessionStats,
    events: &mut Vec<SimEvent>,
    entity: Entity,
    tick: u64,
) {
    let Ok(enemy) = world.get::<&Enemy>(entity).map(|e| (*e).clone()) else {
        return;
    };
    let position = world.get::<&Position>(entity).map(|p| *p).unwrap_or_default();
    let color = world
        .get::<&Appearance>(entity)
        .map(|a| a.color)
        .unwrap_or([255, 0, 0]);
    let _ = world.despawn(entity);

    stats.kills += 1;
    world_setup::spawn_explosion(world, rng, position.0, color, tick);
    for drop in roll_loot(rng, enemy.is_boss, enemy.xp_value) {
        world_setup::spawn_pickup(world, drop, position.0);
    }

    events.push(SimEvent::EnemyKilled {
        archetype: enemy.archetype,
        position,
        is_boss: enemy.is_boss,
    });
}

fn touched_pickups(world: &World, actor: &ActorBox) -> Vec<(Entity, PickupKind)> {
    world
        .query::<(&Pickup, &Position, &Collider)>()
        .iter()
        .filter(|(_, (_, pos, col))| actor.touches(pos.0, col.half_extents))
        .map(|(entity, (pickup, _, _))| (entity, pickup.kind))
        .collect()
}

fn resolve_items(world: &mut World, actor: &ActorBox) {
    for (entity, kind) in touched_pickups(world, actor) {
        match kind {
            PickupKind::Magnet => {
                let _ = world.despawn(entity);
                for (_gem, magnet) in world.query_mut::<&mut Magnetism>() {
                    magnet.vacuumed = true;
                }
            }
            PickupKind::Heart { heal } => {
                let _ = world.despawn(entity);
                if let Ok(mut health) = world.get::<&mut Health>(actor.entity) {
                    combat::heal(&mut health, heal);
                }
            }
            PickupKind::Gem { .. } | PickupKind::Chest => {}
        }
    }
}

/// Applies the first overlapping adversary's contact damage.
fn resolve_contact_damage(
    world: &mut World,
    actor: &ActorBox,
    events: &mut Vec<SimEvent>,
    now_ms: u64,
) -> bool {
    let contact = world
        .query::<(&Enemy, &Position, &Collider)>()
        .iter()
        .find(|(_, (_, pos, col))| actor.touches(pos.0, col.half_extents))
        .map(|(_, (enemy, _, _))| enemy.contact_damage);

    match contact {
        Some(damage) => damage_actor(world, actor.entity, damage, events, now_ms),
        None => false,
    }
}

/// Hostile shots are consumed on contact whether or not they land.
fn resolve_hostile_shots(
    world: &mut World,
    actor: &ActorBox,
    events: &mut Vec<SimEvent>,
    now_ms: u64,
) -> bool {
    let shots: Vec<(Entity, f32)> = world
        .query::<(&HostileShot, &Position, &Collider)>()
        .iter()
        .filter(|(_, (_, pos, col))| actor.touches(pos.0, col.half_extents))
        .map(|(entity, (shot, _, _))| (entity, shot.damage))
        .collect();

    let mut died = false;
    for (entity, damage) in shots {
        let _ = world.despawn(entity);
        died |= damage_actor(world, actor.entity, damage, events, now_ms);
    }
    died
}

fn damage_actor(
    world: &mut World,
    actor: Entity,
    damage: f32,
    events: &mut Vec<SimEvent>,
    now_ms: u64,
) -> bool {
    let Ok((player_state, health)) = world.query_one_mut::<(&mut Player, &mut Health)>(actor)
    else {
        return false;
    };
    let before = health.current;
    let died = player::take_damage(player_state, health, damage, now_ms);
    if health.current < before {
        events.push(SimEvent::PlayerHit {
            damage: before - health.current,
            remaining: health.current,
        });
    }
    died
}

/// Awards every touched gem. Reports a level-up if any gem triggered one.
fn resolve_gems(world: &mut World, actor: &ActorBox, events: &mut Vec<SimEvent>) -> bool {
    let mut leveled = false;
    for (entity, kind) in touched_pickups(world, actor) {
        let PickupKind::Gem { value } = kind else {
            continue;
        };
        let _ = world.despawn(entity);
        if let Ok(mut player_state) = world.get::<&mut Player>(actor.entity) {
            if player::gain_xp(&mut player_state, value) {
                leveled = true;
                events.push(SimEvent::LevelUp {
                    level: player_state.level,
                });
            }
        }
    }
    leveled
}

fn resolve_chests(world: &mut World, actor: &ActorBox, events: &mut Vec<SimEvent>) -> bool {
    let mut collected = false;
    for (entity, kind) in touched_pickups(world, actor) {
        if kind == PickupKind::Chest {
            let _ = world.despawn(entity);
            collected = true;
        }
    }
    if collected {
        events.push(SimEvent::ChestCollected);
    }
    collected
}
