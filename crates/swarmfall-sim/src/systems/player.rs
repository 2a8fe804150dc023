//! Actor movement, damage intake, and experience.

use glam::Vec2;
use hecs::{Entity, World};

use swarmfall_core::components::{Health, Player};
use swarmfall_core::constants::{PLAYER_IFRAME_MS, XP_THRESHOLD_GROWTH};
use swarmfall_core::types::{Position, Velocity};

/// The actor's entity, centre and facing, if it exists.
pub fn locate(world: &World) -> Option<(Entity, Vec2, Vec2)> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(entity, (player, pos))| (entity, pos.0, player.facing))
}

/// Step 1 of the entity update: move the actor along its intent.
pub fn run(world: &mut World) {
    for (_entity, (player, pos, vel)) in
        world.query_mut::<(&mut Player, &mut Position, &mut Velocity)>()
    {
        vel.0 = player.move_intent * player.speed;
        if player.move_intent != Vec2::ZERO {
            player.facing = player.move_intent;
        }
        pos.0 += vel.0;
    }
}

/// Store a movement intent, normalized. Non-finite or zero input stops the actor.
pub fn set_intent(world: &mut World, x: f32, y: f32) {
    let intent = Vec2::new(x, y);
    let intent = if intent.is_finite() {
        intent.normalize_or_zero()
    } else {
        Vec2::ZERO
    };
    for (_entity, player) in world.query_mut::<&mut Player>() {
        player.move_intent = intent;
    }
}

/// Whether a hit at `now_ms` falls inside the invulnerability window.
pub fn is_invulnerable(player: &Player, now_ms: u64) -> bool {
    player
        .last_hit_ms
        .is_some_and(|last| now_ms.saturating_sub(last) <= PLAYER_IFRAME_MS)
}

/// Apply a damage instance to the actor. Returns whether the actor is dead.
///
/// Inside the invulnerability window the hit is discarded entirely. A hit
/// that lands refreshes the window.
pub fn take_damage(player: &mut Player, health: &mut Health, amount: f32, now_ms: u64) -> bool {
    if player.invincible || is_invulnerable(player, now_ms) {
        return health.current <= 0.0;
    }
    health.current = (health.current - amount).max(0.0);
    player.last_hit_ms = Some(now_ms);
    health.current <= 0.0
}

/// Add experience. Returns whether this crossed the level threshold.
///
/// At most one level is gained per call; leftover experience carries over.
pub fn gain_xp(player: &mut Player, amount: u32) -> bool {
    player.xp += amount;
    if player.xp < player.next_level_xp {
        return false;
    }
    player.xp -= player.next_level_xp;
    player.level += 1;
    player.next_level_xp = (player.next_level_xp as f32 * XP_THRESHOLD_GROWTH).floor() as u32;
    true
}
