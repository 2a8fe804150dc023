//! Predictive damage reservation between projectiles and adversaries.
//!
//! A homing projectile commits its damage to its target's `pending_damage`
//! when it is created, so later shots pick a different target instead of
//! piling onto one that is already doomed. The link is a plain `hecs::Entity`
//! handle checked for liveness on release, never an owning reference.

use hecs::{Entity, World};

use swarmfall_core::components::Enemy;

/// Attached to a projectile that has reserved damage on an adversary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetLock {
    pub target: Entity,
    /// Exactly the amount added to the target's `pending_damage`.
    pub reserved: f32,
}

/// Commit `amount` against `target`. Returns the lock to attach to the
/// projectile, or `None` if the target is no longer an adversary.
pub fn reserve(world: &mut World, target: Entity, amount: f32) -> Option<TargetLock> {
    let mut enemy = world.get::<&mut Enemy>(target).ok()?;
    enemy.pending_damage += amount;
    Some(TargetLock {
        target,
        reserved: amount,
    })
}

/// Release the projectile's reservation, if it still holds one.
///
/// The lock component is removed first, so a second call is a no-op. A
/// target that has already been despawned is simply skipped.
pub fn release(world: &mut World, projectile: Entity) {
    let Ok(lock) = world.remove_one::<TargetLock>(projectile) else {
        return;
    };
    if let Ok(mut enemy) = world.get::<&mut Enemy>(lock.target) {
        enemy.pending_damage = (enemy.pending_damage - lock.reserved).max(0.0);
    }
}

/// Release any reservation and despawn the projectile.
pub fn despawn_projectile(world: &mut World, projectile: Entity) {
    release(world, projectile);
    let _ = world.despawn(projectile);
}
