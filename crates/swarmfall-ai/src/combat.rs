//! Damage contract and ranged-attack decisions.

use glam::Vec2;

use swarmfall_core::components::{Health, RangedAttack};

/// Subtract `amount` from `health`, clamping at zero.
///
/// Returns whether the target is dead after this call. Once hit points reach
/// zero every further call is a no-op that still returns `true`, so several
/// projectiles landing in the same tick cannot fail. Callers that need the
/// killing blow exactly once should check `health.current > 0.0` first.
pub fn take_damage(health: &mut Health, amount: f32) -> bool {
    if health.current <= 0.0 {
        return true;
    }
    health.current = (health.current - amount).max(0.0);
    health.current <= 0.0
}

/// Restore hit points up to the maximum.
pub fn heal(health: &mut Health, amount: f32) {
    health.current = (health.current + amount).min(health.max);
}

/// Decide whether a ranged adversary fires this tick.
///
/// Fires when the actor is within range and the cooldown has elapsed (the
/// first shot is never gated). Returns the shot velocity, aimed at the
/// actor's current position with no lead, and stamps the cooldown.
pub fn try_ranged_attack(
    attack: &mut RangedAttack,
    position: Vec2,
    target: Vec2,
    now_ms: u64,
) -> Option<Vec2> {
    if position.distance(target) > attack.range {
        return None;
    }
    if let Some(last) = attack.last_attack_ms {
        if now_ms.saturating_sub(last) < attack.cooldown_ms {
            return None;
        }
    }

    attack.last_attack_ms = Some(now_ms);
    let direction = (target - position).normalize_or_zero();
    let direction = if direction == Vec2::ZERO {
        Vec2::X
    } else {
        direction
    };
    Some(direction * attack.projectile_speed)
}
