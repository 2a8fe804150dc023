//! Chase + separation steering.
//!
//! Pure chase collapses a swarm onto a single point. Each adversary adds a
//! repulsion term from close neighbours, weighted heavily enough that it
//! dominates only at short range, so the swarm stays readable while still
//! converging on the actor.

use glam::Vec2;

use swarmfall_core::constants::{SEPARATION_RADIUS, SEPARATION_WEIGHT};

/// Input to the steering step for a single adversary.
pub struct SteeringContext<'a> {
    pub position: Vec2,
    /// Where the adversary is heading (the actor's centre).
    pub target: Vec2,
    /// Pixels per tick.
    pub speed: f32,
    /// Stacking archetypes skip separation entirely.
    pub separates: bool,
    /// Positions of nearby adversaries. May include the adversary itself;
    /// zero-distance entries are ignored.
    pub neighbors: &'a [Vec2],
}

/// Velocity for this tick: a unit direction scaled by the adversary's speed.
pub fn steer(ctx: &SteeringContext) -> Vec2 {
    let chase = (ctx.target - ctx.position).normalize_or_zero();

    let separation = if ctx.separates {
        separation(ctx.position, ctx.neighbors)
    } else {
        Vec2::ZERO
    };

    let combined = chase + separation * SEPARATION_WEIGHT;
    combined.normalize_or_zero() * ctx.speed
}

/// Average repulsion from neighbours closer than the clumping threshold.
/// Each term points away from the neighbour and is scaled by 1 / distance.
pub fn separation(position: Vec2, neighbors: &[Vec2]) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0u32;

    for &other in neighbors {
        let diff = position - other;
        let dist = diff.length();
        if dist > 0.0 && dist < SEPARATION_RADIUS {
            sum += diff / dist / dist;
            count += 1;
        }
    }

    if count > 0 {
        sum / count as f32
    } else {
        Vec2::ZERO
    }
}
