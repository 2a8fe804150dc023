//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use swarmfall_core::components::*;
use swarmfall_core::enums::*;
use swarmfall_core::events::SimEvent;
use swarmfall_core::state::*;
use swarmfall_core::types::{Position, SimTime};
use swarmfall_core::upgrades::UpgradeOption;

use crate::session::SessionStats;
use crate::systems::difficulty::DifficultyDirector;
use crate::systems::player;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    stats: &SessionStats,
    difficulty: &DifficultyDirector,
    outcome: TickOutcome,
    upgrade_options: &[UpgradeOption],
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let player = build_player(world, time.now_ms());

    GameStateSnapshot {
        time: *time,
        phase,
        stats: StatsView {
            elapsed_secs: time.elapsed_secs,
            kills: stats.kills,
            damage_dealt: stats.damage_dealt,
            shots_fired: stats.shots_fired,
            level: player.level,
            enemies_alive: world.query::<&Enemy>().iter().count(),
        },
        player,
        entities: build_entities(world),
        difficulty: DifficultyView {
            multiplier: difficulty.multiplier(),
            spawn_rate_multiplier: difficulty.spawn_rate_multiplier(),
            cap_multiplier: difficulty.cap_multiplier(),
            population_cap: difficulty.population_cap(),
        },
        outcome,
        upgrade_options: upgrade_options.to_vec(),
        events,
    }
}

fn build_player(world: &World, now_ms: u64) -> PlayerView {
    world
        .query::<(&Player, &Position, &Health)>()
        .iter()
        .next()
        .map(|(_, (p, pos, health))| PlayerView {
            position: *pos,
            hp: health.current,
            max_hp: health.max,
            xp: p.xp,
            next_level_xp: p.next_level_xp,
            level: p.level,
            facing: p.facing,
            invincible: p.invincible,
            recently_hit: player::is_invulnerable(p, now_ms),
        })
        .unwrap_or_default()
}

/// Every drawable non-actor entity, ordered by id.
fn build_entities(world: &World) -> Vec<EntityView> {
    let mut entities: Vec<EntityView> = world
        .query::<(&Position, &Collider, &Appearance)>()
        .iter()
        .filter(|(_, (_, _, appearance))| appearance.kind != EntityKind::Player)
        .map(|(entity, (pos, col, appearance))| EntityView {
            id: entity.to_bits().get(),
            kind: appearance.kind,
            position: *pos,
            size: col.half_extents * 2.0,
            color: appearance.color,
            flip_x: appearance.flip_x,
        })
        .collect();
    entities.sort_by_key(|e| e.id);
    entities
}
