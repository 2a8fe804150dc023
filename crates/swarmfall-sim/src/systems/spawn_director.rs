//! Spawn Director: time-keyed waves, horde bursts and the session boss.

use glam::Vec2;
use hecs::World;
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use swarmfall_core::catalog::Catalog;
use swarmfall_core::components::Enemy;
use swarmfall_core::constants::*;
use swarmfall_core::events::SimEvent;

use crate::world_setup;

/// A single wave definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveEntry {
    /// Elapsed session time at which this wave takes over.
    pub start_secs: f64,
    /// Ticks between ordinary spawns, before the difficulty multiplier.
    pub interval_ticks: u32,
    /// Archetype ids eligible to spawn, chosen uniformly.
    pub enemies: Vec<String>,
}

/// The wave table, sorted ascending by `start_secs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveTable {
    pub waves: Vec<WaveEntry>,
}

impl WaveTable {
    /// Eight waves escalating over the first ten minutes.
    pub fn default_table() -> Self {
        let wave = |start_secs: f64, interval_ticks: u32, enemies: &[&str]| WaveEntry {
            start_secs,
            interval_ticks,
            enemies: enemies.iter().map(|id| id.to_string()).collect(),
        };
        Self {
            waves: vec![
                wave(0.0, 60, &["goblin"]),
                wave(30.0, 50, &["goblin", "bat"]),
                wave(60.0, 40, &["goblin", "bat", "slime"]),
                wave(120.0, 30, &["bat", "ghost", "slime"]),
                wave(180.0, 25, &["ghost", "orc", "wolf"]),
                wave(300.0, 20, &["orc", "mage", "wolf"]),
                wave(420.0, 15, &["orc", "mage", "necromancer"]),
                wave(600.0, 10, &["mage", "necromancer", "tank_orc"]),
            ],
        }
    }

    /// The latest wave whose start time has been reached. Later entries
    /// replace earlier ones outright.
    pub fn active(&self, elapsed_secs: f64) -> Option<&WaveEntry> {
        self.waves
            .iter()
            .rev()
            .find(|wave| elapsed_secs >= wave.start_secs)
    }
}

/// Spawn Director state. Reset with the session.
#[derive(Debug, Clone)]
pub struct SpawnDirector {
    pub table: WaveTable,
    /// Ticks since the last ordinary spawn. Keeps counting while capped.
    spawn_timer: u32,
    last_horde_secs: Option<f64>,
    boss_spawned: bool,
}

impl SpawnDirector {
    pub fn new(table: WaveTable) -> Self {
        Self {
            table,
            spawn_timer: 0,
            last_horde_secs: None,
            boss_spawned: false,
        }
    }

    pub fn reset(&mut self) {
        self.spawn_timer = 0;
        self.last_horde_secs = None;
        self.boss_spawned = false;
    }

    pub fn boss_spawned(&self) -> bool {
        self.boss_spawned
    }
}

/// Per-tick inputs read from the rest of the simulation.
pub struct SpawnContext {
    pub elapsed_secs: f64,
    pub spawn_rate_multiplier: f32,
    pub population_cap: usize,
    pub player_pos: Vec2,
}

/// Spawn Director step.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut SpawnDirector,
    catalog: &Catalog,
    ctx: &SpawnContext,
    events: &mut Vec<SimEvent>,
) {
    director.spawn_timer = director.spawn_timer.saturating_add(1);

    // Ordinary wave spawn, gated by the population cap.
    let alive = world.query::<&Enemy>().iter().count();
    let chosen = director.table.active(ctx.elapsed_secs).and_then(|wave| {
        let interval = wave.interval_ticks as f32 / ctx.spawn_rate_multiplier.max(f32::EPSILON);
        if (director.spawn_timer as f32) < interval || alive >= ctx.population_cap {
            return None;
        }
        wave.enemies.choose(rng).cloned()
    });
    if let Some(id) = chosen {
        director.spawn_timer = 0;
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let position = ctx.player_pos + Vec2::from_angle(angle) * SPAWN_RADIUS;
        match catalog.enemy(&id) {
            Some(stats) => {
                world_setup::spawn_enemy(world, stats, position);
            }
            None => warn!("wave references unknown enemy `{id}`, skipping spawn"),
        }
    }

    // Horde burst on each whole minute, guarded against re-triggering.
    let whole_secs = ctx.elapsed_secs.floor() as u64;
    let guard_clear = director
        .last_horde_secs
        .map_or(true, |last| ctx.elapsed_secs - last > HORDE_GUARD_SECS);
    if whole_secs > 0 && whole_secs % HORDE_PERIOD_SECS == 0 && guard_clear {
        spawn_horde(world, catalog, ctx.elapsed_secs, ctx.player_pos, events);
        director.last_horde_secs = Some(ctx.elapsed_secs);
    }

    // One boss per session.
    if !director.boss_spawned && ctx.elapsed_secs >= BOSS_SPAWN_SECS {
        director.boss_spawned = true;
        match catalog.first_boss() {
            Some(stats) => {
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let position = ctx.player_pos + Vec2::from_angle(angle) * SPAWN_RADIUS;
                world_setup::spawn_enemy(world, stats, position);
                info!("boss {} spawned at {:.0}s", stats.id, ctx.elapsed_secs);
                events.push(SimEvent::BossSpawned {
                    archetype: stats.id.clone(),
                });
            }
            None => warn!("catalog has no boss archetype, skipping boss spawn"),
        }
    }
}

/// Archetype used for a horde at this point in the session.
pub fn horde_archetype(elapsed_secs: f64) -> &'static str {
    if elapsed_secs > 120.0 {
        "wolf"
    } else if elapsed_secs > 60.0 {
        "goblin"
    } else {
        "bat"
    }
}

/// Place a ring of adversaries evenly around the actor. Not subject to the
/// population cap.
pub fn spawn_horde(
    world: &mut World,
    catalog: &Catalog,
    elapsed_secs: f64,
    player_pos: Vec2,
    events: &mut Vec<SimEvent>,
) {
    let id = horde_archetype(elapsed_secs);
    let Some(stats) = catalog.enemy(id) else {
        warn!("horde archetype `{id}` missing from catalog, skipping horde");
        return;
    };

    let step = std::f32::consts::TAU / HORDE_COUNT as f32;
    for i in 0..HORDE_COUNT {
        let position = player_pos + Vec2::from_angle(step * i as f32) * HORDE_RADIUS;
        world_setup::spawn_enemy(world, stats, position);
    }

    info!("horde of {HORDE_COUNT} {id} at {elapsed_secs:.0}s");
    events.push(SimEvent::HordeSpawned {
        archetype: id.to_string(),
        count: HORDE_COUNT as u32,
    });
}
