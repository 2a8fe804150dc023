//! Simulation engine: the Entity Registry and the tick loop.
//!
//! `SimulationEngine` owns the hecs ECS world, processes host commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use swarmfall_core::catalog::Catalog;
use swarmfall_core::commands::PlayerCommand;
use swarmfall_core::components::{Enemy, Health, Player};
use swarmfall_core::constants::{CHEST_OPTION_COUNT, LEVEL_UP_OPTION_COUNT, VICTORY_SECS};
use swarmfall_core::enums::GamePhase;
use swarmfall_core::events::SimEvent;
use swarmfall_core::state::{GameStateSnapshot, TickOutcome};
use swarmfall_core::types::SimTime;
use swarmfall_core::upgrades::UpgradeOption;

use crate::session::SessionStats;
use crate::systems;
use crate::systems::difficulty::DifficultyDirector;
use crate::systems::spawn_director::{SpawnContext, SpawnDirector, WaveTable};
use crate::systems::weapons::{FireOrigin, WeaponController};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Adversary and weapon archetypes.
    pub catalog: Catalog,
    pub waves: WaveTable,
    /// Weapon ids granted at the start of every session.
    pub starting_weapons: Vec<String>,
    /// Survival time that ends the session in victory.
    pub victory_secs: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            catalog: Catalog::builtin(),
            waves: WaveTable::default_table(),
            starting_weapons: vec!["whip".to_string(), "wand".to_string()],
            victory_secs: VICTORY_SECS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    catalog: Catalog,
    starting_weapons: Vec<String>,
    victory_secs: f64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,

    stats: SessionStats,
    spawner: SpawnDirector,
    difficulty: DifficultyDirector,
    weapons: WeaponController,
    upgrade_options: Vec<UpgradeOption>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            catalog: config.catalog,
            starting_weapons: config.starting_weapons,
            victory_secs: config.victory_secs,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            stats: SessionStats::default(),
            spawner: SpawnDirector::new(config.waves),
            difficulty: DifficultyDirector::default(),
            weapons: WeaponController::default(),
            upgrade_options: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        let mut outcome = TickOutcome::default();
        if self.phase == GamePhase::Active {
            outcome = self.run_systems();
            self.time.advance();
            self.resolve_outcome(outcome);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.stats,
            &self.difficulty,
            outcome,
            &self.upgrade_options,
            events,
        )
    }

    /// Apply an upgrade option directly, outside the level-up flow.
    pub fn apply_upgrade(&mut self, option: &UpgradeOption) {
        systems::upgrades::apply(
            &mut self.world,
            &mut self.weapons,
            &self.catalog,
            option,
            &mut self.events,
        );
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn difficulty(&self) -> &DifficultyDirector {
        &self.difficulty
    }

    pub fn weapons(&self) -> &WeaponController {
        &self.weapons
    }

    /// Mutable world access for tests that stage specific layouts.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn spawner(&self) -> &SpawnDirector {
        &self.spawner
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if self.phase == GamePhase::MainMenu {
                    self.start_session();
                }
            }
            PlayerCommand::Restart => {
                if self.phase != GamePhase::MainMenu {
                    self.start_session();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetMoveIntent { x, y } => {
                systems::player::set_intent(&mut self.world, x, y);
            }
            PlayerCommand::ChooseUpgrade { index } => {
                if self.phase != GamePhase::LevelUp {
                    return;
                }
                let Some(option) = self.upgrade_options.get(index).cloned() else {
                    warn!(
                        "upgrade index {index} out of range ({} offered)",
                        self.upgrade_options.len()
                    );
                    return;
                };
                self.apply_upgrade(&option);
                self.upgrade_options.clear();
                self.phase = GamePhase::Active;
            }
            PlayerCommand::DebugSpawnHorde => {
                if let Some((_, position, _)) = systems::player::locate(&self.world) {
                    systems::spawn_director::spawn_horde(
                        &mut self.world,
                        &self.catalog,
                        self.time.elapsed_secs,
                        position,
                        &mut self.events,
                    );
                }
            }
            PlayerCommand::DebugKillAll => {
                // No loot and no kill credit. Locks on these adversaries
                // fail their liveness check on release.
                self.despawn_buffer.clear();
                self.despawn_buffer
                    .extend(self.world.query::<&Enemy>().iter().map(|(e, _)| e));
                for entity in self.despawn_buffer.drain(..) {
                    let _ = self.world.despawn(entity);
                }
            }
            PlayerCommand::DebugToggleInvincible => {
                for (_entity, player) in self.world.query_mut::<&mut Player>() {
                    player.invincible = !player.invincible;
                    info!("invincible: {}", player.invincible);
                }
            }
        }
    }

    /// Full reset: every collection and timer is rebuilt before the next
    /// snapshot, so presentation never sees a half-initialized session.
    fn start_session(&mut self) {
        world_setup::reset_world(&mut self.world);
        self.time = SimTime::default();
        self.stats = SessionStats::default();
        self.spawner.reset();
        self.difficulty = DifficultyDirector::default();
        self.weapons.reset();
        for weapon_id in &self.starting_weapons {
            self.weapons.acquire(&self.catalog, weapon_id);
        }
        self.upgrade_options.clear();
        self.events.clear();
        self.phase = GamePhase::Active;
        info!("session started");
    }

    /// Run all systems in order. Returns the collision outcomes.
    fn run_systems(&mut self) -> TickOutcome {
        let now_ms = self.time.now_ms();
        let tick = self.time.tick;
        let Some((_, player_pos, facing)) = systems::player::locate(&self.world) else {
            return TickOutcome::default();
        };

        // 1. Difficulty Director
        let hp_fraction = self.player_hp_fraction();
        systems::difficulty::run(
            &mut self.difficulty,
            self.stats.kills,
            hp_fraction,
            now_ms,
            &mut self.events,
        );
        // 2. Spawn Director
        systems::spawn_director::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &self.catalog,
            &SpawnContext {
                elapsed_secs: self.time.elapsed_secs,
                spawn_rate_multiplier: self.difficulty.spawn_rate_multiplier(),
                population_cap: self.difficulty.population_cap(),
                player_pos,
            },
            &mut self.events,
        );
        // 3. Weapon Controller
        systems::weapons::run(
            &mut self.world,
            &mut self.rng,
            &mut self.weapons,
            &mut self.stats,
            &FireOrigin {
                position: player_pos,
                facing,
                now_ms,
            },
        );
        // 4. Actor movement
        systems::player::run(&mut self.world);
        let Some((_, player_pos, facing)) = systems::player::locate(&self.world) else {
            return TickOutcome::default();
        };
        // 5. Adversary steering and ranged attacks
        systems::adversaries::run(&mut self.world, player_pos, now_ms);
        // 6. Projectiles, hazards, pickups, particles
        systems::projectiles::run(
            &mut self.world,
            &mut self.despawn_buffer,
            player_pos,
            facing,
            now_ms,
        );
        systems::pickups::run(&mut self.world, player_pos);
        systems::particles::run(&mut self.world, &mut self.despawn_buffer, tick);
        // 7. Collision resolution
        systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &mut self.stats,
            &mut self.events,
            now_ms,
            tick,
        )
    }

    /// Phase transitions driven by this tick's outcomes.
    fn resolve_outcome(&mut self, outcome: TickOutcome) {
        if outcome.player_died {
            info!(
                "actor died at {:.1}s with {} kills",
                self.time.elapsed_secs, self.stats.kills
            );
            self.phase = GamePhase::GameOver;
            return;
        }
        if self.time.elapsed_secs >= self.victory_secs {
            info!("victory after {:.1}s", self.time.elapsed_secs);
            self.phase = GamePhase::Victory;
            return;
        }

        let option_count = if outcome.chest_collected {
            CHEST_OPTION_COUNT
        } else if outcome.leveled_up {
            LEVEL_UP_OPTION_COUNT
        } else {
            return;
        };
        self.upgrade_options = systems::upgrades::generate_options(
            &mut self.rng,
            &self.catalog,
            &self.weapons,
            option_count,
        );
        self.phase = GamePhase::LevelUp;
    }

    fn player_hp_fraction(&self) -> f32 {
        self.world
            .query::<(&Player, &Health)>()
            .iter()
            .next()
            .map(|(_, (_, health))| {
                if health.max > 0.0 {
                    health.current / health.max
                } else {
                    0.0
                }
            })
            .unwrap_or(1.0)
    }
}
