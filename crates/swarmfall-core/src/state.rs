//! Game state snapshot: the complete visible state handed to the host each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};
use crate::upgrades::UpgradeOption;

/// Complete game state returned to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    /// Every other drawable entity, in a stable order.
    pub entities: Vec<EntityView>,
    pub stats: StatsView,
    pub difficulty: DifficultyView,
    pub outcome: TickOutcome,
    /// Pending choice while the phase is `LevelUp`, empty otherwise.
    pub upgrade_options: Vec<UpgradeOption>,
    pub events: Vec<SimEvent>,
}

/// Actor status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub hp: f32,
    pub max_hp: f32,
    pub xp: u32,
    pub next_level_xp: u32,
    pub level: u32,
    pub facing: Vec2,
    pub invincible: bool,
    /// Inside the invulnerability window (presentation may blink the sprite).
    pub recently_hit: bool,
}

/// A drawable entity: position plus visual hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    /// Stable for the entity's lifetime.
    pub id: u64,
    pub kind: EntityKind,
    pub position: Position,
    /// Box size (pixels).
    pub size: Vec2,
    pub color: [u8; 3],
    pub flip_x: bool,
}

/// Aggregate session statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsView {
    pub elapsed_secs: f64,
    pub kills: u32,
    pub damage_dealt: f64,
    pub shots_fired: u32,
    pub level: u32,
    pub enemies_alive: usize,
}

/// Adaptive difficulty readout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DifficultyView {
    pub multiplier: f32,
    pub spawn_rate_multiplier: f32,
    pub cap_multiplier: f32,
    pub population_cap: usize,
}

/// Boolean outcomes of the collision pass for this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub player_died: bool,
    pub leveled_up: bool,
    pub chest_collected: bool,
}
