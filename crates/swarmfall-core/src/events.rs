//! Discrete events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// An adversary died. Fired exactly once per adversary.
    EnemyKilled {
        archetype: String,
        position: Position,
        is_boss: bool,
    },
    /// The actor lost hit points.
    PlayerHit { damage: f32, remaining: f32 },
    /// The actor reached a new level.
    LevelUp { level: u32 },
    /// The actor opened a reward chest.
    ChestCollected,
    /// A horde burst was spawned around the actor.
    HordeSpawned { archetype: String, count: u32 },
    /// The session boss entered the arena.
    BossSpawned { archetype: String },
    /// A new weapon instance was acquired.
    WeaponAcquired { weapon_id: String },
    /// An upgrade option was applied.
    UpgradeApplied { name: String },
    /// The difficulty director adjusted its multiplier.
    DifficultyChanged { multiplier: f32 },
}
