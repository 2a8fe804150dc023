//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All host-issued actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Leave the main menu and begin a fresh session.
    StartSession,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Discard the session and start again from scratch.
    Restart,

    // --- Actor input ---
    /// Movement intent for the actor. Normalized inside the core;
    /// a zero vector stops the actor.
    SetMoveIntent { x: f32, y: f32 },
    /// Pick one of the offered upgrade options by index.
    ChooseUpgrade { index: usize },

    // --- Debug ---
    /// Trigger a horde burst immediately.
    DebugSpawnHorde,
    /// Remove every live adversary without awarding loot.
    DebugKillAll,
    /// Toggle actor invincibility.
    DebugToggleInvincible,
}
