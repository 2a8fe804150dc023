//! Per-session aggregate statistics.
//!
//! Stored on `SimulationEngine`, not as ECS entities.

use serde::{Deserialize, Serialize};

/// Running totals tracked by the engine and reported in every snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub kills: u32,
    pub damage_dealt: f64,
    pub shots_fired: u32,
}
