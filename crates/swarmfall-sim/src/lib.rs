//! Simulation engine for swarmfall.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the host.

pub mod engine;
pub mod session;
pub mod spatial;
pub mod systems;
pub mod targeting;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use swarmfall_core as core;
