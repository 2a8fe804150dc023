//! Adversary behaviour for swarmfall.
//!
//! Chase and separation steering, the ranged-attack decision, and the
//! damage contract shared by everything with hit points. Pure functions on
//! plain data; the simulation crate owns the ECS and calls in here.

pub mod combat;
pub mod steering;

pub use swarmfall_core as core;

#[cfg(test)]
mod tests;
