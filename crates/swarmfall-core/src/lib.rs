//! Core types and definitions for the swarmfall combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, archetype catalogs, commands, upgrade options, snapshots,
//! events, and constants. It has no dependency on an ECS runtime or any
//! presentation layer.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
pub mod upgrades;

#[cfg(test)]
mod tests;
