//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! Long-lived director and controller state is owned by the engine and
//! passed in by reference.

pub mod adversaries;
pub mod collision;
pub mod difficulty;
pub mod particles;
pub mod pickups;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod spawn_director;
pub mod upgrades;
pub mod weapons;
