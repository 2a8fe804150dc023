//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Waiting for the host to pick one of the offered upgrades.
    LevelUp,
    GameOver,
    Victory,
}

/// Drawable category of an entity, used by presentation to pick a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Boss,
    Projectile,
    MeleeArc,
    LobbedHazard,
    Aura,
    HostileShot,
    Gem,
    Heart,
    Magnet,
    Chest,
    Particle,
}

/// Kind of a collectible lying in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Experience gem worth `value` experience.
    Gem { value: u32 },
    /// Restores hit points, clamped at the maximum.
    Heart { heal: f32 },
    /// Pulls every gem in the world toward the actor.
    Magnet,
    /// Grants a large upgrade choice.
    Chest,
}

/// Weapon family, the closed set of firing behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponFamily {
    /// Single-target projectile aimed at the nearest uncommitted adversary.
    Homing,
    /// Short-lived hitbox in front of the actor.
    Melee,
    /// Gravity-affected hazard thrown upward.
    Lobbed,
    /// Persistent damage field around the actor.
    Aura,
}

/// Actor stat targeted by a `Stat` upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStat {
    Speed,
    MaxHp,
}

/// Per-instance weapon stat targeted by a `WeaponStat` upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponStat {
    /// Additive damage bonus.
    Damage,
    /// Multiplicative cooldown factor.
    Cooldown,
}

/// Global weapon modifier targeted by a `Modifier` upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierStat {
    /// Extra projectiles per shot.
    Amount,
    /// Hitbox size scale.
    Area,
    /// Projectile speed scale.
    Speed,
    /// Projectile lifetime scale.
    Duration,
    /// Cooldown scale (lower fires faster).
    Cooldown,
}
