//! Upgrade options offered on level-up and chest collection.

use serde::{Deserialize, Serialize};

use crate::enums::{ModifierStat, PlayerStat, WeaponStat};

/// What an upgrade does when applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UpgradeEffect {
    /// Raise an actor stat. `MaxHp` also heals by the amount gained.
    Stat { stat: PlayerStat, amount: f32 },
    /// Restore hit points, clamped at the maximum.
    Heal { amount: f32 },
    /// Mutate every weapon instance owned at application time.
    WeaponStat { stat: WeaponStat, amount: f32 },
    /// Adjust a global weapon modifier.
    Modifier { stat: ModifierStat, amount: f32 },
    /// Acquire a fresh instance of a weapon archetype.
    NewWeapon { weapon_id: String },
}

/// A single selectable option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeOption {
    pub name: String,
    pub description: String,
    pub effect: UpgradeEffect,
}

impl UpgradeOption {
    pub fn new(name: &str, description: &str, effect: UpgradeEffect) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            effect,
        }
    }
}

/// The non-weapon pool that fills the remaining option slots.
pub fn standard_pool() -> Vec<UpgradeOption> {
    vec![
        UpgradeOption::new(
            "Speed Up",
            "Move 10% faster",
            UpgradeEffect::Stat {
                stat: PlayerStat::Speed,
                amount: 0.5,
            },
        ),
        UpgradeOption::new(
            "Max HP Up",
            "Increase max HP by 20",
            UpgradeEffect::Stat {
                stat: PlayerStat::MaxHp,
                amount: 20.0,
            },
        ),
        UpgradeOption::new("Heal", "Recover 50 HP", UpgradeEffect::Heal { amount: 50.0 }),
        UpgradeOption::new(
            "Damage Up",
            "All weapons deal +2 damage",
            UpgradeEffect::WeaponStat {
                stat: WeaponStat::Damage,
                amount: 2.0,
            },
        ),
        UpgradeOption::new(
            "Fire Rate Up",
            "Weapons fire 10% faster",
            UpgradeEffect::WeaponStat {
                stat: WeaponStat::Cooldown,
                amount: 0.9,
            },
        ),
        UpgradeOption::new(
            "Duplicator",
            "Weapons fire +1 projectile",
            UpgradeEffect::Modifier {
                stat: ModifierStat::Amount,
                amount: 1.0,
            },
        ),
        UpgradeOption::new(
            "Area Up",
            "Increase area of effect by 20%",
            UpgradeEffect::Modifier {
                stat: ModifierStat::Area,
                amount: 0.2,
            },
        ),
        UpgradeOption::new(
            "Velocity Up",
            "Projectiles travel 20% faster",
            UpgradeEffect::Modifier {
                stat: ModifierStat::Speed,
                amount: 0.2,
            },
        ),
        UpgradeOption::new(
            "Duration Up",
            "Projectiles last 20% longer",
            UpgradeEffect::Modifier {
                stat: ModifierStat::Duration,
                amount: 0.2,
            },
        ),
        UpgradeOption::new(
            "Haste",
            "All cooldowns 10% shorter",
            UpgradeEffect::Modifier {
                stat: ModifierStat::Cooldown,
                amount: -0.1,
            },
        ),
    ]
}
