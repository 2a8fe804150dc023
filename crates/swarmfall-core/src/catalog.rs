//! Archetype stat tables for adversaries and weapons.
//!
//! The catalog is handed to the simulation as plain data. Hosts either build
//! it from the built-in content (`Catalog::builtin`) or parse a JSON document
//! of the shape `{ "enemies": [...], "weapons": [...] }` with
//! `Catalog::from_json`. Lookups are keyed by archetype id; iteration order is
//! the id order, so "first boss" and option generation are deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_ENEMY_SIZE;
use crate::enums::WeaponFamily;

/// Errors raised while parsing or validating a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {table} archetype id `{id}`")]
    DuplicateId { table: &'static str, id: String },
    #[error("archetype `{id}` has invalid {field}: {reason}")]
    InvalidStat {
        id: String,
        field: &'static str,
        reason: &'static str,
    },
}

/// Ranged attack parameters for adversaries that shoot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangedStats {
    /// Maximum distance to the actor at which a shot is taken.
    pub range: f32,
    /// Minimum time between shots (ms).
    pub cooldown_ms: u64,
    /// Damage dealt by each shot.
    pub damage: f32,
    /// Shot speed (pixels per tick).
    pub projectile_speed: f32,
}

/// Static record for one adversary archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub id: String,
    pub name: String,
    pub hp: f32,
    /// Pixels per tick.
    pub speed: f32,
    /// Contact damage dealt to the actor.
    pub damage: f32,
    /// Experience dropped on death.
    pub xp_value: u32,
    /// Collision box edge (pixels).
    #[serde(default = "default_enemy_size")]
    pub size: f32,
    #[serde(default = "default_enemy_color")]
    pub color: [u8; 3],
    #[serde(default)]
    pub is_boss: bool,
    /// Stacking archetypes skip the separation term entirely.
    #[serde(default)]
    pub stacks: bool,
    #[serde(default)]
    pub ranged: Option<RangedStats>,
}

/// Family-specific weapon parameters, tagged by `"type"` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WeaponKind {
    Homing {
        /// Pixels per tick.
        speed: f32,
        /// Box edge of the projectile.
        size: f32,
        #[serde(default = "default_penetration")]
        penetration: u32,
    },
    Melee {
        width: f32,
        height: f32,
        /// Offset of the arc centre from the actor along the facing.
        reach: f32,
    },
    Lobbed {
        /// Initial upward speed.
        speed: f32,
        /// Downward acceleration per tick.
        gravity: f32,
        /// Maximum horizontal speed either side.
        spread: f32,
        size: f32,
    },
    Aura {
        radius: f32,
        /// Damage is applied to everything inside once per interval.
        tick_interval_ms: u64,
    },
}

/// Static record for one weapon archetype.
///
/// Weapon instances take a value copy of this record on acquisition, so
/// upgrades never write back into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub id: String,
    pub name: String,
    pub damage: f32,
    #[serde(default)]
    pub cooldown_ms: u64,
    /// Lifetime of each emitted projectile or hitbox (ms).
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default = "default_weapon_color")]
    pub color: [u8; 3],
    #[serde(flatten)]
    pub kind: WeaponKind,
}

impl WeaponStats {
    pub fn family(&self) -> WeaponFamily {
        match self.kind {
            WeaponKind::Homing { .. } => WeaponFamily::Homing,
            WeaponKind::Melee { .. } => WeaponFamily::Melee,
            WeaponKind::Lobbed { .. } => WeaponFamily::Lobbed,
            WeaponKind::Aura { .. } => WeaponFamily::Aura,
        }
    }

    /// Persistent weapons exist once per acquisition and never fire on a cooldown.
    pub fn is_persistent(&self) -> bool {
        matches!(self.kind, WeaponKind::Aura { .. })
    }
}

/// On-disk / wire shape of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub enemies: Vec<EnemyStats>,
    #[serde(default)]
    pub weapons: Vec<WeaponStats>,
}

/// Validated archetype tables keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub enemies: BTreeMap<String, EnemyStats>,
    pub weapons: BTreeMap<String, WeaponStats>,
}

impl Catalog {
    /// Parse and validate a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Validate a document and index it by id.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::default();

        for enemy in document.enemies {
            validate_enemy(&enemy)?;
            if catalog.enemies.contains_key(&enemy.id) {
                return Err(CatalogError::DuplicateId {
                    table: "enemy",
                    id: enemy.id,
                });
            }
            catalog.enemies.insert(enemy.id.clone(), enemy);
        }

        for weapon in document.weapons {
            validate_weapon(&weapon)?;
            if catalog.weapons.contains_key(&weapon.id) {
                return Err(CatalogError::DuplicateId {
                    table: "weapon",
                    id: weapon.id,
                });
            }
            catalog.weapons.insert(weapon.id.clone(), weapon);
        }

        Ok(catalog)
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyStats> {
        self.enemies.get(id)
    }

    pub fn weapon(&self, id: &str) -> Option<&WeaponStats> {
        self.weapons.get(id)
    }

    /// First boss archetype in id order, if the catalog has any.
    pub fn first_boss(&self) -> Option<&EnemyStats> {
        self.enemies.values().find(|e| e.is_boss)
    }

    /// The built-in content set.
    pub fn builtin() -> Self {
        let document = CatalogDocument {
            enemies: builtin_enemies(),
            weapons: builtin_weapons(),
        };
        // Built-in ids are unique and all stats positive.
        Self::from_document(document).unwrap_or_default()
    }
}

fn validate_enemy(enemy: &EnemyStats) -> Result<(), CatalogError> {
    let invalid = |field: &'static str, reason: &'static str| CatalogError::InvalidStat {
        id: enemy.id.clone(),
        field,
        reason,
    };
    if enemy.hp <= 0.0 {
        return Err(invalid("hp", "must be positive"));
    }
    if enemy.speed < 0.0 {
        return Err(invalid("speed", "must not be negative"));
    }
    if enemy.size <= 0.0 {
        return Err(invalid("size", "must be positive"));
    }
    if let Some(ranged) = &enemy.ranged {
        if ranged.range <= 0.0 {
            return Err(invalid("ranged.range", "must be positive"));
        }
        if ranged.projectile_speed <= 0.0 {
            return Err(invalid("ranged.projectile_speed", "must be positive"));
        }
    }
    Ok(())
}

fn validate_weapon(weapon: &WeaponStats) -> Result<(), CatalogError> {
    let invalid = |field: &'static str, reason: &'static str| CatalogError::InvalidStat {
        id: weapon.id.clone(),
        field,
        reason,
    };
    if weapon.damage < 0.0 {
        return Err(invalid("damage", "must not be negative"));
    }
    match weapon.kind {
        WeaponKind::Aura {
            radius,
            tick_interval_ms,
        } => {
            if radius <= 0.0 {
                return Err(invalid("radius", "must be positive"));
            }
            if tick_interval_ms == 0 {
                return Err(invalid("tick_interval_ms", "must be positive"));
            }
        }
        _ => {
            if weapon.cooldown_ms == 0 {
                return Err(invalid("cooldown_ms", "must be positive"));
            }
            if weapon.duration_ms == 0 {
                return Err(invalid("duration_ms", "must be positive"));
            }
        }
    }
    Ok(())
}

fn default_enemy_size() -> f32 {
    DEFAULT_ENEMY_SIZE
}

fn default_enemy_color() -> [u8; 3] {
    [255, 0, 0]
}

fn default_weapon_color() -> [u8; 3] {
    [255, 255, 0]
}

fn default_penetration() -> u32 {
    1
}

#[allow(clippy::too_many_arguments)]
fn enemy(
    id: &str,
    name: &str,
    hp: f32,
    speed: f32,
    damage: f32,
    xp_value: u32,
    size: f32,
    color: [u8; 3],
) -> EnemyStats {
    EnemyStats {
        id: id.to_string(),
        name: name.to_string(),
        hp,
        speed,
        damage,
        xp_value,
        size,
        color,
        is_boss: false,
        stacks: false,
        ranged: None,
    }
}

fn builtin_enemies() -> Vec<EnemyStats> {
    vec![
        enemy("goblin", "Goblin", 10.0, 1.5, 5.0, 1, 28.0, [0, 160, 0]),
        EnemyStats {
            stacks: true,
            ..enemy("bat", "Bat", 5.0, 2.2, 3.0, 1, 20.0, [120, 60, 160])
        },
        enemy("slime", "Slime", 20.0, 0.8, 6.0, 2, 30.0, [60, 200, 120]),
        enemy("ghost", "Ghost", 15.0, 1.8, 7.0, 2, 28.0, [200, 200, 230]),
        enemy("orc", "Orc", 40.0, 1.2, 10.0, 4, 36.0, [110, 130, 40]),
        enemy("wolf", "Wolf", 25.0, 2.5, 8.0, 3, 30.0, [130, 130, 130]),
        EnemyStats {
            ranged: Some(RangedStats {
                range: 300.0,
                cooldown_ms: 2000,
                damage: 8.0,
                projectile_speed: 4.0,
            }),
            ..enemy("mage", "Mage", 20.0, 1.0, 5.0, 5, 28.0, [80, 80, 220])
        },
        EnemyStats {
            ranged: Some(RangedStats {
                range: 350.0,
                cooldown_ms: 1500,
                damage: 12.0,
                projectile_speed: 4.5,
            }),
            ..enemy("necromancer", "Necromancer", 50.0, 0.9, 8.0, 8, 32.0, [60, 0, 90])
        },
        enemy("tank_orc", "Tank Orc", 150.0, 0.7, 20.0, 15, 48.0, [80, 90, 30]),
        EnemyStats {
            is_boss: true,
            ..enemy("reaper", "The Reaper", 2000.0, 1.4, 30.0, 100, 64.0, [20, 20, 20])
        },
    ]
}

fn builtin_weapons() -> Vec<WeaponStats> {
    vec![
        WeaponStats {
            id: "wand".to_string(),
            name: "Magic Wand".to_string(),
            damage: 10.0,
            cooldown_ms: 1000,
            duration_ms: 2000,
            color: [255, 255, 0],
            kind: WeaponKind::Homing {
                speed: 7.0,
                size: 8.0,
                penetration: 1,
            },
        },
        WeaponStats {
            id: "whip".to_string(),
            name: "Whip".to_string(),
            damage: 15.0,
            cooldown_ms: 1500,
            duration_ms: 200,
            color: [255, 80, 80],
            kind: WeaponKind::Melee {
                width: 100.0,
                height: 40.0,
                reach: 50.0,
            },
        },
        WeaponStats {
            id: "axe".to_string(),
            name: "Axe".to_string(),
            damage: 25.0,
            cooldown_ms: 2500,
            duration_ms: 2500,
            color: [200, 200, 200],
            kind: WeaponKind::Lobbed {
                speed: 9.0,
                gravity: 0.25,
                spread: 2.5,
                size: 14.0,
            },
        },
        WeaponStats {
            id: "garlic".to_string(),
            name: "Garlic".to_string(),
            damage: 4.0,
            cooldown_ms: 0,
            duration_ms: 0,
            color: [240, 240, 200],
            kind: WeaponKind::Aura {
                radius: 60.0,
                tick_interval_ms: 500,
            },
        },
    ]
}
