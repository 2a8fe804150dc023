#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, CatalogError, WeaponKind};
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{boxes_overlap, SimTime};
    use crate::upgrades::{standard_pool, UpgradeEffect};
    use glam::Vec2;

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::MainMenu,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::LevelUp,
            GamePhase::GameOver,
            GamePhase::Victory,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_pickup_kind_serde() {
        let variants = vec![
            PickupKind::Gem { value: 3 },
            PickupKind::Heart { heal: 30.0 },
            PickupKind::Magnet,
            PickupKind::Chest,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: PickupKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_tagged_json() {
        let json = r#"{"type":"SetMoveIntent","x":1.0,"y":0.0}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert_eq!(cmd, PlayerCommand::SetMoveIntent { x: 1.0, y: 0.0 });

        let json = r#"{"type":"ChooseUpgrade","index":2}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert_eq!(cmd, PlayerCommand::ChooseUpgrade { index: 2 });

        let json = serde_json::to_string(&PlayerCommand::DebugKillAll).unwrap();
        assert!(json.contains("\"type\":\"DebugKillAll\""));
    }

    #[test]
    fn test_event_tagged_json() {
        let event = SimEvent::BossSpawned {
            archetype: "reaper".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"BossSpawned\""));
        assert!(json.contains("reaper"));
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert!(back.entities.is_empty());
        assert!(!back.outcome.player_died);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..60 {
            t.advance();
        }
        assert_eq!(t.tick, 60);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
        assert_eq!(t.now_ms(), 1000);
    }

    #[test]
    fn test_boxes_overlap_is_strict() {
        let half = Vec2::splat(16.0);
        assert!(boxes_overlap(Vec2::ZERO, half, Vec2::new(31.0, 0.0), half));
        // Touching edges do not count.
        assert!(!boxes_overlap(Vec2::ZERO, half, Vec2::new(32.0, 0.0), half));
        assert!(!boxes_overlap(Vec2::ZERO, half, Vec2::new(0.0, 40.0), half));
    }

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.enemies.len(), 10);
        assert_eq!(catalog.weapons.len(), 4);
        assert_eq!(catalog.first_boss().map(|b| b.id.as_str()), Some("reaper"));
        assert!(catalog.enemy("bat").is_some_and(|b| b.stacks));
        assert!(catalog.enemy("mage").is_some_and(|m| m.ranged.is_some()));
        assert_eq!(
            catalog.weapon("garlic").map(|w| w.family()),
            Some(WeaponFamily::Aura)
        );
        assert!(catalog.weapon("garlic").is_some_and(|w| w.is_persistent()));
        assert!(!catalog.weapon("wand").is_some_and(|w| w.is_persistent()));
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"{
            "enemies": [
                { "id": "imp", "name": "Imp", "hp": 8, "speed": 2, "damage": 4, "xp_value": 1 },
                { "id": "lich", "name": "Lich", "hp": 900, "speed": 1, "damage": 25,
                  "xp_value": 50, "is_boss": true,
                  "ranged": { "range": 400, "cooldown_ms": 1200, "damage": 10, "projectile_speed": 5 } }
            ],
            "weapons": [
                { "id": "bolt", "name": "Bolt", "damage": 7, "cooldown_ms": 800,
                  "duration_ms": 1500, "type": "homing", "speed": 8, "size": 6 },
                { "id": "halo", "name": "Halo", "damage": 3, "type": "aura",
                  "radius": 80, "tick_interval_ms": 250 }
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let imp = catalog.enemy("imp").unwrap();
        assert_eq!(imp.size, 32.0);
        assert!(!imp.is_boss);
        assert_eq!(catalog.first_boss().map(|b| b.id.as_str()), Some("lich"));
        match &catalog.weapon("bolt").unwrap().kind {
            WeaponKind::Homing { penetration, .. } => assert_eq!(*penetration, 1),
            other => panic!("expected homing, got {other:?}"),
        }
        assert_eq!(catalog.weapon("halo").unwrap().family(), WeaponFamily::Aura);
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let json = r#"{ "enemies": [
            { "id": "imp", "name": "Imp", "hp": 8, "speed": 2, "damage": 4, "xp_value": 1 },
            { "id": "imp", "name": "Imp 2", "hp": 9, "speed": 2, "damage": 4, "xp_value": 1 }
        ] }"#;
        match Catalog::from_json(json) {
            Err(CatalogError::DuplicateId { table, id }) => {
                assert_eq!(table, "enemy");
                assert_eq!(id, "imp");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_rejects_invalid_stats() {
        let json = r#"{ "enemies": [
            { "id": "ghoul", "name": "Ghoul", "hp": 0, "speed": 2, "damage": 4, "xp_value": 1 }
        ] }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::InvalidStat { field: "hp", .. })
        ));

        let json = r#"{ "weapons": [
            { "id": "dud", "name": "Dud", "damage": 5, "cooldown_ms": 0,
              "duration_ms": 100, "type": "melee", "width": 10, "height": 10, "reach": 5 }
        ] }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::InvalidStat {
                field: "cooldown_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_catalog_parse_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("catalog is not valid JSON"));
    }

    #[test]
    fn test_standard_pool_has_every_kind() {
        let pool = standard_pool();
        assert!(pool
            .iter()
            .any(|o| matches!(o.effect, UpgradeEffect::Stat { .. })));
        assert!(pool
            .iter()
            .any(|o| matches!(o.effect, UpgradeEffect::Heal { .. })));
        assert!(pool
            .iter()
            .any(|o| matches!(o.effect, UpgradeEffect::WeaponStat { .. })));
        assert!(pool
            .iter()
            .any(|o| matches!(o.effect, UpgradeEffect::Modifier { .. })));
        // New weapons are generated from the catalog, never from the static pool.
        assert!(!pool
            .iter()
            .any(|o| matches!(o.effect, UpgradeEffect::NewWeapon { .. })));
    }
}
