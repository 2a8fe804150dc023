#[cfg(test)]
mod tests {
    use glam::Vec2;

    use swarmfall_core::components::{Health, RangedAttack};

    use crate::combat::{heal, take_damage, try_ranged_attack};
    use crate::steering::{separation, steer, SteeringContext};

    fn context(position: Vec2, separates: bool, neighbors: &[Vec2]) -> SteeringContext<'_> {
        SteeringContext {
            position,
            target: Vec2::new(100.0, 0.0),
            speed: 2.0,
            separates,
            neighbors,
        }
    }

    #[test]
    fn test_pure_chase_moves_at_speed_toward_target() {
        let v = steer(&context(Vec2::ZERO, true, &[]));
        assert!((v.length() - 2.0).abs() < 1e-5);
        assert!(v.x > 0.0);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn test_at_target_with_no_neighbours_stands_still() {
        let ctx = SteeringContext {
            position: Vec2::new(100.0, 0.0),
            target: Vec2::new(100.0, 0.0),
            speed: 2.0,
            separates: true,
            neighbors: &[],
        };
        assert_eq!(steer(&ctx), Vec2::ZERO);
    }

    #[test]
    fn test_close_neighbour_pushes_away() {
        // Neighbour 10px ahead on the chase line: separation outweighs chase.
        let neighbors = [Vec2::new(10.0, 0.0)];
        let v = steer(&context(Vec2::ZERO, true, &neighbors));
        assert!(v.x < 0.0, "expected to be pushed back, got {v:?}");
        assert!((v.length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_stacking_archetype_ignores_neighbours() {
        let neighbors = [Vec2::new(10.0, 0.0)];
        let v = steer(&context(Vec2::ZERO, false, &neighbors));
        assert!(v.x > 0.0);
    }

    #[test]
    fn test_separation_ignores_self_and_far_neighbours() {
        let neighbors = [Vec2::ZERO, Vec2::new(40.0, 0.0), Vec2::new(0.0, 300.0)];
        assert_eq!(separation(Vec2::ZERO, &neighbors), Vec2::ZERO);
    }

    #[test]
    fn test_separation_is_averaged_and_inverse_distance() {
        // Two symmetric neighbours cancel.
        let neighbors = [Vec2::new(10.0, 0.0), Vec2::new(-10.0, 0.0)];
        assert!(separation(Vec2::ZERO, &neighbors).length() < 1e-6);

        // Closer neighbour pushes harder.
        let near = separation(Vec2::ZERO, &[Vec2::new(5.0, 0.0)]);
        let far = separation(Vec2::ZERO, &[Vec2::new(20.0, 0.0)]);
        assert!(near.length() > far.length());
        assert!((near.x + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_take_damage_reports_kill_once_then_idempotent() {
        let mut hp = Health {
            current: 25.0,
            max: 25.0,
        };
        assert!(!take_damage(&mut hp, 10.0));
        assert_eq!(hp.current, 15.0);
        assert!(take_damage(&mut hp, 40.0));
        assert_eq!(hp.current, 0.0);
        for _ in 0..3 {
            assert!(take_damage(&mut hp, 10.0));
            assert_eq!(hp.current, 0.0);
        }
    }

    #[test]
    fn test_take_damage_never_negative_under_any_sequence() {
        let amounts = [3.0, 0.0, 7.5, 100.0, 1.0, 0.25];
        let mut hp = Health {
            current: 12.0,
            max: 12.0,
        };
        let mut first_kill = None;
        for (i, amount) in amounts.iter().enumerate() {
            let dead = take_damage(&mut hp, *amount);
            assert!(hp.current >= 0.0);
            if dead && first_kill.is_none() {
                first_kill = Some(i);
            }
            if let Some(k) = first_kill {
                assert!(i < k || dead);
            }
        }
        assert_eq!(first_kill, Some(3));
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut hp = Health {
            current: 100.0,
            max: 100.0,
        };
        heal(&mut hp, 20.0);
        assert_eq!(hp.current, 100.0);

        hp.current = 50.0;
        heal(&mut hp, 20.0);
        assert_eq!(hp.current, 70.0);
    }

    fn ranged() -> RangedAttack {
        RangedAttack {
            range: 300.0,
            cooldown_ms: 2000,
            damage: 8.0,
            projectile_speed: 4.0,
            last_attack_ms: None,
        }
    }

    #[test]
    fn test_ranged_attack_in_range_fires_at_actor() {
        let mut attack = ranged();
        let shot = try_ranged_attack(&mut attack, Vec2::ZERO, Vec2::new(0.0, 200.0), 100);
        let v = shot.expect("in range and off cooldown");
        assert!((v - Vec2::new(0.0, 4.0)).length() < 1e-5);
        assert_eq!(attack.last_attack_ms, Some(100));
    }

    #[test]
    fn test_ranged_attack_out_of_range_holds_fire() {
        let mut attack = ranged();
        assert!(try_ranged_attack(&mut attack, Vec2::ZERO, Vec2::new(301.0, 0.0), 0).is_none());
        assert_eq!(attack.last_attack_ms, None);
    }

    #[test]
    fn test_ranged_attack_respects_cooldown() {
        let mut attack = ranged();
        let target = Vec2::new(100.0, 0.0);
        assert!(try_ranged_attack(&mut attack, Vec2::ZERO, target, 1000).is_some());
        assert!(try_ranged_attack(&mut attack, Vec2::ZERO, target, 2999).is_none());
        assert!(try_ranged_attack(&mut attack, Vec2::ZERO, target, 3000).is_some());
        assert_eq!(attack.last_attack_ms, Some(3000));
    }
}
