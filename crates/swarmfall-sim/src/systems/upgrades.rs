//! Upgrade option generation and application.

use hecs::World;
use log::info;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use swarmfall_ai::combat;
use swarmfall_core::catalog::Catalog;
use swarmfall_core::components::{Health, Player};
use swarmfall_core::enums::{PlayerStat, WeaponStat};
use swarmfall_core::events::SimEvent;
use swarmfall_core::upgrades::{standard_pool, UpgradeEffect, UpgradeOption};

use crate::systems::weapons::WeaponController;

/// Build `count` options: every unowned weapon first, remaining slots drawn
/// uniformly from the standard pool, then shuffled and truncated.
pub fn generate_options(
    rng: &mut ChaCha8Rng,
    catalog: &Catalog,
    controller: &WeaponController,
    count: usize,
) -> Vec<UpgradeOption> {
    let mut options: Vec<UpgradeOption> = catalog
        .weapons
        .values()
        .filter(|w| !controller.owns(&w.id))
        .map(|w| {
            UpgradeOption::new(
                &format!("New Weapon: {}", w.name),
                &format!("Acquire the {}", w.name),
                UpgradeEffect::NewWeapon {
                    weapon_id: w.id.clone(),
                },
            )
        })
        .collect();

    let pool = standard_pool();
    while options.len() < count {
        match pool.choose(rng) {
            Some(option) => options.push(option.clone()),
            None => break,
        }
    }

    options.shuffle(rng);
    options.truncate(count);
    options
}

/// Apply one option to the actor, the owned weapons, or the modifiers.
pub fn apply(
    world: &mut World,
    controller: &mut WeaponController,
    catalog: &Catalog,
    option: &UpgradeOption,
    events: &mut Vec<SimEvent>,
) {
    match &option.effect {
        UpgradeEffect::Stat { stat, amount } => {
            for (_entity, (player, health)) in world.query_mut::<(&mut Player, &mut Health)>() {
                match stat {
                    PlayerStat::Speed => player.speed += amount,
                    PlayerStat::MaxHp => {
                        health.max += amount;
                        combat::heal(health, *amount);
                    }
                }
            }
        }
        UpgradeEffect::Heal { amount } => {
            for (_entity, (_player, health)) in world.query_mut::<(&Player, &mut Health)>() {
                combat::heal(health, *amount);
            }
        }
        UpgradeEffect::WeaponStat { stat, amount } => {
            for instance in controller.instances.iter_mut() {
                match stat {
                    WeaponStat::Damage => instance.stats.damage += amount,
                    WeaponStat::Cooldown => {
                        instance.stats.cooldown_ms =
                            (instance.stats.cooldown_ms as f32 * amount) as u64;
                    }
                }
                instance.level += 1;
            }
        }
        UpgradeEffect::Modifier { stat, amount } => {
            controller.modifiers.apply(*stat, *amount);
        }
        UpgradeEffect::NewWeapon { weapon_id } => {
            if controller.acquire(catalog, weapon_id) {
                events.push(SimEvent::WeaponAcquired {
                    weapon_id: weapon_id.clone(),
                });
            }
        }
    }

    info!("upgrade applied: {}", option.name);
    events.push(SimEvent::UpgradeApplied {
        name: option.name.clone(),
    });
}
