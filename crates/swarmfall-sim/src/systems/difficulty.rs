//! Adaptive difficulty: a slow feedback loop on the kill rate.

use log::debug;
use serde::{Deserialize, Serialize};

use swarmfall_core::constants::*;
use swarmfall_core::events::SimEvent;

/// Owns the difficulty multiplier and the bookkeeping for its periodic check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyDirector {
    multiplier: f32,
    last_check_ms: u64,
    last_kills: u32,
}

impl Default for DifficultyDirector {
    fn default() -> Self {
        Self {
            multiplier: DIFFICULTY_MIN,
            last_check_ms: 0,
            last_kills: 0,
        }
    }
}

impl DifficultyDirector {
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Divides the active wave's spawn interval.
    pub fn spawn_rate_multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Scales the population cap, at half the rate of the spawn multiplier.
    pub fn cap_multiplier(&self) -> f32 {
        1.0 + (self.multiplier - 1.0) * DIFFICULTY_CAP_SCALE
    }

    /// Live adversary ceiling for ordinary wave spawns.
    pub fn population_cap(&self) -> usize {
        (BASE_POPULATION_CAP as f32 * self.cap_multiplier()) as usize
    }

    /// Run the check if a full interval has passed since the last one.
    /// Returns the new multiplier when a check happened.
    pub fn update(&mut self, now_ms: u64, total_kills: u32, hp_fraction: f32) -> Option<f32> {
        if now_ms.saturating_sub(self.last_check_ms) < DIFFICULTY_CHECK_MS {
            return None;
        }
        self.last_check_ms = now_ms;

        let kills = total_kills.saturating_sub(self.last_kills);
        self.last_kills = total_kills;
        let kps = kills as f32 / (DIFFICULTY_CHECK_MS as f32 / 1000.0);

        Some(self.adjust(kps, hp_fraction))
    }

    /// One adjustment step: drift upward, bump when the actor is cruising,
    /// relieve only when the kill rate and health both say it is struggling.
    pub fn adjust(&mut self, kills_per_sec: f32, hp_fraction: f32) -> f32 {
        let mut next = self.multiplier + DIFFICULTY_DRIFT;
        if kills_per_sec > DIFFICULTY_EASY_KPS {
            next += DIFFICULTY_EASY_BUMP;
        } else if kills_per_sec < DIFFICULTY_STRUGGLE_KPS
            && hp_fraction < DIFFICULTY_STRUGGLE_HP_FRACTION
        {
            next -= DIFFICULTY_RELIEF;
        }
        self.multiplier = next.clamp(DIFFICULTY_MIN, DIFFICULTY_MAX);
        self.multiplier
    }
}

/// Difficulty Director step.
pub fn run(
    director: &mut DifficultyDirector,
    total_kills: u32,
    hp_fraction: f32,
    now_ms: u64,
    events: &mut Vec<SimEvent>,
) {
    let before = director.multiplier();
    if let Some(multiplier) = director.update(now_ms, total_kills, hp_fraction) {
        if multiplier != before {
            debug!(
                "difficulty {before:.2} -> {multiplier:.2}, cap {}",
                director.population_cap()
            );
            events.push(SimEvent::DifficultyChanged { multiplier });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_check_before_interval() {
        let mut director = DifficultyDirector::default();
        assert_eq!(director.update(4999, 100, 1.0), None);
        assert_eq!(director.multiplier(), 1.0);
        assert!(director.update(5000, 100, 1.0).is_some());
    }

    #[test]
    fn test_cap_multiplier_grows_at_half_rate() {
        let mut director = DifficultyDirector::default();
        for _ in 0..20 {
            director.adjust(3.0, 1.0);
        }
        assert!((director.multiplier() - 4.0).abs() < 1e-4);
        assert!((director.cap_multiplier() - 2.5).abs() < 1e-4);
        assert!((1249..=1250).contains(&director.population_cap()));
    }
}
