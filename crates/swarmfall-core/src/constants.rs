//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

// --- Actor ---

/// Actor collision box edge length (pixels).
pub const PLAYER_SIZE: f32 = 32.0;

/// Actor movement speed (pixels per tick).
pub const PLAYER_BASE_SPEED: f32 = 3.0;

/// Actor starting and maximum hit points.
pub const PLAYER_BASE_MAX_HP: f32 = 100.0;

/// Invulnerability window after a successful hit (ms).
pub const PLAYER_IFRAME_MS: u64 = 500;

/// Experience needed for the first level-up.
pub const XP_FIRST_THRESHOLD: u32 = 10;

/// Threshold growth factor applied on every level-up.
pub const XP_THRESHOLD_GROWTH: f32 = 1.5;

/// Session length that counts as a victory (seconds).
pub const VICTORY_SECS: f64 = 900.0;

// --- Adversary steering ---

/// Neighbours closer than this push each other apart (pixels).
pub const SEPARATION_RADIUS: f32 = 40.0;

/// Weight of the separation term relative to the unit chase vector.
pub const SEPARATION_WEIGHT: f32 = 50.0;

/// Default adversary box edge when the stat table omits one.
pub const DEFAULT_ENEMY_SIZE: f32 = 32.0;

// --- Spawn director ---

/// Ordinary spawns land this far from the actor, just off screen.
pub const SPAWN_RADIUS: f32 = 600.0;

/// Population cap before the difficulty cap multiplier is applied.
pub const BASE_POPULATION_CAP: usize = 500;

/// Horde ring radius (pixels).
pub const HORDE_RADIUS: f32 = 500.0;

/// Adversaries per horde ring.
pub const HORDE_COUNT: usize = 30;

/// A horde fires on every multiple of this many elapsed seconds.
pub const HORDE_PERIOD_SECS: u64 = 60;

/// Minimum gap between two hordes (seconds).
pub const HORDE_GUARD_SECS: f64 = 5.0;

/// The single boss spawns once this much time has elapsed (seconds).
pub const BOSS_SPAWN_SECS: f64 = 300.0;

// --- Difficulty director ---

/// Real-time interval between difficulty evaluations (ms).
pub const DIFFICULTY_CHECK_MS: u64 = 5000;

/// Unconditional upward drift per evaluation.
pub const DIFFICULTY_DRIFT: f32 = 0.05;

/// Kills per second above which the session is "too easy".
pub const DIFFICULTY_EASY_KPS: f32 = 2.0;

/// Extra increase when the session is too easy.
pub const DIFFICULTY_EASY_BUMP: f32 = 0.1;

/// Kills per second below which the actor may be struggling.
pub const DIFFICULTY_STRUGGLE_KPS: f32 = 0.5;

/// Health fraction below which the actor may be struggling.
pub const DIFFICULTY_STRUGGLE_HP_FRACTION: f32 = 0.3;

/// Decrease when both struggling signals agree. Cancels the drift, so a
/// struggling check holds the multiplier where it is.
pub const DIFFICULTY_RELIEF: f32 = 0.05;

/// Lower clamp of the difficulty multiplier.
pub const DIFFICULTY_MIN: f32 = 1.0;

/// Upper clamp of the difficulty multiplier.
pub const DIFFICULTY_MAX: f32 = 5.0;

/// Fraction of the multiplier growth passed on to the population cap.
pub const DIFFICULTY_CAP_SCALE: f32 = 0.5;

// --- Weapons ---

/// Penetration given to melee arcs, lobbed hazards and auras.
pub const UNLIMITED_PENETRATION: u32 = 999;

/// Homing shots with no adversary in the world fly this way.
pub const DEFAULT_FIRE_DIRECTION: (f32, f32) = (1.0, 0.0);

/// Lower bound for the global cooldown scale.
pub const MIN_COOLDOWN_SCALE: f32 = 0.2;

/// Hostile shot box edge (pixels).
pub const HOSTILE_SHOT_SIZE: f32 = 10.0;

/// Hostile shot lifetime (ms).
pub const HOSTILE_SHOT_LIFETIME_MS: u64 = 3000;

// --- Loot ---

/// Non-boss chest drop chance per kill.
pub const CHEST_DROP_CHANCE: f64 = 0.001;

/// Magnet drop chance per kill.
pub const MAGNET_DROP_CHANCE: f64 = 0.005;

/// Heart drop chance per kill.
pub const HEART_DROP_CHANCE: f64 = 0.005;

/// Hit points restored by a heart pickup.
pub const HEART_HEAL: f32 = 30.0;

/// Experience gems start drifting toward the actor inside this radius.
pub const GEM_MAGNET_RADIUS: f32 = 150.0;

/// Gem acceleration per tick while being collected.
pub const GEM_ACCELERATION: f32 = 0.5;

/// Gem speed cap (pixels per tick).
pub const GEM_MAX_SPEED: f32 = 12.0;

/// Pickup box edges (pixels).
pub const GEM_SIZE: f32 = 8.0;
pub const ITEM_SIZE: f32 = 16.0;
pub const CHEST_SIZE: f32 = 32.0;

// --- Upgrades ---

/// Options offered on a normal level-up.
pub const LEVEL_UP_OPTION_COUNT: usize = 3;

/// Options offered when a chest is collected.
pub const CHEST_OPTION_COUNT: usize = 5;

// --- Feedback particles ---

pub const EXPLOSION_PARTICLES: usize = 10;
pub const EXPLOSION_PARTICLE_SPEED: f32 = 2.0;
pub const EXPLOSION_PARTICLE_TICKS: u64 = 30;
pub const HIT_PARTICLES: usize = 3;
pub const HIT_PARTICLE_SPEED: f32 = 4.0;
pub const HIT_PARTICLE_TICKS: u64 = 10;
pub const PARTICLE_SIZE: f32 = 4.0;

// --- Broad phase ---

/// Uniform grid cell edge used for neighbour and overlap queries.
pub const SPATIAL_CELL_SIZE: f32 = 64.0;
