//! Simulation constants and default tuning parameters.
//!
//! Everything here is a default for `GameConfig`; the simulation itself
//! reads the configured values, never these constants directly.

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Timers at or below this many seconds are treated as expired.
pub const TIMER_EPSILON: f64 = 1e-9;

// --- Screen ---

/// Logical screen width in points.
pub const SCREEN_WIDTH: f64 = 1024.0;

/// Logical screen height in points.
pub const SCREEN_HEIGHT: f64 = 768.0;

/// Bottom margin below which enemies never spawn.
pub const SPAWN_MIN_Y: f64 = 120.0;

// --- Lanes ---

/// Number of lanes enemies can occupy.
pub const GAMEPLAY_LANES: u8 = 5;

/// Lanes behind all enemies, used only by the projectile exit animation.
pub const BACKGROUND_LANES: u8 = 2;

/// Visual scale per lane, nearest first. Background lanes included.
pub const LANE_SCALES: [f64; 7] = [1.0, 0.8, 0.64, 0.5, 0.4, 0.3, 0.2];

// --- Spawning ---

/// Seconds between automatic enemy spawns.
pub const SPAWN_INTERVAL_SECS: f64 = 0.2;

/// Fastest enemy crossing time.
pub const MIN_FLIGHT_SECS: f64 = 2.0;

/// Slowest enemy crossing time.
pub const MAX_FLIGHT_SECS: f64 = 5.0;

/// Crossing times below this are the fast tier.
pub const FAST_TIER_THRESHOLD_SECS: f64 = 3.0;

/// Wing-flap animation rate (frames/s) for fast-tier enemies.
pub const FAST_FLAP_RATE: f64 = 20.0;

/// Wing-flap animation rate (frames/s) for normal-tier enemies.
pub const NORMAL_FLAP_RATE: f64 = 10.0;

/// Enemy sprite size at scale 1.0 (width, height).
pub const ENEMY_BASE_SIZE: (f64, f64) = (96.0, 72.0);

/// Enemies start this far past the right screen edge.
pub const SPAWN_X_MARGIN: f64 = 100.0;

// --- Projectiles ---

/// Seconds a projectile spends in each lane.
pub const STAGE_DURATION_SECS: f64 = 0.1;

/// Projectile sprite size at scale 1.0 (width, height).
pub const PROJECTILE_BASE_SIZE: (f64, f64) = (48.0, 48.0);

// --- Scoring and lives ---

/// Points awarded per enemy destroyed.
pub const POINTS_PER_KILL: u64 = 10;

/// Lives at session start.
pub const STARTING_LIVES: u32 = 3;

/// Upper bound for lives gained during a session.
pub const MAX_LIVES: u32 = 5;

/// Time-attack session length in seconds.
pub const TIME_ATTACK_SECS: f64 = 60.0;
