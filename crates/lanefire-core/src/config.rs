//! Game configuration: every tunable the simulation reads.
//!
//! Loaded from JSON (missing fields fall back to the defaults in
//! `constants`) and validated once, up front. The simulation assumes a
//! validated config and does not re-check it.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::lanes::LaneTable;
use crate::types::Size;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Simulation ticks per second.
    pub tick_rate: u32,
    pub screen_width: f64,
    pub screen_height: f64,
    /// Lowest y an enemy may spawn at.
    pub spawn_min_y: f64,
    /// Distance past either screen edge where enemies start and finish.
    pub spawn_x_margin: f64,
    pub spawn_interval_secs: f64,
    pub min_flight_secs: f64,
    pub max_flight_secs: f64,
    /// Flight durations below this belong to the fast tier.
    pub fast_tier_threshold_secs: f64,
    pub fast_flap_rate: f64,
    pub normal_flap_rate: f64,
    pub gameplay_lanes: u8,
    pub background_lanes: u8,
    /// Scale per lane, nearest first, covering gameplay and background lanes.
    pub lane_scales: Vec<f64>,
    pub enemy_base_size: Size,
    pub projectile_base_size: Size,
    pub stage_duration_secs: f64,
    pub points_per_kill: u64,
    pub starting_lives: u32,
    pub max_lives: u32,
    pub time_attack_secs: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            spawn_min_y: SPAWN_MIN_Y,
            spawn_x_margin: SPAWN_X_MARGIN,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            min_flight_secs: MIN_FLIGHT_SECS,
            max_flight_secs: MAX_FLIGHT_SECS,
            fast_tier_threshold_secs: FAST_TIER_THRESHOLD_SECS,
            fast_flap_rate: FAST_FLAP_RATE,
            normal_flap_rate: NORMAL_FLAP_RATE,
            gameplay_lanes: GAMEPLAY_LANES,
            background_lanes: BACKGROUND_LANES,
            lane_scales: LANE_SCALES.to_vec(),
            enemy_base_size: ENEMY_BASE_SIZE.into(),
            projectile_base_size: PROJECTILE_BASE_SIZE.into(),
            stage_duration_secs: STAGE_DURATION_SECS,
            points_per_kill: POINTS_PER_KILL,
            starting_lives: STARTING_LIVES,
            max_lives: MAX_LIVES,
            time_attack_secs: TIME_ATTACK_SECS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::TickRateZero);
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("spawn_interval_secs", self.spawn_interval_secs),
            ("min_flight_secs", self.min_flight_secs),
            ("max_flight_secs", self.max_flight_secs),
            ("fast_tier_threshold_secs", self.fast_tier_threshold_secs),
            ("fast_flap_rate", self.fast_flap_rate),
            ("normal_flap_rate", self.normal_flap_rate),
            ("enemy_base_size.w", self.enemy_base_size.w),
            ("enemy_base_size.h", self.enemy_base_size.h),
            ("projectile_base_size.w", self.projectile_base_size.w),
            ("projectile_base_size.h", self.projectile_base_size.h),
            ("stage_duration_secs", self.stage_duration_secs),
            ("time_attack_secs", self.time_attack_secs),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.min_flight_secs > self.max_flight_secs {
            return Err(ConfigError::FlightRange {
                min: self.min_flight_secs,
                max: self.max_flight_secs,
            });
        }

        if self.spawn_min_y > self.spawn_max_y() {
            return Err(ConfigError::EmptySpawnBand {
                min_y: self.spawn_min_y,
                max_y: self.spawn_max_y(),
            });
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::ZeroLives {
                field: "starting_lives",
            });
        }
        if self.max_lives == 0 {
            return Err(ConfigError::ZeroLives { field: "max_lives" });
        }

        if self.starting_lives > self.max_lives {
            return Err(ConfigError::LivesExceedMax {
                starting: self.starting_lives,
                max: self.max_lives,
            });
        }

        self.lane_table().map(|_| ())
    }

    /// Build the lane lookup table described by this config.
    pub fn lane_table(&self) -> Result<LaneTable, ConfigError> {
        LaneTable::new(
            self.gameplay_lanes,
            self.background_lanes,
            self.lane_scales.clone(),
        )
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.tick_rate)
    }

    /// Highest y an enemy may spawn at: the top edge minus half an enemy.
    pub fn spawn_max_y(&self) -> f64 {
        self.screen_height - self.enemy_base_size.h / 2.0
    }

    /// Off-screen x where enemies appear.
    pub fn spawn_x(&self) -> f64 {
        self.screen_width + self.spawn_x_margin
    }

    /// Off-screen x where enemies leave.
    pub fn terminal_x(&self) -> f64 {
        -self.spawn_x_margin
    }
}
