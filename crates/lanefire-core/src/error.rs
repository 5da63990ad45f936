//! Configuration errors.
//!
//! The simulation itself has no recoverable runtime errors; everything that
//! can go wrong is caught when a `GameConfig` is loaded and validated.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Parse(String),
    /// A duration, interval, size or rate that must be positive was not.
    NonPositive { field: &'static str, value: f64 },
    /// `min_flight_secs` exceeds `max_flight_secs`.
    FlightRange { min: f64, max: f64 },
    NoGameplayLanes,
    /// Gameplay plus background lanes do not fit a lane rank.
    TooManyLanes { total: usize, max: usize },
    LaneScaleCount { expected: usize, actual: usize },
    LaneScaleNotPositive { rank: usize },
    LaneScaleNotDecreasing { rank: usize },
    /// The vertical spawn band is empty once the enemy half-height is removed.
    EmptySpawnBand { min_y: f64, max_y: f64 },
    TickRateZero,
    LivesExceedMax { starting: u32, max: u32 },
    /// A lives setting that must be at least one was zero.
    ZeroLives { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::FlightRange { min, max } => write!(
                f,
                "min_flight_secs ({min}) must not exceed max_flight_secs ({max})"
            ),
            Self::NoGameplayLanes => write!(f, "at least one gameplay lane is required"),
            Self::TooManyLanes { total, max } => {
                write!(f, "{total} lanes configured, at most {max} are supported")
            }
            Self::LaneScaleCount { expected, actual } => write!(
                f,
                "lane_scales has {actual} entries, expected {expected} (gameplay + background)"
            ),
            Self::LaneScaleNotPositive { rank } => {
                write!(f, "lane scale at rank {rank} must be positive and finite")
            }
            Self::LaneScaleNotDecreasing { rank } => write!(
                f,
                "lane scale at rank {rank} must be smaller than the lane in front of it"
            ),
            Self::EmptySpawnBand { min_y, max_y } => {
                write!(f, "spawn band is empty: min_y={min_y}, max_y={max_y}")
            }
            Self::TickRateZero => write!(f, "tick_rate must be non-zero"),
            Self::LivesExceedMax { starting, max } => write!(
                f,
                "starting_lives ({starting}) must not exceed max_lives ({max})"
            ),
            Self::ZeroLives { field } => write!(f, "{field} must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
