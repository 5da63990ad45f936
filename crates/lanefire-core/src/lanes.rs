//! Depth lanes: the discrete depth ranks shared by enemies and projectiles.
//!
//! Rank 0 is the lane nearest the camera. Gameplay lanes come first, then
//! the background lanes that only projectiles pass through on their way out.
//! Gameplay logic only ever compares lanes for equality; scale and z-order
//! exist for sizing and drawing.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A lane rank. Ordered from nearest (0) to farthest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DepthLane(u8);

impl DepthLane {
    /// The lane nearest the camera.
    pub const FOREGROUND: DepthLane = DepthLane(0);

    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    pub const fn rank(self) -> u8 {
        self.0
    }

    pub const fn is_foreground(self) -> bool {
        self.0 == 0
    }
}

/// Lookup table from lane rank to scale and z-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneTable {
    gameplay_lanes: u8,
    background_lanes: u8,
    scales: Vec<f64>,
}

impl LaneTable {
    /// Build a table, checking the scale list covers every lane and shrinks
    /// strictly with distance.
    pub fn new(gameplay_lanes: u8, background_lanes: u8, scales: Vec<f64>) -> Result<Self, ConfigError> {
        if gameplay_lanes == 0 {
            return Err(ConfigError::NoGameplayLanes);
        }
        let expected = gameplay_lanes as usize + background_lanes as usize;
        if expected > u8::MAX as usize {
            return Err(ConfigError::TooManyLanes {
                total: expected,
                max: u8::MAX as usize,
            });
        }
        if scales.len() != expected {
            return Err(ConfigError::LaneScaleCount {
                expected,
                actual: scales.len(),
            });
        }
        if let Some(rank) = scales.iter().position(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ConfigError::LaneScaleNotPositive { rank });
        }
        if let Some(rank) = scales.windows(2).position(|w| w[1] >= w[0]) {
            return Err(ConfigError::LaneScaleNotDecreasing { rank: rank + 1 });
        }
        Ok(Self {
            gameplay_lanes,
            background_lanes,
            scales,
        })
    }

    /// Number of lanes enemies can occupy.
    pub fn gameplay_lanes(&self) -> u8 {
        self.gameplay_lanes
    }

    /// Number of projectile-only lanes behind the gameplay lanes.
    pub fn background_lanes(&self) -> u8 {
        self.background_lanes
    }

    /// Total lanes, gameplay plus background.
    pub fn lane_count(&self) -> u8 {
        self.gameplay_lanes + self.background_lanes
    }

    /// Checked construction of a lane. Panics on an out-of-range rank.
    pub fn lane(&self, rank: u8) -> DepthLane {
        self.assert_in_range(rank);
        DepthLane(rank)
    }

    /// Whether enemies may occupy this lane.
    pub fn is_gameplay(&self, lane: DepthLane) -> bool {
        self.assert_in_range(lane.rank());
        lane.rank() < self.gameplay_lanes
    }

    /// Visual size multiplier, 1.0 at the foreground.
    pub fn scale_for_lane(&self, lane: DepthLane) -> f64 {
        self.assert_in_range(lane.rank());
        self.scales[lane.rank() as usize]
    }

    /// Draw order: nearer lanes draw above farther ones.
    pub fn z_order(&self, lane: DepthLane) -> f64 {
        self.assert_in_range(lane.rank());
        f64::from(self.lane_count() - lane.rank())
    }

    /// The `index`th lane of the projectile path (foreground first), if any.
    pub fn sequence_lane(&self, index: u32) -> Option<DepthLane> {
        if index < u32::from(self.lane_count()) {
            Some(DepthLane(index as u8))
        } else {
            None
        }
    }

    /// All lanes, foreground to background.
    pub fn sequence(&self) -> impl Iterator<Item = DepthLane> + '_ {
        (0..self.lane_count()).map(DepthLane)
    }

    fn assert_in_range(&self, rank: u8) {
        assert!(
            rank < self.lane_count(),
            "lane rank {rank} out of range (lane count {})",
            self.lane_count()
        );
    }
}
