//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::SpeedTier;
use crate::lanes::DepthLane;
use crate::types::Size;

/// A live target flying right to left across one lane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Spawn-ordered identity. Lower ids were spawned earlier.
    pub id: u32,
    pub lane: DepthLane,
    /// Time to cross from `spawn_x` to `terminal_x`.
    pub flight_duration_secs: f64,
    pub speed_tier: SpeedTier,
    /// Time spent flying so far.
    pub elapsed_secs: f64,
    pub spawn_x: f64,
    pub terminal_x: f64,
    /// Bounding box size at this lane's scale.
    pub size: Size,
    /// Cleared on hit or escape; the entity is despawned by cleanup.
    pub alive: bool,
}

/// A fired shot stepping through the lanes one stage at a time.
///
/// Stage 0 is the muzzle (no lane). Stage `k >= 1` sits in the `k-1`th
/// lane of the foreground-to-background sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub stage_index: u32,
    /// Lane of the current stage. `None` while still at the muzzle.
    pub lane: Option<DepthLane>,
    /// Countdown to the next stage transition.
    pub stage_remaining_secs: f64,
    pub alive: bool,
}
