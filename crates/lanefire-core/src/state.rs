//! Game state snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::lanes::DepthLane;
use crate::types::{Position, SimTime, Size};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub mode: Option<GameMode>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events produced during this tick, in order.
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

/// A live enemy for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub lane: DepthLane,
    pub position: Position,
    pub size: Size,
    pub scale: f64,
    pub z_order: f64,
    pub speed_tier: SpeedTier,
}

/// A live projectile for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub stage_index: u32,
    /// `None` while at the muzzle.
    pub lane: Option<DepthLane>,
    pub position: Position,
    pub size: Size,
    pub scale: f64,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub lives: u32,
    pub kills: u32,
    pub shots_fired: u32,
    pub escapes: u32,
    /// Only set in modes with a clock.
    pub time_remaining_secs: Option<f64>,
}
