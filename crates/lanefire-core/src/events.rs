//! Events emitted by the simulation for rendering, audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::lanes::DepthLane;
use crate::types::Position;

/// Everything the simulation tells its collaborators, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A session began.
    SessionStarted { mode: GameMode, lives: u32 },
    /// A new enemy entered play; the renderer should create its actor.
    EnemySpawned(SpawnEvent),
    /// A projectile left the muzzle.
    ProjectileFired { projectile_id: u32, aim: Position },
    /// A projectile destroyed an enemy.
    Hit(HitEvent),
    /// An enemy escaped or a projectile was spent; the renderer removes the actor.
    Miss(MissEvent),
    ScoreChanged { score: u64 },
    LifeLost { lives: u32 },
    LifeGained { lives: u32 },
    /// The session ended, either by the mode's rules or by the player.
    GameOver { final_score: u64, mode: GameMode },
}

/// Parameters of a freshly spawned enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnEvent {
    pub enemy_id: u32,
    pub lane: DepthLane,
    pub position: Position,
    pub flight_duration_secs: f64,
    pub speed_tier: SpeedTier,
    /// Wing-flap animation rate for the tier (frames/s).
    pub flap_rate: f64,
    pub scale: f64,
    pub z_order: f64,
}

/// Outcome of a successful stage test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitEvent {
    pub enemy_id: u32,
    pub projectile_id: u32,
    pub enemy_lane: DepthLane,
    pub enemy_flight_duration_secs: f64,
    pub speed_tier: SpeedTier,
    /// Enemy position at the moment of the hit (for the explosion effect).
    pub position: Position,
    pub scale: f64,
    /// The hit happened in the lane nearest the camera.
    pub foreground: bool,
    /// Foreground hit on a fast-tier enemy.
    pub sniper: bool,
}

/// An entity left play without scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissEvent {
    pub kind: MissKind,
    /// Enemy id for escapes, projectile id for spent shots.
    pub entity_id: u32,
}
