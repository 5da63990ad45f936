//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game mode. Affects only the rules collaborator (lives, time limit),
/// never spawning or collision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Unlimited play, no life loss, no clock.
    Practice,
    /// Escaped enemies cost a life; foreground kills can earn one back.
    #[default]
    Slayer,
    /// Score as much as possible before the clock runs out.
    TimeAttack,
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session running.
    #[default]
    Idle,
    Active,
    Paused,
    /// Session ended; the world has been torn down.
    GameOver,
}

/// Discrete speed class of an enemy, derived from its flight duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedTier {
    /// Short crossing time: fast flap animation, sniper-eligible.
    Fast,
    Normal,
}

impl SpeedTier {
    /// Classify a flight duration against the fast-tier threshold.
    pub fn from_duration(flight_secs: f64, fast_threshold_secs: f64) -> Self {
        if flight_secs < fast_threshold_secs {
            SpeedTier::Fast
        } else {
            SpeedTier::Normal
        }
    }
}

/// Why an entity left play without scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissKind {
    /// An enemy crossed the screen untouched.
    EnemyEscaped,
    /// A projectile passed every lane without hitting anything.
    ProjectileSpent,
}

/// Per-session achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Achievement {
    /// First kill of the session.
    FirstBlood,
    /// Foreground kill of a fast-tier enemy.
    Sniper,
    /// Ten hits in a row without a spent projectile.
    Sharpshooter,
    /// One hundred kills in one session.
    Exterminator,
}
