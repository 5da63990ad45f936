//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so every
//! mutation of session state happens inside the simulation tick.

use serde::{Deserialize, Serialize};

use crate::enums::GameMode;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a fresh session, tearing down any running one.
    StartSession { mode: GameMode },
    /// Fire a projectile at the given screen point.
    Fire { x: f64, y: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// End the running session (quit to menu).
    EndSession,
}
