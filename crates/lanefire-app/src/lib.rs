//! LANEFIRE host application.
//!
//! Runs the simulation on its own thread, funnels input through a command
//! channel, and wires the host-side collaborators (effects, achievements,
//! leaderboard) to the engine's event stream.

pub mod autopilot;
pub mod error;
pub mod game_loop;
pub mod observers;
pub mod scores;
pub mod state;

pub use error::AppError;
pub use lanefire_core as core;
pub use state::{AppState, GameLoopCommand};
