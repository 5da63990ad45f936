//! Headless lane shooter simulation.
//!
//! Owns the ECS world, the seeded RNG and the per-tick systems: spawning,
//! enemy flight, projectile stages with collision, scoring, mode rules and
//! cleanup. Hosts drive it with `PlayerCommand`s and read snapshots back.

pub mod engine;
pub mod observer;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use lanefire_core as core;
pub use observer::GameObserver;
pub use session::ScoreSink;

#[cfg(test)]
mod tests;
