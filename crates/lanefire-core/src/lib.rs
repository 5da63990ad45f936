//! Core types and definitions for the LANEFIRE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! depth lanes, configuration, components, commands, events, state
//! snapshots, errors, and constants. It has no dependency on any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod lanes;
pub mod state;
pub mod types;

pub use config::GameConfig;
pub use error::ConfigError;
pub use lanes::{DepthLane, LaneTable};
