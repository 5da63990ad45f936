//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all per-entity state lives in components.

pub mod cleanup;
pub mod collision;
pub mod flight;
pub mod rules;
pub mod snapshot;
pub mod spawner;
pub mod staging;
