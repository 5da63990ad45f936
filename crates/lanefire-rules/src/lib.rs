//! Game-mode rules for LANEFIRE.
//!
//! The simulation core decides hits and misses; this crate decides what they
//! mean for a session: life loss, extra lives, time limits, game over, and
//! achievements. Pure data in, pure data out. No ECS dependency.

pub mod achievements;
pub mod profiles;
pub mod rulebook;

pub use achievements::AchievementTracker;
pub use lanefire_core as core;
pub use rulebook::{ModeRules, Rulebook, RulesContext, RulesUpdate};
