//! Achievement tracking.
//!
//! Watches the event stream and reports each achievement the first time it
//! is earned in a session. Reporting to a platform service is the host's job.

use std::collections::BTreeSet;

use lanefire_core::enums::{Achievement, MissKind};
use lanefire_core::events::GameEvent;

/// Kills in one session for `Exterminator`.
pub const EXTERMINATOR_KILLS: u32 = 100;

/// Consecutive hits without a spent projectile for `Sharpshooter`.
pub const SHARPSHOOTER_STREAK: u32 = 10;

#[derive(Debug, Clone, Default)]
pub struct AchievementTracker {
    unlocked: BTreeSet<Achievement>,
    kills: u32,
    streak: u32,
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event. Returns achievements unlocked by it, if any.
    pub fn observe(&mut self, event: &GameEvent) -> Vec<Achievement> {
        let mut earned = Vec::new();
        match event {
            GameEvent::SessionStarted { .. } => {
                self.unlocked.clear();
                self.kills = 0;
                self.streak = 0;
            }
            GameEvent::Hit(hit) => {
                self.kills += 1;
                self.streak += 1;
                if self.kills == 1 {
                    self.unlock(Achievement::FirstBlood, &mut earned);
                }
                if hit.sniper {
                    self.unlock(Achievement::Sniper, &mut earned);
                }
                if self.streak >= SHARPSHOOTER_STREAK {
                    self.unlock(Achievement::Sharpshooter, &mut earned);
                }
                if self.kills >= EXTERMINATOR_KILLS {
                    self.unlock(Achievement::Exterminator, &mut earned);
                }
            }
            GameEvent::Miss(miss) if miss.kind == MissKind::ProjectileSpent => {
                self.streak = 0;
            }
            _ => {}
        }
        earned
    }

    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.unlocked.contains(&achievement)
    }

    pub fn unlocked(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.unlocked.iter().copied()
    }

    fn unlock(&mut self, achievement: Achievement, earned: &mut Vec<Achievement>) {
        if self.unlocked.insert(achievement) {
            log::info!("achievement unlocked: {achievement:?}");
            earned.push(achievement);
        }
    }
}
