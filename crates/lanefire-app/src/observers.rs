//! Host-side collaborators that react to simulation events.

use std::sync::{Arc, Mutex};

use lanefire_core::enums::{Achievement, MissKind};
use lanefire_core::events::GameEvent;
use lanefire_rules::AchievementTracker;
use lanefire_sim::GameObserver;

use crate::scores::{Placement, ScoreStore};

/// Stands in for the renderer and mixer: logs the effects a frontend would play.
#[derive(Debug, Default)]
pub struct EffectsLogger {
    pub explosions: u32,
}

impl GameObserver for EffectsLogger {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::EnemySpawned(spawn) => log::debug!(
                "actor {} lane {} scale {:.2} z {} flap {} fps",
                spawn.enemy_id,
                spawn.lane.rank(),
                spawn.scale,
                spawn.z_order,
                spawn.flap_rate,
            ),
            GameEvent::ProjectileFired { projectile_id, .. } => {
                log::debug!("sound: shot ({projectile_id})");
            }
            GameEvent::Hit(hit) => {
                self.explosions += 1;
                log::info!(
                    "explosion at ({:.0}, {:.0}) scale {:.2}",
                    hit.position.x,
                    hit.position.y,
                    hit.scale,
                );
            }
            GameEvent::Miss(miss) if miss.kind == MissKind::EnemyEscaped => {
                log::debug!("actor {} left the screen", miss.entity_id);
            }
            _ => {}
        }
    }
}

/// Drives an `AchievementTracker` and keeps the unlocks for the host.
pub struct AchievementReporter {
    tracker: AchievementTracker,
    unlocked: Arc<Mutex<Vec<Achievement>>>,
}

impl AchievementReporter {
    pub fn new(unlocked: Arc<Mutex<Vec<Achievement>>>) -> Self {
        Self {
            tracker: AchievementTracker::new(),
            unlocked,
        }
    }
}

impl GameObserver for AchievementReporter {
    fn on_event(&mut self, event: &GameEvent) {
        let earned = self.tracker.observe(event);
        if earned.is_empty() {
            return;
        }
        match self.unlocked.lock() {
            Ok(mut unlocked) => unlocked.extend(earned),
            Err(_) => log::warn!("dropping unlocks {earned:?}: list poisoned"),
        }
    }
}

/// Records final scores when a session ends.
pub struct LeaderboardReporter<S: ScoreStore> {
    store: Arc<Mutex<S>>,
    pub last_placement: Option<Placement>,
}

impl<S: ScoreStore> LeaderboardReporter<S> {
    pub fn new(store: Arc<Mutex<S>>) -> Self {
        Self {
            store,
            last_placement: None,
        }
    }
}

impl<S: ScoreStore> GameObserver for LeaderboardReporter<S> {
    fn on_event(&mut self, event: &GameEvent) {
        let GameEvent::GameOver { final_score, mode } = event else {
            return;
        };
        let Ok(mut store) = self.store.lock() else {
            log::warn!("score store unavailable, dropping {final_score}");
            return;
        };
        let previous_best = store.best(*mode);
        let rank = store.record(*mode, *final_score);
        let placement = Placement::classify(previous_best, *final_score, rank);
        match placement {
            Placement::NewBest => log::info!("new {mode:?} best: {final_score}"),
            Placement::Ranked(rank) => log::info!("{mode:?} score {final_score} ranked #{rank}"),
            Placement::Unplaced => log::info!("{mode:?} score {final_score} did not place"),
        }
        self.last_placement = Some(placement);
    }
}
