//! Session data model: score, lives and counters for one game session.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use lanefire_core::config::GameConfig;
use lanefire_core::enums::GameMode;
use lanefire_core::events::HitEvent;

/// Narrow capability handed to the projectile stage system: report a hit,
/// get the new score back.
pub trait ScoreSink {
    fn report_hit(&mut self, hit: &HitEvent) -> u64;
}

/// What happened during the current tick, for the rules collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickTally {
    pub hits: u32,
    pub foreground_hits: u32,
    pub escapes: u32,
}

/// Running state of the current (or most recent) session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub mode: GameMode,
    /// Never decreases during a session.
    pub score: u64,
    pub lives: u32,
    pub kills: u32,
    pub shots_fired: u32,
    pub escapes: u32,
    pub elapsed_secs: f64,
    pub time_remaining_secs: Option<f64>,
    pub points_per_kill: u64,
    pub tally: TickTally,
}

impl SessionState {
    pub fn new(mode: GameMode, config: &GameConfig) -> Self {
        Self {
            mode,
            lives: config.starting_lives,
            points_per_kill: config.points_per_kill,
            ..Default::default()
        }
    }

    /// Clear the per-tick tally. Called at the top of every active tick.
    pub fn begin_tick(&mut self, dt: f64) {
        self.tally = TickTally::default();
        self.elapsed_secs += dt;
    }

    pub fn record_escapes(&mut self, count: u32) {
        self.escapes += count;
        self.tally.escapes += count;
    }
}

impl ScoreSink for SessionState {
    fn report_hit(&mut self, hit: &HitEvent) -> u64 {
        self.score += self.points_per_kill;
        self.kills += 1;
        self.tally.hits += 1;
        if hit.foreground {
            self.tally.foreground_hits += 1;
        }
        self.score
    }
}
