//! Best-score bookkeeping per game mode.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lanefire_core::enums::GameMode;

/// Maximum number of scores kept per mode.
pub const MAX_SCORES_PER_MODE: usize = 10;

/// Where finished sessions are recorded.
pub trait ScoreStore: Send {
    /// Record a final score. Returns its rank (1-indexed) if it made the table.
    fn record(&mut self, mode: GameMode, score: u64) -> Option<usize>;
    fn best(&self, mode: GameMode) -> Option<u64>;
}

/// How a finished score landed on the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// First on the table and above the previous best, or the first score ever.
    NewBest,
    Ranked(usize),
    Unplaced,
}

impl Placement {
    /// Classify a recorded score from the best before recording and its rank.
    pub fn classify(previous_best: Option<u64>, score: u64, rank: Option<usize>) -> Self {
        match rank {
            Some(1) if previous_best.is_none_or(|best| score > best) => Placement::NewBest,
            Some(rank) => Placement::Ranked(rank),
            None => Placement::Unplaced,
        }
    }
}

/// In-memory leaderboard, sorted descending per mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryScoreStore {
    pub tables: HashMap<GameMode, Vec<u64>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scores(&self, mode: GameMode) -> &[u64] {
        self.tables.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl ScoreStore for MemoryScoreStore {
    fn record(&mut self, mode: GameMode, score: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let table = self.tables.entry(mode).or_default();
        let pos = table
            .iter()
            .position(|&s| score > s)
            .unwrap_or(table.len());
        if pos >= MAX_SCORES_PER_MODE {
            return None;
        }
        table.insert(pos, score);
        table.truncate(MAX_SCORES_PER_MODE);
        Some(pos + 1)
    }

    fn best(&self, mode: GameMode) -> Option<u64> {
        self.tables.get(&mode).and_then(|t| t.first().copied())
    }
}
