//! Enemy spawning system: a fixed-interval accumulator plus seeded rolls
//! for lane, altitude and flight duration.

use hecs::World;
use rand::Rng;

use lanefire_core::config::GameConfig;
use lanefire_core::events::GameEvent;
use lanefire_core::lanes::LaneTable;

use crate::world_setup::{self, SpawnParams};

/// Accumulates simulated time and fires once per spawn interval.
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    interval_secs: f64,
    accumulator_secs: f64,
}

impl Spawner {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval_secs,
            accumulator_secs: 0.0,
        }
    }

    /// Add `dt` and report whether a spawn is due.
    ///
    /// A spawn is due once the accumulator exceeds the interval; the
    /// accumulator then resets to zero, dropping any remainder. At most one
    /// spawn per call, however large `dt` is.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.accumulator_secs += dt;
        if self.accumulator_secs > self.interval_secs {
            self.accumulator_secs = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulator_secs = 0.0;
    }

    pub fn accumulator_secs(&self) -> f64 {
        self.accumulator_secs
    }

    pub fn interval_secs(&self) -> f64 {
        self.interval_secs
    }
}

/// Roll the parameters of one enemy.
///
/// Lane is uniform over gameplay lanes; y and flight duration are uniform
/// over their configured (inclusive) ranges.
pub fn roll_spawn<R: Rng>(rng: &mut R, config: &GameConfig, lanes: &LaneTable) -> SpawnParams {
    let lane = lanes.lane(rng.gen_range(0..lanes.gameplay_lanes()));
    let y = rng.gen_range(config.spawn_min_y..=config.spawn_max_y());
    let flight_duration_secs = rng.gen_range(config.min_flight_secs..=config.max_flight_secs);
    SpawnParams {
        lane,
        y,
        flight_duration_secs,
    }
}

/// Advance the spawn clock and create an enemy when one is due.
#[allow(clippy::too_many_arguments)]
pub fn run<R: Rng>(
    world: &mut World,
    rng: &mut R,
    spawner: &mut Spawner,
    config: &GameConfig,
    lanes: &LaneTable,
    next_entity_id: &mut u32,
    events: &mut Vec<GameEvent>,
    dt: f64,
) {
    if !spawner.tick(dt) {
        return;
    }
    let params = roll_spawn(rng, config, lanes);
    let spawn = world_setup::spawn_enemy(world, config, lanes, next_entity_id, &params);
    events.push(GameEvent::EnemySpawned(spawn));
}
