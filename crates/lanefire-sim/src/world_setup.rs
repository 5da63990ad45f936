//! Entity spawn factories for the simulation world.
//!
//! Creates enemy and projectile entities with their component bundles.
//! Ids come from a shared counter so spawn order is recoverable from ids.

use hecs::World;

use lanefire_core::components::{Enemy, Projectile};
use lanefire_core::config::GameConfig;
use lanefire_core::enums::SpeedTier;
use lanefire_core::events::SpawnEvent;
use lanefire_core::lanes::{DepthLane, LaneTable};
use lanefire_core::types::Position;

/// Rolled parameters for one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub lane: DepthLane,
    pub y: f64,
    pub flight_duration_secs: f64,
}

fn next_id(counter: &mut u32) -> u32 {
    let id = *counter;
    *counter += 1;
    id
}

/// Spawn an enemy at the right edge of the screen and describe it for the renderer.
pub fn spawn_enemy(
    world: &mut World,
    config: &GameConfig,
    lanes: &LaneTable,
    next_entity_id: &mut u32,
    params: &SpawnParams,
) -> SpawnEvent {
    let id = next_id(next_entity_id);
    let scale = lanes.scale_for_lane(params.lane);
    let speed_tier =
        SpeedTier::from_duration(params.flight_duration_secs, config.fast_tier_threshold_secs);
    let flap_rate = match speed_tier {
        SpeedTier::Fast => config.fast_flap_rate,
        SpeedTier::Normal => config.normal_flap_rate,
    };
    let position = Position::new(config.spawn_x(), params.y);

    world.spawn((
        Enemy {
            id,
            lane: params.lane,
            flight_duration_secs: params.flight_duration_secs,
            speed_tier,
            elapsed_secs: 0.0,
            spawn_x: config.spawn_x(),
            terminal_x: config.terminal_x(),
            size: config.enemy_base_size.scaled(scale),
            alive: true,
        },
        position,
    ));

    log::debug!(
        "enemy {id} spawned in lane {} at y={:.1}, flight {:.2}s ({speed_tier:?})",
        params.lane.rank(),
        params.y,
        params.flight_duration_secs,
    );

    SpawnEvent {
        enemy_id: id,
        lane: params.lane,
        position,
        flight_duration_secs: params.flight_duration_secs,
        speed_tier,
        flap_rate,
        scale,
        z_order: lanes.z_order(params.lane),
    }
}

/// Spawn a projectile at the muzzle stage, aimed at `aim`. Returns its id.
pub fn spawn_projectile(
    world: &mut World,
    config: &GameConfig,
    next_entity_id: &mut u32,
    aim: Position,
) -> u32 {
    let id = next_id(next_entity_id);
    world.spawn((
        Projectile {
            id,
            stage_index: 0,
            lane: None,
            stage_remaining_secs: config.stage_duration_secs,
            alive: true,
        },
        aim,
    ));
    id
}
