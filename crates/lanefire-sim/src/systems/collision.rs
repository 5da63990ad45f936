//! Collision/hit resolver for a single projectile stage.

use hecs::{Entity, World};

use lanefire_core::components::{Enemy, Projectile};
use lanefire_core::config::GameConfig;
use lanefire_core::enums::SpeedTier;
use lanefire_core::events::HitEvent;
use lanefire_core::lanes::LaneTable;
use lanefire_core::types::{Aabb, Position};

/// The projectile's hit box at its current stage.
pub fn projectile_box(
    config: &GameConfig,
    lanes: &LaneTable,
    projectile: &Projectile,
    aim: Position,
) -> Option<Aabb> {
    let lane = projectile.lane?;
    let size = config.projectile_base_size.scaled(lanes.scale_for_lane(lane));
    Some(Aabb::centered(aim, size))
}

/// Test a projectile against the live enemies in its current lane.
///
/// Enemies are scanned in spawn order and the first overlapping one is hit;
/// scanning stops there. The enemy is marked dead before returning, so no
/// later test can hit it again. The caller owns the projectile and marks it.
pub fn resolve(
    world: &mut World,
    config: &GameConfig,
    lanes: &LaneTable,
    projectile: &Projectile,
    aim: Position,
) -> Option<HitEvent> {
    let lane = projectile.lane?;
    let shot = projectile_box(config, lanes, projectile, aim)?;

    let mut candidates: Vec<(u32, Entity)> = world
        .query::<&Enemy>()
        .iter()
        .filter(|(_, enemy)| enemy.alive && enemy.lane == lane)
        .map(|(entity, enemy)| (enemy.id, entity))
        .collect();
    candidates.sort_unstable_by_key(|&(id, _)| id);

    for (_, entity) in candidates {
        let Ok((enemy, pos)) = world.query_one_mut::<(&mut Enemy, &Position)>(entity) else {
            continue;
        };
        if !shot.intersects(&Aabb::centered(*pos, enemy.size)) {
            continue;
        }

        enemy.alive = false;
        let foreground = enemy.lane.is_foreground();
        return Some(HitEvent {
            enemy_id: enemy.id,
            projectile_id: projectile.id,
            enemy_lane: enemy.lane,
            enemy_flight_duration_secs: enemy.flight_duration_secs,
            speed_tier: enemy.speed_tier,
            position: *pos,
            scale: lanes.scale_for_lane(enemy.lane),
            foreground,
            sniper: foreground && enemy.speed_tier == SpeedTier::Fast,
        });
    }
    None
}
