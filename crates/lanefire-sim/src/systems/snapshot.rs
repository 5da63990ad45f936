//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use lanefire_core::components::{Enemy, Projectile};
use lanefire_core::config::GameConfig;
use lanefire_core::enums::{GameMode, GamePhase};
use lanefire_core::events::GameEvent;
use lanefire_core::lanes::LaneTable;
use lanefire_core::state::*;
use lanefire_core::types::{Position, SimTime, Size};

use crate::session::SessionState;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    mode: Option<GameMode>,
    session: &SessionState,
    config: &GameConfig,
    lanes: &LaneTable,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        mode,
        enemies: build_enemies(world, lanes),
        projectiles: build_projectiles(world, config, lanes),
        events,
        score: ScoreView {
            score: session.score,
            lives: session.lives,
            kills: session.kills,
            shots_fired: session.shots_fired,
            escapes: session.escapes,
            time_remaining_secs: session.time_remaining_secs,
        },
    }
}

/// Live enemies, in spawn order.
fn build_enemies(world: &World, lanes: &LaneTable) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| enemy.alive)
        .map(|(_, (enemy, pos))| EnemyView {
            id: enemy.id,
            lane: enemy.lane,
            position: *pos,
            size: enemy.size,
            scale: lanes.scale_for_lane(enemy.lane),
            z_order: lanes.z_order(enemy.lane),
            speed_tier: enemy.speed_tier,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

/// Live projectiles, in fire order. Muzzle-stage shots draw at full size.
fn build_projectiles(world: &World, config: &GameConfig, lanes: &LaneTable) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (p, _))| p.alive)
        .map(|(_, (p, pos))| {
            let scale = p.lane.map_or(1.0, |lane| lanes.scale_for_lane(lane));
            let size: Size = config.projectile_base_size.scaled(scale);
            ProjectileView {
                id: p.id,
                stage_index: p.stage_index,
                lane: p.lane,
                position: *pos,
                size,
                scale,
            }
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}
