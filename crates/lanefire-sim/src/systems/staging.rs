//! Projectile stage system.
//!
//! Each projectile is a small state machine: a stage index and one countdown
//! that is re-armed after every transition. On expiry the projectile moves to
//! the next lane of the foreground-to-background sequence and, in gameplay
//! lanes, is tested for a hit. When the sequence is exhausted it is spent.

use hecs::{Entity, World};

use lanefire_core::components::Projectile;
use lanefire_core::config::GameConfig;
use lanefire_core::constants::TIMER_EPSILON;
use lanefire_core::enums::MissKind;
use lanefire_core::events::{GameEvent, MissEvent};
use lanefire_core::lanes::LaneTable;
use lanefire_core::types::Position;

use crate::session::ScoreSink;
use crate::systems::collision;

/// Result of one stage expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStep {
    /// Entered the next lane and the timer was re-armed.
    Advanced,
    /// Entered a gameplay lane and destroyed an enemy.
    Hit,
    /// No lanes left.
    Spent,
}

/// Count down every live projectile by `dt`, processing as many stage
/// transitions as the elapsed time covers.
pub fn run(
    world: &mut World,
    config: &GameConfig,
    lanes: &LaneTable,
    dt: f64,
    sink: &mut dyn ScoreSink,
    events: &mut Vec<GameEvent>,
) {
    // Fire order, so that the earlier shot takes a contested enemy.
    let mut order: Vec<(u32, Entity)> = world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.alive)
        .map(|(entity, p)| (p.id, entity))
        .collect();
    order.sort_unstable_by_key(|&(id, _)| id);

    for (_, entity) in order {
        let (mut projectile, aim) = match world.query_one_mut::<(&Projectile, &Position)>(entity) {
            Ok((p, pos)) => (p.clone(), *pos),
            Err(_) => continue,
        };

        projectile.stage_remaining_secs -= dt;
        while projectile.alive && projectile.stage_remaining_secs <= TIMER_EPSILON {
            match advance_stage(world, config, lanes, &mut projectile, aim, sink, events) {
                StageStep::Advanced => projectile.stage_remaining_secs += config.stage_duration_secs,
                StageStep::Hit | StageStep::Spent => projectile.alive = false,
            }
        }

        if let Ok(mut stored) = world.get::<&mut Projectile>(entity) {
            *stored = projectile;
        }
    }
}

/// Perform one stage transition for `projectile`.
pub fn advance_stage(
    world: &mut World,
    config: &GameConfig,
    lanes: &LaneTable,
    projectile: &mut Projectile,
    aim: Position,
    sink: &mut dyn ScoreSink,
    events: &mut Vec<GameEvent>,
) -> StageStep {
    // Stage k sits in sequence lane k-1, so the next lane is at `stage_index`.
    let Some(lane) = lanes.sequence_lane(projectile.stage_index) else {
        log::debug!("projectile {} spent after {} stages", projectile.id, projectile.stage_index);
        events.push(GameEvent::Miss(MissEvent {
            kind: MissKind::ProjectileSpent,
            entity_id: projectile.id,
        }));
        return StageStep::Spent;
    };

    projectile.stage_index += 1;
    projectile.lane = Some(lane);

    if !lanes.is_gameplay(lane) {
        return StageStep::Advanced;
    }

    match collision::resolve(world, config, lanes, projectile, aim) {
        Some(hit) => {
            log::info!(
                "projectile {} hit enemy {} in lane {} (sniper: {})",
                hit.projectile_id,
                hit.enemy_id,
                hit.enemy_lane.rank(),
                hit.sniper,
            );
            let score = sink.report_hit(&hit);
            events.push(GameEvent::Hit(hit));
            events.push(GameEvent::ScoreChanged { score });
            StageStep::Hit
        }
        None => StageStep::Advanced,
    }
}
