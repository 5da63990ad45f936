//! Enemy flight system.
//!
//! Enemies travel in a straight line at constant speed from `spawn_x` to
//! `terminal_x` over their flight duration. Reaching the end is an escape.

use hecs::World;

use lanefire_core::components::Enemy;
use lanefire_core::constants::TIMER_EPSILON;
use lanefire_core::enums::MissKind;
use lanefire_core::events::{GameEvent, MissEvent};
use lanefire_core::types::Position;

/// Move every live enemy by `dt` and mark finished flights as escaped.
/// Returns the number of escapes this tick.
pub fn run(world: &mut World, dt: f64, events: &mut Vec<GameEvent>) -> u32 {
    let mut escaped = Vec::new();

    for (_entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &mut Position)>() {
        if !enemy.alive {
            continue;
        }
        enemy.elapsed_secs += dt;
        let t = (enemy.elapsed_secs / enemy.flight_duration_secs).min(1.0);
        pos.x = enemy.spawn_x + (enemy.terminal_x - enemy.spawn_x) * t;

        if enemy.elapsed_secs >= enemy.flight_duration_secs - TIMER_EPSILON {
            enemy.alive = false;
            escaped.push(enemy.id);
        }
    }

    // Report in spawn order.
    escaped.sort_unstable();
    for &enemy_id in &escaped {
        log::debug!("enemy {enemy_id} escaped");
        events.push(GameEvent::Miss(MissEvent {
            kind: MissKind::EnemyEscaped,
            entity_id: enemy_id,
        }));
    }
    escaped.len() as u32
}
