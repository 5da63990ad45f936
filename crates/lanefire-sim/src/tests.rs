//! Tests for the simulation engine: spawning, flight, projectile stages,
//! hit resolution, scoring, mode rules and teardown.

use std::sync::{Arc, Mutex};

use lanefire_core::commands::PlayerCommand;
use lanefire_core::config::GameConfig;
use lanefire_core::enums::*;
use lanefire_core::error::ConfigError;
use lanefire_core::events::{GameEvent, HitEvent};
use lanefire_core::state::GameStateSnapshot;

use crate::engine::{SimConfig, SimulationEngine};
use crate::observer::GameObserver;
use crate::systems::spawner::{self, Spawner};

// ---- Helpers ----

/// Default geometry with automatic spawning pushed far out of reach.
fn quiet_config() -> SimConfig {
    SimConfig {
        seed: 7,
        game: GameConfig {
            spawn_interval_secs: 1.0e6,
            ..Default::default()
        },
    }
}

/// An engine with a session already running (one tick consumed).
fn started(config: SimConfig, mode: GameMode) -> SimulationEngine {
    let mut engine = SimulationEngine::new(config).unwrap();
    engine.queue_command(PlayerCommand::StartSession { mode });
    engine.tick();
    engine
}

/// Where an enemy spawned this tick will be after `t` seconds of flight.
fn enemy_x_at(config: &GameConfig, flight_secs: f64, t: f64) -> f64 {
    config.spawn_x() + (config.terminal_x() - config.spawn_x()) * (t / flight_secs)
}

fn hits(snapshot: &GameStateSnapshot) -> Vec<HitEvent> {
    snapshot
        .events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Hit(hit) => Some(hit.clone()),
            _ => None,
        })
        .collect()
}

fn has_miss(snapshot: &GameStateSnapshot, kind: MissKind) -> bool {
    snapshot
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::Miss(miss) if miss.kind == kind))
}

// ---- Construction ----

#[test]
fn test_invalid_config_rejected() {
    let config = SimConfig {
        seed: 1,
        game: GameConfig {
            min_flight_secs: 6.0,
            ..Default::default()
        },
    };
    assert!(SimulationEngine::new(config).is_err());
}

#[test]
fn test_engine_rejects_lane_total_over_rank_range() {
    let config = SimConfig {
        seed: 1,
        game: GameConfig {
            gameplay_lanes: 200,
            background_lanes: 100,
            lane_scales: (0..300).map(|i| 1.0 / (i as f64 + 1.0)).collect(),
            ..Default::default()
        },
    };
    assert!(matches!(
        SimulationEngine::new(config),
        Err(ConfigError::TooManyLanes { total: 300, .. })
    ));
}

#[test]
fn test_engine_rejects_zero_starting_lives() {
    let config = SimConfig {
        seed: 1,
        game: GameConfig {
            starting_lives: 0,
            ..Default::default()
        },
    };
    assert!(matches!(
        SimulationEngine::new(config),
        Err(ConfigError::ZeroLives { .. })
    ));
}

#[test]
fn test_slayer_survives_first_tick_with_one_life() {
    let config = SimConfig {
        seed: 1,
        game: GameConfig {
            starting_lives: 1,
            ..Default::default()
        },
    };
    let engine = started(config, GameMode::Slayer);
    assert_eq!(engine.phase(), GamePhase::Active);
    assert_eq!(engine.session().lives, 1);
}

#[test]
fn test_idle_until_started() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    for _ in 0..30 {
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Idle);
        assert!(snap.enemies.is_empty());
    }
    assert_eq!(engine.time().tick, 0);
}

#[test]
fn test_fire_ignored_when_idle() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.queue_command(PlayerCommand::Fire { x: 100.0, y: 100.0 });
    let snap = engine.tick();
    assert!(snap.projectiles.is_empty());
    assert!(snap.events.is_empty());
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = SimulationEngine::new(config.clone()).unwrap();
    let mut engine_b = SimulationEngine::new(config).unwrap();

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_command(PlayerCommand::StartSession {
            mode: GameMode::Practice,
        });
    }

    for tick in 0..600 {
        if tick % 20 == 0 {
            let fire = PlayerCommand::Fire { x: 500.0, y: 400.0 };
            engine_a.queue_command(fire.clone());
            engine_b.queue_command(fire);
        }
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = started(
        SimConfig {
            seed: 111,
            ..Default::default()
        },
        GameMode::Practice,
    );
    let mut engine_b = started(
        SimConfig {
            seed: 222,
            ..Default::default()
        },
        GameMode::Practice,
    );

    let mut diverged = false;
    for _ in 0..120 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce different spawns");
}

// ---- Spawner ----

#[test]
fn test_spawner_single_long_tick() {
    let mut spawner = Spawner::new(0.2);
    assert!(spawner.tick(0.25));
    assert_eq!(spawner.accumulator_secs(), 0.0);
}

#[test]
fn test_spawner_must_exceed_interval() {
    let mut spawner = Spawner::new(0.2);
    assert!(!spawner.tick(0.1));
    assert!(!spawner.tick(0.1), "reaching the interval is not exceeding it");
    assert!(spawner.tick(0.05));
    assert_eq!(spawner.accumulator_secs(), 0.0);
}

#[test]
fn test_spawner_at_most_one_per_tick() {
    let mut spawner = Spawner::new(0.2);
    assert!(spawner.tick(10.0));
    assert!(!spawner.tick(0.0));
}

#[test]
fn test_spawner_reset() {
    let mut spawner = Spawner::new(0.2);
    spawner.tick(0.15);
    spawner.reset();
    assert_eq!(spawner.accumulator_secs(), 0.0);
    assert!(!spawner.tick(0.15));
}

#[test]
fn test_roll_spawn_with_zero_source_hits_lower_bounds() {
    let config = GameConfig::default();
    let lanes = config.lane_table().unwrap();
    let mut rng = rand::rngs::mock::StepRng::new(0, 0);
    let params = spawner::roll_spawn(&mut rng, &config, &lanes);
    assert_eq!(params.lane.rank(), 0);
    assert_eq!(params.y, config.spawn_min_y);
    assert_eq!(params.flight_duration_secs, config.min_flight_secs);
}

#[test]
fn test_engine_spawns_on_interval() {
    let config = SimConfig {
        seed: 9,
        game: GameConfig {
            spawn_interval_secs: 0.21,
            ..Default::default()
        },
    };
    let mut engine = started(config, GameMode::Practice);
    let mut spawned = 0;
    // 13 ticks per spawn at 60Hz; one second covers four.
    for _ in 0..59 {
        spawned += engine
            .tick()
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemySpawned(_)))
            .count();
    }
    assert_eq!(spawned, 4);
    assert_eq!(engine.session().lives, engine.config().starting_lives);
}

#[test]
fn test_spawn_event_describes_enemy() {
    let mut engine = started(SimConfig::default(), GameMode::Practice);
    let spawn = loop {
        let snap = engine.tick();
        if let Some(GameEvent::EnemySpawned(spawn)) = snap.events.first() {
            break spawn.clone();
        }
    };
    let config = engine.config();
    let lanes = engine.lanes();
    assert_eq!(spawn.scale, lanes.scale_for_lane(spawn.lane));
    assert_eq!(spawn.z_order, lanes.z_order(spawn.lane));
    let expected_rate = match spawn.speed_tier {
        SpeedTier::Fast => config.fast_flap_rate,
        SpeedTier::Normal => config.normal_flap_rate,
    };
    assert_eq!(spawn.flap_rate, expected_rate);
    assert_eq!(
        spawn.speed_tier,
        SpeedTier::from_duration(spawn.flight_duration_secs, config.fast_tier_threshold_secs)
    );
}

mod spawn_bounds {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use lanefire_core::config::GameConfig;

    use crate::systems::spawner::roll_spawn;

    proptest! {
        #[test]
        fn spawned_enemies_stay_in_bounds(seed in any::<u64>()) {
            let config = GameConfig::default();
            let lanes = config.lane_table().unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for _ in 0..64 {
                let params = roll_spawn(&mut rng, &config, &lanes);
                prop_assert!(params.y >= config.spawn_min_y);
                prop_assert!(params.y <= config.spawn_max_y());
                prop_assert!(params.flight_duration_secs >= config.min_flight_secs);
                prop_assert!(params.flight_duration_secs <= config.max_flight_secs);
                prop_assert!(lanes.is_gameplay(params.lane));
            }
        }

        #[test]
        fn engine_spawns_stay_in_bounds(seed in any::<u64>()) {
            let mut engine = super::started(
                crate::engine::SimConfig { seed, ..Default::default() },
                lanefire_core::enums::GameMode::Practice,
            );
            for _ in 0..120 {
                for event in engine.tick().events {
                    if let lanefire_core::events::GameEvent::EnemySpawned(spawn) = event {
                        let config = engine.config();
                        prop_assert!(spawn.position.y >= config.spawn_min_y);
                        prop_assert!(spawn.position.y <= config.spawn_max_y());
                        prop_assert!(spawn.flight_duration_secs >= config.min_flight_secs);
                        prop_assert!(spawn.flight_duration_secs <= config.max_flight_secs);
                    }
                }
            }
        }
    }
}

// ---- Flight ----

#[test]
fn test_enemy_moves_linearly() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    let id = engine.spawn_test_enemy(1, 300.0, 2.0);
    for _ in 0..60 {
        engine.tick();
    }
    let snap = engine.tick();
    let enemy = snap.enemies.iter().find(|e| e.id == id).unwrap();
    let expected = enemy_x_at(engine.config(), 2.0, 61.0 / 60.0);
    assert!((enemy.position.x - expected).abs() < 1e-6);
    assert_eq!(enemy.position.y, 300.0);
}

#[test]
fn test_enemy_escape() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    let id = engine.spawn_test_enemy(0, 300.0, 2.0);

    for tick in 1..=120 {
        let snap = engine.tick();
        let escaped = has_miss(&snap, MissKind::EnemyEscaped);
        assert_eq!(escaped, tick == 120, "escape expected exactly at 2.0s (tick {tick})");
        if escaped {
            assert!(snap.enemies.iter().all(|e| e.id != id));
        }
    }
    assert_eq!(engine.session().escapes, 1);
    // Practice never costs a life.
    assert_eq!(engine.session().lives, engine.config().starting_lives);
}

// ---- Projectile stages ----

#[test]
fn test_unobstructed_projectile_is_spent() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    engine.queue_command(PlayerCommand::Fire { x: 500.0, y: 400.0 });

    let mut last_stage = 0;
    let mut spent_at = None;
    for tick in 1..=60 {
        let snap = engine.tick();
        assert!(hits(&snap).is_empty());
        if let Some(p) = snap.projectiles.first() {
            last_stage = p.stage_index;
        }
        if has_miss(&snap, MissKind::ProjectileSpent) {
            spent_at = Some(tick);
            assert!(snap.projectiles.is_empty());
        }
    }

    let lanes = engine.lanes();
    assert_eq!(
        last_stage,
        u32::from(lanes.gameplay_lanes() + lanes.background_lanes())
    );
    assert_eq!(last_stage, 7);
    // Seven stages of 0.1s plus the final one running out.
    assert_eq!(spent_at, Some(48));
    assert_eq!(engine.session().score, 0);
}

#[test]
fn test_projectile_advances_one_lane_per_stage() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    engine.queue_command(PlayerCommand::Fire { x: 500.0, y: 400.0 });

    let snap = engine.tick();
    assert_eq!(snap.projectiles[0].stage_index, 0);
    assert_eq!(snap.projectiles[0].lane, None);
    assert_eq!(snap.projectiles[0].scale, 1.0);

    for _ in 0..5 {
        engine.tick();
    }
    let snap = engine.tick();
    let p = &snap.projectiles[0];
    assert_eq!(p.stage_index, 1);
    assert_eq!(p.lane.map(|l| l.rank()), Some(0));

    for _ in 0..6 {
        engine.tick();
    }
    let snap = engine.tick();
    let p = &snap.projectiles[0];
    assert_eq!(p.stage_index, 2);
    assert_eq!(p.lane.map(|l| l.rank()), Some(1));
    assert_eq!(p.scale, engine.lanes().scale_for_lane(engine.lanes().lane(1)));
}

#[test]
fn test_pause_freezes_stage_timers() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    engine.queue_command(PlayerCommand::Fire { x: 500.0, y: 400.0 });
    engine.tick();
    engine.queue_command(PlayerCommand::Pause);
    let paused_at = engine.tick().time.tick;

    for _ in 0..200 {
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Paused);
        assert_eq!(snap.time.tick, paused_at);
        assert_eq!(snap.projectiles[0].stage_index, 0);
    }

    engine.queue_command(PlayerCommand::Resume);
    let mut spent = false;
    for _ in 0..60 {
        spent |= has_miss(&engine.tick(), MissKind::ProjectileSpent);
    }
    assert!(spent);
}

// ---- Hits and scoring ----

#[test]
fn test_same_lane_overlap_hits() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    let enemy_id = engine.spawn_test_enemy(0, 400.0, 5.0);
    let aim_x = enemy_x_at(engine.config(), 5.0, 0.1);
    engine.queue_command(PlayerCommand::Fire { x: aim_x, y: 400.0 });

    let mut all_hits = Vec::new();
    for tick in 1..=6 {
        let snap = engine.tick();
        let tick_hits = hits(&snap);
        if tick == 6 {
            assert_eq!(tick_hits.len(), 1);
            // ScoreChanged follows its Hit.
            let pos = snap
                .events
                .iter()
                .position(|e| matches!(e, GameEvent::Hit(_)))
                .unwrap();
            assert_eq!(snap.events[pos + 1], GameEvent::ScoreChanged { score: 10 });
            assert!(snap.enemies.is_empty());
            assert!(snap.projectiles.is_empty());
            assert_eq!(snap.score.kills, 1);
        }
        all_hits.extend(tick_hits);
    }
    assert_eq!(all_hits.len(), 1);
    assert_eq!(all_hits[0].enemy_id, enemy_id);
    assert_eq!(engine.session().score, 10);
}

#[test]
fn test_different_lane_never_hits() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    engine.spawn_test_enemy(4, 400.0, 5.0);
    // Aimed where the enemy sits while the shot passes lane 0.
    let aim_x = enemy_x_at(engine.config(), 5.0, 0.1);
    engine.queue_command(PlayerCommand::Fire { x: aim_x, y: 400.0 });

    for _ in 0..60 {
        assert!(hits(&engine.tick()).is_empty());
    }
    assert_eq!(engine.session().score, 0);
}

#[test]
fn test_far_aim_never_hits() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    engine.spawn_test_enemy(0, 400.0, 5.0);
    let aim_x = enemy_x_at(engine.config(), 5.0, 0.1);
    engine.queue_command(PlayerCommand::Fire { x: aim_x, y: 150.0 });

    for _ in 0..60 {
        assert!(hits(&engine.tick()).is_empty());
    }
}

#[test]
fn test_first_spawned_enemy_wins() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    let first = engine.spawn_test_enemy(0, 400.0, 5.0);
    let second = engine.spawn_test_enemy(0, 400.0, 5.0);
    let aim_x = enemy_x_at(engine.config(), 5.0, 0.1);
    engine.queue_command(PlayerCommand::Fire { x: aim_x, y: 400.0 });

    let mut all_hits = Vec::new();
    for _ in 0..60 {
        all_hits.extend(hits(&engine.tick()));
    }
    assert_eq!(all_hits.len(), 1);
    assert_eq!(all_hits[0].enemy_id, first);

    let snap = engine.tick();
    assert_eq!(snap.enemies.len(), 1);
    assert_eq!(snap.enemies[0].id, second);
}

#[test]
fn test_dead_enemy_not_hit_twice() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    let first = engine.spawn_test_enemy(0, 400.0, 5.0);
    let second = engine.spawn_test_enemy(0, 400.0, 5.0);
    let aim_x = enemy_x_at(engine.config(), 5.0, 0.1);
    engine.queue_commands([
        PlayerCommand::Fire { x: aim_x, y: 400.0 },
        PlayerCommand::Fire { x: aim_x, y: 400.0 },
    ]);

    let mut all_hits = Vec::new();
    for _ in 0..6 {
        all_hits.extend(hits(&engine.tick()));
    }
    let targets: Vec<u32> = all_hits.iter().map(|h| h.enemy_id).collect();
    assert_eq!(targets, vec![first, second]);
    assert_ne!(all_hits[0].projectile_id, all_hits[1].projectile_id);
    assert_eq!(engine.session().score, 20);
}

#[test]
fn test_hit_in_third_lane_at_third_stage() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    engine.spawn_test_enemy(2, 400.0, 2.0);
    let aim_x = enemy_x_at(engine.config(), 2.0, 0.3);
    engine.queue_command(PlayerCommand::Fire { x: aim_x, y: 400.0 });

    for tick in 1..=18 {
        let snap = engine.tick();
        let tick_hits = hits(&snap);
        if tick < 18 {
            assert!(tick_hits.is_empty(), "early hit at tick {tick}");
            continue;
        }
        assert_eq!(tick_hits.len(), 1);
        let hit = &tick_hits[0];
        assert_eq!(hit.enemy_lane.rank(), 2);
        assert_eq!(hit.enemy_flight_duration_secs, 2.0);
        assert!(!hit.foreground);
        assert!(!hit.sniper);
        assert_eq!(hit.scale, engine.lanes().scale_for_lane(hit.enemy_lane));
        assert!((hit.position.x - aim_x).abs() < 1e-6);
    }
}

#[test]
fn test_three_hits_score_thirty() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    let aim_x = enemy_x_at(engine.config(), 5.0, 0.1);
    for y in [200.0, 400.0, 600.0] {
        engine.spawn_test_enemy(0, y, 5.0);
        engine.queue_command(PlayerCommand::Fire { x: aim_x, y });
    }

    let mut scores = Vec::new();
    for _ in 0..10 {
        for event in engine.tick().events {
            if let GameEvent::ScoreChanged { score } = event {
                scores.push(score);
            }
        }
    }
    assert_eq!(scores, vec![10, 20, 30]);
    assert_eq!(engine.session().score, 30);
    assert_eq!(engine.session().kills, 3);
    assert_eq!(engine.session().shots_fired, 3);
}

#[test]
fn test_sniper_flag_needs_fast_foreground() {
    for (duration, sniper) in [(2.0, true), (4.0, false)] {
        let mut engine = started(quiet_config(), GameMode::Practice);
        engine.spawn_test_enemy(0, 400.0, duration);
        let aim_x = enemy_x_at(engine.config(), duration, 0.1);
        engine.queue_command(PlayerCommand::Fire { x: aim_x, y: 400.0 });

        let mut all_hits = Vec::new();
        for _ in 0..6 {
            all_hits.extend(hits(&engine.tick()));
        }
        assert_eq!(all_hits.len(), 1);
        assert!(all_hits[0].foreground);
        assert_eq!(all_hits[0].sniper, sniper, "duration {duration}");
    }
}

// ---- Teardown ----

#[test]
fn test_no_events_after_end_session() {
    let mut engine = started(SimConfig::default(), GameMode::Practice);
    for _ in 0..90 {
        engine.queue_command(PlayerCommand::Fire { x: 600.0, y: 400.0 });
        engine.tick();
    }

    engine.queue_command(PlayerCommand::EndSession);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert!(snap.enemies.is_empty());
    assert!(snap.projectiles.is_empty());
    let game_overs = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count();
    assert_eq!(game_overs, 1);

    let score = engine.session().score;
    for _ in 0..300 {
        let snap = engine.tick();
        assert!(snap.events.iter().all(|e| !matches!(
            e,
            GameEvent::Hit(_) | GameEvent::ScoreChanged { .. } | GameEvent::EnemySpawned(_)
        )));
    }
    assert_eq!(engine.session().score, score);
    assert_eq!(engine.spawner().accumulator_secs(), 0.0);
}

#[test]
fn test_end_session_while_paused() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    engine.queue_commands([PlayerCommand::Pause, PlayerCommand::EndSession]);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::GameOver);
}

#[test]
fn test_restart_resets_session() {
    let mut engine = started(quiet_config(), GameMode::Practice);
    engine.spawn_test_enemy(0, 400.0, 5.0);
    let aim_x = enemy_x_at(engine.config(), 5.0, 0.1);
    engine.queue_command(PlayerCommand::Fire { x: aim_x, y: 400.0 });
    for _ in 0..6 {
        engine.tick();
    }
    assert_eq!(engine.session().score, 10);

    engine.queue_command(PlayerCommand::StartSession {
        mode: GameMode::Slayer,
    });
    let snap = engine.tick();
    assert!(matches!(snap.events[0], GameEvent::GameOver { final_score: 10, .. }));
    assert!(matches!(
        snap.events[1],
        GameEvent::SessionStarted {
            mode: GameMode::Slayer,
            ..
        }
    ));
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.score.score, 0);
    assert_eq!(snap.mode, Some(GameMode::Slayer));
}

// ---- Mode rules ----

#[test]
fn test_slayer_ends_when_lives_run_out() {
    let mut engine = started(SimConfig::default(), GameMode::Slayer);
    let starting = engine.config().starting_lives;

    let mut lost = Vec::new();
    let mut ended = false;
    for _ in 0..(60 * 30) {
        let snap = engine.tick();
        for event in &snap.events {
            match event {
                GameEvent::LifeLost { lives } => lost.push(*lives),
                GameEvent::GameOver { mode, .. } => {
                    assert_eq!(*mode, GameMode::Slayer);
                    ended = true;
                }
                _ => {}
            }
        }
        if ended {
            break;
        }
    }
    assert!(ended, "escapes should end a slayer session");
    assert_eq!(lost, (0..starting).rev().collect::<Vec<_>>());
    assert_eq!(engine.phase(), GamePhase::GameOver);
}

#[test]
fn test_slayer_foreground_hit_grants_life() {
    let mut engine = started(quiet_config(), GameMode::Slayer);
    engine.spawn_test_enemy(0, 400.0, 5.0);
    let aim_x = enemy_x_at(engine.config(), 5.0, 0.1);
    engine.queue_command(PlayerCommand::Fire { x: aim_x, y: 400.0 });

    let mut gained = Vec::new();
    for _ in 0..6 {
        for event in engine.tick().events {
            if let GameEvent::LifeGained { lives } = event {
                gained.push(lives);
            }
        }
    }
    assert_eq!(gained, vec![engine.config().starting_lives + 1]);
}

#[test]
fn test_time_attack_runs_out() {
    let config = SimConfig {
        seed: 3,
        game: GameConfig {
            time_attack_secs: 1.0,
            ..Default::default()
        },
    };
    let mut engine = started(config, GameMode::TimeAttack);
    let mut ended_at = None;
    for tick in 2..=70 {
        let snap = engine.tick();
        if snap.events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })) {
            ended_at = Some(tick);
            break;
        }
        assert!(snap.score.time_remaining_secs.is_some());
    }
    let ended_at = ended_at.expect("clock should end the session");
    assert!((60..=61).contains(&ended_at));
}

// ---- Observers ----

struct SharedLog(Arc<Mutex<Vec<GameEvent>>>);

impl GameObserver for SharedLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.0.lock().unwrap().push(event.clone());
    }
}

#[test]
fn test_observers_see_events_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.add_observer(Box::new(SharedLog(Arc::clone(&seen))));

    engine.queue_command(PlayerCommand::StartSession {
        mode: GameMode::Practice,
    });
    let mut from_snapshots = Vec::new();
    for tick in 0..120 {
        if tick % 10 == 0 {
            engine.queue_command(PlayerCommand::Fire { x: 400.0, y: 300.0 });
        }
        from_snapshots.extend(engine.tick().events);
    }

    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty());
    assert_eq!(*seen, from_snapshots);
    assert!(matches!(seen[0], GameEvent::SessionStarted { .. }));
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = started(SimConfig::default(), GameMode::Slayer);
    engine.queue_command(PlayerCommand::Fire { x: 400.0, y: 300.0 });
    let mut snap = engine.tick();
    for _ in 0..60 {
        snap = engine.tick();
    }
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.enemies.len(), snap.enemies.len());
    assert_eq!(back.score.lives, snap.score.lives);
}
