//! Headless LANEFIRE demo: an autopilot plays one timed session.
//!
//! `RUST_LOG` controls the log level.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};

use lanefire_app::autopilot::Autopilot;
use lanefire_app::observers::{AchievementReporter, EffectsLogger, LeaderboardReporter};
use lanefire_app::scores::{MemoryScoreStore, ScoreStore};
use lanefire_app::state::AppState;
use lanefire_core::commands::PlayerCommand;
use lanefire_core::config::GameConfig;
use lanefire_core::enums::{GameMode, GamePhase};
use lanefire_sim::engine::SimConfig;
use lanefire_sim::GameObserver;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Practice,
    Slayer,
    TimeAttack,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Practice => GameMode::Practice,
            ModeArg::Slayer => GameMode::Slayer,
            ModeArg::TimeAttack => GameMode::TimeAttack,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lanefire")]
#[command(about = "Run a headless LANEFIRE session played by the autopilot")]
struct Args {
    /// JSON game config; unspecified fields use defaults
    config: Option<PathBuf>,

    /// RNG seed for spawns
    #[arg(long, env = "LANEFIRE_SEED", default_value_t = SimConfig::default().seed)]
    seed: u64,

    /// Game mode to play
    #[arg(long, value_enum, default_value_t = ModeArg::Slayer)]
    mode: ModeArg,

    /// Wall-clock cap for the session, in seconds
    #[arg(long, default_value_t = 30)]
    secs: u64,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let game = match &args.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed reading {}", path.display()))?;
            GameConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    Ok(SimConfig {
        seed: args.seed,
        game,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mode = GameMode::from(args.mode);
    log::info!("LANEFIRE (headless) starting: {mode:?}, seed {}", args.seed);

    let config = load_config(&args)?;
    let poll = Duration::from_secs_f64(config.game.dt());
    let mut autopilot = Autopilot::new(
        config.game.stage_duration_secs + config.game.dt(),
        config.game.stage_duration_secs,
    );

    let store = Arc::new(Mutex::new(MemoryScoreStore::new()));
    let unlocked = Arc::new(Mutex::new(Vec::new()));
    let state = AppState::new();
    let observers: Vec<Box<dyn GameObserver>> = vec![
        Box::new(EffectsLogger::default()),
        Box::new(AchievementReporter::new(Arc::clone(&unlocked))),
        Box::new(LeaderboardReporter::new(Arc::clone(&store))),
    ];
    state
        .start_session(config, observers)
        .context("failed starting game loop")?;
    state
        .send_command(PlayerCommand::StartSession { mode })
        .context("failed starting session")?;

    let deadline = Instant::now() + Duration::from_secs(args.secs);
    let mut last_tick = None;
    while Instant::now() < deadline {
        std::thread::sleep(poll);
        let Some(snapshot) = state.get_snapshot()? else {
            continue;
        };
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
        if last_tick == Some(snapshot.time.tick) {
            continue;
        }
        last_tick = Some(snapshot.time.tick);
        if let Some(command) = autopilot.decide(&snapshot) {
            state.send_command(command).context("failed sending fire")?;
        }
    }

    if state.get_snapshot()?.map(|s| s.phase) != Some(GamePhase::GameOver) {
        state
            .send_command(PlayerCommand::EndSession)
            .context("failed ending session")?;
        // Give the loop a tick to tear the session down.
        std::thread::sleep(poll * 2);
    }
    let last = state.get_snapshot()?;
    state.shutdown().context("failed stopping game loop")?;

    if let Some(snapshot) = last {
        println!(
            "score {} | kills {} | shots {} | escapes {} | lives {}",
            snapshot.score.score,
            snapshot.score.kills,
            snapshot.score.shots_fired,
            snapshot.score.escapes,
            snapshot.score.lives,
        );
    }
    let best = store
        .lock()
        .map_err(|_| anyhow!("score store lock poisoned"))?
        .best(mode);
    println!("best {mode:?} score: {}", best.unwrap_or(0));
    let unlocked = unlocked
        .lock()
        .map_err(|_| anyhow!("achievement list lock poisoned"))?;
    if !unlocked.is_empty() {
        println!("achievements: {unlocked:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["lanefire"]).unwrap();
        assert!(args.config.is_none());
        assert!(matches!(args.mode, ModeArg::Slayer));
        assert_eq!(args.secs, 30);
    }

    #[test]
    fn test_args_full() {
        let args = Args::try_parse_from([
            "lanefire",
            "game.json",
            "--seed",
            "7",
            "--mode",
            "time-attack",
            "--secs",
            "5",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("game.json")));
        assert_eq!(args.seed, 7);
        assert_eq!(GameMode::from(args.mode), GameMode::TimeAttack);
        assert_eq!(args.secs, 5);
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let args = Args::try_parse_from(["lanefire", "/nonexistent/lanefire.json", "--seed", "1"])
            .unwrap();
        let err = load_config(&args).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/lanefire.json"));
    }
}
