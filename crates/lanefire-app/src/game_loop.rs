//! Game loop thread: runs the simulation engine at the configured tick rate.
//!
//! The engine is built on the caller's thread so config errors surface
//! there, then moved into the loop thread. Commands arrive via `mpsc`
//! channel. Snapshots are stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use lanefire_core::state::GameStateSnapshot;
use lanefire_sim::engine::{SimConfig, SimulationEngine};
use lanefire_sim::GameObserver;

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Wall-clock duration of one tick.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    observers: Vec<Box<dyn GameObserver>>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let mut engine = SimulationEngine::new(config)?;
    for observer in observers {
        engine.add_observer(observer);
    }

    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let handle = std::thread::Builder::new()
        .name("lanefire-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let tick = tick_duration(engine.config().tick_rate);
    let mut next_tick_time = Instant::now();
    log::info!("game loop started at {} Hz", engine.config().tick_rate);

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += tick;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
