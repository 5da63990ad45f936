//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use lanefire_core::commands::PlayerCommand;
use lanefire_core::state::GameStateSnapshot;
use lanefire_sim::engine::SimConfig;
use lanefire_sim::GameObserver;

use crate::error::AppError;
use crate::game_loop;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// Send + Sync so it can be handed to any input thread:
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that does not exist before `start_session`
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start_session` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
    loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the game loop thread if it is not already running.
    pub fn start_session(
        &self,
        config: SimConfig,
        observers: Vec<Box<dyn GameObserver>>,
    ) -> Result<(), AppError> {
        let mut running = self.running.lock()?;
        if *running {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, observers, Arc::clone(&self.latest_snapshot))?;

        *self.command_tx.lock()? = Some(cmd_tx);
        *self.loop_thread.lock()? = Some(handle);
        *running = true;
        Ok(())
    }

    /// Forward a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock()?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|_| AppError::ChannelClosed),
            None => Err(AppError::NotStarted),
        }
    }

    /// Latest snapshot, if the loop has ticked at least once.
    pub fn get_snapshot(&self) -> Result<Option<GameStateSnapshot>, AppError> {
        Ok(self.latest_snapshot.lock()?.clone())
    }

    /// Stop the loop thread and wait for it to exit.
    pub fn shutdown(&self) -> Result<(), AppError> {
        let mut running = self.running.lock()?;
        if !*running {
            return Err(AppError::NotStarted);
        }

        if let Some(tx) = self.command_tx.lock()?.take() {
            // The thread may already be gone; joining below covers that case.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        if let Some(handle) = self.loop_thread.lock()?.take() {
            if handle.join().is_err() {
                log::warn!("game loop thread panicked");
            }
        }
        *running = false;
        Ok(())
    }
}
