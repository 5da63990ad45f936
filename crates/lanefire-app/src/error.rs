//! Host-side errors.

use std::fmt;

use lanefire_core::error::ConfigError;

#[derive(Debug)]
pub enum AppError {
    /// `start_session` called while the loop thread is alive.
    AlreadyRunning,
    /// A command was sent before the loop was started.
    NotStarted,
    /// The loop thread is gone.
    ChannelClosed,
    /// A thread panicked while holding shared state.
    LockPoisoned,
    Config(ConfigError),
    Spawn(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::AlreadyRunning => write!(f, "simulation already running"),
            AppError::NotStarted => write!(f, "simulation not started"),
            AppError::ChannelClosed => write!(f, "game loop channel closed"),
            AppError::LockPoisoned => write!(f, "shared state lock poisoned"),
            AppError::Config(e) => write!(f, "invalid config: {e}"),
            AppError::Spawn(e) => write!(f, "failed to spawn game loop thread: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}
