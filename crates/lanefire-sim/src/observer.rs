//! Collaborator hook for everything outside the core: rendering, audio,
//! effects, achievements, leaderboards.
//!
//! Observers are constructed by the host and handed to the engine; the
//! engine calls them once per event, in emission order, after each tick.

use lanefire_core::events::GameEvent;

pub trait GameObserver: Send {
    fn on_event(&mut self, event: &GameEvent);
}
