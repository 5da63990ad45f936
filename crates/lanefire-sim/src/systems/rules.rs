//! Mode rules system: hands the tick's tally to the rules collaborator and
//! applies its verdict to the session.

use lanefire_core::events::GameEvent;
use lanefire_rules::{ModeRules, RulesContext};

use crate::session::SessionState;

/// Evaluate the rules for this tick. Returns true when the session is over.
pub fn run(
    session: &mut SessionState,
    rules: &dyn ModeRules,
    max_lives: u32,
    events: &mut Vec<GameEvent>,
) -> bool {
    let ctx = RulesContext {
        mode: session.mode,
        lives: session.lives,
        max_lives,
        elapsed_secs: session.elapsed_secs,
        hits: session.tally.hits,
        foreground_hits: session.tally.foreground_hits,
        escapes: session.tally.escapes,
    };
    let update = rules.evaluate(&ctx);

    for _ in 0..update.lives_gained {
        session.lives += 1;
        events.push(GameEvent::LifeGained {
            lives: session.lives,
        });
    }
    for _ in 0..update.lives_lost {
        session.lives = session.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            lives: session.lives,
        });
    }
    session.time_remaining_secs = update.time_remaining_secs;

    update.game_over
}
