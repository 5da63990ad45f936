//! Session rules evaluation.
//!
//! Called once per active tick with what happened during that tick.
//! Returns the life changes and whether the session is over; the engine
//! applies them and emits the matching events.

use lanefire_core::enums::GameMode;

use crate::profiles::get_profile;

/// What the rules need to know about the current tick.
#[derive(Debug, Clone, Default)]
pub struct RulesContext {
    pub mode: GameMode,
    pub lives: u32,
    pub max_lives: u32,
    /// Session time, including this tick.
    pub elapsed_secs: f64,
    pub hits: u32,
    /// Hits this tick whose enemy was in the foreground lane.
    pub foreground_hits: u32,
    /// Enemies that escaped this tick.
    pub escapes: u32,
}

/// Output of the rules for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulesUpdate {
    pub lives_gained: u32,
    pub lives_lost: u32,
    pub game_over: bool,
    pub time_remaining_secs: Option<f64>,
}

/// A game-mode rules collaborator.
pub trait ModeRules: Send {
    fn evaluate(&self, ctx: &RulesContext) -> RulesUpdate;
}

/// The stock rules for practice, slayer and time-attack.
#[derive(Debug, Clone)]
pub struct Rulebook {
    time_attack_secs: f64,
}

impl Rulebook {
    pub fn new(time_attack_secs: f64) -> Self {
        Self { time_attack_secs }
    }
}

impl ModeRules for Rulebook {
    fn evaluate(&self, ctx: &RulesContext) -> RulesUpdate {
        let profile = get_profile(ctx.mode, self.time_attack_secs);

        let lives_gained = if profile.foreground_hit_grants_life {
            ctx.foreground_hits
                .min(ctx.max_lives.saturating_sub(ctx.lives))
        } else {
            0
        };
        let lives_after_gain = ctx.lives + lives_gained;

        let lives_lost = if profile.escape_costs_life {
            ctx.escapes.min(lives_after_gain)
        } else {
            0
        };
        let lives_after = lives_after_gain - lives_lost;

        let time_remaining_secs = profile
            .time_limit_secs
            .map(|limit| (limit - ctx.elapsed_secs).max(0.0));

        let out_of_lives = profile.escape_costs_life && lives_after == 0;
        let out_of_time = time_remaining_secs.is_some_and(|t| t <= 0.0);

        if out_of_lives || out_of_time {
            log::info!(
                "{:?} session over: lives={}, elapsed={:.2}s",
                ctx.mode,
                lives_after,
                ctx.elapsed_secs
            );
        }

        RulesUpdate {
            lives_gained,
            lives_lost,
            game_over: out_of_lives || out_of_time,
            time_remaining_secs,
        }
    }
}
