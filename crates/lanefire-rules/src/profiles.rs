//! Mode-specific rule profiles.
//!
//! Consolidates per-mode parameters for the rulebook.

use lanefire_core::enums::GameMode;

/// Rule profile for a game mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeProfile {
    /// Whether an enemy crossing the screen costs a life.
    pub escape_costs_life: bool,
    /// Whether a foreground-lane kill awards a life (up to the cap).
    pub foreground_hit_grants_life: bool,
    /// Session clock, `None` for untimed modes.
    pub time_limit_secs: Option<f64>,
}

/// Get the rule profile for a given mode.
pub fn get_profile(mode: GameMode, time_attack_secs: f64) -> ModeProfile {
    match mode {
        GameMode::Practice => ModeProfile {
            escape_costs_life: false,
            foreground_hit_grants_life: false,
            time_limit_secs: None,
        },
        GameMode::Slayer => ModeProfile {
            escape_costs_life: true,
            foreground_hit_grants_life: true,
            time_limit_secs: None,
        },
        GameMode::TimeAttack => ModeProfile {
            escape_costs_life: false,
            foreground_hit_grants_life: false,
            time_limit_secs: Some(time_attack_secs),
        },
    }
}
