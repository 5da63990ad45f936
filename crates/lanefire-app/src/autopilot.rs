//! Demo autopilot: picks foreground enemies off before they escape.
//!
//! Works only from snapshots, the same view a player has. Enemy speed is
//! estimated from successive positions and the shot is led by the time it
//! takes a projectile to reach the foreground lane.

use std::collections::HashMap;

use lanefire_core::commands::PlayerCommand;
use lanefire_core::enums::GamePhase;
use lanefire_core::state::GameStateSnapshot;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Seconds between firing and the shot's first lane test.
    lead_secs: f64,
    /// Minimum sim time between shots.
    cooldown_secs: f64,
    last_shot_at: Option<f64>,
    /// Last seen (sim time, x) per enemy.
    tracks: HashMap<u32, (f64, f64)>,
    /// Sim time of the last shot at each enemy.
    targeted: HashMap<u32, f64>,
}

impl Autopilot {
    pub fn new(lead_secs: f64, cooldown_secs: f64) -> Self {
        Self {
            lead_secs,
            cooldown_secs,
            last_shot_at: None,
            tracks: HashMap::new(),
            targeted: HashMap::new(),
        }
    }

    /// Look at the latest snapshot and maybe fire.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        if snapshot.phase != GamePhase::Active {
            return None;
        }
        let now = snapshot.time.elapsed_secs;

        let mut velocities = HashMap::new();
        for enemy in &snapshot.enemies {
            if let Some(&(seen_at, seen_x)) = self.tracks.get(&enemy.id) {
                if now > seen_at {
                    velocities.insert(enemy.id, (enemy.position.x - seen_x) / (now - seen_at));
                }
            }
        }
        self.tracks = snapshot
            .enemies
            .iter()
            .map(|e| (e.id, (now, e.position.x)))
            .collect();
        // A shot that has had twice its flight lead to land and the enemy is
        // still around missed; that enemy is fair game again.
        let retry_after = 2.0 * self.lead_secs;
        let tracks = &self.tracks;
        self.targeted
            .retain(|id, shot_at| tracks.contains_key(id) && now - *shot_at < retry_after);

        if self
            .last_shot_at
            .is_some_and(|at| now - at < self.cooldown_secs)
        {
            return None;
        }

        // The one closest to escaping, among those we can lead.
        let target = snapshot
            .enemies
            .iter()
            .filter(|e| e.lane.is_foreground() && !self.targeted.contains_key(&e.id))
            .filter_map(|e| velocities.get(&e.id).map(|v| (e, *v)))
            .min_by(|(a, _), (b, _)| a.position.x.total_cmp(&b.position.x))?;

        let (enemy, velocity) = target;
        self.targeted.insert(enemy.id, now);
        self.last_shot_at = Some(now);
        log::debug!("autopilot targets enemy {}", enemy.id);
        Some(PlayerCommand::Fire {
            x: enemy.position.x + velocity * self.lead_secs,
            y: enemy.position.y,
        })
    }
}
