//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, dispatches events to observers and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lanefire_core::commands::PlayerCommand;
use lanefire_core::config::GameConfig;
use lanefire_core::enums::{GameMode, GamePhase};
use lanefire_core::error::ConfigError;
use lanefire_core::events::GameEvent;
use lanefire_core::lanes::LaneTable;
use lanefire_core::state::GameStateSnapshot;
use lanefire_core::types::{Position, SimTime};
use lanefire_rules::{ModeRules, Rulebook};

use crate::observer::GameObserver;
use crate::session::SessionState;
use crate::systems;
use crate::systems::spawner::Spawner;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    mode: Option<GameMode>,
    config: GameConfig,
    lanes: LaneTable,
    rng: ChaCha8Rng,
    spawner: Spawner,
    session: SessionState,
    rules: Box<dyn ModeRules>,
    observers: Vec<Box<dyn GameObserver>>,
    next_entity_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.game.validate()?;
        let lanes = config.game.lane_table()?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            mode: None,
            lanes,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            spawner: Spawner::new(config.game.spawn_interval_secs),
            session: SessionState::default(),
            rules: Box::new(Rulebook::new(config.game.time_attack_secs)),
            observers: Vec::new(),
            next_entity_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config: config.game,
        })
    }

    /// Replace the stock rulebook.
    pub fn with_rules(mut self, rules: Box<dyn ModeRules>) -> Self {
        self.rules = rules;
        self
    }

    /// Register a collaborator that receives every event after each tick.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one fixed tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = self.config.dt();
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        for observer in &mut self.observers {
            for event in &events {
                observer.on_event(event);
            }
        }

        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.mode,
            &self.session,
            &self.config,
            &self.lanes,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Mode of the current or most recent session.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// Score, lives and counters of the current or most recent session.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn lanes(&self) -> &LaneTable {
        &self.lanes
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy with chosen parameters (for tests). Returns its id.
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, lane: u8, y: f64, flight_duration_secs: f64) -> u32 {
        let params = world_setup::SpawnParams {
            lane: self.lanes.lane(lane),
            y,
            flight_duration_secs,
        };
        let spawn = world_setup::spawn_enemy(
            &mut self.world,
            &self.config,
            &self.lanes,
            &mut self.next_entity_id,
            &params,
        );
        spawn.enemy_id
    }

    /// Get a read-only reference to the spawner.
    #[cfg(test)]
    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession { mode } => {
                if matches!(self.phase, GamePhase::Active | GamePhase::Paused) {
                    self.end_session();
                }
                self.start_session(mode);
            }
            PlayerCommand::Fire { x, y } => {
                if self.phase != GamePhase::Active {
                    log::warn!("fire ignored in phase {:?}", self.phase);
                    return;
                }
                let aim = Position::new(x, y);
                let projectile_id = world_setup::spawn_projectile(
                    &mut self.world,
                    &self.config,
                    &mut self.next_entity_id,
                    aim,
                );
                self.session.shots_fired += 1;
                self.events.push(GameEvent::ProjectileFired { projectile_id, aim });
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::EndSession => {
                if matches!(self.phase, GamePhase::Active | GamePhase::Paused) {
                    self.end_session();
                } else {
                    log::warn!("end session ignored in phase {:?}", self.phase);
                }
            }
        }
    }

    fn start_session(&mut self, mode: GameMode) {
        self.world.clear();
        self.spawner.reset();
        self.next_entity_id = 0;
        self.time = SimTime::default();
        self.session = SessionState::new(mode, &self.config);
        self.mode = Some(mode);
        self.phase = GamePhase::Active;
        log::info!("session started: {mode:?} with {} lives", self.session.lives);
        self.events.push(GameEvent::SessionStarted {
            mode,
            lives: self.session.lives,
        });
    }

    /// Tear the session down. Clearing the world drops every pending stage
    /// timer with its projectile, so nothing scores after this point.
    fn end_session(&mut self) {
        self.world.clear();
        self.spawner.reset();
        self.phase = GamePhase::GameOver;
        let mode = self.session.mode;
        log::info!("session over: {mode:?}, final score {}", self.session.score);
        self.events.push(GameEvent::GameOver {
            final_score: self.session.score,
            mode,
        });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        self.session.begin_tick(dt);

        // 1. Spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &self.config,
            &self.lanes,
            &mut self.next_entity_id,
            &mut self.events,
            dt,
        );
        // 2. Enemy flight
        let escapes = systems::flight::run(&mut self.world, dt, &mut self.events);
        self.session.record_escapes(escapes);
        // 3. Projectile stages, collision and scoring
        systems::staging::run(
            &mut self.world,
            &self.config,
            &self.lanes,
            dt,
            &mut self.session,
            &mut self.events,
        );
        // 4. Mode rules
        let game_over = systems::rules::run(
            &mut self.session,
            self.rules.as_ref(),
            self.config.max_lives,
            &mut self.events,
        );
        // 5. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        if game_over {
            self.end_session();
        }
    }
}
