//! The frame orchestrator.
//!
//! `Scene` owns the entity store, processes queued commands at the tick
//! boundary, runs all systems in order, and produces a `RenderFrame`
//! each tick. Completely headless (no windowing dependency), enabling
//! deterministic testing: the same seed and command sequence replay the
//! same session.

use std::collections::VecDeque;

use hecs::Entity;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use shapestorm_core::commands::{Action, ActionKind, ActionPhase, SceneCommand};
use shapestorm_core::components::{InputState, Transform};
use shapestorm_core::config::GameConfig;
use shapestorm_core::constants::SPECIAL_SHOT_COOLDOWN_TICKS;
use shapestorm_core::state::RenderFrame;
use shapestorm_core::types::Vec2;

use crate::spawner;
use crate::store::EntityStore;
use crate::systems;

/// Whether the systems pass runs. Rendering hand-off happens in either
/// state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneState {
    #[default]
    Running,
    Paused,
}

/// The simulation scene. Owns the entity store and all sim state.
pub struct Scene {
    store: EntityStore,
    config: GameConfig,
    rng: ChaCha8Rng,
    player: Entity,
    score: u32,
    current_frame: u64,
    last_enemy_spawn: u64,
    last_special_shot: Option<u64>,
    target: Vec2,
    state: SceneState,
    command_queue: VecDeque<SceneCommand>,
}

impl Scene {
    /// Create a scene from immutable config bundles and an RNG seed.
    /// Same seed = same session, command for command.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut store = EntityStore::new();
        let player = spawner::spawn_player(&mut store, &config.player, &config.window);
        // Flush immediately so the player is live before the first tick;
        // commands may arrive ahead of it.
        store.update();
        Self {
            store,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            player,
            score: 0,
            current_frame: 0,
            last_enemy_spawn: 0,
            last_special_shot: None,
            target: Vec2::ZERO,
            state: SceneState::default(),
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SceneCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SceneCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the render frame.
    ///
    /// Order per tick: drain commands, purge-and-refresh the store, then
    /// (unless paused) spawn gate, movement, collision, lifespan, and
    /// the frame counter; the render hand-off always runs.
    pub fn tick(&mut self) -> RenderFrame {
        self.process_commands();
        self.store.update();

        if self.state == SceneState::Running {
            self.spawn_enemy_if_due();
            systems::movement::run(&mut self.store, &self.config.player, &self.config.window);
            systems::collision::run(
                &mut self.store,
                self.player,
                &self.config.enemy,
                &self.config.window,
                &mut self.score,
            );
            systems::lifespan::run(
                &mut self.store,
                &mut self.rng,
                self.current_frame,
                self.config.window.frame_rate_limit,
            );
            self.current_frame += 1;
        }

        systems::snapshot::build(
            &mut self.store,
            self.score,
            self.current_frame,
            self.state == SceneState::Paused,
        )
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_frame(&self) -> u64 {
        self.current_frame
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    /// The distinguished player entity. Always resolves to a live entity
    /// once the first tick has run; the player is recentered on death,
    /// never destroyed.
    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::Action { action } => self.apply_action(action),
            SceneCommand::SetTarget { target } => self.target = target,
            SceneCommand::SetPaused { paused } => {
                self.state = if paused {
                    SceneState::Paused
                } else {
                    SceneState::Running
                };
            }
        }
    }

    fn apply_action(&mut self, action: Action) {
        match action.phase {
            ActionPhase::Start => match action.kind {
                ActionKind::Up | ActionKind::Down | ActionKind::Left | ActionKind::Right => {
                    self.set_input_flag(action.kind, true);
                }
                ActionKind::Shoot => {
                    let origin = self.player_position();
                    spawner::spawn_bullet(&mut self.store, &self.config.bullet, origin, self.target);
                }
                ActionKind::SpecialShoot => self.try_special_shot(),
            },
            ActionPhase::End => match action.kind {
                ActionKind::Up | ActionKind::Down | ActionKind::Left | ActionKind::Right => {
                    self.set_input_flag(action.kind, false);
                }
                // Shots have no release behavior.
                ActionKind::Shoot | ActionKind::SpecialShoot => {}
            },
        }
    }

    fn try_special_shot(&mut self) {
        let ready = self
            .last_special_shot
            .map_or(true, |last| self.current_frame - last >= SPECIAL_SHOT_COOLDOWN_TICKS);
        if !ready {
            debug!("special weapon on cooldown at frame {}", self.current_frame);
            return;
        }

        let origin = self.player_position();
        let spawned =
            spawner::spawn_special_weapon(&mut self.store, &self.config.bullet, origin, self.target);
        if spawned.is_some() {
            self.last_special_shot = Some(self.current_frame);
        }
    }

    fn set_input_flag(&mut self, kind: ActionKind, pressed: bool) {
        let Ok(mut input) = self.store.world().get::<&mut InputState>(self.player) else {
            return;
        };
        match kind {
            ActionKind::Up => input.up = pressed,
            ActionKind::Down => input.down = pressed,
            ActionKind::Left => input.left = pressed,
            ActionKind::Right => input.right = pressed,
            ActionKind::Shoot | ActionKind::SpecialShoot => {}
        }
    }

    fn player_position(&self) -> Vec2 {
        self.store
            .world()
            .get::<&Transform>(self.player)
            .map(|tf| tf.position)
            .unwrap_or_else(|_| self.config.window.center())
    }

    /// Mutable store access for tests that stage entities directly.
    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// Automatic enemy pressure, throttled by the configured interval.
    fn spawn_enemy_if_due(&mut self) {
        if self.current_frame - self.last_enemy_spawn > self.config.enemy.spawn_interval as u64 {
            let player_position = self.player_position();
            spawner::spawn_enemy(
                &mut self.store,
                &mut self.rng,
                &self.config.enemy,
                player_position,
                &self.config.window,
            );
            self.last_enemy_spawn = self.current_frame;
        }
    }
}
