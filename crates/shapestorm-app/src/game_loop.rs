//! Game loop thread — runs the scene at the configured frame rate and
//! publishes render frames.
//!
//! The scene is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; each iteration drains
//! them, ticks once, and stores the latest frame in shared state for the
//! presentation layer to poll.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use shapestorm_core::commands::SceneCommand;
use shapestorm_core::config::GameConfig;
use shapestorm_core::state::RenderFrame;
use shapestorm_sim::Scene;

/// Messages accepted by the loop thread.
pub enum LoopCommand {
    Scene(SceneCommand),
    Shutdown,
}

/// Nominal duration of one tick at the given frame-rate cap.
fn tick_duration(frame_rate_limit: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / frame_rate_limit.max(1) as u64)
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input layer to use.
pub fn spawn_game_loop(
    config: GameConfig,
    seed: u64,
    latest_frame: Arc<Mutex<Option<RenderFrame>>>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("shapestorm-game-loop".into())
        .spawn(move || {
            run_game_loop(config, seed, cmd_rx, &latest_frame);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: GameConfig,
    seed: u64,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_frame: &Mutex<Option<RenderFrame>>,
) {
    let step = tick_duration(config.window.frame_rate_limit);
    let mut scene = Scene::new(config, seed);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Scene(command)) => scene.queue_command(command),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the scene handles pause semantics internally)
        let frame = scene.tick();

        // 3. Store the latest frame for the presentation layer to poll
        if let Ok(mut lock) = latest_frame.lock() {
            *lock = Some(frame);
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += step;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > step * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapestorm_core::commands::{Action, ActionKind};

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Scene(SceneCommand::SetPaused { paused: true }))
            .unwrap();
        tx.send(LoopCommand::Scene(SceneCommand::Action {
            action: Action::start(ActionKind::Shoot),
        }))
        .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Scene(SceneCommand::SetPaused { paused: true })
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_from_frame_rate() {
        assert_eq!(tick_duration(60).as_nanos(), 1_000_000_000 / 60);
        assert_eq!(tick_duration(30).as_nanos(), 1_000_000_000 / 30);
        // A zero cap must not divide by zero.
        assert_eq!(tick_duration(0).as_nanos(), 1_000_000_000);
    }

    #[test]
    fn test_loop_thread_publishes_frames_and_shuts_down() {
        let latest_frame = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(GameConfig::default(), 1, Arc::clone(&latest_frame));

        // Wait (bounded) for the loop to publish at least one frame.
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if latest_frame.lock().unwrap().is_some() {
                break;
            }
            assert!(Instant::now() < deadline, "loop never published a frame");
            std::thread::sleep(Duration::from_millis(5));
        }

        tx.send(LoopCommand::Shutdown).unwrap();
    }
}
