//! Presentation-layer seam.
//!
//! The sim never talks to a window directly. A `Frontend` translates
//! device input into scene commands and receives the render frame once
//! per tick, paused or not. The windowing/rendering implementation lives
//! outside this repository; the headless variant here drives soak runs
//! and tests.

use std::collections::VecDeque;

use shapestorm_core::commands::SceneCommand;
use shapestorm_core::state::RenderFrame;
use shapestorm_sim::Scene;

pub trait Frontend {
    /// Drain pending input, already translated to scene commands.
    fn poll_commands(&mut self) -> Vec<SceneCommand>;
    /// Hand off the frame for drawing.
    fn present(&mut self, frame: &RenderFrame);
    /// False once the presentation layer has been closed.
    fn is_open(&self) -> bool;
}

/// Drive a scene against a frontend until it closes: poll input, tick,
/// present.
pub fn run(scene: &mut Scene, frontend: &mut impl Frontend) {
    while frontend.is_open() {
        for command in frontend.poll_commands() {
            scene.queue_command(command);
        }
        let frame = scene.tick();
        frontend.present(&frame);
    }
}

/// Frontend with no window: replays a scripted command stream for a
/// fixed number of ticks and records what it saw.
pub struct HeadlessFrontend {
    ticks_remaining: u64,
    /// (tick index, command) pairs, ordered by tick.
    script: VecDeque<(u64, SceneCommand)>,
    current_tick: u64,
    pub frames_presented: u64,
    pub last_frame: Option<RenderFrame>,
}

impl HeadlessFrontend {
    pub fn new(ticks: u64) -> Self {
        Self::with_script(ticks, Vec::new())
    }

    pub fn with_script(ticks: u64, script: Vec<(u64, SceneCommand)>) -> Self {
        Self {
            ticks_remaining: ticks,
            script: script.into(),
            current_tick: 0,
            frames_presented: 0,
            last_frame: None,
        }
    }
}

impl Frontend for HeadlessFrontend {
    fn poll_commands(&mut self) -> Vec<SceneCommand> {
        let mut commands = Vec::new();
        while let Some(&(tick, command)) = self.script.front() {
            if tick > self.current_tick {
                break;
            }
            commands.push(command);
            self.script.pop_front();
        }
        self.current_tick += 1;
        commands
    }

    fn present(&mut self, frame: &RenderFrame) {
        self.frames_presented += 1;
        self.last_frame = Some(frame.clone());
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
    }

    fn is_open(&self) -> bool {
        self.ticks_remaining > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapestorm_core::commands::{Action, ActionKind};
    use shapestorm_core::config::GameConfig;
    use shapestorm_core::types::Vec2;

    #[test]
    fn test_headless_run_presents_every_tick() {
        let mut scene = Scene::new(GameConfig::default(), 3);
        let mut frontend = HeadlessFrontend::new(120);
        run(&mut scene, &mut frontend);

        assert_eq!(frontend.frames_presented, 120);
        let frame = frontend.last_frame.unwrap();
        assert_eq!(frame.frame, 120);
        assert!(!frame.shapes.is_empty());
    }

    #[test]
    fn test_scripted_shot_reaches_the_scene() {
        let mut scene = Scene::new(GameConfig::default(), 3);
        let script = vec![
            (
                5,
                SceneCommand::SetTarget {
                    target: Vec2::new(0.0, 0.0),
                },
            ),
            (
                5,
                SceneCommand::Action {
                    action: Action::start(ActionKind::Shoot),
                },
            ),
        ];
        let mut frontend = HeadlessFrontend::with_script(8, script);
        run(&mut scene, &mut frontend);

        // Player plus one bullet in flight.
        let frame = frontend.last_frame.unwrap();
        assert_eq!(frame.shapes.len(), 2);
    }

    #[test]
    fn test_scripted_pause_holds_the_frame_counter() {
        let mut scene = Scene::new(GameConfig::default(), 3);
        let script = vec![(10, SceneCommand::SetPaused { paused: true })];
        let mut frontend = HeadlessFrontend::with_script(30, script);
        run(&mut scene, &mut frontend);

        let frame = frontend.last_frame.unwrap();
        assert!(frame.paused);
        assert_eq!(frame.frame, 10);
    }
}
