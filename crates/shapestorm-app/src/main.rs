//! Headless soak runner.
//!
//! Drives the simulation for a fixed number of ticks with a scripted
//! fire pattern and reports the final score. Useful for exercising the
//! sim at full speed without a presentation layer; a windowed frontend
//! would use `game_loop::spawn_game_loop` instead.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use shapestorm_app::config::load_config;
use shapestorm_app::frontend::{self, HeadlessFrontend};
use shapestorm_core::commands::{Action, ActionKind, SceneCommand};
use shapestorm_core::config::{GameConfig, WindowConfig};
use shapestorm_core::types::Vec2;
use shapestorm_sim::Scene;

#[derive(Parser)]
#[command(name = "shapestorm", about = "Headless soak runner for the Shapestorm sim")]
struct Args {
    /// Path to a JSON game config; built-in tuning when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed. Same seed, same session.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                error!("{err}");
                process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    info!(
        "soak run: {} ticks at seed {} ({}x{} viewport)",
        args.ticks, args.seed, config.window.width, config.window.height
    );

    let mut scene = Scene::new(config, args.seed);
    let script = fire_script(args.ticks, args.seed, &config.window);
    let mut headless = HeadlessFrontend::with_script(args.ticks, script);
    frontend::run(&mut scene, &mut headless);

    let score = headless.last_frame.map(|frame| frame.score).unwrap_or(0);
    info!("soak complete after {} frames", headless.frames_presented);
    println!("score: {score}");
}

/// Periodic shots at seeded-random targets, with an occasional special,
/// so a soak run exercises the full spawn/collision/decay path.
fn fire_script(ticks: u64, seed: u64, window: &WindowConfig) -> Vec<(u64, SceneCommand)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut script = Vec::new();

    let mut tick = 30;
    let mut shot = 0u64;
    while tick < ticks {
        let target = Vec2::new(
            rng.gen_range(0.0..window.width),
            rng.gen_range(0.0..window.height),
        );
        script.push((tick, SceneCommand::SetTarget { target }));
        let kind = if shot % 6 == 5 {
            ActionKind::SpecialShoot
        } else {
            ActionKind::Shoot
        };
        script.push((
            tick,
            SceneCommand::Action {
                action: Action::start(kind),
            },
        ));
        shot += 1;
        tick += 45;
    }
    script
}
