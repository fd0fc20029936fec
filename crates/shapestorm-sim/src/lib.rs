//! Simulation engine for Shapestorm.
//!
//! Owns the hecs ECS world behind an insertion-ordered entity store, runs
//! the per-tick systems in a fixed order, and produces a `RenderFrame`
//! for the presentation layer each tick. Completely headless.

pub mod scene;
pub mod spawner;
pub mod store;
pub mod systems;

pub use shapestorm_core as core;
pub use scene::{Scene, SceneState};
pub use store::EntityStore;
