//! Typed configuration bundles, supplied once at scene creation and
//! immutable thereafter.
//!
//! The bundles are serde-deserializable so the loading layer can pick its
//! own file format; defaults carry the stock tuning.

use serde::{Deserialize, Serialize};

use crate::types::{Rgba, Vec2};

/// Viewport dimensions and the frame-rate cap that paces the simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    /// Ticks per second the outer loop holds; also sets the special
    /// weapon's flash cadence.
    pub frame_rate_limit: u32,
}

impl WindowConfig {
    /// Center of the viewport (player spawn and respawn point).
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            frame_rate_limit: 60,
        }
    }
}

/// Player archetype parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    /// Position-units per tick, also the diagonal speed after
    /// renormalization.
    pub speed: f32,
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: u32,
    pub points: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            shape_radius: 32.0,
            collision_radius: 32.0,
            speed: 5.0,
            fill: Rgba::rgb(5, 5, 5),
            outline: Rgba::rgb(255, 0, 0),
            outline_thickness: 4,
            points: 8,
        }
    }
}

/// Enemy archetype parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub outline: Rgba,
    pub outline_thickness: u32,
    pub points_min: u32,
    pub points_max: u32,
    /// Lifespan in ticks given to split-off small enemies.
    pub small_lifespan: u32,
    /// Minimum ticks between automatic enemy spawns.
    pub spawn_interval: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            shape_radius: 32.0,
            collision_radius: 32.0,
            speed_min: 3.0,
            speed_max: 3.0,
            outline: Rgba::rgb(255, 255, 255),
            outline_thickness: 2,
            points_min: 3,
            points_max: 8,
            small_lifespan: 90,
            spawn_interval: 60,
        }
    }
}

/// Bullet archetype parameters. The special weapon derives from these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    pub speed: f32,
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: u32,
    pub points: u32,
    pub lifespan: u32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            shape_radius: 10.0,
            collision_radius: 10.0,
            speed: 20.0,
            fill: Rgba::rgb(255, 255, 255),
            outline: Rgba::rgb(255, 255, 255),
            outline_thickness: 2,
            points: 20,
            lifespan: 90,
        }
    }
}

/// Everything the scene needs, bundled for one-shot hand-over.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
}
