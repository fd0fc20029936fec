//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{Rgba, Vec2};

/// Entity archetype. Assigned once at spawn and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Player,
    Enemy,
    Bullet,
    SpecialWeapon,
}

/// Position, velocity, and cosmetic rotation angle (degrees).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// Position-units per tick.
    pub velocity: Vec2,
    pub angle: f32,
}

impl Transform {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            angle: 0.0,
        }
    }
}

/// Drawable geometry owned by the sim as authoritative render state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shape {
    pub radius: f32,
    /// Polygon vertex count.
    pub points: u32,
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: u32,
    /// Uniform draw scale; diverges from 1.0 only for the special weapon.
    pub scale: f32,
}

/// Collision circle. May diverge from `Shape.radius` as entities grow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f32,
}

/// Countdown in ticks until automatic destruction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifespan {
    pub remaining: u32,
    pub total: u32,
}

impl Lifespan {
    pub fn new(total: u32) -> Self {
        Self {
            remaining: total,
            total,
        }
    }
}

/// Points awarded (or forfeited) when this entity is involved in a kill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Score {
    pub value: u32,
}

/// Directional input flags. Present only on the player.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}
