//! Render frame — the complete visible state handed to the renderer each
//! tick.

use serde::{Deserialize, Serialize};

use crate::types::{Rgba, Vec2};

/// Everything the presentation layer needs to draw one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Simulation frame counter (does not advance while paused).
    pub frame: u64,
    pub paused: bool,
    /// Player score for the HUD readout.
    pub score: u32,
    /// Live drawable entities, in spawn order.
    pub shapes: Vec<ShapeView>,
}

/// One drawable entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShapeView {
    pub position: Vec2,
    /// Cosmetic rotation in degrees.
    pub angle: f32,
    pub radius: f32,
    pub points: u32,
    pub scale: f32,
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: u32,
}
