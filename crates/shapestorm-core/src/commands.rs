//! Scene commands sent from the input translator to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Abstract input action, already translated from raw device events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Up,
    Down,
    Left,
    Right,
    Shoot,
    SpecialShoot,
}

/// Whether the action begins (key press) or ends (key release).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionPhase {
    Start,
    End,
}

/// A discrete input event delivered to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub phase: ActionPhase,
}

impl Action {
    pub fn start(kind: ActionKind) -> Self {
        Self {
            kind,
            phase: ActionPhase::Start,
        }
    }

    pub fn end(kind: ActionKind) -> Self {
        Self {
            kind,
            phase: ActionPhase::End,
        }
    }
}

/// All messages the outside world can send the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneCommand {
    /// Apply a translated input action.
    Action { action: Action },
    /// Record the aim point used by subsequent shots.
    SetTarget { target: Vec2 },
    /// Pause or resume the systems pass. The decision is made by the
    /// outer layer; the scene only holds the state.
    SetPaused { paused: bool },
}
