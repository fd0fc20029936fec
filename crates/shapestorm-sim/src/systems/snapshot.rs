//! Render-frame hand-off: collects every live drawable entity into a
//! `RenderFrame` for the presentation layer.
//!
//! Runs every tick, paused or not, and owns the cosmetic per-tick
//! rotation increment.

use shapestorm_core::components::{Shape, Transform};
use shapestorm_core::constants::ROTATION_DEGREES_PER_TICK;
use shapestorm_core::state::{RenderFrame, ShapeView};

use crate::store::EntityStore;

pub fn build(store: &mut EntityStore, score: u32, frame: u64, paused: bool) -> RenderFrame {
    let mut shapes = Vec::with_capacity(store.len());

    // Entities marked dead this tick are still drawn once; the purge at
    // the next store update removes them. An entity with lifespan L is
    // therefore on screen for exactly L ticks.
    for (entity, _tag) in store.entities() {
        let world = store.world();
        let Ok(mut tf) = world.get::<&mut Transform>(entity) else {
            continue;
        };
        let Ok(shape) = world.get::<&Shape>(entity) else {
            continue;
        };

        tf.angle += ROTATION_DEGREES_PER_TICK;

        shapes.push(ShapeView {
            position: tf.position,
            angle: tf.angle,
            radius: shape.radius,
            points: shape.points,
            scale: shape.scale,
            fill: shape.fill,
            outline: shape.outline,
            outline_thickness: shape.outline_thickness,
        });
    }

    RenderFrame {
        frame,
        paused,
        score,
        shapes,
    }
}
