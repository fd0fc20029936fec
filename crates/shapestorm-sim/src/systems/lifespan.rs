//! Lifespan countdown and visual decay.
//!
//! Finite-lifespan entities fade linearly to transparent and die when
//! the countdown reaches zero; an entity spawned with lifespan `L` is
//! live for exactly `L` ticks. The special weapon additionally cycles
//! its colors at a capped rate and grows toward triple size, with its
//! collider kept in sync with the visual scale.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use shapestorm_core::components::{Collider, Lifespan, Shape, Tag};
use shapestorm_core::constants::*;

use crate::store::EntityStore;

pub fn run(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    current_frame: u64,
    frame_rate_limit: u32,
) {
    for (entity, tag) in store.entities() {
        if !store.is_alive(entity) {
            continue;
        }

        let remaining = {
            let world = store.world();
            let Ok(mut lifespan) = world.get::<&mut Lifespan>(entity) else {
                continue;
            };
            if lifespan.remaining > 0 {
                lifespan.remaining -= 1;
                let remaining = lifespan.remaining;
                let ratio = remaining as f32 / lifespan.total as f32;
                drop(lifespan);
                decay_shape(world, rng, entity, tag, ratio, current_frame, frame_rate_limit);
                remaining
            } else {
                0
            }
        };

        if remaining == 0 {
            store.destroy(entity);
        }
    }
}

fn decay_shape(
    world: &World,
    rng: &mut ChaCha8Rng,
    entity: hecs::Entity,
    tag: Tag,
    ratio: f32,
    current_frame: u64,
    frame_rate_limit: u32,
) {
    let Ok(mut shape) = world.get::<&mut Shape>(entity) else {
        return;
    };

    let alpha = (255.0 * ratio) as u8;
    shape.fill.a = alpha;
    shape.outline.a = alpha;

    if tag != Tag::SpecialWeapon {
        return;
    }

    // Color cycling, capped to a few flashes per second.
    let flash_interval = (frame_rate_limit / SPECIAL_FLASHES_PER_SECOND).max(1) as u64;
    if current_frame % flash_interval == 0 {
        let r = rng.gen_range(SPECIAL_FLASH_CHANNEL_MIN..=255);
        let g = rng.gen_range(SPECIAL_FLASH_CHANNEL_MIN..=255);
        let b = rng.gen_range(SPECIAL_FLASH_CHANNEL_MIN..=255);
        shape.fill.r = r;
        shape.fill.g = g;
        shape.fill.b = b;
        shape.outline.r = r;
        shape.outline.g = g;
        shape.outline.b = b;
    }

    // Linear ramp from 1x to the target scale over the lifespan.
    let growth = 1.0 + (SPECIAL_GROWTH_TARGET_SCALE - 1.0) * (1.0 - ratio);
    shape.scale = growth;
    let base_radius = shape.radius;
    drop(shape);

    if let Ok(mut collider) = world.get::<&mut Collider>(entity) {
        collider.radius = base_radius * growth;
    }
}
