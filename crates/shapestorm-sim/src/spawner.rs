//! Entity spawn factories.
//!
//! Creates player, enemy, bullet, and special-weapon entities with their
//! component bundles derived from the config archetypes. All entities go
//! through the store's deferred-add path and become live at the next
//! store update.

use std::f32::consts::TAU;

use hecs::Entity;
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use shapestorm_core::components::{Collider, InputState, Lifespan, Score, Shape, Tag, Transform};
use shapestorm_core::config::{BulletConfig, EnemyConfig, PlayerConfig, WindowConfig};
use shapestorm_core::constants::*;
use shapestorm_core::types::{Rgba, Vec2};

use crate::store::EntityStore;

/// Spawn the player at the viewport center with zero velocity.
pub fn spawn_player(store: &mut EntityStore, config: &PlayerConfig, window: &WindowConfig) -> Entity {
    store.add(
        Tag::Player,
        (
            Transform::new(window.center(), Vec2::ZERO),
            Shape {
                radius: config.shape_radius,
                points: config.points,
                fill: config.fill,
                outline: config.outline,
                outline_thickness: config.outline_thickness,
                scale: 1.0,
            },
            Collider {
                radius: config.collision_radius,
            },
            InputState::default(),
        ),
    )
}

/// Spawn an enemy at a random on-screen position, heading toward the
/// player at a random speed, worth 100 points per vertex.
pub fn spawn_enemy(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    config: &EnemyConfig,
    player_position: Vec2,
    window: &WindowConfig,
) -> Entity {
    let radius = config.shape_radius;
    let position = Vec2::new(
        rng.gen_range(radius..=window.width - radius),
        rng.gen_range(radius..=window.height - radius),
    );

    let speed = rng.gen_range(config.speed_min..=config.speed_max);
    let velocity = match (player_position - position).normalized() {
        Some(direction) => direction * speed,
        // Spawned exactly on the player: pick a heading at random.
        None => Vec2::from_angle(rng.gen_range(0.0..TAU), speed),
    };

    let points = rng.gen_range(config.points_min..=config.points_max);
    let fill = Rgba::rgb(
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    );

    debug!("spawning enemy at ({:.0}, {:.0}) with {points} vertices", position.x, position.y);

    store.add(
        Tag::Enemy,
        (
            Transform::new(position, velocity),
            Shape {
                radius,
                points,
                fill,
                outline: config.outline,
                outline_thickness: config.outline_thickness,
                scale: 1.0,
            },
            Collider {
                radius: config.collision_radius,
            },
            Score {
                value: ENEMY_SCORE_PER_VERTEX * points,
            },
        ),
    )
}

/// Split a destroyed permanent enemy into one child per vertex, evenly
/// fanned over a full turn at the parent's speed. Children are half the
/// parent's size, worth double points, and carry a finite lifespan.
pub fn spawn_small_enemies(store: &mut EntityStore, config: &EnemyConfig, parent: Entity) {
    let world = store.world();
    let Ok(parent_tf) = world.get::<&Transform>(parent).map(|c| *c) else {
        return;
    };
    let Ok(parent_shape) = world.get::<&Shape>(parent).map(|c| *c) else {
        return;
    };
    let Ok(parent_collider) = world.get::<&Collider>(parent).map(|c| *c) else {
        return;
    };
    let Ok(parent_score) = world.get::<&Score>(parent).map(|c| *c) else {
        return;
    };

    let speed = parent_tf.velocity.length();
    let angle_step = TAU / parent_shape.points as f32;

    for i in 0..parent_shape.points {
        let velocity = Vec2::from_angle(i as f32 * angle_step, speed);
        store.add(
            Tag::Enemy,
            (
                Transform::new(parent_tf.position, velocity),
                Shape {
                    radius: parent_shape.radius / 2.0,
                    points: parent_shape.points,
                    fill: parent_shape.fill,
                    outline: parent_shape.outline,
                    outline_thickness: parent_shape.outline_thickness,
                    scale: 1.0,
                },
                Collider {
                    radius: parent_collider.radius / 2.0,
                },
                Lifespan::new(config.small_lifespan),
                Score {
                    value: parent_score.value * SMALL_ENEMY_SCORE_MULTIPLIER,
                },
            ),
        );
    }

    debug!("split enemy into {} small enemies", parent_shape.points);
}

/// Spawn a bullet from `origin` toward `target`. A target coinciding
/// with the origin has no direction; the shot is dropped.
pub fn spawn_bullet(
    store: &mut EntityStore,
    config: &BulletConfig,
    origin: Vec2,
    target: Vec2,
) -> Option<Entity> {
    let Some(direction) = (target - origin).normalized() else {
        debug!("shot target coincides with shooter, dropping");
        return None;
    };

    Some(store.add(
        Tag::Bullet,
        (
            Transform::new(origin, direction * config.speed),
            Shape {
                radius: config.shape_radius,
                points: config.points,
                fill: config.fill,
                outline: config.outline,
                outline_thickness: config.outline_thickness,
                scale: 1.0,
            },
            Collider {
                radius: config.collision_radius,
            },
            Lifespan::new(config.lifespan),
        ),
    ))
}

/// Spawn the special weapon: a bullet variant at half speed, triple
/// size, and triple lifespan that survives enemy contact.
pub fn spawn_special_weapon(
    store: &mut EntityStore,
    config: &BulletConfig,
    origin: Vec2,
    target: Vec2,
) -> Option<Entity> {
    let Some(direction) = (target - origin).normalized() else {
        debug!("shot target coincides with shooter, dropping");
        return None;
    };

    Some(store.add(
        Tag::SpecialWeapon,
        (
            Transform::new(origin, direction * (config.speed * SPECIAL_SPEED_FACTOR)),
            Shape {
                radius: config.shape_radius * SPECIAL_RADIUS_FACTOR,
                points: config.points,
                fill: config.fill,
                outline: config.outline,
                outline_thickness: config.outline_thickness,
                scale: 1.0,
            },
            Collider {
                radius: config.collision_radius * SPECIAL_RADIUS_FACTOR,
            },
            Lifespan::new(config.lifespan * SPECIAL_LIFESPAN_FACTOR),
        ),
    ))
}
