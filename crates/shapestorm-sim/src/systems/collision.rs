//! Collision and scoring.
//!
//! One pass over the live enemies; each enemy is tested against the
//! player, then the bullets, then the special-weapon projectiles.
//! Destruction marks are visible within the pass (a dead bullet cannot
//! kill a second enemy), while storage removal stays deferred to the
//! store's next update. Overlap is strict `<` on the sum of collider
//! radii; touching circles do not collide.

use hecs::Entity;
use log::debug;

use shapestorm_core::components::{Collider, Lifespan, Score, Tag, Transform};
use shapestorm_core::config::{EnemyConfig, WindowConfig};
use shapestorm_core::types::Vec2;

use crate::spawner;
use crate::store::EntityStore;

pub fn run(
    store: &mut EntityStore,
    player: Entity,
    enemy_config: &EnemyConfig,
    window: &WindowConfig,
    score: &mut u32,
) {
    let enemies = store.tagged(Tag::Enemy);
    let bullets = store.tagged(Tag::Bullet);
    let specials = store.tagged(Tag::SpecialWeapon);

    for enemy in enemies {
        if !store.is_alive(enemy) {
            continue;
        }
        let Some((enemy_pos, enemy_radius)) = collision_body(store, enemy) else {
            continue;
        };
        let Ok(enemy_score) = store.world().get::<&Score>(enemy).map(|s| s.value) else {
            continue;
        };
        // Only permanent enemies (no lifespan) split when destroyed.
        let permanent = store.world().get::<&Lifespan>(enemy).is_err();

        // Enemy vs player: recenter the player, forfeit points (floored
        // at zero), and destroy the enemy.
        if let Some((player_pos, player_radius)) = collision_body(store, player) {
            if player_pos.distance_to(enemy_pos) < player_radius + enemy_radius {
                if let Ok(mut tf) = store.world().get::<&mut Transform>(player) {
                    tf.position = window.center();
                }
                *score = score.saturating_sub(enemy_score);
                if permanent {
                    spawner::spawn_small_enemies(store, enemy_config, enemy);
                }
                store.destroy(enemy);
                debug!("player hit, score now {score}");
                continue;
            }
        }

        // Enemy vs bullets: both die, points awarded. A destroyed enemy
        // stops testing further bullets.
        for &bullet in &bullets {
            if !store.is_alive(bullet) {
                continue;
            }
            let Some((bullet_pos, bullet_radius)) = collision_body(store, bullet) else {
                continue;
            };
            if bullet_pos.distance_to(enemy_pos) < bullet_radius + enemy_radius {
                store.destroy(bullet);
                *score += enemy_score;
                if permanent {
                    spawner::spawn_small_enemies(store, enemy_config, enemy);
                }
                store.destroy(enemy);
                break;
            }
        }
        if !store.is_alive(enemy) {
            continue;
        }

        // Enemy vs special weapon: the enemy dies, the projectile flies
        // on for its remaining lifespan.
        for &special in &specials {
            if !store.is_alive(special) {
                continue;
            }
            let Some((special_pos, special_radius)) = collision_body(store, special) else {
                continue;
            };
            if special_pos.distance_to(enemy_pos) < special_radius + enemy_radius {
                *score += enemy_score;
                if permanent {
                    spawner::spawn_small_enemies(store, enemy_config, enemy);
                }
                store.destroy(enemy);
                break;
            }
        }
    }
}

/// Position and collider radius, or `None` when either component is
/// missing (skipped rather than faulting the tick).
fn collision_body(store: &EntityStore, entity: Entity) -> Option<(Vec2, f32)> {
    let world = store.world();
    let position = world.get::<&Transform>(entity).ok()?.position;
    let radius = world.get::<&Collider>(entity).ok()?.radius;
    Some((position, radius))
}
