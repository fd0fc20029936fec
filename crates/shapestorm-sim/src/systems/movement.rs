//! Movement and bounds resolution.
//!
//! Player velocity is rebuilt from the input flags each tick (with the
//! diagonal renormalized to the configured speed), enemies bounce off
//! the viewport edges, and every transform then integrates one tick of
//! velocity. Bullets are unaffected by bounds; their lifespan culls them.

use shapestorm_core::components::{InputState, Shape, Tag, Transform};
use shapestorm_core::config::{PlayerConfig, WindowConfig};
use shapestorm_core::types::Vec2;

use crate::store::EntityStore;

pub fn run(store: &mut EntityStore, player: &PlayerConfig, window: &WindowConfig) {
    let world = store.world_mut();

    // Input-driven steering.
    for (_entity, (input, tf, shape)) in
        world.query_mut::<(&InputState, &mut Transform, &Shape)>()
    {
        let mut velocity = Vec2::ZERO;
        if input.up {
            velocity.y -= player.speed;
        }
        if input.down {
            velocity.y += player.speed;
        }
        if input.left {
            velocity.x -= player.speed;
        }
        if input.right {
            velocity.x += player.speed;
        }

        // Two active axes would stack to speed * sqrt(2); rebuild the
        // vector along its own heading at the configured speed.
        if velocity.x != 0.0 && velocity.y != 0.0 {
            let angle = velocity.y.atan2(velocity.x);
            velocity = Vec2::from_angle(angle, player.speed);
        }
        tf.velocity = velocity;

        if let Some(violation) = bounds_violation(tf.position, tf.velocity, shape.radius, window) {
            if violation == -tf.velocity {
                // Blocked on both axes (a corner): stop outright.
                tf.velocity = Vec2::ZERO;
            } else {
                // Zero only the blocked axes so sliding along a wall
                // stays possible.
                if violation.x != tf.velocity.x {
                    tf.velocity.x = 0.0;
                }
                if violation.y != tf.velocity.y {
                    tf.velocity.y = 0.0;
                }
            }
        }
    }

    // Enemies reflect off the viewport edges.
    for (_entity, (tag, tf, shape)) in world.query_mut::<(&Tag, &mut Transform, &Shape)>() {
        if *tag != Tag::Enemy {
            continue;
        }
        if let Some(violation) = bounds_violation(tf.position, tf.velocity, shape.radius, window) {
            tf.velocity = violation;
        }
    }

    // Euler integration, one unit of simulated time per tick.
    for (_entity, tf) in world.query_mut::<&mut Transform>() {
        tf.position += tf.velocity;
    }
}

/// Project one tick ahead and negate the velocity components whose axes
/// would leave the viewport. `None` means no axis is violated.
fn bounds_violation(
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    window: &WindowConfig,
) -> Option<Vec2> {
    let projected = position + velocity;
    let mut violation = velocity;

    if projected.y - radius < 0.0 || projected.y + radius > window.height {
        violation.y = -violation.y;
    }
    if projected.x - radius < 0.0 || projected.x + radius > window.width {
        violation.x = -violation.x;
    }

    if violation == velocity {
        return None;
    }
    Some(violation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> WindowConfig {
        WindowConfig {
            width: 1280.0,
            height: 720.0,
            frame_rate_limit: 60,
        }
    }

    #[test]
    fn test_no_violation_in_open_space() {
        let v = bounds_violation(Vec2::new(640.0, 360.0), Vec2::new(3.0, -2.0), 32.0, &window());
        assert_eq!(v, None);
    }

    #[test]
    fn test_single_axis_violation_negates_that_axis() {
        // Moving up into the top wall.
        let v = bounds_violation(Vec2::new(640.0, 33.0), Vec2::new(2.0, -5.0), 32.0, &window());
        assert_eq!(v, Some(Vec2::new(2.0, 5.0)));
    }

    #[test]
    fn test_corner_violation_negates_both_axes() {
        let v = bounds_violation(Vec2::new(34.0, 34.0), Vec2::new(-5.0, -5.0), 32.0, &window());
        assert_eq!(v, Some(Vec2::new(5.0, 5.0)));
        // The corner case compares against the exact negated velocity.
        assert_eq!(v.unwrap(), -Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_right_and_bottom_walls() {
        let v = bounds_violation(
            Vec2::new(1246.0, 687.0),
            Vec2::new(5.0, 4.0),
            32.0,
            &window(),
        );
        assert_eq!(v, Some(Vec2::new(-5.0, -4.0)));
    }

    #[test]
    fn test_touching_wall_exactly_is_not_a_violation() {
        // Projected edge lands exactly on the boundary.
        let v = bounds_violation(Vec2::new(640.0, 37.0), Vec2::new(0.0, -5.0), 32.0, &window());
        assert_eq!(v, None);
    }
}
