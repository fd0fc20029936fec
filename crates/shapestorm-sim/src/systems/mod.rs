//! Per-tick systems, run in a fixed order by the scene:
//! movement, collision, lifespan, then the render-frame hand-off.

pub mod collision;
pub mod lifespan;
pub mod movement;
pub mod snapshot;
