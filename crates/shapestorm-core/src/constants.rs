//! Simulation constants and tuning parameters.

/// Ticks that must elapse between special-weapon shots.
pub const SPECIAL_SHOT_COOLDOWN_TICKS: u64 = 180;

/// Points an enemy is worth per polygon vertex.
pub const ENEMY_SCORE_PER_VERTEX: u32 = 100;

/// Split-off small enemies are worth this multiple of their parent.
pub const SMALL_ENEMY_SCORE_MULTIPLIER: u32 = 2;

/// Special weapon speed as a fraction of bullet speed.
pub const SPECIAL_SPEED_FACTOR: f32 = 0.5;

/// Special weapon shape/collision radius multiplier over a bullet's.
pub const SPECIAL_RADIUS_FACTOR: f32 = 3.0;

/// Special weapon lifespan multiplier over a bullet's.
pub const SPECIAL_LIFESPAN_FACTOR: u32 = 3;

/// Scale the special weapon grows toward over its lifetime.
pub const SPECIAL_GROWTH_TARGET_SCALE: f32 = 3.0;

/// Flashes per second for the special weapon's color cycling.
pub const SPECIAL_FLASHES_PER_SECOND: u32 = 4;

/// Floor for flashed color channels; keeps the flash off near-black.
pub const SPECIAL_FLASH_CHANNEL_MIN: u8 = 50;

/// Cosmetic rotation applied to every drawn shape, degrees per tick.
pub const ROTATION_DEGREES_PER_TICK: f32 = 1.0;
