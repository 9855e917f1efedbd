//! Tilt Maze - steer a ball through a rectangular maze by tilting the device
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, arena, input mapping, tick)
//! - `session`: Game session facade for the host event loop
//! - `driver`: Fixed timestep accumulator for hosts with a variable frame clock
//! - `demo`: Seeded autopilot that plays the maze
//! - `settings`: Overridable configuration surface
//! - `web`: wasm32 bindings for a browser host

pub mod demo;
pub mod driver;
pub mod session;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use driver::FixedStepDriver;
pub use session::{GameSession, InputHandle};
pub use settings::{ConfigError, MazeConfig};
pub use sim::{Arena, InputMapper, InputSample, Rect, Simulator, Snapshot, TickOutcome};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 1200.0;
    /// Thickness of the four frame walls
    pub const BORDER_THICKNESS: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 30.0;
    pub const BALL_START_X: f32 = 120.0;
    pub const BALL_START_Y: f32 = 40.0;

    /// Minimal rotation rate (rad/s) that registers as tilt
    pub const DEAD_ZONE: f32 = 0.05;
    /// Rotation rate to per-tick velocity gain
    pub const SENSITIVITY: f32 = 10.0;

    /// Goal region (left, top, right, bottom)
    pub const GOAL: [f32; 4] = [740.0, 750.0, 780.0, 790.0];
    /// Interior maze walls (left, top, right, bottom)
    pub const INNER_WALLS: [[f32; 4]; 2] = [
        [220.0, 20.0, 780.0, 700.0],
        [20.0, 900.0, 780.0, ARENA_HEIGHT - 20.0],
    ];
}

/// Replace non-finite components with zero
#[inline]
pub fn finite_or_zero(v: Vec2) -> Vec2 {
    Vec2::new(
        if v.x.is_finite() { v.x } else { 0.0 },
        if v.y.is_finite() { v.y } else { 0.0 },
    )
}

/// Clamp a point into the rectangle `[min, max]` component-wise
#[inline]
pub fn clamp_point(p: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(p.x.clamp(min.x, max.x), p.y.clamp(min.y, max.y))
}
