//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick()`, no clock or sleeping
//! - No rendering, sensor or platform dependencies
//! - Total over its inputs: non-finite values are treated as zero

pub mod arena;
pub mod geometry;
pub mod input;
pub mod state;
pub mod tick;

pub use arena::{Arena, Obstacle, ObstacleKind};
pub use geometry::{Rect, circle_intersects_rect};
pub use input::{InputMapper, InputSample, map_sample};
pub use state::{BallState, GamePhase, Snapshot};
pub use tick::{CollisionMode, Simulator, TickOutcome, step};
