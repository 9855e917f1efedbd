//! Ball state and the read-only snapshot handed to renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball responds to tilt
    #[default]
    Playing,
    /// Ball reached the goal; frozen until reset
    Won,
}

/// Dynamic state of the single ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec2,
    /// Velocity applied on the most recent simulated tick
    pub vel: Vec2,
    pub radius: f32,
    pub phase: GamePhase,
}

impl Default for BallState {
    fn default() -> Self {
        Self::new(Vec2::new(BALL_START_X, BALL_START_Y), BALL_RADIUS)
    }
}

impl BallState {
    pub fn new(start: Vec2, radius: f32) -> Self {
        Self {
            pos: start,
            vel: Vec2::ZERO,
            radius,
            phase: GamePhase::Playing,
        }
    }

    #[inline]
    pub fn has_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_x: self.pos.x,
            ball_y: self.pos.y,
            has_won: self.has_won(),
        }
    }
}

/// What a renderer needs each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub has_won: bool,
}
