//! Fixed step simulation tick
//!
//! One tick moves the ball by its velocity command, rejects the move if it
//! would overlap any obstacle, then checks the committed position against
//! the goal. There is no loop or clock in here: the host calls `tick()` at
//! its own cadence.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::geometry::circle_intersects_rect;
use super::state::{BallState, GamePhase, Snapshot};
use crate::consts::*;
use crate::finite_or_zero;
use crate::settings::{ConfigError, MazeConfig};

/// How a blocked move is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionMode {
    /// Reject the whole move; the ball stays put for this tick
    #[default]
    Freeze,
    /// Keep whichever single-axis component of the move is unobstructed
    Slide,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game already won; nothing changed
    Idle,
    /// Candidate position committed (possibly the same point for zero velocity)
    Moved,
    /// Candidate overlapped an obstacle and was rejected
    Blocked,
    /// Committed position is inside the goal; game is now won
    Won,
}

/// Advance a ball by one step against an arena
///
/// The collision test runs on the candidate position and the win test on the
/// committed one, so a rejected move is never credited as a win.
pub fn step(
    ball: &mut BallState,
    arena: &Arena,
    velocity: Vec2,
    mode: CollisionMode,
) -> TickOutcome {
    if ball.has_won() {
        return TickOutcome::Idle;
    }

    let velocity = finite_or_zero(velocity);
    ball.vel = velocity;

    let candidate = clamp_to_arena(ball.pos + velocity, ball.radius, arena);
    let outcome = if is_free(candidate, ball.radius, arena) {
        ball.pos = candidate;
        TickOutcome::Moved
    } else if let Some(slid) = slide_target(ball, arena, velocity, mode) {
        ball.pos = slid;
        TickOutcome::Moved
    } else {
        log::trace!("Move to ({}, {}) blocked", candidate.x, candidate.y);
        TickOutcome::Blocked
    };

    if arena.goal().contains_point(ball.pos) {
        ball.phase = GamePhase::Won;
        log::info!("Goal reached at ({}, {})", ball.pos.x, ball.pos.y);
        return TickOutcome::Won;
    }

    outcome
}

/// Clamp so the ball's edge can touch but never cross the arena frame
fn clamp_to_arena(p: Vec2, radius: f32, arena: &Arena) -> Vec2 {
    let (w, h) = arena.bounds();
    Vec2::new(
        p.x.clamp(radius, (w - radius).max(radius)),
        p.y.clamp(radius, (h - radius).max(radius)),
    )
}

fn is_free(center: Vec2, radius: f32, arena: &Arena) -> bool {
    !arena
        .obstacles()
        .iter()
        .any(|o| circle_intersects_rect(center, radius, &o.rect))
}

/// Single-axis fallback for `CollisionMode::Slide` (x first, then y)
fn slide_target(
    ball: &BallState,
    arena: &Arena,
    velocity: Vec2,
    mode: CollisionMode,
) -> Option<Vec2> {
    if mode != CollisionMode::Slide {
        return None;
    }
    [Vec2::new(velocity.x, 0.0), Vec2::new(0.0, velocity.y)]
        .into_iter()
        .filter(|v| *v != Vec2::ZERO)
        .map(|v| clamp_to_arena(ball.pos + v, ball.radius, arena))
        .find(|&p| is_free(p, ball.radius, arena))
}

/// Owns the ball and steps it through a shared, read-only arena
#[derive(Debug, Clone)]
pub struct Simulator {
    arena: Arena,
    ball: BallState,
    start: Vec2,
    mode: CollisionMode,
    /// Simulated (non-idle) ticks since the last reset
    ticks: u64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Arena::default())
    }
}

impl Simulator {
    /// Simulator with the stock ball, start position and freeze collisions
    pub fn new(arena: Arena) -> Self {
        Self::with_ball(
            arena,
            Vec2::new(BALL_START_X, BALL_START_Y),
            BALL_RADIUS,
            CollisionMode::Freeze,
        )
    }

    pub fn with_ball(arena: Arena, start: Vec2, radius: f32, mode: CollisionMode) -> Self {
        Self {
            arena,
            ball: BallState::new(start, radius),
            start,
            mode,
            ticks: 0,
        }
    }

    pub fn from_config(config: &MazeConfig) -> Result<Self, ConfigError> {
        let arena = Arena::from_config(config)?;
        Ok(Self::with_ball(
            arena,
            config.start,
            config.ball_radius,
            config.collision_mode,
        ))
    }

    /// Advance one step with the given velocity command
    pub fn tick(&mut self, velocity: Vec2) -> TickOutcome {
        let outcome = step(&mut self.ball, &self.arena, velocity, self.mode);
        if outcome != TickOutcome::Idle {
            self.ticks += 1;
        }
        if outcome == TickOutcome::Won {
            log::info!("Maze solved in {} ticks", self.ticks);
        }
        outcome
    }

    /// Put the ball back at the start, stopped and playing
    pub fn reset(&mut self) {
        self.ball = BallState::new(self.start, self.ball.radius);
        self.ticks = 0;
        log::debug!("Simulator reset to ({}, {})", self.start.x, self.start.y);
    }

    /// Place the ball directly (level editors, tests)
    pub fn place_ball(&mut self, pos: Vec2) {
        self.ball.pos = clamp_to_arena(finite_or_zero(pos), self.ball.radius, &self.arena);
    }

    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn collision_mode(&self) -> CollisionMode {
        self.mode
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn has_won(&self) -> bool {
        self.ball.has_won()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.ball.snapshot()
    }
}
