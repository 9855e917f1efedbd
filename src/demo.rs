//! Scripted tilt input for demos and soak tests
//!
//! The autopilot walks a list of waypoints and produces the angular-rate
//! samples a player would, plus a little seeded sensor noise so runs are
//! reproducible per seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{InputMapper, InputSample, Snapshot};

/// Waypoints through the stock maze: down the left corridor, then right
/// along the gap between the two walls into the goal.
pub const DEFAULT_ROUTE: [Vec2; 2] = [Vec2::new(120.0, 800.0), Vec2::new(745.0, 770.0)];

/// Largest per-tick speed the autopilot asks for
const MAX_SPEED: f32 = 12.0;
/// Distance at which a waypoint counts as reached
const ARRIVE_RADIUS: f32 = 2.0;
/// Peak sensor noise (rad/s), kept inside the stock dead zone
const NOISE: f32 = 0.02;

/// Seeded waypoint follower emitting sensor samples
#[derive(Debug, Clone)]
pub struct Autopilot {
    route: Vec<Vec2>,
    next: usize,
    mapper: InputMapper,
    rng: Pcg32,
}

impl Autopilot {
    pub fn new(route: impl IntoIterator<Item = Vec2>, mapper: InputMapper, seed: u64) -> Self {
        Self {
            route: route.into_iter().collect(),
            next: 0,
            mapper,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Autopilot for the stock maze with the stock input mapping
    pub fn stock(seed: u64) -> Self {
        Self::new(DEFAULT_ROUTE, InputMapper::default(), seed)
    }

    /// Index of the waypoint currently being steered toward
    pub fn waypoint_index(&self) -> usize {
        self.next
    }

    pub fn finished(&self) -> bool {
        self.next >= self.route.len()
    }

    /// Sample that steers the ball in `snapshot` toward the next waypoint
    pub fn sample(&mut self, snapshot: &Snapshot) -> InputSample {
        let pos = Vec2::new(snapshot.ball_x, snapshot.ball_y);
        while let Some(&target) = self.route.get(self.next) {
            if pos.distance(target) > ARRIVE_RADIUS {
                break;
            }
            log::debug!("Autopilot reached waypoint {}", self.next);
            self.next += 1;
        }

        let desired = match self.route.get(self.next) {
            Some(&target) => (target - pos).clamp(Vec2::splat(-MAX_SPEED), Vec2::splat(MAX_SPEED)),
            None => Vec2::ZERO,
        };
        self.rates_for(desired)
    }

    /// Invert the input mapping: velocity = (-ry, rx) * sensitivity
    fn rates_for(&mut self, velocity: Vec2) -> InputSample {
        let gain = if self.mapper.sensitivity != 0.0 {
            self.mapper.sensitivity
        } else {
            1.0
        };
        let rx = velocity.y / gain + self.rng.random_range(-NOISE..=NOISE);
        let ry = -velocity.x / gain + self.rng.random_range(-NOISE..=NOISE);
        let rz = self.rng.random_range(-NOISE..=NOISE);
        InputSample::new(rx, ry, rz)
    }
}
