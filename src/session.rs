//! Game session facade for the host event loop
//!
//! The host feeds sensor samples in whenever they arrive, calls `tick()` at
//! a steady cadence and polls `snapshot()` once per frame to draw.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;

use crate::settings::{ConfigError, MazeConfig};
use crate::sim::{Arena, InputMapper, InputSample, Simulator, Snapshot, TickOutcome};

/// Velocity command packed into one atomic word (x bits high, y bits low)
///
/// This is the only state shared with an input thread, so a sample and a
/// tick never observe a half-written vector.
#[derive(Debug, Default)]
struct CommandVelocity(AtomicU64);

impl CommandVelocity {
    fn store(&self, v: Vec2) {
        let bits = (u64::from(v.x.to_bits()) << 32) | u64::from(v.y.to_bits());
        self.0.store(bits, Ordering::Release);
    }

    fn load(&self) -> Vec2 {
        let bits = self.0.load(Ordering::Acquire);
        Vec2::new(f32::from_bits((bits >> 32) as u32), f32::from_bits(bits as u32))
    }
}

/// Cloneable handle for delivering sensor samples from another thread
#[derive(Debug, Clone)]
pub struct InputHandle {
    mapper: InputMapper,
    command: Arc<CommandVelocity>,
}

impl InputHandle {
    /// Map a sample and make it the current velocity command
    pub fn on_input_sample(&self, sample: InputSample) {
        self.command.store(self.mapper.map(sample));
    }
}

/// A single play session: one ball, one arena, one goal
#[derive(Debug)]
pub struct GameSession {
    sim: Simulator,
    mapper: InputMapper,
    command: Arc<CommandVelocity>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Simulator::default(), InputMapper::default())
    }
}

impl GameSession {
    pub fn new(sim: Simulator, mapper: InputMapper) -> Self {
        Self {
            sim,
            mapper,
            command: Arc::new(CommandVelocity::default()),
        }
    }

    /// Build a session from a validated config
    pub fn from_config(config: &MazeConfig) -> Result<Self, ConfigError> {
        let sim = Simulator::from_config(config)?;
        let mapper = InputMapper::new(config.dead_zone, config.sensitivity);
        log::debug!(
            "Session created: {} obstacles, {:?} collisions",
            sim.arena().obstacles().len(),
            sim.collision_mode()
        );
        Ok(Self::new(sim, mapper))
    }

    /// Map a sensor sample; the latest sample before a tick wins
    pub fn on_input_sample(&mut self, sample: InputSample) {
        self.command.store(self.mapper.map(sample));
    }

    /// Handle sharing this session's velocity command
    pub fn input_handle(&self) -> InputHandle {
        InputHandle {
            mapper: self.mapper,
            command: Arc::clone(&self.command),
        }
    }

    /// Advance one fixed step using the current velocity command
    pub fn tick(&mut self) -> TickOutcome {
        self.sim.tick(self.command.load())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sim.snapshot()
    }

    /// Restart from the start position with no velocity command
    pub fn reset(&mut self) {
        self.sim.reset();
        self.command.store(Vec2::ZERO);
        log::info!("Game reset");
    }

    /// Current velocity command
    pub fn command_velocity(&self) -> Vec2 {
        self.command.load()
    }

    pub fn arena(&self) -> &Arena {
        self.sim.arena()
    }

    pub fn simulator(&self) -> &Simulator {
        &self.sim
    }

    /// Mutable simulator access, e.g. to place the ball for a scripted scene
    pub fn simulator_mut(&mut self) -> &mut Simulator {
        &mut self.sim
    }

    pub fn has_won(&self) -> bool {
        self.sim.has_won()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_command_velocity_round_trips_bits() {
        let cell = CommandVelocity::default();
        assert_eq!(cell.load(), Vec2::ZERO);
        cell.store(Vec2::new(-2.5, 7.25));
        assert_eq!(cell.load(), Vec2::new(-2.5, 7.25));
    }

    #[test]
    fn test_last_sample_wins() {
        let mut session = GameSession::default();
        session.on_input_sample(InputSample::new(0.0, -1.0, 0.0));
        session.on_input_sample(InputSample::new(1.0, 0.0, 0.0));
        assert_eq!(session.command_velocity(), Vec2::new(0.0, 10.0));

        assert_eq!(session.tick(), TickOutcome::Moved);
        let snap = session.snapshot();
        assert_eq!((snap.ball_x, snap.ball_y), (120.0, 50.0));
    }

    #[test]
    fn test_command_persists_across_ticks() {
        let mut session = GameSession::default();
        session.on_input_sample(InputSample::new(1.0, 0.0, 0.0));
        session.tick();
        session.tick();
        assert_eq!(session.snapshot().ball_y, 60.0);
    }

    #[test]
    fn test_reset_clears_command() {
        let mut session = GameSession::default();
        session.on_input_sample(InputSample::new(1.0, 0.0, 0.0));
        session.tick();
        session.reset();
        assert_eq!(session.command_velocity(), Vec2::ZERO);
        assert_eq!(
            session.snapshot(),
            Snapshot {
                ball_x: 120.0,
                ball_y: 40.0,
                has_won: false,
            }
        );
    }

    #[test]
    fn test_snapshot_has_no_side_effects() {
        let mut session = GameSession::default();
        session.on_input_sample(InputSample::new(1.0, 0.0, 0.0));
        let first = session.snapshot();
        let second = session.snapshot();
        assert_eq!(first, second);
        assert_eq!(session.simulator().ticks(), 0);
    }

    #[test]
    fn test_input_handle_from_other_thread() {
        let mut session = GameSession::default();
        let handle = session.input_handle();
        thread::spawn(move || handle.on_input_sample(InputSample::new(2.0, 0.0, 0.0)))
            .join()
            .unwrap();
        assert_eq!(session.command_velocity(), Vec2::new(0.0, 20.0));
        session.tick();
        assert_eq!(session.snapshot().ball_y, 60.0);
    }

    #[test]
    fn test_from_config_uses_input_knobs() {
        let config = MazeConfig {
            dead_zone: 0.5,
            sensitivity: 2.0,
            ..Default::default()
        };
        let mut session = GameSession::from_config(&config).unwrap();
        session.on_input_sample(InputSample::new(0.4, 0.0, 0.0));
        assert_eq!(session.command_velocity(), Vec2::ZERO);
        session.on_input_sample(InputSample::new(5.0, 0.0, 0.0));
        assert_eq!(session.command_velocity(), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = MazeConfig {
            arena_width: -1.0,
            ..Default::default()
        };
        assert!(GameSession::from_config(&config).is_err());
    }
}
