//! Angular-rate sensor samples to ball velocity
//!
//! The mapping is stateless: every sample fully replaces the previous
//! command, so jitter below the dead zone reads as exactly zero velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEAD_ZONE, SENSITIVITY};

/// Raw angular rate around the device's x, y and z axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    pub rx: f32,
    pub ry: f32,
    pub rz: f32,
}

impl InputSample {
    pub fn new(rx: f32, ry: f32, rz: f32) -> Self {
        Self { rx, ry, rz }
    }
}

/// Dead zone and gain applied to every sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputMapper {
    pub dead_zone: f32,
    pub sensitivity: f32,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self {
            dead_zone: DEAD_ZONE,
            sensitivity: SENSITIVITY,
        }
    }
}

impl InputMapper {
    pub fn new(dead_zone: f32, sensitivity: f32) -> Self {
        Self {
            dead_zone,
            sensitivity,
        }
    }

    /// Velocity command for one sample
    pub fn map(&self, sample: InputSample) -> Vec2 {
        map_sample(sample, self.dead_zone, self.sensitivity)
    }
}

/// Map a sample to velocity
///
/// Rotation around y drives horizontal motion (inverted so the ball rolls
/// toward the lowered edge), rotation around x drives vertical motion.
/// Rotation around z is ignored.
pub fn map_sample(sample: InputSample, dead_zone: f32, sensitivity: f32) -> Vec2 {
    Vec2::new(
        axis(-sample.ry, dead_zone, sensitivity),
        axis(sample.rx, dead_zone, sensitivity),
    )
}

#[inline]
fn axis(value: f32, dead_zone: f32, sensitivity: f32) -> f32 {
    // NaN fails the comparison and lands on zero
    if value.is_finite() && value.abs() > dead_zone {
        value * sensitivity
    } else {
        0.0
    }
}
