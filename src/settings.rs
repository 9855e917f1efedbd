//! Maze configuration
//!
//! Every knob of the simulation lives here with the stock values as defaults.
//! Configs are plain JSON; any field left out falls back to its default.

use std::fmt;
use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{CollisionMode, Rect};

/// Error raised while loading or validating a [`MazeConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read or written
    Io(std::io::Error),
    /// Config text is not valid JSON for this schema
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config i/o: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse: {e}"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Full configuration surface of a maze session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Thickness of the four frame walls (0 disables the frame)
    pub border_thickness: f32,
    /// Interior maze walls, in addition to the frame
    pub walls: Vec<Rect>,
    pub goal: Rect,

    // === Ball ===
    pub ball_radius: f32,
    pub start: Vec2,

    // === Input ===
    /// Angular rate at or below which an axis reads as zero
    pub dead_zone: f32,
    /// Angular rate to velocity gain
    pub sensitivity: f32,

    // === Physics ===
    pub collision_mode: CollisionMode,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            border_thickness: BORDER_THICKNESS,
            walls: INNER_WALLS
                .iter()
                .map(|&[l, t, r, b]| Rect::from_edges_unchecked(l, t, r, b))
                .collect(),
            goal: Rect::from_edges_unchecked(GOAL[0], GOAL[1], GOAL[2], GOAL[3]),

            ball_radius: BALL_RADIUS,
            start: Vec2::new(BALL_START_X, BALL_START_Y),

            dead_zone: DEAD_ZONE,
            sensitivity: SENSITIVITY,

            collision_mode: CollisionMode::Freeze,
        }
    }
}

impl MazeConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a JSON config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded maze config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default maze config ({}: {e})", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Check every field against what the simulation can run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.arena_width, self.arena_height);
        for (field, value) in [("arena_width", w), ("arena_height", h)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(field, format!("{value} must be > 0")));
            }
        }

        let t = self.border_thickness;
        if !t.is_finite() || t < 0.0 || 2.0 * t >= w.min(h) {
            return Err(ConfigError::invalid(
                "border_thickness",
                format!("{t} must be >= 0 and leave room inside a {w}x{h} arena"),
            ));
        }

        let r = self.ball_radius;
        if !r.is_finite() || r <= 0.0 || 2.0 * r > w.min(h) {
            return Err(ConfigError::invalid(
                "ball_radius",
                format!("{r} must be > 0 and fit inside a {w}x{h} arena"),
            ));
        }

        if !self.dead_zone.is_finite() || self.dead_zone < 0.0 {
            return Err(ConfigError::invalid(
                "dead_zone",
                format!("{} must be >= 0", self.dead_zone),
            ));
        }
        if !self.sensitivity.is_finite() {
            return Err(ConfigError::invalid("sensitivity", "must be finite"));
        }

        check_rect("goal", &self.goal, w, h)?;
        for (i, wall) in self.walls.iter().enumerate() {
            check_rect(&format!("walls[{i}]"), wall, w, h)?;
        }

        let start = self.start;
        let in_range = |v: f32, extent: f32| v.is_finite() && v >= r && v <= extent - r;
        if !in_range(start.x, w) || !in_range(start.y, h) {
            return Err(ConfigError::invalid(
                "start",
                format!("({}, {}) must keep the ball inside the arena", start.x, start.y),
            ));
        }

        Ok(())
    }
}

fn check_rect(field: &str, rect: &Rect, width: f32, height: f32) -> Result<(), ConfigError> {
    if !rect.is_well_formed() {
        return Err(ConfigError::invalid(
            field,
            "needs finite edges with left < right and top < bottom",
        ));
    }
    if !rect.within(width, height) {
        return Err(ConfigError::invalid(
            field,
            format!("lies outside the {width}x{height} arena"),
        ));
    }
    Ok(())
}
