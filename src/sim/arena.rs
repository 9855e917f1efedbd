//! Static play field: frame walls, maze walls and the goal

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;
use crate::settings::{ConfigError, MazeConfig};

/// What an obstacle is for (both kinds block the ball the same way)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// One of the four walls framing the arena
    Border,
    /// Interior maze wall
    Wall,
}

/// An impassable rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
}

/// Immutable arena layout
///
/// Obstacles are ordered: the frame walls (top, bottom, left, right) come
/// first, followed by interior walls in the order they were supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    width: f32,
    height: f32,
    obstacles: Vec<Obstacle>,
    goal: Rect,
}

impl Default for Arena {
    fn default() -> Self {
        let walls = INNER_WALLS
            .iter()
            .map(|&[l, t, r, b]| Rect::from_edges_unchecked(l, t, r, b));
        let goal = Rect::from_edges_unchecked(GOAL[0], GOAL[1], GOAL[2], GOAL[3]);
        Self::build(ARENA_WIDTH, ARENA_HEIGHT, BORDER_THICKNESS, walls, goal)
    }
}

impl Arena {
    /// Build and validate an arena from a config
    pub fn from_config(config: &MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(
            config.arena_width,
            config.arena_height,
            config.border_thickness,
            config.walls.iter().copied(),
            config.goal,
        ))
    }

    /// Arena framed by default-thickness borders with the given walls and goal
    pub fn with_layout(
        width: f32,
        height: f32,
        walls: impl IntoIterator<Item = Rect>,
        goal: Rect,
    ) -> Result<Self, ConfigError> {
        Self::from_config(&MazeConfig {
            arena_width: width,
            arena_height: height,
            walls: walls.into_iter().collect(),
            goal,
            ..Default::default()
        })
    }

    /// Arena whose only obstacles are the given rectangles (no frame walls)
    pub fn unframed(
        width: f32,
        height: f32,
        walls: impl IntoIterator<Item = Rect>,
        goal: Rect,
    ) -> Result<Self, ConfigError> {
        Self::from_config(&MazeConfig {
            arena_width: width,
            arena_height: height,
            border_thickness: 0.0,
            walls: walls.into_iter().collect(),
            goal,
            ..Default::default()
        })
    }

    fn build(
        width: f32,
        height: f32,
        border: f32,
        walls: impl IntoIterator<Item = Rect>,
        goal: Rect,
    ) -> Self {
        let mut obstacles = Vec::new();
        if border > 0.0 {
            let frame = [
                Rect::from_edges_unchecked(0.0, 0.0, width, border),
                Rect::from_edges_unchecked(0.0, height - border, width, height),
                Rect::from_edges_unchecked(0.0, 0.0, border, height),
                Rect::from_edges_unchecked(width - border, 0.0, width, height),
            ];
            obstacles.extend(frame.into_iter().map(|rect| Obstacle {
                rect,
                kind: ObstacleKind::Border,
            }));
        }
        obstacles.extend(walls.into_iter().map(|rect| Obstacle {
            rect,
            kind: ObstacleKind::Wall,
        }));

        Self {
            width,
            height,
            obstacles,
            goal,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn goal(&self) -> Rect {
        self.goal
    }

    /// Arena `(width, height)`
    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let arena = Arena::default();
        assert_eq!(arena.bounds(), (800.0, 1200.0));
        assert_eq!(arena.obstacles().len(), 6);
        assert_eq!(arena.goal(), Rect::new(740.0, 750.0, 780.0, 790.0).unwrap());

        let borders: Vec<_> = arena
            .obstacles()
            .iter()
            .take_while(|o| o.kind == ObstacleKind::Border)
            .map(|o| o.rect)
            .collect();
        assert_eq!(
            borders,
            vec![
                Rect::new(0.0, 0.0, 800.0, 20.0).unwrap(),
                Rect::new(0.0, 1180.0, 800.0, 1200.0).unwrap(),
                Rect::new(0.0, 0.0, 20.0, 1200.0).unwrap(),
                Rect::new(780.0, 0.0, 800.0, 1200.0).unwrap(),
            ]
        );
        assert_eq!(arena.obstacles()[4].rect, Rect::new(220.0, 20.0, 780.0, 700.0).unwrap());
        assert_eq!(arena.obstacles()[5].kind, ObstacleKind::Wall);
    }

    #[test]
    fn test_everything_inside_bounds() {
        let arena = Arena::default();
        let (w, h) = arena.bounds();
        assert!(arena.obstacles().iter().all(|o| o.rect.within(w, h)));
        assert!(arena.goal().within(w, h));
    }

    #[test]
    fn test_default_matches_default_config() {
        let arena = Arena::from_config(&MazeConfig::default()).unwrap();
        assert_eq!(arena, Arena::default());
    }

    #[test]
    fn test_unframed_has_only_given_walls() {
        let wall = Rect::new(220.0, 20.0, 780.0, 700.0).unwrap();
        let goal = Rect::new(740.0, 750.0, 780.0, 790.0).unwrap();
        let arena = Arena::unframed(800.0, 1200.0, [wall], goal).unwrap();
        assert_eq!(arena.obstacles().len(), 1);
        assert_eq!(arena.obstacles()[0].rect, wall);
    }

    #[test]
    fn test_with_layout_rejects_out_of_bounds_goal() {
        let goal = Rect::new(790.0, 10.0, 810.0, 30.0).unwrap();
        assert!(Arena::with_layout(800.0, 1200.0, Vec::<Rect>::new(), goal).is_err());
    }
}
