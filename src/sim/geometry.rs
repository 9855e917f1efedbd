//! Axis-aligned rectangle geometry and circle overlap tests
//!
//! Arena space has its origin at the top-left corner with y growing downward,
//! so `top < bottom` for every well-formed rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_point;

/// An axis-aligned rectangle in arena space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Build a rectangle, rejecting empty, inverted or non-finite edges
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Option<Self> {
        let rect = Self::from_edges_unchecked(left, top, right, bottom);
        rect.is_well_formed().then_some(rect)
    }

    /// Build a rectangle without checking `left < right` and `top < bottom`
    ///
    /// Meant for constant layout tables; runtime input goes through [`Rect::new`].
    pub const fn from_edges_unchecked(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build from a `[left, top, right, bottom]` array
    pub fn from_array(edges: [f32; 4]) -> Option<Self> {
        Self::new(edges[0], edges[1], edges[2], edges[3])
    }

    pub fn is_well_formed(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite())
            && self.left < self.right
            && self.top < self.bottom
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right, self.bottom)
    }

    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }

    /// Closed-interval containment on both axes (edges count as inside)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Whether the rectangle lies inside `[0, width] x [0, height]`
    pub fn within(&self, width: f32, height: f32) -> bool {
        self.left >= 0.0 && self.top >= 0.0 && self.right <= width && self.bottom <= height
    }

    /// Closest point on or inside the rectangle to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        clamp_point(p, self.min(), self.max())
    }
}

/// Check whether a circle overlaps a rectangle
///
/// The circle's center is clamped into the rectangle to find the closest
/// point; the shapes overlap when that point is strictly closer than
/// `radius`. A circle exactly tangent to an edge does not overlap.
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}
