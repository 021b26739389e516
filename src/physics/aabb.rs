//! Axis-aligned bounding boxes in world space (y-up)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its bottom-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Bottom-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    /// Create a box from its bottom-left corner and size
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Create a box of the given size centered on `center`
    #[must_use]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    /// Top-right corner
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Center point
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Move the box so its center sits on `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.min = center - self.size * 0.5;
    }

    /// Translate by a delta
    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }

    /// Check if a point lies inside the box (edges inclusive)
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }

    /// Distance between the centers of two boxes
    #[must_use]
    pub fn center_distance(&self, other: &Aabb) -> f32 {
        self.center().distance(other.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::new(0.0, 0.0, 2.0, 2.0);
        let b = Aabb::new(1.0, 1.0, 2.0, 2.0);
        let c = Aabb::new(5.0, 5.0, 1.0, 1.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 1.0, 1.0);
        let b = Aabb::new(1.0, 0.0, 1.0, 1.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_center_helpers() {
        let mut a = Aabb::from_center(Vec2::new(8.0, 4.5), Vec2::ONE);
        assert_eq!(a.min, Vec2::new(7.5, 4.0));
        assert_eq!(a.center(), Vec2::new(8.0, 4.5));

        a.set_center(Vec2::new(2.0, 2.0));
        assert_eq!(a.min, Vec2::new(1.5, 1.5));

        let b = Aabb::new(4.5, 1.5, 1.0, 1.0);
        assert!((a.center_distance(&b) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_contains() {
        let a = Aabb::new(0.0, 0.0, 2.0, 1.0);
        assert!(a.contains(Vec2::new(1.0, 0.5)));
        assert!(a.contains(Vec2::new(2.0, 1.0)));
        assert!(!a.contains(Vec2::new(2.1, 0.5)));
    }
}
