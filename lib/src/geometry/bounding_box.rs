//! Axis-aligned bounding box used for fast rejection of boundaries.

use super::Point;
use crate::{unscale, Coord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D axis-aligned bounding box with scaled integer coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
    defined: bool,
}

impl BoundingBox {
    /// Create a new empty (undefined) bounding box.
    #[inline]
    pub fn new() -> Self {
        Self {
            min: Point::new(Coord::MAX, Coord::MAX),
            max: Point::new(Coord::MIN, Coord::MIN),
            defined: false,
        }
    }

    /// Create a bounding box from min and max points.
    #[inline]
    pub fn from_points_minmax(min: Point, max: Point) -> Self {
        Self {
            min,
            max,
            defined: true,
        }
    }

    /// Create a bounding box from a slice of points.
    pub fn from_points(points: &[Point]) -> Self {
        let mut bb = Self::new();
        for p in points {
            bb.merge_point(*p);
        }
        bb
    }

    /// Check if the bounding box is defined (has been merged with at least one point).
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.defined
    }

    /// Check if the bounding box is empty (not defined).
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.defined
    }

    /// Merge a point into the bounding box.
    pub fn merge_point(&mut self, p: Point) {
        if self.defined {
            self.min.x = self.min.x.min(p.x);
            self.min.y = self.min.y.min(p.y);
            self.max.x = self.max.x.max(p.x);
            self.max.y = self.max.y.max(p.y);
        } else {
            self.min = p;
            self.max = p;
            self.defined = true;
        }
    }

    /// Get the width of the bounding box.
    #[inline]
    pub fn width(&self) -> Coord {
        if self.defined {
            self.max.x - self.min.x
        } else {
            0
        }
    }

    /// Get the height of the bounding box.
    #[inline]
    pub fn height(&self) -> Coord {
        if self.defined {
            self.max.y - self.min.y
        } else {
            0
        }
    }

    /// Check if a point is inside the bounding box (boundary included).
    #[inline]
    pub fn contains_point(&self, p: &Point) -> bool {
        self.defined
            && p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
    }

    /// Check if this bounding box intersects another bounding box.
    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.defined
            && other.defined
            && self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Squared distance from `p` to the closest point of the box (0 when inside).
    ///
    /// Undefined boxes are infinitely far away.
    pub fn distance_squared_to(&self, p: &Point) -> i128 {
        if !self.defined {
            return i128::MAX;
        }
        let dx = axis_gap(p.x, self.min.x, self.max.x);
        let dy = axis_gap(p.y, self.min.y, self.max.y);
        dx * dx + dy * dy
    }
}

#[inline]
fn axis_gap(v: Coord, min: Coord, max: Coord) -> i128 {
    if v < min {
        min as i128 - v as i128
    } else if v > max {
        v as i128 - max as i128
    } else {
        0
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.defined {
            write!(f, "BoundingBox({:?} - {:?})", self.min, self.max)
        } else {
            write!(f, "BoundingBox(undefined)")
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.defined {
            write!(
                f,
                "[({:.6}, {:.6}) - ({:.6}, {:.6})]",
                unscale(self.min.x),
                unscale(self.min.y),
                unscale(self.max.x),
                unscale(self.max.y)
            )
        } else {
            write!(f, "[undefined]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_new() {
        let bb = BoundingBox::new();
        assert!(!bb.is_defined());
        assert!(bb.is_empty());
        assert_eq!(bb.width(), 0);
    }

    #[test]
    fn test_bounding_box_from_points() {
        let points = vec![Point::new(10, 20), Point::new(50, 30), Point::new(30, 100)];
        let bb = BoundingBox::from_points(&points);
        assert!(bb.is_defined());
        assert_eq!(bb.min, Point::new(10, 20));
        assert_eq!(bb.max, Point::new(50, 100));
        assert_eq!(bb.width(), 40);
        assert_eq!(bb.height(), 80);
    }

    #[test]
    fn test_bounding_box_contains_point() {
        let bb = BoundingBox::from_points_minmax(Point::new(0, 0), Point::new(100, 100));
        assert!(bb.contains_point(&Point::new(50, 50)));
        assert!(bb.contains_point(&Point::new(100, 100)));
        assert!(!bb.contains_point(&Point::new(-1, 50)));
        assert!(!BoundingBox::new().contains_point(&Point::zero()));
    }

    #[test]
    fn test_bounding_box_intersects() {
        let bb1 = BoundingBox::from_points_minmax(Point::new(0, 0), Point::new(100, 100));
        let bb2 = BoundingBox::from_points_minmax(Point::new(50, 50), Point::new(150, 150));
        let bb3 = BoundingBox::from_points_minmax(Point::new(200, 200), Point::new(300, 300));

        assert!(bb1.intersects(&bb2));
        assert!(bb2.intersects(&bb1));
        assert!(!bb1.intersects(&bb3));
        assert!(!bb1.intersects(&BoundingBox::new()));
    }

    #[test]
    fn test_bounding_box_distance() {
        let bb = BoundingBox::from_points_minmax(Point::new(0, 0), Point::new(100, 100));
        assert_eq!(bb.distance_squared_to(&Point::new(50, 50)), 0);
        assert_eq!(bb.distance_squared_to(&Point::new(-30, 50)), 900);
        assert_eq!(bb.distance_squared_to(&Point::new(103, 104)), 25);
        assert_eq!(BoundingBox::new().distance_squared_to(&Point::zero()), i128::MAX);
    }
}
