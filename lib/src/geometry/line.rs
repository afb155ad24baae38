//! Line segment type.

use super::point::div_round;
use super::Point;
use crate::CoordF;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A line segment from `a` to `b`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    /// Create a new line segment.
    #[inline]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Direction vector `b - a`.
    #[inline]
    pub fn vector(&self) -> Point {
        self.b - self.a
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> CoordF {
        self.a.distance(&self.b)
    }

    /// Squared length of the segment.
    #[inline]
    pub fn length_squared(&self) -> i128 {
        self.a.distance_squared(&self.b)
    }

    /// Closest point on the segment to `p`.
    #[inline]
    pub fn project_point(&self, p: &Point) -> Point {
        p.project_onto_segment(self.a, self.b)
    }

    /// Signed projection of `p - a` onto the segment direction, unnormalized.
    ///
    /// The point projects inside the segment iff the result lies in
    /// `[0, length_squared()]`.
    #[inline]
    pub fn projection(&self, p: &Point) -> i128 {
        (*p - self.a).dot(&self.vector())
    }

    /// Check whether the projection of `p` falls within the segment.
    #[inline]
    pub fn projects_within(&self, p: &Point) -> bool {
        let t = self.projection(p);
        t >= 0 && t <= self.length_squared()
    }

    /// Exact test whether `p` lies on the segment.
    pub fn contains_point(&self, p: &Point) -> bool {
        self.a.ccw(&self.b, p) == 0 && self.projects_within(p)
    }

    /// Intersection of the infinite lines through `self` and `other`.
    ///
    /// The point is parametrized along `other` and rounded to the nearest
    /// grid point, so reversing `self` yields the same point. Returns `None`
    /// for parallel or collinear lines, and when the solve would overflow
    /// `i128` (coordinate spans beyond roughly 2^42). The result is not
    /// bounded to either segment.
    pub fn line_intersection(&self, other: &Line) -> Option<Point> {
        let da = self.vector();
        let db = other.vector();

        let mut num = (self.a - other.a).cross(&da);
        let mut den = db.cross(&da);
        if den == 0 {
            return None;
        }
        if den < 0 {
            num = -num;
            den = -den;
        }

        let x = other.a.x as i128 + div_round((db.x as i128).checked_mul(num)?, den);
        let y = other.a.y as i128 + div_round((db.y as i128).checked_mul(num)?, den);
        Some(Point::new(i64::try_from(x).ok()?, i64::try_from(y).ok()?))
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({:?} -> {:?})", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    #[test]
    fn test_line_length() {
        let line = Line::new(Point::new(0, 0), Point::new(30, 40));
        assert!((line.length() - 50.0).abs() < 1e-12);
        assert_eq!(line.length_squared(), 2500);
        assert_eq!(line.vector(), Point::new(30, 40));
    }

    #[test]
    fn test_line_intersection_crossing() {
        let travel = Line::new(Point::new(100, 500), Point::new(900, 500));
        let wall = Line::new(Point::new(400, 0), Point::new(400, 1000));
        assert_eq!(travel.line_intersection(&wall), Some(Point::new(400, 500)));
    }

    #[test]
    fn test_line_intersection_is_unbounded() {
        let travel = Line::new(Point::new(0, 0), Point::new(10, 0));
        let far_wall = Line::new(Point::new(500, 5), Point::new(500, 6));
        assert_eq!(travel.line_intersection(&far_wall), Some(Point::new(500, 0)));
    }

    #[test]
    fn test_line_intersection_ignores_travel_direction() {
        let wall = Line::new(Point::new(400, 600), Point::new(400, 400));
        let there = Line::new(Point::new(100, 499), Point::new(900, 501));
        let back = Line::new(Point::new(900, 501), Point::new(100, 499));

        // Exact crossing is (400, 499.75)
        assert_eq!(there.line_intersection(&wall), Some(Point::new(400, 500)));
        assert_eq!(back.line_intersection(&wall), Some(Point::new(400, 500)));

        let slanted = Line::new(Point::new(150, 242), Point::new(850, 758));
        assert_eq!(
            slanted.line_intersection(&wall),
            Line::new(slanted.b, slanted.a).line_intersection(&wall)
        );
    }

    #[test]
    fn test_line_intersection_overflow_is_none() {
        let big: Coord = 1 << 60;
        let a = Line::new(Point::new(0, 0), Point::new(big, big));
        let b = Line::new(Point::new(0, big), Point::new(big, 0));
        assert_eq!(a.line_intersection(&b), None);
    }

    #[test]
    fn test_line_intersection_parallel() {
        let a = Line::new(Point::new(0, 0), Point::new(10, 0));
        let b = Line::new(Point::new(0, 5), Point::new(10, 5));
        assert_eq!(a.line_intersection(&b), None);

        let collinear = Line::new(Point::new(20, 0), Point::new(30, 0));
        assert_eq!(a.line_intersection(&collinear), None);
    }

    #[test]
    fn test_contains_point() {
        let line = Line::new(Point::new(0, 0), Point::new(100, 100));
        assert!(line.contains_point(&Point::new(50, 50)));
        assert!(line.contains_point(&Point::new(0, 0)));
        assert!(!line.contains_point(&Point::new(50, 51)));
        assert!(!line.contains_point(&Point::new(150, 150)));
    }

    #[test]
    fn test_projects_within() {
        let line = Line::new(Point::new(0, 0), Point::new(100, 0));
        assert!(line.projects_within(&Point::new(0, 30)));
        assert!(line.projects_within(&Point::new(100, -30)));
        assert!(!line.projects_within(&Point::new(-1, 0)));
        assert!(!line.projects_within(&Point::new(101, 0)));
    }
}
