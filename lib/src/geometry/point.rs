//! Point type for 2D travel geometry.
//!
//! Points use scaled integer coordinates; every product that feeds a
//! predicate is widened to `i128` so that no intermediate can overflow.

use crate::{scale, unscale, Coord, CoordF};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A 2D point with scaled integer coordinates.
///
/// Points use integer coordinates scaled by `SCALING_FACTOR` to avoid
/// floating-point precision issues. 1 unit = 1 nanometer.
///
/// # Example
/// ```
/// use travel_planner::geometry::Point;
/// use travel_planner::scale;
///
/// // Create a point at (1mm, 2mm)
/// let p = Point::new(scale(1.0), scale(2.0));
/// assert_eq!(p, Point::new_scale(1.0, 2.0));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    /// Create a new point with the given coordinates.
    #[inline]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Create a new point from floating-point coordinates (in mm), scaling them.
    #[inline]
    pub fn new_scale(x: CoordF, y: CoordF) -> Self {
        Self {
            x: scale(x),
            y: scale(y),
        }
    }

    /// Create a point at the origin (0, 0).
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Calculate the squared distance to another point.
    /// Returns i128 to avoid overflow with large coordinates.
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> i128 {
        let dx = other.x as i128 - self.x as i128;
        let dy = other.y as i128 - self.y as i128;
        dx * dx + dy * dy
    }

    /// Calculate the distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> CoordF {
        (self.distance_squared(other) as CoordF).sqrt()
    }

    /// Calculate the squared length (magnitude) of this point as a vector.
    #[inline]
    pub fn length_squared(&self) -> i128 {
        (self.x as i128) * (self.x as i128) + (self.y as i128) * (self.y as i128)
    }

    /// Calculate the length (magnitude) of this point as a vector.
    #[inline]
    pub fn length(&self) -> CoordF {
        (self.length_squared() as CoordF).sqrt()
    }

    /// Scale this vector so that its length becomes `len`, rounding to the grid.
    ///
    /// A zero vector stays zero. A negative `len` flips the direction.
    pub fn set_length(&self, len: Coord) -> Self {
        let current = self.length();
        if current == 0.0 {
            return *self;
        }
        let factor = len as CoordF / current;
        Self {
            x: (self.x as CoordF * factor).round() as Coord,
            y: (self.y as CoordF * factor).round() as Coord,
        }
    }

    /// Calculate the cross product with another point (2D pseudo-cross product).
    /// Returns a positive value if other is counter-clockwise from self.
    #[inline]
    pub fn cross(&self, other: &Point) -> i128 {
        (self.x as i128) * (other.y as i128) - (self.y as i128) * (other.x as i128)
    }

    /// Calculate the dot product with another point.
    #[inline]
    pub fn dot(&self, other: &Point) -> i128 {
        (self.x as i128) * (other.x as i128) + (self.y as i128) * (other.y as i128)
    }

    /// Calculate the CCW (counter-clockwise) value for three points.
    /// Positive if self->p1->p2 turns counter-clockwise.
    #[inline]
    pub fn ccw(&self, p1: &Point, p2: &Point) -> i128 {
        let v1 = *p1 - *self;
        let v2 = *p2 - *self;
        v1.cross(&v2)
    }

    /// Project this point onto a line segment defined by two points.
    ///
    /// The projection is computed exactly and rounded to the nearest grid point.
    pub fn project_onto_segment(&self, a: Point, b: Point) -> Point {
        let ab = b - a;
        let ap = *self - a;

        let ab_len_sq = ab.length_squared();
        if ab_len_sq == 0 {
            return a;
        }

        let t_num = ap.dot(&ab);
        if t_num <= 0 {
            return a;
        }
        if t_num >= ab_len_sq {
            return b;
        }

        Point::new(
            a.x + div_round(ab.x as i128 * t_num, ab_len_sq) as Coord,
            a.y + div_round(ab.y as i128 * t_num, ab_len_sq) as Coord,
        )
    }

    /// Check if this point coincides with another within a tolerance.
    #[inline]
    pub fn coincides_with(&self, other: &Point, tolerance: Coord) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

/// Integer division rounding half away from zero. `den` must be positive.
#[inline]
pub(crate) fn div_round(num: i128, den: i128) -> i128 {
    if num >= 0 {
        (num + den / 2) / den
    } else {
        (num - den / 2) / den
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", unscale(self.x), unscale(self.y))
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(Coord, Coord)> for Point {
    #[inline]
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (Coord, Coord) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10, 20);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(13, 24));
        assert_eq!(a - b, Point::new(7, 16));
        assert_eq!(-b, Point::new(-3, -4));
    }

    #[test]
    fn test_point_length() {
        let p = Point::new(3, 4);
        assert_eq!(p.length_squared(), 25);
        assert!((p.length() - 5.0).abs() < 1e-12);
        assert_eq!(Point::zero().distance_squared(&p), 25);
    }

    #[test]
    fn test_wide_products_do_not_overflow() {
        let big = Point::new(Coord::MAX / 2, Coord::MAX / 2);
        let expected = 2 * (Coord::MAX as i128 / 2) * (Coord::MAX as i128 / 2);
        assert_eq!(big.dot(&big), expected);
        assert_eq!(big.cross(&big), 0);
    }

    #[test]
    fn test_cross_and_ccw() {
        let x = Point::new(1, 0);
        let y = Point::new(0, 1);
        assert_eq!(x.cross(&y), 1);
        assert_eq!(y.cross(&x), -1);
        assert!(Point::zero().ccw(&x, &y) > 0);
    }

    #[test]
    fn test_set_length() {
        let p = Point::new(300, 400);
        assert_eq!(p.set_length(1000), Point::new(600, 800));
        assert_eq!(p.set_length(-5), Point::new(-3, -4));
        assert_eq!(Point::zero().set_length(10), Point::zero());
    }

    #[test]
    fn test_project_onto_segment() {
        let a = Point::new(0, 0);
        let b = Point::new(0, 1000);

        assert_eq!(Point::new(-50, 500).project_onto_segment(a, b), Point::new(0, 500));
        // Clamped to the segment ends
        assert_eq!(Point::new(10, -300).project_onto_segment(a, b), a);
        assert_eq!(Point::new(10, 3000).project_onto_segment(a, b), b);
        // Degenerate segment
        assert_eq!(Point::new(7, 7).project_onto_segment(a, a), a);
    }

    #[test]
    fn test_project_rounds_to_nearest() {
        // Projection of (1, 0) onto the diagonal is (0.5, 0.5), rounded away from zero.
        let p = Point::new(1, 0).project_onto_segment(Point::new(0, 0), Point::new(10, 10));
        assert_eq!(p, Point::new(1, 1));
        assert_eq!(div_round(-7, 2), -4);
        assert_eq!(div_round(7, 2), 4);
        assert_eq!(div_round(5, 3), 2);
    }

    #[test]
    fn test_coincides_with() {
        let p = Point::new(100, 100);
        assert!(p.coincides_with(&Point::new(101, 99), 1));
        assert!(!p.coincides_with(&Point::new(102, 100), 1));
    }

    #[test]
    fn test_point_display() {
        let p = Point::new_scale(1.5, -2.0);
        assert_eq!(format!("{}", p), "(1.500000, -2.000000)");
        assert_eq!(format!("{:?}", p), "Point(1500000, -2000000)");
    }
}
