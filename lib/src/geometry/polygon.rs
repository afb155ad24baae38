//! Polygon type for closed boundaries.
//!
//! A travel boundary is a closed polygon: the last point connects back to the
//! first. Edge `i` is the edge that ends at vertex `i`, so edge 0 is the
//! wraparound edge from the last vertex to the first.

use super::{BoundingBox, Line, Point};
use crate::{Coord, CoordF};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, Index};

/// A closed polygon defined by a sequence of points.
///
/// Points should be ordered counter-clockwise for outer contours (positive area)
/// and clockwise for holes (negative area). The planner does not depend on the
/// orientation and does not validate simplicity.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create a new empty polygon.
    #[inline]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a polygon from a vector of points.
    #[inline]
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Get the points of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get the number of points in the polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polygon is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the polygon.
    #[inline]
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Index of the vertex before `index`, wrapping around.
    #[inline]
    pub fn prev_index(&self, index: usize) -> usize {
        if index == 0 {
            self.points.len() - 1
        } else {
            index - 1
        }
    }

    /// Index of the vertex after `index`, wrapping around.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        if index + 1 >= self.points.len() {
            0
        } else {
            index + 1
        }
    }

    /// The edge ending at vertex `index`, from vertex `index - 1` (wrapping).
    #[inline]
    pub fn edge(&self, index: usize) -> Line {
        Line::new(self.points[self.prev_index(index)], self.points[index])
    }

    /// Iterate over `(index, edge)` pairs, where edge `index` ends at vertex `index`.
    ///
    /// Polygons with fewer than two points have no edges.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Line)> + '_ {
        let count = self.edge_count();
        (0..count).map(move |i| (i, self.edge(i)))
    }

    /// Get the number of edges in the polygon.
    #[inline]
    pub fn edge_count(&self) -> usize {
        if self.points.len() < 2 {
            0
        } else {
            self.points.len()
        }
    }

    /// Calculate the signed area of the polygon.
    /// Positive for counter-clockwise (exterior), negative for clockwise (hole).
    /// Uses the shoelace formula.
    pub fn signed_area(&self) -> CoordF {
        if self.points.len() < 3 {
            return 0.0;
        }

        let mut sum: i128 = 0;
        for i in 0..self.points.len() {
            let j = (i + 1) % self.points.len();
            sum += self.points[i].x as i128 * self.points[j].y as i128;
            sum -= self.points[j].x as i128 * self.points[i].y as i128;
        }

        sum as CoordF / 2.0
    }

    /// Calculate the unsigned area of the polygon.
    #[inline]
    pub fn area(&self) -> CoordF {
        self.signed_area().abs()
    }

    /// Check if the polygon is counter-clockwise (positive area).
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Reverse the order of points in the polygon.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Return a reversed copy of the polygon.
    pub fn reversed(&self) -> Self {
        let mut result = self.clone();
        result.reverse();
        result
    }

    /// Calculate the perimeter (total edge length) of the polygon.
    pub fn perimeter(&self) -> CoordF {
        self.edges().map(|(_, edge)| edge.length()).sum()
    }

    /// Get the bounding box of the polygon.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
    }

    /// Create a rectangular polygon (counter-clockwise).
    pub fn rectangle(min: Point, max: Point) -> Self {
        Self::from_points(vec![
            min,
            Point::new(max.x, min.y),
            max,
            Point::new(min.x, max.y),
        ])
    }

    /// Create a square polygon centered at a point.
    pub fn square(center: Point, half_size: Coord) -> Self {
        Self::rectangle(
            Point::new(center.x - half_size, center.y - half_size),
            Point::new(center.x + half_size, center.y + half_size),
        )
    }
}

impl fmt::Debug for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} points)", self.points.len())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "]")
    }
}

impl Deref for Polygon {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl Index<usize> for Polygon {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

/// Type alias for a collection of polygons.
pub type Polygons = Vec<Polygon>;

#[cfg(test)]
mod tests {
    use super::*;

    fn make_square() -> Polygon {
        Polygon::from_points(vec![
            Point::new(0, 0),
            Point::new(100, 0),
            Point::new(100, 100),
            Point::new(0, 100),
        ])
    }

    #[test]
    fn test_polygon_new() {
        let poly = Polygon::new();
        assert!(poly.is_empty());
        assert_eq!(poly.len(), 0);
        assert_eq!(poly.edge_count(), 0);
    }

    #[test]
    fn test_polygon_edge_ends_at_index() {
        let poly = make_square();

        // Edge 0 is the wraparound edge from the last vertex
        let first = poly.edge(0);
        assert_eq!(first.a, Point::new(0, 100));
        assert_eq!(first.b, Point::new(0, 0));

        let second = poly.edge(1);
        assert_eq!(second.a, Point::new(0, 0));
        assert_eq!(second.b, Point::new(100, 0));
    }

    #[test]
    fn test_polygon_edges() {
        let poly = make_square();
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].0, 3);
        assert_eq!(edges[3].1.b, Point::new(0, 100));

        let single = Polygon::from_points(vec![Point::new(5, 5)]);
        assert_eq!(single.edges().count(), 0);
    }

    #[test]
    fn test_polygon_wrapping_indices() {
        let poly = make_square();
        assert_eq!(poly.prev_index(0), 3);
        assert_eq!(poly.next_index(3), 0);
    }

    #[test]
    fn test_polygon_signed_area() {
        let ccw = make_square();
        assert!((ccw.signed_area() - 10000.0).abs() < 1e-9);
        assert!(ccw.is_counter_clockwise());

        let cw = ccw.reversed();
        assert!(cw.signed_area() < 0.0);
        assert!((cw.area() - 10000.0).abs() < 1e-9);
    }

    #[test]
    fn test_polygon_perimeter() {
        let poly = make_square();
        assert!((poly.perimeter() - 400.0).abs() < 1e-9);

        // Two points form a degenerate ring of two edges
        let segment = Polygon::from_points(vec![Point::new(0, 0), Point::new(30, 40)]);
        assert!((segment.perimeter() - 100.0).abs() < 1e-9);

        assert_eq!(Polygon::new().perimeter(), 0.0);
    }

    #[test]
    fn test_polygon_bounding_box() {
        let poly = make_square();
        let bb = poly.bounding_box();
        assert_eq!(bb.min, Point::new(0, 0));
        assert_eq!(bb.max, Point::new(100, 100));
    }

    #[test]
    fn test_polygon_rectangle_and_square() {
        let rect = Polygon::rectangle(Point::new(0, 0), Point::new(100, 50));
        assert_eq!(rect.len(), 4);
        assert!((rect.area() - 5000.0).abs() < 1e-9);

        let square = Polygon::square(Point::new(500, 500), 100);
        assert_eq!(square[0], Point::new(400, 400));
        assert_eq!(square[2], Point::new(600, 600));
    }

    #[test]
    fn test_polygon_display() {
        let poly = Polygon::from_points(vec![Point::new_scale(1.0, 2.0)]);
        assert_eq!(format!("{}", poly), "Polygon[(1.000000, 2.000000)]");
        assert_eq!(format!("{:?}", poly), "Polygon(1 points)");
    }
}
