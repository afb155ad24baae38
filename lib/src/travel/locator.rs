//! Point classification against a boundary set and snapping onto it.
//!
//! Per-boundary containment is delegated to `geo`; the boundary set is then
//! combined with the even-odd rule so that holes carve out of their outer
//! contour regardless of orientation.

use crate::geometry::{BoundingBox, Line, Point, Polygon};
use crate::Coord;
use geo::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Coord as GeoCoord, LineString, Polygon as GeoPolygon};

/// Where a point lies relative to the admissible region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointPosition {
    Outside,
    Inside,
    OnBoundary,
}

impl PointPosition {
    /// Inside and on-boundary points may be travelled to.
    #[inline]
    pub fn is_admissible(self) -> bool {
        !matches!(self, PointPosition::Outside)
    }
}

/// Containment tests and nearest-admissible-point snapping over a boundary set.
#[derive(Clone, Debug)]
pub struct PointLocator<'a> {
    boundaries: &'a [Polygon],
    /// `geo` rings for boundaries with at least three points.
    rings: Vec<Option<GeoPolygon<Coord>>>,
    bboxes: Vec<BoundingBox>,
}

impl<'a> PointLocator<'a> {
    pub fn new(boundaries: &'a [Polygon]) -> Self {
        let rings = boundaries
            .iter()
            .map(|b| (b.len() >= 3).then(|| polygon_to_geo(b)))
            .collect();
        let bboxes = boundaries.iter().map(Polygon::bounding_box).collect();
        Self {
            boundaries,
            rings,
            bboxes,
        }
    }

    pub fn boundaries(&self) -> &'a [Polygon] {
        self.boundaries
    }

    /// Bounding box of each boundary, in boundary order.
    pub fn bounding_boxes(&self) -> &[BoundingBox] {
        &self.bboxes
    }

    /// Classify `p` against the whole boundary set.
    ///
    /// A point on any edge is on the boundary. Otherwise it is inside when an
    /// odd number of boundaries contain it.
    pub fn classify(&self, p: &Point) -> PointPosition {
        let mut containing = 0usize;
        for (idx, boundary) in self.boundaries.iter().enumerate() {
            match self.classify_in(idx, boundary, p) {
                PointPosition::OnBoundary => return PointPosition::OnBoundary,
                PointPosition::Inside => containing += 1,
                PointPosition::Outside => {}
            }
        }
        if containing % 2 == 1 {
            PointPosition::Inside
        } else {
            PointPosition::Outside
        }
    }

    fn classify_in(&self, idx: usize, boundary: &Polygon, p: &Point) -> PointPosition {
        if let Some(bbox) = self.bboxes.get(idx) {
            if !bbox.contains_point(p) {
                return PointPosition::Outside;
            }
        }

        match self.rings.get(idx).and_then(Option::as_ref) {
            Some(ring) => match ring.coordinate_position(&GeoCoord { x: p.x, y: p.y }) {
                CoordPos::Inside => PointPosition::Inside,
                CoordPos::OnBoundary => PointPosition::OnBoundary,
                CoordPos::Outside => PointPosition::Outside,
            },
            None if boundary.len() == 2 => {
                if Line::new(boundary[0], boundary[1]).contains_point(p) {
                    PointPosition::OnBoundary
                } else {
                    PointPosition::Outside
                }
            }
            None => PointPosition::Outside,
        }
    }

    /// Move `p` to the nearest admissible location.
    ///
    /// Admissible points are returned unchanged. Otherwise `p` is projected
    /// onto every boundary edge and the nearest admissible projection wins.
    /// `max_distance` bounds the move; 0 means unbounded. Returns `None` when
    /// no admissible location is found.
    pub fn move_inside(&self, p: &Point, max_distance: Coord) -> Option<Point> {
        if self.classify(p).is_admissible() {
            return Some(*p);
        }

        let limit = if max_distance > 0 {
            let d = max_distance as i128;
            d * d
        } else {
            i128::MAX
        };

        let mut best: Option<(i128, Point)> = None;
        for (idx, boundary) in self.boundaries.iter().enumerate() {
            let bound = best.map_or(limit, |(d, _)| d);
            if let Some(bbox) = self.bboxes.get(idx) {
                if bbox.distance_squared_to(p) > bound {
                    continue;
                }
            }

            for (_, edge) in boundary.edges() {
                let Some(candidate) = self.admissible_near(edge.project_point(p), p) else {
                    continue;
                };
                let dist = candidate.distance_squared(p);
                if dist <= limit && best.map_or(true, |(d, _)| dist < d) {
                    best = Some((dist, candidate));
                }
            }
        }

        best.map(|(_, point)| point)
    }

    /// The projection itself if admissible, else its nearest admissible grid
    /// neighbour. Rounding onto the grid can push a projection off a slanted
    /// edge by one unit.
    fn admissible_near(&self, projection: Point, towards: &Point) -> Option<Point> {
        if self.classify(&projection).is_admissible() {
            return Some(projection);
        }

        let mut neighbours: Vec<Point> = (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| Point::new(dx, dy)))
            .filter(|offset| *offset != Point::zero())
            .map(|offset| projection + offset)
            .collect();
        neighbours.sort_by_key(|n| n.distance_squared(towards));
        neighbours
            .into_iter()
            .find(|n| self.classify(n).is_admissible())
    }
}

/// Convert a boundary to a closed `geo` polygon without holes.
fn polygon_to_geo(poly: &Polygon) -> GeoPolygon<Coord> {
    let mut ring: Vec<GeoCoord<Coord>> = poly
        .points()
        .iter()
        .map(|p| GeoCoord { x: p.x, y: p.y })
        .collect();

    if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
        if first != last {
            ring.push(first);
        }
    }

    GeoPolygon::new(LineString::new(ring), vec![])
}
