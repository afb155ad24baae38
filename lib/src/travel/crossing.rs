//! Crossings between a travel segment and boundary edges.
//!
//! Finding is exhaustive over every edge of every boundary (including the
//! wraparound edge). Organizing sorts the crossings along the travel
//! direction, merges near-duplicates, and drops crossings that coincide with
//! the endpoints of the move.

use crate::geometry::{BoundingBox, Line, Point, Polygon};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Two crossings closer than this (squared) are the same crossing.
///
/// The same tolerance decides whether a crossing coincides with a travel endpoint.
pub const CROSSING_MERGE_DISTANCE_SQ: i128 = 4;

/// Intersection between a travel segment and a boundary edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crossing {
    /// Index of the boundary polygon.
    pub boundary: usize,
    /// Index of the crossed edge; edge `i` ends at vertex `i`.
    pub edge: usize,
    /// The intersection point.
    pub point: Point,
}

impl Crossing {
    #[inline]
    pub fn new(boundary: usize, edge: usize, point: Point) -> Self {
        Self {
            boundary,
            edge,
            point,
        }
    }

    /// Whether this crossing lies within the merge tolerance of `p`.
    #[inline]
    pub fn coincides_with(&self, p: &Point) -> bool {
        self.point.distance_squared(p) < CROSSING_MERGE_DISTANCE_SQ
    }
}

/// Intersection of the travel segment with one boundary edge.
///
/// The determinant solve is unbounded, so the result is checked explicitly
/// against both finite segments: its projection must fall within the edge and
/// within `[0, |end - start|]` along the travel direction.
pub fn segment_intersection(travel: &Line, edge: &Line) -> Option<Point> {
    let point = travel.line_intersection(edge)?;
    if edge.projects_within(&point) && travel.projects_within(&point) {
        Some(point)
    } else {
        None
    }
}

/// Find every crossing of `start -> end` with the boundaries.
///
/// `crossings` is cleared first and filled in boundary then edge order.
/// Boundaries with fewer than two points have no edges and are skipped;
/// boundaries whose bounding box misses the segment are rejected early when
/// `bboxes` holds one box per boundary.
pub fn find_crossings(
    boundaries: &[Polygon],
    bboxes: &[BoundingBox],
    start: Point,
    end: Point,
    crossings: &mut Vec<Crossing>,
) {
    crossings.clear();
    if start == end {
        return;
    }

    let travel = Line::new(start, end);
    let travel_bbox = BoundingBox::from_points(&[start, end]);

    for (boundary_idx, boundary) in boundaries.iter().enumerate() {
        if let Some(bbox) = bboxes.get(boundary_idx) {
            if !bbox.intersects(&travel_bbox) {
                continue;
            }
        }

        for (edge_idx, edge) in boundary.edges() {
            if let Some(point) = segment_intersection(&travel, &edge) {
                crossings.push(Crossing::new(boundary_idx, edge_idx, point));
            }
        }
    }
}

/// Ordering of points along a travel move.
///
/// Compares points by their signed projected distance from `origin` along
/// `direction`. The comparison is exact and holds no mutable state, so sorting
/// with it is deterministic and reentrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TravelAxis {
    origin: Point,
    direction: Point,
}

impl TravelAxis {
    /// Axis from `start` towards `end`.
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            origin: start,
            direction: end - start,
        }
    }

    /// Projected distance of `p` along the axis, scaled by the axis length.
    #[inline]
    pub fn distance_along(&self, p: &Point) -> i128 {
        (*p - self.origin).dot(&self.direction)
    }

    #[inline]
    pub fn compare(&self, a: &Point, b: &Point) -> Ordering {
        self.distance_along(a).cmp(&self.distance_along(b))
    }

    #[inline]
    pub fn compare_crossings(&self, a: &Crossing, b: &Crossing) -> Ordering {
        self.compare(&a.point, &b.point)
    }
}

/// Sort, deduplicate and trim the crossings of `start -> end`.
///
/// 1. Stable sort along the travel direction.
/// 2. Collapse runs of crossings closer than the merge tolerance, keeping the
///    earliest of each run (a vertex hit shows up once per adjacent edge).
/// 3. Drop a leading crossing at `start` and a trailing crossing at `end`.
pub fn organize_crossings(crossings: &mut Vec<Crossing>, start: Point, end: Point) {
    let axis = TravelAxis::new(start, end);
    crossings.sort_by(|a, b| axis.compare_crossings(a, b));

    crossings.dedup_by(|later, kept| later.coincides_with(&kept.point));

    if crossings.first().is_some_and(|c| c.coincides_with(&start)) {
        crossings.remove(0);
    }
    if crossings.last().is_some_and(|c| c.coincides_with(&end)) {
        crossings.pop();
    }
}
