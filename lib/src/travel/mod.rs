//! Travel path planning module.
//!
//! Routes non-extruding travel moves around perimeter walls instead of across
//! them, so the nozzle does not drag over already printed walls.
//!
//! # Algorithm
//!
//! 1. Move each endpoint onto the admissible region if it lies outside
//! 2. Find every crossing between the straight move and the boundaries
//! 3. Sort the crossings along the move, merge near-duplicates, and drop the
//!    ones sitting on the endpoints
//! 4. Pair each crossing with the last later crossing on the same boundary
//!    and walk the shorter way around that boundary between them
//! 5. Optionally shortcut the resulting path where that crosses no wall
//!
//! # Example
//!
//! ```
//! use travel_planner::{AvoidCrossingPerimeters, Point, Polygon, TravelConfig};
//!
//! let boundaries = vec![
//!     Polygon::rectangle(Point::new(0, 0), Point::new(1000, 1000)),
//!     Polygon::rectangle(Point::new(400, 400), Point::new(600, 600)),
//! ];
//! let mut planner = AvoidCrossingPerimeters::new(&boundaries, TravelConfig::default());
//!
//! let result = planner.travel_to(Point::new(100, 450), Point::new(900, 450)).unwrap();
//! assert_eq!(
//!     result.path.points(),
//!     &[
//!         Point::new(100, 450),
//!         Point::new(400, 400),
//!         Point::new(600, 400),
//!         Point::new(900, 450),
//!     ]
//! );
//! ```

mod arc;
mod crossing;
mod locator;
mod ring;
mod trace;

pub use arc::{arc_vertices, shortest_distance_around};
pub use crossing::{
    find_crossings, organize_crossings, segment_intersection, Crossing, TravelAxis,
    CROSSING_MERGE_DISTANCE_SQ,
};
pub use locator::{PointLocator, PointPosition};
pub use ring::{Direction, RingWalker};
pub use trace::{LogSink, NullSink, TraceEvent, TraceSink};

use crate::geometry::{Point, Polygon, Polyline};
use crate::{Coord, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for travel path planning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelConfig {
    /// Maximum distance an endpoint may be moved onto the boundaries (scaled
    /// units). 0 means unlimited.
    pub max_snap_distance: Coord,
    /// Shortcut the detour wherever a straight segment crosses no boundary.
    pub simplify: bool,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            max_snap_distance: 0,
            simplify: false,
        }
    }
}

impl TravelConfig {
    /// Create a new travel config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum snap distance.
    pub fn with_max_snap_distance(mut self, distance: Coord) -> Self {
        self.max_snap_distance = distance;
        self
    }

    /// Enable or disable path simplification.
    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    /// Parse a travel config from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the config.
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_snap_distance < 0 {
            return Err(Error::Config(
                "max_snap_distance must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// A travel move that could not be routed.
///
/// The caller is expected to fall back, typically to a retracted direct move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TravelError {
    #[error("travel start {point} cannot be moved inside the boundaries")]
    StartOutsideBoundary { point: Point },

    #[error("travel end {point} cannot be moved inside the boundaries")]
    EndOutsideBoundary { point: Point },
}

/// Result of travel planning.
#[derive(Clone, Debug, PartialEq)]
pub struct TravelResult {
    /// The travel path, from the (possibly moved) start to the (possibly moved) end.
    pub path: Polyline,
    /// Number of boundary crossings left on the straight move after organizing.
    pub original_crossings: usize,
    /// Whether the path detours along a boundary.
    pub path_modified: bool,
    /// Whether the start was moved onto the boundaries.
    pub start_moved: bool,
    /// Whether the end was moved onto the boundaries.
    pub end_moved: bool,
}

impl TravelResult {
    /// Create a simple direct travel result.
    pub fn direct(start: Point, end: Point) -> Self {
        Self {
            path: Polyline::from_points(vec![start, end]),
            original_crossings: 0,
            path_modified: false,
            start_moved: false,
            end_moved: false,
        }
    }
}

/// Avoid Crossing Perimeters travel planner.
///
/// Routes travel moves around the boundaries of one layer. The boundary set
/// is borrowed for the planner's lifetime; each call to
/// [`travel_to`](Self::travel_to) depends only on the boundaries and the two
/// endpoints.
pub struct AvoidCrossingPerimeters<'a> {
    boundaries: &'a [Polygon],
    config: TravelConfig,
    locator: PointLocator<'a>,
    /// Organized crossings of the last move.
    crossings: Vec<Crossing>,
    /// Arc signal of the last detour.
    direction_around: f64,
    sink: Box<dyn TraceSink + 'a>,
}

impl<'a> AvoidCrossingPerimeters<'a> {
    /// Create a planner over `boundaries` (outer contours and holes).
    pub fn new(boundaries: &'a [Polygon], config: TravelConfig) -> Self {
        Self {
            boundaries,
            config,
            locator: PointLocator::new(boundaries),
            crossings: Vec::new(),
            direction_around: 0.0,
            sink: Box::new(NullSink),
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: Box<dyn TraceSink + 'a>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &TravelConfig {
        &self.config
    }

    pub fn boundaries(&self) -> &'a [Polygon] {
        self.boundaries
    }

    /// Crossings of the last move, sorted along it.
    pub fn crossings(&self) -> &[Crossing] {
        &self.crossings
    }

    /// Signed arc distance of the last detour: non-negative went forward
    /// around the boundary, negative went backward. 0 when the last move took
    /// no detour.
    pub fn direction_around(&self) -> f64 {
        self.direction_around
    }

    /// Classify a point against the boundaries.
    pub fn point_is_inside(&self, p: &Point) -> PointPosition {
        self.locator.classify(p)
    }

    /// Move a point onto the admissible region, within the configured limit.
    pub fn move_point_inside(&self, p: &Point) -> Option<Point> {
        self.locator.move_inside(p, self.config.max_snap_distance)
    }

    /// Whether the straight move `a -> b` would cross a boundary.
    ///
    /// True when a crossing remains after dropping the ones on the endpoints,
    /// or when the midpoint lies outside the admissible region.
    pub fn line_crosses_boundary(&self, a: Point, b: Point) -> bool {
        let mut scratch = Vec::new();
        crosses_boundary(&self.locator, a, b, &mut scratch)
    }

    /// Plan a travel move from start to end.
    pub fn travel_to(&mut self, start: Point, end: Point) -> Result<TravelResult, TravelError> {
        let boundaries = self.boundaries;
        self.direction_around = 0.0;
        self.sink.trace(&TraceEvent::Query {
            boundaries: boundaries.len(),
            start,
            end,
        });

        let snapped_start = self
            .snap(start)
            .ok_or(TravelError::StartOutsideBoundary { point: start })?;
        let snapped_end = self
            .snap(end)
            .ok_or(TravelError::EndOutsideBoundary { point: end })?;
        let start_moved = snapped_start != start;
        let end_moved = snapped_end != end;

        find_crossings(
            boundaries,
            self.locator.bounding_boxes(),
            snapped_start,
            snapped_end,
            &mut self.crossings,
        );
        organize_crossings(&mut self.crossings, snapped_start, snapped_end);
        let crossing_count = self.crossings.len();
        self.sink.trace(&TraceEvent::Crossings {
            count: crossing_count,
        });

        if crossing_count == 0 && !start_moved && !end_moved {
            log::trace!("direct travel {} -> {}", start, end);
            return Ok(TravelResult::direct(start, end));
        }

        let mut points = vec![snapped_start];
        let mut detoured = false;
        let mut i = 0;
        while i < crossing_count {
            let first = self.crossings[i];
            let partner = (i + 1..crossing_count)
                .rev()
                .find(|&j| self.crossings[j].boundary == first.boundary);
            let Some(j) = partner else {
                i += 1;
                continue;
            };
            let second = self.crossings[j];
            let polygon = &boundaries[first.boundary];

            let signal = shortest_distance_around(polygon, &first, &second);
            self.direction_around = signal;
            let direction = Direction::from_signal(signal);

            let mut vertices = 0;
            if let Some(walker) = arc_vertices(polygon, &first, &second, direction) {
                for idx in walker {
                    push_distinct(&mut points, polygon[idx]);
                    vertices += 1;
                }
            }
            detoured |= vertices > 0;
            self.sink.trace(&TraceEvent::Detour {
                boundary: first.boundary,
                signal,
                vertices,
            });

            i = j + 1;
        }
        push_distinct(&mut points, snapped_end);

        if self.config.simplify && points.len() > 2 {
            points = simplify_path(&self.locator, &points);
            detoured = points.len() > 2;
        }

        let path = Polyline::from_points(points);
        self.sink.trace(&TraceEvent::Routed {
            points: path.len(),
            length: path.length(),
        });
        log::debug!(
            "travel {} -> {}: {} crossings, {} path points",
            start,
            end,
            crossing_count,
            path.len()
        );

        Ok(TravelResult {
            path,
            original_crossings: crossing_count,
            path_modified: detoured,
            start_moved,
            end_moved,
        })
    }

    /// The endpoint itself when admissible, otherwise its snapped location.
    fn snap(&mut self, p: Point) -> Option<Point> {
        if self.locator.classify(&p).is_admissible() {
            return Some(p);
        }
        match self.locator.move_inside(&p, self.config.max_snap_distance) {
            Some(moved) => {
                self.sink.trace(&TraceEvent::Snapped { from: p, to: moved });
                Some(moved)
            }
            None => {
                log::debug!("cannot move {} inside the boundaries", p);
                self.sink.trace(&TraceEvent::SnapFailed { point: p });
                None
            }
        }
    }
}

impl fmt::Debug for AvoidCrossingPerimeters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvoidCrossingPerimeters")
            .field("boundaries", &self.boundaries.len())
            .field("config", &self.config)
            .field("crossings", &self.crossings)
            .field("direction_around", &self.direction_around)
            .finish_non_exhaustive()
    }
}

/// Append `p` unless it repeats the last point.
fn push_distinct(points: &mut Vec<Point>, p: Point) {
    if points.last() != Some(&p) {
        points.push(p);
    }
}

fn crosses_boundary(
    locator: &PointLocator<'_>,
    a: Point,
    b: Point,
    scratch: &mut Vec<Crossing>,
) -> bool {
    find_crossings(locator.boundaries(), locator.bounding_boxes(), a, b, scratch);
    organize_crossings(scratch, a, b);
    if !scratch.is_empty() {
        return true;
    }
    let mid = Point::new(a.x + (b.x - a.x) / 2, a.y + (b.y - a.y) / 2);
    !locator.classify(&mid).is_admissible()
}

/// Greedily skip ahead to the furthest point reachable without crossing a
/// boundary. First and last points are always kept.
fn simplify_path(locator: &PointLocator<'_>, path: &[Point]) -> Vec<Point> {
    let Some(&last) = path.last() else {
        return Vec::new();
    };

    let mut scratch = Vec::new();
    let mut result = vec![path[0]];
    let mut current = 0;
    while current < path.len() - 1 {
        let mut next = current + 1;
        for candidate in (current + 2..path.len()).rev() {
            if !crosses_boundary(locator, path[current], path[candidate], &mut scratch) {
                next = candidate;
                break;
            }
        }
        result.push(path[next]);
        current = next;
    }

    debug_assert_eq!(result.last(), Some(&last));
    result
}
