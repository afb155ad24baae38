//! # Travel Planner
//!
//! Collision-free travel moves for 3D printing toolpaths.
//!
//! Given the wall outlines of a layer (outer contours and holes) and the start
//! and end of a non-extruding move, the planner produces a polyline that stays
//! inside the printed region, detouring along the boundaries instead of
//! crossing walls. This avoids visible scars and stringing on the part.
//!
//! - Point classification and snapping onto the admissible region
//! - Segment/boundary crossing detection in exact integer arithmetic
//! - Shortest-arc selection around a boundary
//! - Path composition with an injectable diagnostic sink
//!
//! ## Example
//!
//! ```rust
//! use travel_planner::{AvoidCrossingPerimeters, Point, Polygon, TravelConfig};
//!
//! let boundaries = vec![Polygon::from_points(vec![
//!     Point::new(0, 0),
//!     Point::new(1000, 0),
//!     Point::new(1000, 1000),
//!     Point::new(0, 1000),
//! ])];
//!
//! let mut planner = AvoidCrossingPerimeters::new(&boundaries, TravelConfig::default());
//! let result = planner
//!     .travel_to(Point::new(100, 500), Point::new(900, 500))
//!     .expect("both endpoints are inside");
//! assert_eq!(result.path.points(), &[Point::new(100, 500), Point::new(900, 500)]);
//! ```

pub mod geometry;
pub mod travel;

pub use geometry::{BoundingBox, Line, Point, Polygon, Polygons, Polyline};
pub use travel::{
    AvoidCrossingPerimeters, Crossing, Direction, LogSink, NullSink, PointLocator, PointPosition,
    RingWalker, TraceEvent, TraceSink, TravelAxis, TravelConfig, TravelError, TravelResult,
};

/// Coordinate type used throughout the planner.
/// Using i64 for integer coordinates (scaled by SCALING_FACTOR) to keep predicates exact.
pub type Coord = i64;

/// Floating-point coordinate type for unscaled values and lengths.
pub type CoordF = f64;

/// Scaling factor: coordinates are stored as integers scaled by this factor.
/// 1 unit = 1 nanometer, so 1mm = 1_000_000 units.
pub const SCALING_FACTOR: f64 = 1_000_000.0;

/// Scale a floating-point coordinate (mm) to integer.
#[inline]
pub fn scale(v: CoordF) -> Coord {
    (v * SCALING_FACTOR).round() as Coord
}

/// Unscale an integer coordinate to floating-point (mm).
#[inline]
pub fn unscale(v: Coord) -> CoordF {
    v as CoordF / SCALING_FACTOR
}

/// Result type for configuration and setup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for configuration and setup operations.
///
/// Routing failures are reported separately as [`TravelError`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
