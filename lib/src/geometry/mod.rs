//! Geometry primitives for travel planning.
//!
//! All coordinates are scaled integers (see [`crate::SCALING_FACTOR`]).
//! Predicates widen to `i128` before multiplying.

mod bounding_box;
mod line;
mod point;
mod polygon;
mod polyline;

pub use bounding_box::BoundingBox;
pub use line::Line;
pub use point::Point;
pub use polygon::{Polygon, Polygons};
pub use polyline::Polyline;
