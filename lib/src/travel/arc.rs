//! Choosing the shorter way around a boundary.

use super::crossing::Crossing;
use super::ring::{Direction, RingWalker};
use crate::geometry::Polygon;
use crate::CoordF;

/// Relative tolerance under which both arcs count as equally long.
const ARC_TIE_TOLERANCE: CoordF = 1e-9;

/// Signed distance around `polygon` from crossing `from` to crossing `to`.
///
/// Walks forward once from `from.edge`, summing edge lengths plus the partial
/// edges at both crossings. When the forward distance is less than half the
/// perimeter the result is that (non-negative) distance and walking forward is
/// shorter. Otherwise the result is the negated backward distance. Only the
/// sign matters to callers.
///
/// On an exact tie the arc whose vertex run avoids vertex 0 wins, so that
/// the choice does not depend on which crossing comes first.
///
/// Boundaries with fewer than two points yield 0.
pub fn shortest_distance_around(polygon: &Polygon, from: &Crossing, to: &Crossing) -> CoordF {
    let n = polygon.len();
    if n < 2 {
        return 0.0;
    }
    let from_edge = from.edge % n;
    let to_edge = to.edge % n;

    let total = polygon.perimeter();
    let forward = if from_edge == to_edge {
        let gap = from.point.distance(&to.point);
        if runs_with_edge(polygon, from, to) {
            gap
        } else {
            total - gap
        }
    } else {
        let mut distance = from.point.distance(&polygon[from_edge]);
        let mut idx = from_edge;
        loop {
            let next = polygon.next_index(idx);
            if next == to_edge {
                break;
            }
            distance += polygon[idx].distance(&polygon[next]);
            idx = next;
        }
        distance + polygon[idx].distance(&to.point)
    };

    let backward = total - forward;
    let tied = (forward - backward).abs() <= ARC_TIE_TOLERANCE * total.max(1.0);
    if tied && from_edge != to_edge {
        return if forward_run_contains_first_vertex(from_edge, to_edge) {
            -backward
        } else {
            forward
        };
    }

    if forward < total / 2.0 {
        forward
    } else {
        -backward
    }
}

/// Vertex indices passed when walking from crossing `from` to crossing `to`.
///
/// Walking forward visits vertices `from.edge ..= to.edge - 1`; walking
/// backward visits `from.edge - 1 ..= to.edge` in decreasing order. Returns
/// `None` when the arc contains no vertex, which happens when both crossings
/// lie on the same edge and the walk runs straight along it.
pub fn arc_vertices(
    polygon: &Polygon,
    from: &Crossing,
    to: &Crossing,
    direction: Direction,
) -> Option<RingWalker> {
    let n = polygon.len();
    if n < 2 {
        return None;
    }
    let from_edge = from.edge % n;
    let to_edge = to.edge % n;

    if from_edge == to_edge {
        let along = runs_with_edge(polygon, from, to);
        let straight = match direction {
            Direction::Forward => along,
            Direction::Backward => !along,
        };
        if straight {
            return None;
        }
    }

    let walker = match direction {
        Direction::Forward => {
            RingWalker::new(from_edge, polygon.prev_index(to_edge), n, Direction::Forward)
        }
        Direction::Backward => {
            RingWalker::new(polygon.prev_index(from_edge), to_edge, n, Direction::Backward)
        }
    };
    Some(walker)
}

/// Whether `to` lies at or after `from` in the direction of their shared edge.
fn runs_with_edge(polygon: &Polygon, from: &Crossing, to: &Crossing) -> bool {
    let edge = polygon.edge(from.edge % polygon.len());
    edge.vector().dot(&(to.point - from.point)) >= 0
}

/// Whether the forward run `from_edge ..= to_edge - 1` passes vertex 0.
fn forward_run_contains_first_vertex(from_edge: usize, to_edge: usize) -> bool {
    from_edge == 0 || (to_edge != 0 && to_edge <= from_edge)
}
