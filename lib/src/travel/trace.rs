//! Diagnostic events emitted while routing travel moves.
//!
//! A sink is handed to the planner at construction. The default discards
//! everything, so routing carries no global state and costs nothing when
//! nobody is listening.

use crate::geometry::Point;
use std::fmt;

/// Something the planner did while routing one move.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// A move was requested against `boundaries` boundaries.
    Query {
        boundaries: usize,
        start: Point,
        end: Point,
    },
    /// An endpoint was outside and moved onto the admissible region.
    Snapped { from: Point, to: Point },
    /// An endpoint could not be moved inside.
    SnapFailed { point: Point },
    /// Crossings remaining after sorting and merging.
    Crossings { count: usize },
    /// A detour was taken around `boundary`.
    Detour {
        boundary: usize,
        signal: f64,
        vertices: usize,
    },
    /// The finished path.
    Routed { points: usize, length: f64 },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Query {
                boundaries,
                start,
                end,
            } => write!(f, "travel {} -> {} over {} boundaries", start, end, boundaries),
            TraceEvent::Snapped { from, to } => write!(f, "snapped {} to {}", from, to),
            TraceEvent::SnapFailed { point } => write!(f, "cannot move {} inside", point),
            TraceEvent::Crossings { count } => write!(f, "{} crossings", count),
            TraceEvent::Detour {
                boundary,
                signal,
                vertices,
            } => write!(
                f,
                "detour around boundary {} ({} vertices, signal {:.1})",
                boundary, vertices, signal
            ),
            TraceEvent::Routed { points, length } => {
                write!(f, "routed {} points, length {:.1}", points, length)
            }
        }
    }
}

/// Receiver for [`TraceEvent`]s.
pub trait TraceSink {
    fn trace(&mut self, event: &TraceEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    #[inline]
    fn trace(&mut self, _event: &TraceEvent) {}
}

/// Forwards events to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn trace(&mut self, event: &TraceEvent) {
        log::debug!("{}", event);
    }
}

impl<F> TraceSink for F
where
    F: FnMut(&TraceEvent),
{
    fn trace(&mut self, event: &TraceEvent) {
        self(event)
    }
}
