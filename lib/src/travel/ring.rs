//! Walking the vertex ring of a boundary.

use std::iter::FusedIterator;

/// Direction for walking around a boundary polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Increasing vertex indices.
    Forward,
    /// Decreasing vertex indices.
    Backward,
}

impl Direction {
    /// Direction selected by a signed arc distance: non-negative walks forward.
    #[inline]
    pub fn from_signal(signal: f64) -> Self {
        if signal >= 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Lazy sequence of vertex indices on a ring of `len` vertices.
///
/// Yields `start`, then steps in `direction` with modulo wraparound, and stops
/// after yielding `end`. A walk from `i` to `i` yields exactly one index. The
/// walk is finite (at most `len` indices) and can be restarted.
///
/// ```
/// use travel_planner::{Direction, RingWalker};
///
/// let forward: Vec<usize> = RingWalker::new(3, 1, 5, Direction::Forward).collect();
/// assert_eq!(forward, vec![3, 4, 0, 1]);
///
/// let backward: Vec<usize> = RingWalker::new(1, 3, 5, Direction::Backward).collect();
/// assert_eq!(backward, vec![1, 0, 4, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingWalker {
    len: usize,
    start: usize,
    end: usize,
    direction: Direction,
    next: Option<usize>,
}

impl RingWalker {
    /// Create a walker. Indices are taken modulo `len`; an empty ring yields nothing.
    pub fn new(start: usize, end: usize, len: usize, direction: Direction) -> Self {
        if len == 0 {
            return Self {
                len,
                start: 0,
                end: 0,
                direction,
                next: None,
            };
        }
        let start = start % len;
        Self {
            len,
            start,
            end: end % len,
            direction,
            next: Some(start),
        }
    }

    /// Rewind to the first index.
    pub fn restart(&mut self) {
        self.next = if self.len == 0 { None } else { Some(self.start) };
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    fn step(&self, index: usize) -> usize {
        match self.direction {
            Direction::Forward => (index + 1) % self.len,
            Direction::Backward => (index + self.len - 1) % self.len,
        }
    }

    fn remaining(&self) -> usize {
        match self.next {
            None => 0,
            Some(next) => match self.direction {
                Direction::Forward => (self.end + self.len - next) % self.len + 1,
                Direction::Backward => (next + self.len - self.end) % self.len + 1,
            },
        }
    }
}

impl Iterator for RingWalker {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = if current == self.end {
            None
        } else {
            Some(self.step(current))
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RingWalker {}

impl FusedIterator for RingWalker {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_without_wrap() {
        let walk: Vec<usize> = RingWalker::new(1, 3, 6, Direction::Forward).collect();
        assert_eq!(walk, vec![1, 2, 3]);
    }

    #[test]
    fn test_forward_wraps() {
        let walk: Vec<usize> = RingWalker::new(4, 1, 6, Direction::Forward).collect();
        assert_eq!(walk, vec![4, 5, 0, 1]);
    }

    #[test]
    fn test_backward_wraps() {
        let walk: Vec<usize> = RingWalker::new(1, 4, 6, Direction::Backward).collect();
        assert_eq!(walk, vec![1, 0, 5, 4]);
    }

    #[test]
    fn test_backward_without_wrap() {
        let walk: Vec<usize> = RingWalker::new(3, 0, 4, Direction::Backward).collect();
        assert_eq!(walk, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_single_index() {
        let walk: Vec<usize> = RingWalker::new(2, 2, 5, Direction::Forward).collect();
        assert_eq!(walk, vec![2]);
        let walk: Vec<usize> = RingWalker::new(2, 2, 5, Direction::Backward).collect();
        assert_eq!(walk, vec![2]);
    }

    #[test]
    fn test_full_ring() {
        let walk: Vec<usize> = RingWalker::new(2, 1, 4, Direction::Forward).collect();
        assert_eq!(walk, vec![2, 3, 0, 1]);
        let walk: Vec<usize> = RingWalker::new(1, 2, 4, Direction::Backward).collect();
        assert_eq!(walk, vec![1, 0, 3, 2]);
    }

    #[test]
    fn test_empty_ring() {
        let mut walker = RingWalker::new(0, 0, 0, Direction::Forward);
        assert_eq!(walker.len(), 0);
        assert_eq!(walker.next(), None);
        walker.restart();
        assert_eq!(walker.next(), None);
    }

    #[test]
    fn test_indices_wrap_modulo_len() {
        let walk: Vec<usize> = RingWalker::new(7, 9, 5, Direction::Forward).collect();
        assert_eq!(walk, vec![2, 3, 4]);
    }

    #[test]
    fn test_exact_size_and_fused() {
        let mut walker = RingWalker::new(4, 1, 6, Direction::Forward);
        assert_eq!(walker.len(), 4);
        walker.next();
        assert_eq!(walker.len(), 3);
        let rest: Vec<usize> = walker.by_ref().collect();
        assert_eq!(rest, vec![5, 0, 1]);
        assert_eq!(walker.next(), None);
        assert_eq!(walker.next(), None);
    }

    #[test]
    fn test_restart() {
        let mut walker = RingWalker::new(1, 4, 6, Direction::Backward);
        let first: Vec<usize> = walker.by_ref().collect();
        walker.restart();
        let second: Vec<usize> = walker.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_direction_from_signal() {
        assert_eq!(Direction::from_signal(10.0), Direction::Forward);
        assert_eq!(Direction::from_signal(0.0), Direction::Forward);
        assert_eq!(Direction::from_signal(-0.5), Direction::Backward);
        assert_eq!(Direction::Forward.reversed(), Direction::Backward);
    }
}
