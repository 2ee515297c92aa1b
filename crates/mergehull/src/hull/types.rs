//! Point sequences used by the divider and the merger.
//!
//! - `XSorted`: points ascending by (x, y), exact duplicates collapsed. Divider input.
//! - `Hull`: convex boundary in CCW order with circular indexing. Merger input/output.
//! - `Attach`, `Tangent`: tangent endpoints as (hull, index) pairs.
//!
//! The two orderings are separate types so one is never passed where the
//! other is expected.

use nalgebra::Vector2;
use std::cmp::Ordering;

/// A point in the plane.
pub type Pt2 = Vector2<f64>;

#[inline]
pub(crate) fn cmp_xy(a: &Pt2, b: &Pt2) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Points sorted ascending by x, then y. No two entries are equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XSorted {
    pts: Vec<Pt2>,
}

impl XSorted {
    /// Sort a copy of `points` by (x, y) and drop exact duplicates.
    pub fn new(points: &[Pt2]) -> Self {
        let mut pts = points.to_vec();
        pts.sort_by(cmp_xy);
        pts.dedup();
        Self { pts }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Pt2] {
        &self.pts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// First x-coordinate shared by two (distinct) neighbours, if any.
    pub fn duplicate_x(&self) -> Option<f64> {
        self.pts
            .windows(2)
            .find(|w| w[0].x == w[1].x)
            .map(|w| w[0].x)
    }
}

/// Convex polygon boundary, vertices listed counter-clockwise.
///
/// Degenerate hulls are allowed: one point, or two points (a segment
/// walked out and back). Positions are circular; `get`, `next` and
/// `prev` wrap modulo `len`.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    pts: Vec<Pt2>,
}

impl Hull {
    /// One-point hull.
    #[inline]
    pub fn singleton(p: Pt2) -> Self {
        Self { pts: vec![p] }
    }

    /// Wrap points the caller already knows to be a CCW convex boundary.
    ///
    /// Pre: non-empty, CCW, convex. Not checked (see `is_ccw_convex`).
    pub fn from_ccw_unchecked(pts: Vec<Pt2>) -> Self {
        debug_assert!(!pts.is_empty(), "a hull has at least one vertex");
        Self { pts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Pt2] {
        &self.pts
    }

    #[inline]
    pub fn into_points(self) -> Vec<Pt2> {
        self.pts
    }

    /// Vertex at circular position `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Pt2 {
        self.pts[i % self.pts.len()]
    }

    /// Next position in CCW order.
    #[inline]
    pub fn next(&self, i: usize) -> usize {
        (i + 1) % self.pts.len()
    }

    /// Previous position in CCW order.
    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        (i + self.pts.len() - 1) % self.pts.len()
    }

    /// Index of the vertex with the largest x (first one scanned on ties).
    pub fn rightmost(&self) -> usize {
        let mut best = 0;
        for (i, p) in self.pts.iter().enumerate() {
            if p.x > self.pts[best].x {
                best = i;
            }
        }
        best
    }

    /// Index of the vertex with the smallest x (first one scanned on ties).
    pub fn leftmost(&self) -> usize {
        let mut best = 0;
        for (i, p) in self.pts.iter().enumerate() {
            if p.x < self.pts[best].x {
                best = i;
            }
        }
        best
    }

    /// Rotate so the lexicographically smallest (x, y) vertex comes first.
    /// Keeps CCW order.
    pub fn rotate_to_lowest(&mut self) {
        let start = self
            .pts
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| cmp_xy(a, b))
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.pts.rotate_left(start);
    }

    /// Iterate CCW from `from` up to and including `to`.
    ///
    /// Yields `from..to` while advancing, then `to` once more after the loop,
    /// so `from == to` yields exactly one vertex.
    pub(crate) fn arc(&self, from: usize, to: usize) -> Vec<Pt2> {
        let mut out = Vec::with_capacity(self.pts.len());
        let mut i = from;
        while i != to {
            out.push(self.pts[i]);
            i = self.next(i);
        }
        out.push(self.pts[to]);
        out
    }
}

/// One end of a tangent line: a hull and the position where the line touches it.
#[derive(Clone, Copy, Debug)]
pub struct Attach<'a> {
    pub hull: &'a Hull,
    pub idx: usize,
}

impl<'a> Attach<'a> {
    #[inline]
    pub fn new(hull: &'a Hull, idx: usize) -> Self {
        Self { hull, idx }
    }
    #[inline]
    pub fn point(&self) -> Pt2 {
        self.hull.get(self.idx)
    }
    #[inline]
    pub fn step_next(&mut self) {
        self.idx = self.hull.next(self.idx);
    }
    #[inline]
    pub fn step_prev(&mut self) {
        self.idx = self.hull.prev(self.idx);
    }
}

/// A common tangent of two hulls, as positions in each hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangent {
    /// Position in the left hull.
    pub left: usize,
    /// Position in the right hull.
    pub right: usize,
}
