//! Linear-time merge of two x-separated convex hulls.
//!
//! Model
//! - Seed both tangent walks with the rightmost vertex of the left hull and
//!   the leftmost vertex of the right hull.
//! - Lower tangent: line directed left → right. Step the left end backward
//!   until it supports the left hull, then the right end forward until it
//!   supports the right hull; repeat until both hold at once.
//! - Upper tangent: the same walk with the hulls swapped (line directed
//!   right → left), which steps the right end backward and the left end
//!   forward.
//! - Splice: right hull CCW from lower to upper attachment, then left hull
//!   CCW from upper to lower attachment.
//!
//! Pre: both hulls CCW, every left x ≤ every right x, distinct x across hulls.

use super::orient::supports_at;
use super::types::{Attach, Hull, Tangent};
use crate::error::HullError;

/// Merge two CCW hulls, `left` entirely left of `right`, into the hull of their union.
pub fn merge(left: &Hull, right: &Hull) -> Result<Hull, HullError> {
    let (lower, upper) = tangents(left, right)?;
    let mut pts = right.arc(lower.right, upper.right);
    pts.extend(left.arc(upper.left, lower.left));
    Ok(Hull::from_ccw_unchecked(pts))
}

/// Lower and upper common tangents of `left` and `right`.
pub fn tangents(left: &Hull, right: &Hull) -> Result<(Tangent, Tangent), HullError> {
    let seed_l = left.rightmost();
    let seed_r = right.leftmost();
    let (l, r) = walk_tangent(left, seed_l, right, seed_r)?;
    let lower = Tangent { left: l, right: r };
    let (r, l) = walk_tangent(right, seed_r, left, seed_l)?;
    let upper = Tangent { left: l, right: r };
    Ok((lower, upper))
}

/// Walk the line `first[i] → second[j]` until it supports both hulls.
///
/// The `first` end steps backward and the `second` end steps forward, so
/// with (left, right) this finds the lower tangent and with (right, left)
/// the upper one. Returns the final positions in (first, second).
fn walk_tangent(
    first: &Hull,
    i: usize,
    second: &Hull,
    j: usize,
) -> Result<(usize, usize), HullError> {
    let mut a = Attach::new(first, i);
    let mut b = Attach::new(second, j);
    // Each end moves less than once around its hull when the precondition holds.
    let bound = 2 * (first.len() + second.len());
    let mut steps = 0usize;

    while !(holds_first(a, b) && holds_second(a, b)) {
        while !holds_first(a, b) {
            a.step_prev();
            steps += 1;
            if steps > bound {
                return Err(HullError::TangentWalkDiverged { steps });
            }
        }
        while !holds_second(a, b) {
            b.step_next();
            steps += 1;
            if steps > bound {
                return Err(HullError::TangentWalkDiverged { steps });
            }
        }
    }
    Ok((a.idx, b.idx))
}

#[inline]
fn holds_first(a: Attach<'_>, b: Attach<'_>) -> bool {
    supports_at(a.point(), b.point(), a, b.point())
}

#[inline]
fn holds_second(a: Attach<'_>, b: Attach<'_>) -> bool {
    supports_at(a.point(), b.point(), b, a.point())
}
