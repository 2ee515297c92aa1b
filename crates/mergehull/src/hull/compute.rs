//! Top-level entry points: validate, sort, divide, normalise rotation.

use super::cfg::HullCfg;
use super::types::{cmp_xy, Hull, Pt2, XSorted};
use crate::error::HullError;
use std::cmp::Ordering;

/// Convex hull of `points` in CCW order, starting at the lowest (x, y) vertex.
///
/// Input order is irrelevant and exact duplicates collapse. Strictly
/// redundant collinear boundary points are not part of the result.
pub fn compute_hull(points: &[Pt2]) -> Result<Hull, HullError> {
    compute_hull_with(points, &HullCfg::default())
}

/// `compute_hull` with explicit options.
pub fn compute_hull_with(points: &[Pt2], cfg: &HullCfg) -> Result<Hull, HullError> {
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }
    let sorted = XSorted::new(points);
    if cfg.reject_duplicate_x {
        if let Some(x) = sorted.duplicate_x() {
            return Err(HullError::DuplicateX { x });
        }
    }
    let mut hull = divide_with(&sorted, cfg)?;
    hull.rotate_to_lowest();
    Ok(hull)
}

#[cfg(feature = "parallel")]
fn divide_with(sorted: &XSorted, cfg: &HullCfg) -> Result<Hull, HullError> {
    super::divide::divide_par(sorted, cfg.parallel_min_len)
}

#[cfg(not(feature = "parallel"))]
fn divide_with(sorted: &XSorted, _cfg: &HullCfg) -> Result<Hull, HullError> {
    super::divide::divide(sorted)
}

/// The hull as indices into `points` (first occurrence of each vertex), CCW.
pub fn hull_indices(points: &[Pt2]) -> Result<Vec<usize>, HullError> {
    let hull = compute_hull(points)?;
    // stable sort: among equal points the smallest index comes first
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| cmp_xy(&points[i], &points[j]));
    Ok(hull
        .points()
        .iter()
        .map(|v| {
            let k = order.partition_point(|&i| cmp_xy(&points[i], v) == Ordering::Less);
            order[k]
        })
        .collect())
}
