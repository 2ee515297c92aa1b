//! Recursive divider: split at `len / 2`, hull each half, merge.

use super::merge::merge;
use super::types::{Hull, Pt2, XSorted};
use crate::error::HullError;

/// Hull of an x-sorted point set, in CCW order.
///
/// Pre: distinct x-coordinates (not checked here; see `HullCfg::reject_duplicate_x`).
pub fn divide(sorted: &XSorted) -> Result<Hull, HullError> {
    divide_slice(sorted.as_slice())
}

fn divide_slice(points: &[Pt2]) -> Result<Hull, HullError> {
    match points.len() {
        0 => Err(HullError::EmptyInput),
        1 => Ok(Hull::singleton(points[0])),
        n => {
            // left half gets the smaller share on odd sizes
            let (lo, hi) = points.split_at(n / 2);
            let left = divide_slice(lo)?;
            let right = divide_slice(hi)?;
            merge(&left, &right)
        }
    }
}

/// Like `divide`, but forks the two halves with `rayon::join` while a
/// sub-problem has at least `min_len` points.
#[cfg(feature = "parallel")]
pub fn divide_par(sorted: &XSorted, min_len: usize) -> Result<Hull, HullError> {
    divide_slice_par(sorted.as_slice(), min_len.max(2))
}

#[cfg(feature = "parallel")]
fn divide_slice_par(points: &[Pt2], min_len: usize) -> Result<Hull, HullError> {
    if points.len() < min_len {
        return divide_slice(points);
    }
    let (lo, hi) = points.split_at(points.len() / 2);
    let (left, right) = rayon::join(
        || divide_slice_par(lo, min_len),
        || divide_slice_par(hi, min_len),
    );
    merge(&left?, &right?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn sorted(pts: &[[f64; 2]]) -> XSorted {
        let v: Vec<Pt2> = pts.iter().map(|p| vector![p[0], p[1]]).collect();
        XSorted::new(&v)
    }

    #[test]
    fn empty_is_a_caller_error() {
        assert_eq!(divide(&XSorted::default()), Err(HullError::EmptyInput));
    }

    #[test]
    fn single_point_is_its_own_hull() {
        let h = divide(&sorted(&[[2.5, -1.0]])).unwrap();
        assert_eq!(h.points(), &[vector![2.5, -1.0]]);
    }

    #[test]
    fn two_points_both_kept() {
        let h = divide(&sorted(&[[0.0, 0.0], [1.0, 1.0]])).unwrap();
        assert_eq!(h.len(), 2);
        assert!(h.points().contains(&vector![0.0, 0.0]));
        assert!(h.points().contains(&vector![1.0, 1.0]));
    }

    #[test]
    fn odd_split_drops_interior_point() {
        // five points, interior (2, 1): split is 2 | 3
        let h = divide(&sorted(&[
            [0.0, 0.0],
            [1.0, 3.0],
            [2.0, 1.0],
            [3.0, -2.0],
            [4.0, 2.0],
        ]))
        .unwrap();
        assert_eq!(h.len(), 4);
        assert!(!h.points().contains(&vector![2.0, 1.0]));
        assert!(h.is_ccw_convex());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_serial() {
        use crate::rand::{sample_points, ReplayToken, SampleCfg, Shape};
        let pts = sample_points(
            SampleCfg {
                n: 3000,
                shape: Shape::Disk { radius: 1.0 },
            },
            ReplayToken { seed: 9, index: 0 },
        );
        let s = XSorted::new(&pts);
        assert_eq!(divide_par(&s, 64).unwrap(), divide(&s).unwrap());
    }
}
