use super::types::{Attach, Pt2};

/// Twice the signed area of the triangle (a, b, c).
/// Positive for a left (CCW) turn, negative for a right turn, zero if collinear.
#[inline]
pub fn orient(a: Pt2, b: Pt2, c: Pt2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// One-sided tangency test at one end of the directed line `from → to`.
///
/// `at` is the endpoint being tested (its hull and position) and `other` is
/// the opposite endpoint. The line supports the hull at `at` iff both CCW
/// neighbours of `at` lie on the non-negative side of the line. A neighbour
/// exactly on the line only counts if it is not farther out than `at`
/// (measured away from `other`), so the walk settles on the extreme
/// collinear vertex.
///
/// Used for both tangents: the lower one with the line directed left → right,
/// the upper one with it directed right → left.
pub(crate) fn supports_at(from: Pt2, to: Pt2, at: Attach<'_>, other: Pt2) -> bool {
    let here = at.point();
    [at.hull.prev(at.idx), at.hull.next(at.idx)]
        .into_iter()
        .all(|j| {
            let p = at.hull.get(j);
            let side = orient(from, to, p);
            if side != 0.0 {
                return side > 0.0;
            }
            (p - here).dot(&(other - here)) >= 0.0
        })
}

#[cfg(test)]
mod tests {
    use super::super::types::Hull;
    use super::*;
    use nalgebra::vector;

    #[test]
    fn orient_signs() {
        let o = vector![0.0, 0.0];
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 1.0];
        assert!(orient(o, a, b) > 0.0);
        assert!(orient(o, b, a) < 0.0);
        assert_eq!(orient(o, a, vector![3.0, 0.0]), 0.0);
        assert_eq!(orient(o, a, b), 1.0);
    }

    #[test]
    fn singleton_is_always_supported() {
        let h = Hull::singleton(vector![0.0, 0.0]);
        let at = Attach::new(&h, 0);
        let other = vector![4.0, -7.0];
        assert!(supports_at(at.point(), other, at, other));
        assert!(supports_at(other, at.point(), at, other));
    }

    #[test]
    fn lower_tangent_rejects_neighbour_below() {
        // Triangle; line from its top vertex to a far point on the right.
        let h = Hull::from_ccw_unchecked(vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 2.0],
        ]);
        let other = vector![5.0, 2.0];
        let top = Attach::new(&h, 2);
        assert!(!supports_at(top.point(), other, top, other));
        let bottom_right = Attach::new(&h, 1);
        assert!(supports_at(bottom_right.point(), other, bottom_right, other));
    }

    #[test]
    fn collinear_neighbour_counts_only_when_not_farther_out() {
        // Flat two-point hull on the x axis, tangent continuing along the axis.
        let h = Hull::from_ccw_unchecked(vec![vector![1.0, 0.0], vector![0.0, 0.0]]);
        let other = vector![2.0, 0.0];
        let inner = Attach::new(&h, 0);
        let outer = Attach::new(&h, 1);
        assert!(!supports_at(inner.point(), other, inner, other));
        assert!(supports_at(outer.point(), other, outer, other));
    }
}
