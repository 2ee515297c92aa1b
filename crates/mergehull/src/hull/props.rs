//! Measures and predicates on a finished hull.

use super::orient::orient;
use super::types::{Hull, Pt2};

impl Hull {
    /// Enclosed area (shoelace). Zero for fewer than three vertices.
    pub fn area(&self) -> f64 {
        let n = self.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for i in 0..n {
            let p = self.get(i);
            let q = self.get(i + 1);
            twice += p.x * q.y - q.x * p.y;
        }
        0.5 * twice
    }

    /// Length of the closed boundary. A two-point hull counts its segment twice.
    pub fn perimeter(&self) -> f64 {
        let n = self.len();
        if n < 2 {
            return 0.0;
        }
        (0..n).map(|i| (self.get(i + 1) - self.get(i)).norm()).sum()
    }

    /// `p` inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Pt2) -> bool {
        self.contains_eps(p, 0.0)
    }

    /// `p` inside or within `eps` (signed-area units) of the boundary.
    pub fn contains_eps(&self, p: Pt2, eps: f64) -> bool {
        match self.len() {
            0 => false,
            1 => (p - self.get(0)).norm() <= eps,
            2 => {
                let (a, b) = (self.get(0), self.get(1));
                orient(a, b, p).abs() <= eps
                    && (p - a).dot(&(b - a)) >= -eps
                    && (p - b).dot(&(a - b)) >= -eps
            }
            n => (0..n).all(|i| orient(self.get(i), self.get(i + 1), p) >= -eps),
        }
    }

    /// Every consecutive triple turns left (or is straight) and the area is positive.
    pub fn is_ccw_convex(&self) -> bool {
        let n = self.len();
        if n < 3 {
            return n > 0;
        }
        (0..n).all(|i| orient(self.get(i), self.get(i + 1), self.get(i + 2)) >= 0.0)
            && self.area() > 0.0
    }
}
