//! Divide-and-conquer convex hull ("merge hull").
//!
//! Purpose
//! - `divide` splits an x-sorted point set at its midpoint, recurses down to
//!   one-point hulls and combines them bottom-up with `merge`.
//! - `merge` joins two x-separated CCW hulls in linear time by walking the
//!   lower and upper common tangents, then splicing the outer arcs.
//! - `compute_hull` is the caller-facing wrapper: validation, sort, dedup,
//!   and a stable starting vertex.
//!
//! Collinearity
//! - Strictly redundant collinear boundary points are dropped; all-collinear
//!   input yields the two extreme points.
//!
//! Code cross-refs: `Hull`, `XSorted`, `Tangent`, `HullCfg`, `HullError`

mod cfg;
mod compute;
mod divide;
mod merge;
pub mod orient;
mod props;
mod types;

pub use cfg::HullCfg;
pub use compute::{compute_hull, compute_hull_with, hull_indices};
pub use divide::divide;
#[cfg(feature = "parallel")]
pub use divide::divide_par;
pub use merge::{merge, tangents};
pub use types::{Attach, Hull, Pt2, Tangent, XSorted};
