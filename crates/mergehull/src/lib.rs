//! Divide-and-conquer convex hull in the plane.
//!
//! Layout
//! - `hull`: x-sorted input, CCW hulls, the linear-time tangent merge and the
//!   recursive divider built on it.
//! - `rand`: reproducible point sets for tests, benches and the CLI.
//! - `error`: `HullError`, separating caller errors from a failed merge.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`, y axis up, CCW = positive signed area.
//! - The divider assumes pairwise distinct x-coordinates. See
//!   `HullCfg::reject_duplicate_x` to have that checked.

pub mod error;
pub mod hull;
pub mod rand;

pub use error::HullError;
pub use hull::{compute_hull, compute_hull_with, hull_indices, Hull, HullCfg, Pt2, XSorted};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::hull::{
        compute_hull, compute_hull_with, divide, hull_indices, merge, Hull, HullCfg, Pt2, Tangent,
        XSorted,
    };
    pub use crate::rand::{sample_points, ReplayToken, SampleCfg, Shape};
    pub use nalgebra::Vector2 as Vec2;
}
