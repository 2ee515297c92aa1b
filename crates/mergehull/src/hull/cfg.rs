//! Hull configuration.
//!
//! Policy
//! - Defaults keep the divider permissive: points sharing an x-coordinate are
//!   passed through (the merge handles the common cases), callers that need
//!   the strict contract turn on `reject_duplicate_x`.

/// Options for `compute_hull_with`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullCfg {
    /// Reject inputs where two distinct points share an x-coordinate.
    pub reject_duplicate_x: bool,
    /// Minimum sub-problem size forked onto the rayon pool (feature `parallel`).
    pub parallel_min_len: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            reject_duplicate_x: false,
            parallel_min_len: 4096,
        }
    }
}

impl HullCfg {
    /// Default options with the distinct-x contract checked.
    pub fn strict() -> Self {
        Self {
            reject_duplicate_x: true,
            ..Self::default()
        }
    }
}
