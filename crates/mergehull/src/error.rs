//! Error type for hull computation.

use thiserror::Error;

/// Errors returned by the hull entry points.
///
/// The first three variants are caller errors (bad input); only
/// `TangentWalkDiverged` means the computation itself failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    /// No points were given; a hull needs at least one.
    #[error("empty input: a hull needs at least one point")]
    EmptyInput,

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at input index {index}")]
    NonFinite {
        /// Index into the caller's slice.
        index: usize,
    },

    /// Two distinct points share an x-coordinate.
    #[error("duplicate x-coordinate {x}: the divider needs distinct x")]
    DuplicateX {
        /// The shared x value.
        x: f64,
    },

    /// A tangent walk exceeded its step bound.
    #[error("tangent walk did not converge after {steps} steps")]
    TangentWalkDiverged {
        /// Steps taken before giving up.
        steps: usize,
    },
}

impl HullError {
    /// True for input problems the caller can fix.
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, HullError::TangentWalkDiverged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_errors_are_distinct_from_failures() {
        assert!(HullError::EmptyInput.is_caller_error());
        assert!(HullError::NonFinite { index: 3 }.is_caller_error());
        assert!(HullError::DuplicateX { x: 1.5 }.is_caller_error());
        assert!(!HullError::TangentWalkDiverged { steps: 10 }.is_caller_error());
    }

    #[test]
    fn messages_carry_context() {
        let e = HullError::NonFinite { index: 7 };
        assert_eq!(e.to_string(), "non-finite coordinate at input index 7");
        let e = HullError::TangentWalkDiverged { steps: 42 };
        assert!(e.to_string().contains("42"));
    }
}
