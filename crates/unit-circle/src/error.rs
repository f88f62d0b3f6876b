//! Crate errors.

use thiserror::Error;

/// Failures of a circle group computation.
///
/// `InvalidPrime` and `InvalidCount` reject a request before any group work
/// is done. `NoGeneratorFound` is an ordinary outcome. `FatalInternal`
/// means the arithmetic itself is wrong and must not be treated as a data
/// problem; see [`CircleError::is_fatal`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CircleError {
    /// The modulus is not an odd prime.
    #[error("{p} is not an odd prime")]
    InvalidPrime { p: u32 },

    /// A power sequence of zero terms was requested.
    #[error("the number of powers must be at least 1")]
    InvalidCount,

    /// No point has order equal to the group size.
    #[error("no generator found for the circle group of order {cardinality} over p = {p}")]
    NoGeneratorFound { p: u32, cardinality: u64 },

    /// A coordinate pair does not satisfy x² + y² = 1.
    #[error("({x}, {y}) is not on the circle x² + y² = 1 mod {p}")]
    NotOnCircle { p: u32, x: u64, y: u64 },

    /// The enumerated point count contradicts the closed form.
    #[error("internal error: found {found} circle points mod {p}, expected {expected}")]
    FatalInternal { p: u32, found: u64, expected: u64 },
}

impl CircleError {
    /// Whether this error signals a defect rather than bad input or an
    /// ordinary edge case.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::FatalInternal { .. })
    }
}
