//! Error types for torus construction.

use std::fmt;

/// Why a [`Torus`](super::Torus) could not be built.
///
/// # Examples
///
/// ```rust
/// use flagwater::torus::{Torus, TorusError};
///
/// let err = Torus::<u8, 2>::new([4, 0]).unwrap_err();
/// assert_eq!(err, TorusError::ZeroDimension { axis: 1 });
/// assert_eq!(err.to_string(), "torus axis 1 has zero length");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TorusError {
    /// An axis was given length zero.
    ZeroDimension {
        /// Index of the offending axis.
        axis: usize,
    },
    /// The product of the dimensions does not fit in memory.
    TooLarge,
    /// The element count does not match the product of the dimensions.
    LengthMismatch {
        /// Product of the dimensions.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },
    /// The number of dimensions does not match the torus rank.
    RankMismatch {
        /// Rank of the torus type.
        expected: usize,
        /// Number of dimensions supplied.
        actual: usize,
    },
}

impl fmt::Display for TorusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TorusError::ZeroDimension { axis } => {
                write!(f, "torus axis {} has zero length", axis)
            }
            TorusError::TooLarge => write!(f, "torus dimensions overflow the addressable size"),
            TorusError::LengthMismatch { expected, actual } => write!(
                f,
                "torus needs {} elements but {} were supplied",
                expected, actual
            ),
            TorusError::RankMismatch { expected, actual } => write!(
                f,
                "torus has {} dimensions but {} were supplied",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for TorusError {}
