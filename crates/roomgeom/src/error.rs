//! Error type shared by every fallible geometry operation.

use thiserror::Error;

/// Errors raised by validated constructors and polygon edits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Centimeter values must fit the signed 32-bit range and stay below `i32::MAX`.
    #[error("centimeter value {0} is out of range")]
    CentimeterOutOfRange(i64),

    /// A `Length` was built from a negative centimeter value.
    #[error("length must not be negative, got {0}cm")]
    NegativeLength(i32),

    /// Degrees live in the half-open range `[0, 360)`.
    #[error("degree {0} is outside [0, 360)")]
    DegreeOutOfRange(f64),

    /// NaN or an infinity reached a numeric constructor.
    #[error("non-finite value for {0}")]
    NonFinite(&'static str),

    #[error("polygon needs at least 3 points, got {got}")]
    TooFewPoints { got: usize },

    #[error("edge has zero length")]
    ZeroLengthEdge,

    #[error("{kind} index {index} out of range for {len} elements")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// Target lengths for edge edits must be strictly positive.
    #[error("target length must be positive")]
    NonPositiveLength,

    /// Target angles for angle edits must lie strictly between 0 and 360.
    #[error("angle {0} must lie strictly between 0 and 360 degrees")]
    AngleOutOfRange(f64),

    /// Ear clipping found no clippable vertex among the remaining ones.
    #[error("no ear found with {remaining} vertices remaining")]
    NoEar { remaining: usize },
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Check `index < len`, naming what was indexed on failure.
#[inline]
pub(crate) fn check_index(kind: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(GeometryError::IndexOutOfRange { kind, index, len })
    }
}
