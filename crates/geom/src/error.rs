use thiserror::Error;

/// The failures that geometric constructors and operations can report.
///
/// Every fallible operation in this crate and in the crates built on top of it
/// returns this type, so callers match on one enum no matter where the value
/// came from.
#[non_exhaustive]
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// A coordinate or factor was `NaN` or infinite, or a computation would
    /// have produced one (such as dividing by zero).
    #[error("expected a finite number")]
    NotANumber,
    /// Two values of different dimensions were combined, or a value did not
    /// have the dimension an operation requires.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// An operation needed a direction but was given a vector with magnitude
    /// zero.
    #[error("the zero vector does not define a direction")]
    ZeroVector,
    /// The operation is only defined for a specific dimension.
    #[error("operation requires dimension {required}, got {actual}")]
    UnsupportedDimension { required: usize, actual: usize },
    /// A coordinate index was outside of the value's dimension.
    #[error("coordinate index {index} is out of range for dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },
    /// The parts handed to a constructor were insufficient or contradictory.
    #[error("construction parts are missing or disagree")]
    InconsistentConstruction,
}
