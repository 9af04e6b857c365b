use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KDIndexError {
    /// A rectangle whose lower corner is not below-left of its upper corner on both axes.
    #[error("Rectangle lower corner must not exceed upper corner on either axis.")]
    InvalidRectangle,

    /// An interleaved coordinate buffer that does not hold whole `(x, y)` pairs.
    #[error("Expected an even number of interleaved coordinates, got {0}.")]
    OddCoordinateCount(usize),
}

pub type Result<T> = std::result::Result<T, KDIndexError>;
