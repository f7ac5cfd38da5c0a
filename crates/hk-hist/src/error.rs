//! Error types for histogram construction, filling, and addressing.

use thiserror::Error;

/// Errors that can occur building or using histograms.
#[derive(Error, Debug)]
pub enum HistError {
    /// Invalid axis geometry (zero bins, non-increasing edges, etc).
    #[error("invalid axis: {0}")]
    InvalidAxis(String),

    /// Value type not accepted by the axis (e.g. a string on a continuous axis).
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// Two axes carry the same name.
    #[error("duplicate axis name: '{0}'")]
    DuplicateAxisName(String),

    /// A name-keyed request used a name no axis carries.
    #[error("unknown axis name: '{0}'")]
    UnknownAxisName(String),

    /// Keyword fill reached an axis that has no name.
    #[error("axis {axis} has no name; a keyword fill requires every axis to be named")]
    UnnamedAxis {
        /// Position of the unnamed axis.
        axis: usize,
    },

    /// Keyword fill did not supply a value for a named axis.
    #[error("no value supplied for axis '{0}'")]
    MissingAxisValue(String),

    /// Axis position outside 0..n_axes.
    #[error("axis position {pos} out of range ({n_axes} axes)")]
    PositionOutOfRange {
        /// Requested position.
        pos: usize,
        /// Number of axes in the histogram.
        n_axes: usize,
    },

    /// Bin index or bin range outside the axis.
    #[error("bin {bin} out of range on axis {axis} ({n_bins} bins)")]
    BinOutOfRange {
        /// Axis position.
        axis: usize,
        /// Offending bin index.
        bin: usize,
        /// Number of bins on that axis.
        n_bins: usize,
    },

    /// A request mixed position keys and name keys.
    #[error("mixed position- and name-keyed request; use one key kind per call")]
    MixedKeys,

    /// The same axis was addressed more than once in one request.
    #[error("axis {0} addressed more than once")]
    DuplicateSelector(usize),

    /// Column/weight arity or length mismatch.
    #[error("length mismatch: {0}")]
    LengthMismatch(String),
}

/// Result alias for histogram operations.
pub type Result<T> = std::result::Result<T, HistError>;
