use thiserror::Error;

/// Convenience alias for results of the data utilities
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised when building, splitting or scoring data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// Records and targets have a different number of rows
    #[error("{records} records but {targets} targets")]
    LengthMismatch {
        /// Number of record rows
        records: usize,
        /// Number of targets
        targets: usize,
    },
    /// The requested test fraction is outside of (0, 1)
    #[error("test size must lie strictly between 0 and 1, got {0}")]
    InvalidTestSize(f64),
    /// A split would leave one of its parts without samples
    #[error("split leaves {train} train and {test} test samples")]
    EmptyPartition {
        /// Samples in the train part
        train: usize,
        /// Samples in the test part
        test: usize,
    },
    /// The number of folds does not fit the number of samples
    #[error("cannot build {k} folds from {nsamples} samples")]
    InvalidFoldCount {
        /// Requested number of folds
        k: usize,
        /// Available samples
        nsamples: usize,
    },
    /// No samples or no features were given
    #[error("input is empty")]
    EmptyInput,
}
