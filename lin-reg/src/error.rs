use thiserror::Error;

/// Convenience alias for results of fitting and predicting
pub type Result<T> = std::result::Result<T, LinRegError>;

/// Everything that can go wrong when fitting or evaluating a linear model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinRegError {
    /// The design matrix has no rows or no feature columns
    #[error("design matrix is empty ({rows} rows, {cols} feature columns)")]
    EmptyDesign {
        /// Number of rows
        rows: usize,
        /// Number of feature columns, bias excluded
        cols: usize,
    },
    /// Row count of the design and length of the targets differ
    #[error("design matrix has {rows} rows but {targets} targets were given")]
    TargetLengthMismatch {
        /// Number of rows in the design matrix
        rows: usize,
        /// Number of targets
        targets: usize,
    },
    /// The records have a different width than the model was trained on
    #[error("expected {expected} feature columns, got {got}")]
    FeatureMismatch {
        /// Width used at fit time, bias excluded
        expected: usize,
        /// Width of the records passed in
        got: usize,
    },
    /// Predict was called before fit
    #[error("the model has not been fitted yet")]
    NotFitted,
    /// The L2 penalty is negative, infinite or NaN
    #[error("regularization coefficient must be finite and non-negative, got {0}")]
    InvalidRegularization(f64),
    /// The singular value decomposition did not yield its factors
    #[error("singular value decomposition failed")]
    SvdFailed,
}
