//! Selection of the regularization strength

#[macro_use]
extern crate log;

use common::DataError;
use lin_reg::{LinReg, LinRegError};
use thiserror::Error;

pub mod grid_search;
pub mod k_fold;

pub use grid_search::GridSearch;
pub use k_fold::KFoldEnvironment;

/// Errors raised while evaluating candidates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptError {
    /// Building or scoring the evaluation data failed
    #[error(transparent)]
    Data(#[from] DataError),
    /// Fitting or predicting with a candidate model failed
    #[error(transparent)]
    LinReg(#[from] LinRegError),
    /// There is nothing to search over
    #[error("no candidates to evaluate")]
    NoCandidates,
    /// Every candidate was evaluated but none scored a finite error
    #[error("none of the {0} candidates scored a finite error")]
    NoFiniteError(usize),
}

/// Scores candidate regressors, lower is better
pub trait OptEnvironment<R>
where
    R: LinReg,
{
    /// Evaluates a regressor's performance in the environment
    ///
    /// # Arguments:
    /// regressor: the candidate linear regression method, not fitted yet
    ///
    /// # Returns:
    /// mean squared error
    fn evaluate(&self, regressor: R) -> Result<f64, OptError>;
}
