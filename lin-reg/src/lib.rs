//! Ridge regression, trained either in closed form or by gradient descent

#![deny(unused_imports)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

use nalgebra::{DMatrix, DVector};

mod error;
mod gradient_descent;
mod ridge_regression;
mod tikhonov_regularization;

pub use error::{LinRegError, Result};
pub use gradient_descent::{
    GradientDescent, DEFAULT_LEARNING_RATE, DEFAULT_MOMENTUM, DEFAULT_N_ITERATIONS,
};
pub use ridge_regression::RidgeRegression;
pub use tikhonov_regularization::TikhonovRegularization;

/// Generic way of performing linear regression and fitting the weight vector
pub trait LinReg: Clone {
    /// Fit a weight vector, mapping the rows of `design` to `targets`
    ///
    /// # Parameters
    /// design: Input data, where the first column should be just 1s
    /// targets: One target value per row of `design`
    fn fit_weights(&self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<DVector<f64>>;

    /// The strength of the L2 penalty applied to the weights
    fn regularization_coeff(&self) -> f64;
}

/// Prepend a column of ones to `records`, so the first weight acts as the bias
pub fn with_bias(records: &DMatrix<f64>) -> DMatrix<f64> {
    records.clone().insert_column(0, 1.0)
}

/// Make sure the regularization coefficient is usable as an L2 penalty
pub(crate) fn check_regularization(coeff: f64) -> Result<()> {
    if coeff.is_finite() && coeff >= 0.0 {
        Ok(())
    } else {
        Err(LinRegError::InvalidRegularization(coeff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_column_is_prepended() {
        let records = DMatrix::from_row_slice(2, 2, &[2.0, 3.0, 4.0, 5.0]);
        let design = with_bias(&records);

        assert_eq!(design, DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 1.0, 4.0, 5.0]));
    }

    #[test]
    fn regularization_must_be_non_negative() {
        assert!(check_regularization(0.0).is_ok());
        assert!(check_regularization(1e3).is_ok());
        assert_eq!(check_regularization(-0.1), Err(LinRegError::InvalidRegularization(-0.1)));
        assert!(check_regularization(f64::NAN).is_err());
        assert!(check_regularization(f64::INFINITY).is_err());
    }
}
