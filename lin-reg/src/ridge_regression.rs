use nalgebra::{DMatrix, DVector};

use crate::{with_bias, GradientDescent, LinReg, LinRegError, Result, TikhonovRegularization};

/// Linear regression with a regularization factor.
///
/// The training strategy is fixed by the `R` parameter at construction,
/// see [`GradientDescent`] and [`TikhonovRegularization`].
/// A bias column of ones is prepended to the records on every `fit` and `predict`,
/// so the first weight is the intercept.
#[derive(Debug, Clone)]
pub struct RidgeRegression<R> {
    regressor: R,
    weights: Option<DVector<f64>>,
}

impl<R> RidgeRegression<R>
where
    R: LinReg,
{
    /// Create a new, unfitted model using the given regressor
    pub fn new(regressor: R) -> Self {
        Self { regressor, weights: None }
    }

    /// Fit the weights to the given records and targets.
    /// Each call replaces the weights of a previous fit.
    ///
    /// # Arguments:
    /// records: n x m matrix with one sample per row
    /// targets: n target values
    pub fn fit(&mut self, records: &DMatrix<f64>, targets: &DVector<f64>) -> Result<()> {
        if records.nrows() == 0 || records.ncols() == 0 {
            return Err(LinRegError::EmptyDesign {
                rows: records.nrows(),
                cols: records.ncols(),
            });
        }
        if records.nrows() != targets.len() {
            return Err(LinRegError::TargetLengthMismatch {
                rows: records.nrows(),
                targets: targets.len(),
            });
        }

        let design = with_bias(records);
        let weights = self.regressor.fit_weights(&design, targets)?;
        debug!(
            "fitted {} weights with regularization_coeff {}",
            weights.len(),
            self.regressor.regularization_coeff()
        );
        self.weights = Some(weights);

        Ok(())
    }

    /// Predict one target value per row of `records`
    pub fn predict(&self, records: &DMatrix<f64>) -> Result<DVector<f64>> {
        let weights = self.weights.as_ref().ok_or(LinRegError::NotFitted)?;
        if records.ncols() + 1 != weights.len() {
            return Err(LinRegError::FeatureMismatch {
                expected: weights.len() - 1,
                got: records.ncols(),
            });
        }

        Ok(with_bias(records) * weights)
    }

    /// The fitted weights, bias first, if `fit` has been called
    #[inline(always)]
    pub fn weights(&self) -> Option<&DVector<f64>> {
        self.weights.as_ref()
    }

    /// Get a reference to the regressor
    #[inline(always)]
    pub fn regressor(&self) -> &R {
        &self.regressor
    }
}

impl RidgeRegression<GradientDescent> {
    /// Model trained by gradient descent with the default hyperparameters
    pub fn gradient_descent(regularization_coeff: f64) -> Self {
        Self::new(GradientDescent::new(regularization_coeff))
    }
}

impl RidgeRegression<TikhonovRegularization> {
    /// Model trained by the closed form pseudoinverse solution
    pub fn closed_form(regularization_coeff: f64) -> Self {
        Self::new(TikhonovRegularization::new(regularization_coeff))
    }
}
