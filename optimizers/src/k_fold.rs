//! Cross validation as optimization environment

use common::{mean_squared_error, Dataset};
use lin_reg::{LinReg, RidgeRegression};

use crate::{OptEnvironment, OptError};

/// Scores a regressor by its average held out error over `k` folds
#[derive(Debug, Clone)]
pub struct KFoldEnvironment {
    dataset: Dataset,
    k: usize,
    seed: Option<u64>,
}

impl KFoldEnvironment {
    /// Create a new environment over the training data.
    /// With a seed, every evaluation sees the same folds.
    pub fn new(dataset: Dataset, k: usize, seed: Option<u64>) -> Self {
        Self { dataset, k, seed }
    }

    /// The data folds are built from
    #[inline(always)]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Number of folds
    #[inline(always)]
    pub fn k(&self) -> usize {
        self.k
    }
}

impl<R> OptEnvironment<R> for KFoldEnvironment
where
    R: LinReg,
{
    fn evaluate(&self, regressor: R) -> Result<f64, OptError> {
        // folds are rebuilt for every candidate
        let folds = self.dataset.k_fold(self.k, self.seed)?;

        let mut mse = 0.0;
        for (train, validation) in folds.iter() {
            let mut model = RidgeRegression::new(regressor.clone());
            model.fit(train.records(), train.targets())?;
            let preds = model.predict(validation.records())?;
            mse += mean_squared_error(validation.targets(), &preds)?;
        }

        Ok(mse / self.k as f64)
    }
}
