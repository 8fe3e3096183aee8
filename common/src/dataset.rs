use nalgebra::{DMatrix, DVector};
use rand::seq::SliceRandom;

use crate::{rng, DataError, Result};

/// Records paired with one target value per record row
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: DMatrix<f64>,
    targets: DVector<f64>,
}

impl Dataset {
    /// Create a new dataset, making sure records and targets line up
    pub fn new(records: DMatrix<f64>, targets: DVector<f64>) -> Result<Self> {
        if records.nrows() != targets.len() {
            return Err(DataError::LengthMismatch {
                records: records.nrows(),
                targets: targets.len(),
            });
        }
        Ok(Self { records, targets })
    }

    /// The n x m feature matrix
    #[inline(always)]
    pub fn records(&self) -> &DMatrix<f64> {
        &self.records
    }

    /// The n target values
    #[inline(always)]
    pub fn targets(&self) -> &DVector<f64> {
        &self.targets
    }

    /// Number of samples
    #[inline(always)]
    pub fn nsamples(&self) -> usize {
        self.targets.len()
    }

    /// Number of feature columns
    #[inline(always)]
    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    /// Dataset made of the given rows, in the given order
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            records: self.records.select_rows(indices),
            targets: self.targets.select_rows(indices),
        }
    }

    /// Shuffle the samples and split off the last `test_size` fraction as test set.
    ///
    /// # Returns:
    /// (train, test)
    pub fn train_test_split(&self, test_size: f64, seed: Option<u64>) -> Result<(Self, Self)> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(DataError::InvalidTestSize(test_size));
        }
        let n = self.nsamples();
        let n_test = (n as f64 / (1.0 / test_size)).floor() as usize;
        let split_idx = n - n_test;
        if n_test == 0 || split_idx == 0 {
            return Err(DataError::EmptyPartition { train: split_idx, test: n_test });
        }

        let indices = self.shuffled_indices(seed);
        debug!("splitting {} samples into {} train and {} test", n, split_idx, n_test);

        Ok((self.select(&indices[..split_idx]), self.select(&indices[split_idx..])))
    }

    /// Shuffle the samples and build `k` folds for cross validation.
    ///
    /// The shuffled samples are cut into `k` equally sized parts, each of which
    /// serves as validation set once while the others are used for training.
    /// If the samples don't divide evenly, the remaining `n % k` samples
    /// are added to the training part of the last fold.
    ///
    /// # Returns:
    /// `k` pairs of (train, validation)
    pub fn k_fold(&self, k: usize, seed: Option<u64>) -> Result<Vec<(Self, Self)>> {
        let n = self.nsamples();
        if k < 2 || k > n {
            return Err(DataError::InvalidFoldCount { k, nsamples: n });
        }

        let indices = self.shuffled_indices(seed);
        let n_left_overs = n % k;
        let (indices, left_overs) = indices.split_at(n - n_left_overs);
        let fold_size = indices.len() / k;
        debug!("{} folds of size {}, {} left over", k, fold_size, n_left_overs);

        let folds = (0..k)
            .map(|i| {
                let (start, end) = (i * fold_size, (i + 1) * fold_size);
                let mut train: Vec<usize> =
                    indices[..start].iter().chain(indices[end..].iter()).copied().collect();
                if i == k - 1 {
                    train.extend_from_slice(left_overs);
                }

                (self.select(&train), self.select(&indices[start..end]))
            })
            .collect();

        Ok(folds)
    }

    fn shuffled_indices(&self, seed: Option<u64>) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.nsamples()).collect();
        indices.shuffle(&mut rng(seed));
        indices
    }
}
