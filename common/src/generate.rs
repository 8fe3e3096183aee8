//! Synthetic data generation

use nalgebra::{DMatrix, DVector};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::{rng, DataError, Dataset, Result};

/// Generate a random linear regression problem.
///
/// Features are drawn from a standard normal distribution and each gets a
/// ground truth coefficient drawn uniformly from [0, 100).
/// The targets are the linear combination plus `bias` and gaussian noise
/// with standard deviation `noise`.
///
/// # Returns:
/// The dataset and the ground truth coefficients
pub fn make_regression(
    n_samples: usize,
    n_features: usize,
    bias: f64,
    noise: f64,
    seed: Option<u64>,
) -> Result<(Dataset, DVector<f64>)> {
    if n_samples == 0 || n_features == 0 {
        return Err(DataError::EmptyInput);
    }
    let mut rng = rng(seed);

    let records: DMatrix<f64> =
        DMatrix::from_fn(n_samples, n_features, |_, _| rng.sample(StandardNormal));
    let coef: DVector<f64> = DVector::from_fn(n_features, |_, _| 100.0 * rng.gen::<f64>());

    let mut targets = &records * &coef;
    targets.iter_mut().for_each(|t| {
        let eps: f64 = rng.sample(StandardNormal);
        *t += bias + noise * eps;
    });
    debug!("generated {} samples with coefficients {}", n_samples, coef);

    Ok((Dataset::new(records, targets)?, coef))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes() {
        let (ds, coef) = make_regression(100, 3, 3.0, 10.0, Some(0)).unwrap();

        assert_eq!(ds.nsamples(), 100);
        assert_eq!(ds.nfeatures(), 3);
        assert_eq!(coef.len(), 3);
        assert!(coef.iter().all(|c| (0.0..100.0).contains(c)));
    }

    #[test]
    fn noiseless_targets_are_linear() {
        let (ds, coef) = make_regression(20, 2, 3.0, 0.0, Some(4)).unwrap();

        let expected = ds.records() * &coef;
        for (t, e) in ds.targets().iter().zip(expected.iter()) {
            assert!((t - (e + 3.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = make_regression(10, 1, 0.0, 1.0, Some(7)).unwrap();
        let b = make_regression(10, 1, 0.0, 1.0, Some(7)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn empty_shapes_are_rejected() {
        assert_eq!(make_regression(0, 1, 0.0, 1.0, None), Err(DataError::EmptyInput));
        assert_eq!(make_regression(5, 0, 0.0, 1.0, None), Err(DataError::EmptyInput));
    }
}
