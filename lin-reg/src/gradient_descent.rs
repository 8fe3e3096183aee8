use nalgebra::{DMatrix, DVector};
use nanorand::{Rng, WyRand};

use crate::{check_regularization, LinReg, Result};

/// Default number of weight updates
pub const DEFAULT_N_ITERATIONS: usize = 100;
/// Default fraction of the previous velocity kept in each step
pub const DEFAULT_MOMENTUM: f64 = 0.3;
/// Default step length
pub const DEFAULT_LEARNING_RATE: f64 = 0.001;

/// Ridge regression fitted by batch gradient descent with classical momentum.
///
/// Each iteration computes the gradient of the squared loss plus the L2 penalty,
/// blends it into a velocity vector and steps the weights against it.
/// There is no convergence check, training always runs for `n_iterations`.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    /// Ridge parameter
    pub regularization_coeff: f64,
    /// Number of weight updates performed per fit
    pub n_iterations: usize,
    /// Fraction of the previous velocity carried into the next step.
    /// Higher values smooth out oscillations between steps.
    pub momentum: f64,
    /// Step length of each weight update
    pub learning_rate: f64,
    /// Optional seed for the Rng drawing the initial weights
    pub seed: Option<u64>,
}

impl GradientDescent {
    /// Create a new gradient descent trainer with the default hyperparameters
    pub fn new(regularization_coeff: f64) -> Self {
        Self {
            regularization_coeff,
            n_iterations: DEFAULT_N_ITERATIONS,
            momentum: DEFAULT_MOMENTUM,
            learning_rate: DEFAULT_LEARNING_RATE,
            seed: None,
        }
    }

    /// Use the given seed for the weight initialization
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw `n` initial weights uniformly from [0, 1)
    pub(crate) fn initial_weights(&self, n: usize) -> DVector<f64> {
        let mut rng = match self.seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };
        DVector::from_fn(n, |_, _| unit_interval(rng.generate::<u64>()))
    }
}

/// Map the top 53 bits of `bits` onto [0, 1), never reaching 1.0
#[inline(always)]
fn unit_interval(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}

impl LinReg for GradientDescent {
    fn fit_weights(&self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<DVector<f64>> {
        check_regularization(self.regularization_coeff)?;

        let mut weights = self.initial_weights(design.ncols());
        let mut velocity: DVector<f64> = DVector::zeros(design.ncols());
        trace!("initial weights: {}", weights);

        for _ in 0..self.n_iterations {
            let residuals = targets - design * &weights;
            // d/dw of 0.5 * |y - Xw|^2 plus the L2 penalty
            let gradient = -design.tr_mul(&residuals) + self.regularization_coeff * &weights;
            velocity = self.momentum * velocity + gradient;
            weights -= self.learning_rate * &velocity;
        }
        debug!("weights after {} iterations: {}", self.n_iterations, weights);

        Ok(weights)
    }

    #[inline(always)]
    fn regularization_coeff(&self) -> f64 {
        self.regularization_coeff
    }
}
