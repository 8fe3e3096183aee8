//! The grid search algorithm

use lin_reg::LinReg;

use crate::{OptEnvironment, OptError};

/// Exhaustive search over a fixed set of regularization coefficients
#[derive(Debug, Clone)]
pub struct GridSearch {
    /// Minimization objective
    best_error: f64,
    best_param: Option<f64>,
    candidates: Vec<f64>,
    errors: Vec<f64>,
}

impl GridSearch {
    /// Create a new grid search over the given candidates
    pub fn new(candidates: Vec<f64>) -> Self {
        let errors = vec![f64::MAX; candidates.len()];
        Self { best_error: f64::MAX, best_param: None, candidates, errors }
    }

    /// Grid of `start, start + step, ...` up to, but excluding, `stop`
    pub fn arange(start: f64, stop: f64, step: f64) -> Self {
        let n = if step > 0.0 && stop > start { ((stop - start) / step).ceil() as usize } else { 0 };
        Self::new((0..n).map(|i| start + i as f64 * step).collect())
    }

    /// Evaluate every candidate in order and keep the best one.
    /// On ties the earlier candidate wins.
    ///
    /// # Arguments:
    /// env: scores an unfitted regressor
    /// reg_gen: builds the regressor for a regularization coefficient
    pub fn run<R, F, E>(&mut self, env: &E, reg_gen: F) -> Result<f64, OptError>
    where
        R: LinReg,
        F: Fn(f64) -> R,
        E: OptEnvironment<R>,
    {
        if self.candidates.is_empty() {
            return Err(OptError::NoCandidates);
        }
        self.best_error = f64::MAX;
        self.best_param = None;

        for (i, c) in self.candidates.iter().enumerate() {
            let error = env.evaluate(reg_gen(*c))?;
            info!("\tMean Squared Error: {} (regularization: {:.3})", error, c);
            self.errors[i] = error;

            if error < self.best_error {
                self.best_error = error;
                self.best_param = Some(*c);
            }
        }

        self.best_param.ok_or(OptError::NoFiniteError(self.candidates.len()))
    }

    /// The best evaluated regularization coefficient
    #[inline(always)]
    pub fn elite_param(&self) -> Option<f64> {
        self.best_param
    }

    /// The error of the `elite_param`
    #[inline(always)]
    pub fn best_error(&self) -> f64 {
        self.best_error
    }

    /// All the candidates to be evaluated
    #[inline(always)]
    pub fn candidates(&self) -> &Vec<f64> {
        &self.candidates
    }

    /// The errors of all candidates that have been evaluated
    #[inline(always)]
    pub fn errors(&self) -> &Vec<f64> {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use lin_reg::{GradientDescent, TikhonovRegularization};

    use super::*;
    use crate::KFoldEnvironment;

    /// Scores candidates by their distance to a fixed optimum
    struct Parabola(f64);

    impl OptEnvironment<TikhonovRegularization> for Parabola {
        fn evaluate(&self, regressor: TikhonovRegularization) -> Result<f64, OptError> {
            Ok((regressor.regularization_coeff - self.0).powi(2))
        }
    }

    struct Flat;

    impl OptEnvironment<TikhonovRegularization> for Flat {
        fn evaluate(&self, _: TikhonovRegularization) -> Result<f64, OptError> {
            Ok(1.0)
        }
    }

    #[test]
    fn arange_excludes_stop() {
        let gs = GridSearch::arange(0.0, 0.3, 0.001);

        assert_eq!(gs.candidates().len(), 300);
        assert_eq!(gs.candidates()[0], 0.0);
        assert!((gs.candidates()[299] - 0.299).abs() < 1e-12);
        assert!(GridSearch::arange(1.0, 0.0, 0.1).candidates().is_empty());
    }

    #[test]
    fn finds_parabola_minimum() {
        let mut gs = GridSearch::new(vec![0.0, 0.5, 1.0, 1.5, 2.0]);

        let best = gs.run(&Parabola(1.4), TikhonovRegularization::new).unwrap();

        assert_eq!(best, 1.5);
        assert_eq!(gs.elite_param(), Some(1.5));
        assert!((gs.best_error() - 0.01).abs() < 1e-12);
        assert_eq!(gs.errors().len(), 5);
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let mut gs = GridSearch::new(vec![0.3, 0.1, 0.2]);

        assert_eq!(gs.run(&Flat, TikhonovRegularization::new), Ok(0.3));
    }

    struct Const(f64);

    impl OptEnvironment<TikhonovRegularization> for Const {
        fn evaluate(&self, _: TikhonovRegularization) -> Result<f64, OptError> {
            Ok(self.0)
        }
    }

    #[test]
    fn second_run_starts_fresh() {
        let mut gs = GridSearch::new(vec![0.1, 0.2]);
        assert_eq!(gs.run(&Parabola(0.2), TikhonovRegularization::new), Ok(0.2));

        assert_eq!(gs.run(&Const(5.0), TikhonovRegularization::new), Ok(0.1));
        assert_eq!(gs.best_error(), 5.0);
        assert_eq!(gs.errors(), &vec![5.0, 5.0]);
    }

    #[test]
    fn all_nan_errors() {
        let mut gs = GridSearch::new(vec![0.1, 0.2, 0.3]);

        assert_eq!(
            gs.run(&Const(f64::NAN), TikhonovRegularization::new),
            Err(OptError::NoFiniteError(3))
        );
        assert_eq!(gs.elite_param(), None);
    }

    #[test]
    fn empty_grid() {
        let mut gs = GridSearch::new(vec![]);

        assert_eq!(gs.run(&Flat, TikhonovRegularization::new), Err(OptError::NoCandidates));
    }

    #[test]
    fn selects_grid_minimum_of_cross_validation() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let (ds, _) = common::make_regression(100, 1, 3.0, 10.0, Some(42)).unwrap();
        let (train, _) = ds.train_test_split(0.4, Some(42)).unwrap();
        let env = KFoldEnvironment::new(train, 10, Some(42));
        let reg_gen = |c: f64| GradientDescent::new(c).with_seed(42);

        let mut gs = GridSearch::arange(0.0, 0.05, 0.001);
        let best = gs.run(&env, reg_gen).unwrap();

        // Independently compute the first minimum of the grid
        let mut expected = (f64::MAX, f64::NAN);
        for c in gs.candidates() {
            let mse = env.evaluate(reg_gen(*c)).unwrap();
            if mse < expected.0 {
                expected = (mse, *c);
            }
        }
        info!("best: {}, expected: {:?}", best, expected);

        assert_eq!(best, expected.1);
        assert_eq!(gs.best_error(), expected.0);
        let min = gs.errors().iter().cloned().fold(f64::MAX, f64::min);
        assert_eq!(min, gs.best_error());
    }
}
