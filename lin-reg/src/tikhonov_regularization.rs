use nalgebra::{DMatrix, DVector};

use crate::{check_regularization, LinReg, LinRegError, Result};

/// Singular values below this fraction of the largest one are treated as zero
const PINV_RCOND: f64 = 1e-15;

/// Tikhonov regularization aka ridge regression, solved in closed form.
/// It is particularly useful to mitigate the problem of multicollinearity in
/// linear regression.
///
/// The regularized normal equations are solved through a singular value
/// decomposition and its pseudoinverse, so ill-conditioned designs still
/// produce a solution instead of failing.
#[derive(Debug, Clone)]
pub struct TikhonovRegularization {
    /// Ridge parameter
    pub regularization_coeff: f64,
}

impl TikhonovRegularization {
    /// Create a new closed form solver with the given ridge parameter
    pub fn new(regularization_coeff: f64) -> Self {
        Self { regularization_coeff }
    }
}

impl LinReg for TikhonovRegularization {
    fn fit_weights(&self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<DVector<f64>> {
        check_regularization(self.regularization_coeff)?;

        let n = design.ncols();
        let reg_m = DMatrix::<f64>::identity(n, n) * self.regularization_coeff;
        let p0 = design.tr_mul(design) + reg_m;

        // p0 = U * S * V^T
        let svd = p0.try_svd(true, true, f64::EPSILON, 0).ok_or(LinRegError::SvdFailed)?;
        let (u, v_t) = match (svd.u, svd.v_t) {
            (Some(u), Some(v_t)) => (u, v_t),
            _ => return Err(LinRegError::SvdFailed),
        };
        trace!("singular values: {}", svd.singular_values);

        let cutoff = PINV_RCOND * svd.singular_values.max();
        let s_pinv = svd.singular_values.map(|s| if s > cutoff { s.recip() } else { 0.0 });
        let p1 = v_t.transpose() * DMatrix::from_diagonal(&s_pinv) * u.transpose();
        let p2 = design.tr_mul(targets);

        Ok(p1 * p2)
    }

    #[inline(always)]
    fn regularization_coeff(&self) -> f64 {
        self.regularization_coeff
    }
}

#[cfg(test)]
mod tests {
    use round::round;

    use super::*;

    fn design() -> DMatrix<f64> {
        // Note the first column being just ones
        DMatrix::from_column_slice(
            4,
            3,
            &[1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 2.0],
        )
    }

    #[test]
    fn tikhonov_regularization() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let design = design();
        let targets = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        info!("design: {}, targets: {}", design, targets);

        let regressor = TikhonovRegularization::new(0.0);
        let mut weights = regressor.fit_weights(&design, &targets).unwrap();
        info!("weights: {}", weights);

        weights.iter_mut().for_each(|v| *v = round(*v, 1));

        assert_eq!(weights, DVector::from_vec(vec![1.0, 1.0, 0.0]));
    }

    #[test]
    fn tikhonov_regularization_shifted() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let design = design() * 100.0;
        let targets = DVector::from_vec(vec![100.0, 200.0, 300.0, 400.0]);

        let regressor = TikhonovRegularization::new(0.0);
        let mut weights = regressor.fit_weights(&design, &targets).unwrap();
        info!("weights: {}", weights);

        weights.iter_mut().for_each(|v| *v = round(*v, 1));

        assert_eq!(weights, DVector::from_vec(vec![1.0, 1.0, 0.0]));
    }

    #[test]
    fn singular_design_still_solves() {
        // The last two columns are identical, so X^T X is singular without a penalty
        let design = DMatrix::from_row_slice(
            3,
            3,
            &[1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 3.0, 3.0],
        );
        let targets = DVector::from_vec(vec![2.0, 4.0, 6.0]);

        let weights = TikhonovRegularization::new(0.0).fit_weights(&design, &targets).unwrap();
        assert!(weights.iter().all(|w| w.is_finite()));

        let preds = &design * &weights;
        for (p, t) in preds.iter().zip(targets.iter()) {
            assert!((p - t).abs() < 1e-6, "pred {} target {}", p, t);
        }
    }

    #[test]
    fn penalty_shrinks_weights() {
        let design = design();
        let targets = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);

        let norms: Vec<f64> = [0.0, 0.1, 1.0, 10.0, 100.0, 1e4]
            .iter()
            .map(|c| TikhonovRegularization::new(*c).fit_weights(&design, &targets).unwrap().norm())
            .collect();
        info!("norms: {:?}", norms);

        for pair in norms.windows(2) {
            assert!(pair[1] < pair[0], "{:?}", norms);
        }
        assert!(norms[norms.len() - 1] < 1e-2);
    }

    #[test]
    fn negative_penalty_is_rejected() {
        let res = TikhonovRegularization::new(-1.0)
            .fit_weights(&design(), &DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]));

        assert_eq!(res, Err(LinRegError::InvalidRegularization(-1.0)));
    }
}
