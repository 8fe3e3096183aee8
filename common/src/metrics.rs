use nalgebra::DVector;

use crate::{DataError, Result};

/// Mean of the squared differences between `y_true` and `y_pred`
pub fn mean_squared_error(y_true: &DVector<f64>, y_pred: &DVector<f64>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(DataError::LengthMismatch {
            records: y_pred.len(),
            targets: y_true.len(),
        });
    }
    if y_true.is_empty() {
        return Err(DataError::EmptyInput);
    }

    Ok((y_true - y_pred).norm_squared() / y_true.len() as f64)
}
