#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum IntegrateError {
    #[error("trapezoidal integration requires at least 2 values, got {actual}")]
    InsufficientValues { actual: usize },
    #[error("integration step must be finite and > 0, got {step}")]
    InvalidStep { step: f64 },
}

/// Trapezoidal rule on a uniformly sampled function:
/// `I = Σ 0.5 · (v[t] + v[t+1]) · step`.
///
/// Linear in `values` and exact for piecewise-linear data.
pub fn integrate_trapezoid(values: &[f64], step: f64) -> Result<f64, IntegrateError> {
    if values.len() < 2 {
        return Err(IntegrateError::InsufficientValues {
            actual: values.len(),
        });
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(IntegrateError::InvalidStep { step });
    }

    let mut integral = 0.0;
    for pair in values.windows(2) {
        integral += 0.5 * (pair[0] + pair[1]) * step;
    }
    Ok(integral)
}
