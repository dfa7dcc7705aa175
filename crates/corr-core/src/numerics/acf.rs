//! Time-domain autocorrelation kernels ported from the legacy
//! `calcCorrelation` / `subtract_average` / `variance` routines.

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum AcfError {
    #[error("autocorrelation requires at least 1 sample")]
    EmptySeries,
    #[error("max lag must be at least 1")]
    ZeroMaxLag,
    #[error(
        "max lag {max_lag} exceeds sample count {n_samples}; every lag bucket needs at least one contributing pair"
    )]
    LagExceedsSamples { max_lag: usize, n_samples: usize },
    #[error("sample at index {index} is not finite: {value}")]
    NonFiniteSample { index: usize, value: f64 },
}

/// Subtract the arithmetic mean from every sample in place:
/// `dz(t) = z(t) - <z>`. The resulting mean is zero up to rounding.
pub fn subtract_mean(samples: &mut [f64]) {
    if samples.is_empty() {
        return;
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    for sample in samples.iter_mut() {
        *sample -= mean;
    }
}

/// Population variance `Σ y_i² / N` of an already-centered series.
///
/// Deliberately divide-by-N, not N−1: the legacy physical derivation used
/// the population form, and the zero-lag ACF bucket normalizes by N as well.
/// The summation order matches `autocorrelation`'s lag-0 bucket, so for the
/// same input `population_variance(y) == autocorrelation(y, m)[0]` exactly.
pub fn population_variance(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sum = 0.0;
    for &sample in samples {
        sum += sample * sample;
    }
    sum / samples.len() as f64
}

/// Lag-truncated autocorrelation of a centered series by direct pairwise
/// accumulation.
///
/// For each reference index `i`, every product `y[i]·y[j]` with
/// `j ∈ [i, min(N, i+max_lag))` is accumulated into bucket `t = j − i`
/// together with a pair count, and each bucket is normalized by its count.
/// O(N·max_lag) time, O(max_lag) space beyond the output.
///
/// Requiring `max_lag ≤ N` guarantees bucket `t` receives `N − t ≥ 1` pairs,
/// so the per-bucket divide always has support; `max_lag == N` is legal and
/// leaves the highest bucket with a single contributing pair.
pub fn autocorrelation(samples: &[f64], max_lag: usize) -> Result<Vec<f64>, AcfError> {
    let n_samples = samples.len();
    if n_samples == 0 {
        return Err(AcfError::EmptySeries);
    }
    if max_lag == 0 {
        return Err(AcfError::ZeroMaxLag);
    }
    if max_lag > n_samples {
        return Err(AcfError::LagExceedsSamples { max_lag, n_samples });
    }
    for (index, &value) in samples.iter().enumerate() {
        if !value.is_finite() {
            return Err(AcfError::NonFiniteSample { index, value });
        }
    }

    let mut corr = vec![0.0; max_lag];
    let mut counts = vec![0u64; max_lag];

    for i in 0..n_samples {
        let upper = (i + max_lag).min(n_samples);
        for j in i..upper {
            let lag = j - i;
            corr[lag] += samples[i] * samples[j];
            counts[lag] += 1;
        }
    }

    for (value, &count) in corr.iter_mut().zip(counts.iter()) {
        *value /= count as f64;
    }

    Ok(corr)
}
