//! End-to-end diffusivity pipeline: extract → center → correlate → integrate
//! → D = var² / ∫C(t)dt, in the stage order of the legacy analysis tool.

use crate::domain::{CorrError, CorrResult, DiffusivityConfig};
use crate::numerics::{autocorrelation, integrate_trapezoid, population_variance, subtract_mean};
use crate::traj;
use serde::Serialize;
use std::fmt::Write as _;

/// Å²/fs → cm²/s. 1 Å² = 1e-16 cm², 1 fs = 1e-15 s.
pub const ANGSTROM2_PER_FS_TO_CM2_PER_S: f64 = 0.1;
/// Å²/fs → units of 1e-5 cm²/s, the conventional reporting scale for
/// membrane diffusivities.
pub const ANGSTROM2_PER_FS_TO_1E5_CM2_PER_S: f64 = 1.0e4;

/// Number of leading ACF lags echoed in the report, as in the legacy tool.
pub const ACF_PREVIEW_LAGS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcfPreviewEntry {
    pub lag: usize,
    pub value: f64,
}

/// Everything one run produces. Serializable so the CLI can persist it as a
/// machine-readable report next to the human summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffusivityReport {
    pub traj_path: String,
    pub field: u32,
    pub format: &'static str,
    pub record_count: usize,
    pub analysis_samples: usize,
    pub parse_failures: usize,
    pub first_failure_line: Option<usize>,
    pub max_lag: usize,
    pub timestep_fs: f64,
    pub integrated_acf: f64,
    pub variance: f64,
    pub diffusion_a2_per_fs: f64,
    pub diffusion_cm2_per_s: f64,
    pub diffusion_1e5_cm2_per_s: f64,
    pub acf_preview: Vec<AcfPreviewEntry>,
}

/// Run the full pipeline for one trajectory file.
pub fn run_diffusivity(config: &DiffusivityConfig) -> CorrResult<DiffusivityReport> {
    validate_config(config)?;

    let extracted = traj::read_series(&config.traj_path, config.field, config.format)?;
    if extracted.record_count == 0 {
        return Err(CorrError::input_validation(
            "INPUT.EMPTY_SERIES",
            format!(
                "trajectory '{}' contains no data records",
                config.traj_path.display()
            ),
        ));
    }

    let mut samples = extracted.samples;
    // Legacy contract: the final retained record is not analytically
    // meaningful and is discarded before any statistics are taken.
    samples.pop();
    let analysis_samples = samples.len();

    if analysis_samples < 2 {
        return Err(CorrError::input_validation(
            "INPUT.SHORT_SERIES",
            format!(
                "need at least 2 analysis samples after discarding the trailing record, got {analysis_samples}"
            ),
        ));
    }
    if config.max_lag > analysis_samples {
        return Err(CorrError::input_validation(
            "INPUT.MAX_LAG",
            format!(
                "max lag {} exceeds the {} usable samples; lag buckets past the sample count would have no support",
                config.max_lag, analysis_samples
            ),
        ));
    }

    subtract_mean(&mut samples);

    let acf = autocorrelation(&samples, config.max_lag)
        .map_err(|error| CorrError::computation("RUN.ACF_KERNEL", error.to_string()))?;
    let variance = population_variance(&samples);

    let integrated_acf = integrate_trapezoid(&acf, config.timestep_fs)
        .map_err(|error| CorrError::computation("RUN.ACF_INTEGRAL", error.to_string()))?;

    let diffusion_a2_per_fs = variance * variance / integrated_acf;
    if integrated_acf == 0.0 || !diffusion_a2_per_fs.is_finite() {
        return Err(CorrError::computation(
            "RUN.DIFFUSIVITY_SINGULAR",
            format!(
                "diffusion coefficient is undefined: variance={variance}, integrated ACF={integrated_acf}"
            ),
        ));
    }

    let acf_preview = acf
        .iter()
        .take(ACF_PREVIEW_LAGS)
        .enumerate()
        .map(|(lag, &value)| AcfPreviewEntry { lag, value })
        .collect();

    Ok(DiffusivityReport {
        traj_path: config.traj_path.display().to_string(),
        field: config.field.as_number(),
        format: config.format.as_str(),
        record_count: extracted.record_count,
        analysis_samples,
        parse_failures: extracted.parse_failures,
        first_failure_line: extracted.first_failure_line,
        max_lag: config.max_lag,
        timestep_fs: config.timestep_fs,
        integrated_acf,
        variance,
        diffusion_a2_per_fs,
        diffusion_cm2_per_s: diffusion_a2_per_fs * ANGSTROM2_PER_FS_TO_CM2_PER_S,
        diffusion_1e5_cm2_per_s: diffusion_a2_per_fs * ANGSTROM2_PER_FS_TO_1E5_CM2_PER_S,
        acf_preview,
    })
}

/// Stdout block in the legacy order: integral, variance, the diffusion
/// coefficient in three unit systems, then the leading ACF lags.
pub fn render_human_summary(report: &DiffusivityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "I = {}", report.integrated_acf);
    let _ = writeln!(out, "var = {}", report.variance);
    let _ = writeln!(out, "D = {} A2/fs", report.diffusion_a2_per_fs);
    let _ = writeln!(out, "D = {} cm2/s", report.diffusion_cm2_per_s);
    let _ = writeln!(out, "D = {} 1e-5 cm2/s", report.diffusion_1e5_cm2_per_s);
    for entry in &report.acf_preview {
        let _ = writeln!(out, "{} {}", entry.lag, entry.value);
    }
    out
}

fn validate_config(config: &DiffusivityConfig) -> CorrResult<()> {
    if config.max_lag < 2 {
        return Err(CorrError::input_validation(
            "INPUT.MAX_LAG",
            format!(
                "max lag must be at least 2 so the ACF spans an integrable interval, got {}",
                config.max_lag
            ),
        ));
    }
    if !config.timestep_fs.is_finite() || config.timestep_fs <= 0.0 {
        return Err(CorrError::input_validation(
            "INPUT.TIMESTEP",
            format!("timestep must be finite and > 0 fs, got {}", config.timestep_fs),
        ));
    }
    Ok(())
}
