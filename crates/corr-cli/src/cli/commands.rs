use super::CliError;
use anyhow::Context;
use corr_core::domain::{
    DEFAULT_MAX_LAG, DEFAULT_TIMESTEP_FS, DiffusivityConfig, TrajField, TrajFormat,
};
use corr_core::pipeline::{DiffusivityReport, render_human_summary, run_diffusivity};
use std::path::{Path, PathBuf};

#[derive(clap::Args)]
pub(super) struct DiffusivityArgs {
    /// NAMD .traj trajectory file
    pub(super) traj_file: PathBuf,

    /// Column selector: 1, 2 or 3; any other value falls back to field 3
    #[arg(default_value_t = 1)]
    pub(super) field: i64,

    /// Maximum correlation lag in samples (the legacy nCorr knob)
    #[arg(long, default_value_t = DEFAULT_MAX_LAG)]
    pub(super) max_lag: usize,

    /// Trajectory recording interval in femtoseconds
    #[arg(long, default_value_t = DEFAULT_TIMESTEP_FS)]
    pub(super) timestep: f64,

    /// Read the legacy fixed-offset column layout instead of whitespace tokens
    #[arg(long)]
    pub(super) fixed_width: bool,

    /// Also write the run report as pretty-printed JSON to this path
    #[arg(long)]
    pub(super) report: Option<PathBuf>,
}

pub(super) fn run_diffusivity_command(args: DiffusivityArgs) -> Result<i32, CliError> {
    let config = DiffusivityConfig {
        traj_path: args.traj_file,
        field: TrajField::from_number(args.field),
        format: if args.fixed_width {
            TrajFormat::FixedWidth
        } else {
            TrajFormat::Tokenized
        },
        max_lag: args.max_lag,
        timestep_fs: args.timestep,
    };

    tracing::info!(
        traj = %config.traj_path.display(),
        field = config.field.as_number(),
        format = %config.format,
        max_lag = config.max_lag,
        timestep_fs = config.timestep_fs,
        "running diffusivity analysis"
    );

    let report = run_diffusivity(&config).map_err(CliError::Compute)?;

    if report.parse_failures > 0 {
        tracing::warn!(
            count = report.parse_failures,
            first_line = ?report.first_failure_line,
            "malformed numeric fields were coerced to 0.0"
        );
    }

    if let Some(path) = &args.report {
        write_json_report(path, &report)?;
        tracing::info!(report = %path.display(), "wrote JSON report");
    }

    print!("{}", render_human_summary(&report));
    Ok(0)
}

fn write_json_report(path: &Path, report: &DiffusivityReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory '{}'", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report).context("serializing report")?;
    std::fs::write(path, json).with_context(|| format!("writing report '{}'", path.display()))?;
    Ok(())
}
