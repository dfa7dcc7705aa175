//! Core library for `correlation-rs`, a rework of the legacy umbrella-sampling
//! diffusivity tool: position autocorrelation from a NAMD `.traj` time series,
//! trapezoidal integration, and D = var² / ∫C(t)dt with unit conversions.

pub mod domain;
pub mod numerics;
pub mod pipeline;
pub mod traj;

pub use domain::{CorrError, CorrErrorCategory, CorrResult, DiffusivityConfig, TrajField, TrajFormat};
pub use pipeline::{DiffusivityReport, render_human_summary, run_diffusivity};
