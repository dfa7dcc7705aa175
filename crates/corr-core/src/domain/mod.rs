pub mod errors;

pub use errors::{CorrError, CorrErrorCategory, CorrResult};

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Column selector for a NAMD `.traj` record. Column 0 is the timestep and is
/// never extracted; the legacy tool maps any selector outside 1..=3 onto the
/// third column, and that fallback is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrajField {
    Field1,
    Field2,
    Field3,
}

impl TrajField {
    pub const fn from_number(number: i64) -> Self {
        match number {
            1 => Self::Field1,
            2 => Self::Field2,
            _ => Self::Field3,
        }
    }

    pub const fn as_number(self) -> u32 {
        match self {
            Self::Field1 => 1,
            Self::Field2 => 2,
            Self::Field3 => 3,
        }
    }
}

impl Display for TrajField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "field {}", self.as_number())
    }
}

/// Record layout of the trajectory file.
///
/// `Tokenized` splits each record on whitespace and reads the logical column;
/// `FixedWidth` reads the legacy NAMD byte ranges (offsets 15/37/61, each 23
/// bytes wide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrajFormat {
    #[default]
    Tokenized,
    FixedWidth,
}

impl TrajFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tokenized => "tokenized",
            Self::FixedWidth => "fixed-width",
        }
    }
}

impl Display for TrajFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// One full run request: trajectory source plus the analysis knobs.
///
/// `max_lag` (the legacy `nCorr`) is always caller-supplied; it is never
/// derived from the sample count.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusivityConfig {
    pub traj_path: PathBuf,
    pub field: TrajField,
    pub format: TrajFormat,
    pub max_lag: usize,
    pub timestep_fs: f64,
}

impl DiffusivityConfig {
    pub fn new(traj_path: impl Into<PathBuf>, field: TrajField, max_lag: usize) -> Self {
        Self {
            traj_path: traj_path.into(),
            field,
            format: TrajFormat::default(),
            max_lag,
            timestep_fs: DEFAULT_TIMESTEP_FS,
        }
    }
}

/// Legacy defaults from the original analysis tool: 2 fs recording interval,
/// 6000-sample lag cap.
pub const DEFAULT_TIMESTEP_FS: f64 = 2.0;
pub const DEFAULT_MAX_LAG: usize = 6000;
